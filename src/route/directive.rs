//! Engine-facing routing directive

use std::fmt;

use serde::Serialize;

use super::slot::SlotType;

/// Routing-type tag understood by the dispatch engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum RouteType {
    Random = 0,
    AllNodes = 1,
    AllPrimaries = 2,
    SlotId = 3,
    SlotKey = 4,
    ByAddress = 5,
}

impl RouteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Random => "Random",
            RouteType::AllNodes => "AllNodes",
            RouteType::AllPrimaries => "AllPrimaries",
            RouteType::SlotId => "SlotId",
            RouteType::SlotKey => "SlotKey",
            RouteType::ByAddress => "ByAddress",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag-specific data carried by a directive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum DirectivePayload {
    SlotId { slot_id: u16, slot_type: SlotType },
    SlotKey { slot_key: String, slot_type: SlotType },
    Address { host: String, port: u16 },
}

impl fmt::Display for DirectivePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectivePayload::SlotId { slot_id, slot_type } => {
                write!(f, "({}, {})", slot_id, slot_type)
            }
            DirectivePayload::SlotKey {
                slot_key,
                slot_type,
            } => write!(f, "({:?}, {})", slot_key, slot_type),
            DirectivePayload::Address { host, port } => write!(f, "({}, {})", host, port),
        }
    }
}

/// Routing directive handed to the dispatch engine for one request
///
/// Only [`Route::to_directive`](super::Route::to_directive) builds these,
/// so the payload always matches the tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteDirective {
    route_type: RouteType,
    payload: Option<DirectivePayload>,
}

impl RouteDirective {
    pub(crate) fn tag_only(route_type: RouteType) -> Self {
        Self {
            route_type,
            payload: None,
        }
    }

    pub(crate) fn with_payload(route_type: RouteType, payload: DirectivePayload) -> Self {
        Self {
            route_type,
            payload: Some(payload),
        }
    }

    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    pub fn payload(&self) -> Option<&DirectivePayload> {
        self.payload.as_ref()
    }

    /// Slot id and type, for `SlotId` directives
    pub fn slot_id_info(&self) -> Option<(u16, SlotType)> {
        match self.payload {
            Some(DirectivePayload::SlotId { slot_id, slot_type }) => Some((slot_id, slot_type)),
            _ => None,
        }
    }

    /// Key and slot type, for `SlotKey` directives
    pub fn slot_key_info(&self) -> Option<(&str, SlotType)> {
        match &self.payload {
            Some(DirectivePayload::SlotKey {
                slot_key,
                slot_type,
            }) => Some((slot_key.as_str(), *slot_type)),
            _ => None,
        }
    }

    /// Host and port, for `ByAddress` directives
    pub fn address(&self) -> Option<(&str, u16)> {
        match &self.payload {
            Some(DirectivePayload::Address { host, port }) => Some((host.as_str(), *port)),
            _ => None,
        }
    }
}

impl fmt::Display for RouteDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{} {}", self.route_type, payload),
            None => write!(f, "{}", self.route_type),
        }
    }
}
