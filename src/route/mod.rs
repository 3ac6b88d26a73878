//! Request routing descriptors
//!
//! A [`Route`] describes which cluster node(s) a request should go to:
//! - a random node
//! - every node, or every primary
//! - the node serving a slot, given by id or by key
//! - a node at an explicit address
//!
//! Routes are plain immutable values. [`Route::to_directive`] turns one into
//! the [`RouteDirective`] consumed by the dispatch engine, which resolves it
//! against live cluster topology.

pub mod address;
pub mod directive;
pub mod notation;
pub mod slot;

pub use address::ByAddressRoute;
pub use directive::{DirectivePayload, RouteDirective, RouteType};
pub use slot::{SlotIdRoute, SlotKeyRoute, SlotType, SLOT_COUNT};

use serde::{Deserialize, Serialize};

use crate::utils::RouteError;

/// Route request to a random node.
///
/// Don't use it with write commands: they could be routed to a replica
/// (read-only) node and fail.
pub const RANDOM: Route = Route::Random;

/// Route request to all nodes.
///
/// Don't use it with write commands: they could be routed to a replica
/// (read-only) node and fail.
pub const ALL_NODES: Route = Route::AllNodes;

/// Route request to all primary nodes.
pub const ALL_PRIMARIES: Route = Route::AllPrimaries;

/// Whether a route resolves to one node or may fan out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeFanout {
    Single,
    Multi,
}

/// Request routing strategy
///
/// Serialized through its textual notation, see [`notation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    /// A random node of unspecified role
    Random,
    /// Every node, replicas included
    AllNodes,
    /// Every primary node
    AllPrimaries,
    /// The node serving a slot number
    SlotId(SlotIdRoute),
    /// The node serving the slot a key hashes to
    SlotKey(SlotKeyRoute),
    /// The node at an explicit address
    ByAddress(ByAddressRoute),
}

impl Route {
    pub fn slot_id(slot_id: u16, slot_type: SlotType) -> Self {
        Route::SlotId(SlotIdRoute::new(slot_id, slot_type))
    }

    pub fn slot_key(slot_key: impl Into<String>, slot_type: SlotType) -> Self {
        Route::SlotKey(SlotKeyRoute::new(slot_key, slot_type))
    }

    pub fn by_address(host: impl Into<String>, port: u16) -> Self {
        Route::ByAddress(ByAddressRoute::new(host, port))
    }

    /// Build an address route from `"host:port"`
    pub fn parse_address(address: &str) -> Result<Self, RouteError> {
        ByAddressRoute::parse(address).map(Route::ByAddress)
    }

    pub fn route_type(&self) -> RouteType {
        match self {
            Route::Random => RouteType::Random,
            Route::AllNodes => RouteType::AllNodes,
            Route::AllPrimaries => RouteType::AllPrimaries,
            Route::SlotId(_) => RouteType::SlotId,
            Route::SlotKey(_) => RouteType::SlotKey,
            Route::ByAddress(_) => RouteType::ByAddress,
        }
    }

    pub fn fanout(&self) -> NodeFanout {
        match self {
            Route::AllNodes | Route::AllPrimaries => NodeFanout::Multi,
            Route::Random | Route::SlotId(_) | Route::SlotKey(_) | Route::ByAddress(_) => {
                NodeFanout::Single
            }
        }
    }

    pub fn is_single_node(&self) -> bool {
        self.fanout() == NodeFanout::Single
    }

    pub fn is_multi_node(&self) -> bool {
        self.fanout() == NodeFanout::Multi
    }

    /// Convert into the directive passed to the dispatch engine
    pub fn to_directive(&self) -> RouteDirective {
        match self {
            Route::Random => RouteDirective::tag_only(RouteType::Random),
            Route::AllNodes => RouteDirective::tag_only(RouteType::AllNodes),
            Route::AllPrimaries => RouteDirective::tag_only(RouteType::AllPrimaries),
            Route::SlotId(route) => RouteDirective::with_payload(
                RouteType::SlotId,
                DirectivePayload::SlotId {
                    slot_id: route.slot_id,
                    slot_type: route.slot_type,
                },
            ),
            Route::SlotKey(route) => RouteDirective::with_payload(
                RouteType::SlotKey,
                DirectivePayload::SlotKey {
                    slot_key: route.slot_key.clone(),
                    slot_type: route.slot_type,
                },
            ),
            Route::ByAddress(route) => RouteDirective::with_payload(
                RouteType::ByAddress,
                DirectivePayload::Address {
                    host: route.host.clone(),
                    port: route.port,
                },
            ),
        }
    }
}

impl From<&Route> for RouteDirective {
    fn from(route: &Route) -> Self {
        route.to_directive()
    }
}

/// A route that can only ever resolve to one node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SingleNodeRoute {
    Random,
    SlotId(SlotIdRoute),
    SlotKey(SlotKeyRoute),
    ByAddress(ByAddressRoute),
}

impl SingleNodeRoute {
    pub fn to_directive(&self) -> RouteDirective {
        Route::from(self.clone()).to_directive()
    }
}

impl From<SingleNodeRoute> for Route {
    fn from(route: SingleNodeRoute) -> Self {
        match route {
            SingleNodeRoute::Random => Route::Random,
            SingleNodeRoute::SlotId(r) => Route::SlotId(r),
            SingleNodeRoute::SlotKey(r) => Route::SlotKey(r),
            SingleNodeRoute::ByAddress(r) => Route::ByAddress(r),
        }
    }
}

impl TryFrom<Route> for SingleNodeRoute {
    type Error = RouteError;

    fn try_from(route: Route) -> Result<Self, Self::Error> {
        match route {
            Route::Random => Ok(SingleNodeRoute::Random),
            Route::SlotId(r) => Ok(SingleNodeRoute::SlotId(r)),
            Route::SlotKey(r) => Ok(SingleNodeRoute::SlotKey(r)),
            Route::ByAddress(r) => Ok(SingleNodeRoute::ByAddress(r)),
            other @ (Route::AllNodes | Route::AllPrimaries) => Err(RouteError::WrongFanout(other)),
        }
    }
}

/// A route that may fan out to several nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiNodeRoute {
    AllNodes,
    AllPrimaries,
}

impl MultiNodeRoute {
    pub fn to_directive(&self) -> RouteDirective {
        Route::from(*self).to_directive()
    }
}

impl From<MultiNodeRoute> for Route {
    fn from(route: MultiNodeRoute) -> Self {
        match route {
            MultiNodeRoute::AllNodes => Route::AllNodes,
            MultiNodeRoute::AllPrimaries => Route::AllPrimaries,
        }
    }
}

impl TryFrom<Route> for MultiNodeRoute {
    type Error = RouteError;

    fn try_from(route: Route) -> Result<Self, Self::Error> {
        match route {
            Route::AllNodes => Ok(MultiNodeRoute::AllNodes),
            Route::AllPrimaries => Ok(MultiNodeRoute::AllPrimaries),
            other => Err(RouteError::WrongFanout(other)),
        }
    }
}
