//! Slot-based routes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::RouteError;

/// Number of hash slots in a Valkey cluster
pub const SLOT_COUNT: u16 = 16384;

/// Defines type of the node being addressed
///
/// A slot route overrides the connection-level read-from strategy: with
/// [`SlotType::Replica`] the request goes to a replica even when the
/// client is configured to read from primaries only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum SlotType {
    /// Address a primary node
    #[default]
    Primary = 0,
    /// Address a replica node
    Replica = 1,
}

impl SlotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotType::Primary => "primary",
            SlotType::Replica => "replica",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotType {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" | "master" => Ok(SlotType::Primary),
            "replica" | "slave" => Ok(SlotType::Replica),
            _ => Err(RouteError::InvalidSlotType(s.to_string())),
        }
    }
}

/// Route to the node serving a slot number
///
/// The slot id is not range-checked; the dispatch engine decides what an
/// id outside `0..SLOT_COUNT` means. Unless the slot is already known,
/// routing by [`SlotKeyRoute`] is usually the better choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotIdRoute {
    pub slot_id: u16,
    pub slot_type: SlotType,
}

impl SlotIdRoute {
    pub fn new(slot_id: u16, slot_type: SlotType) -> Self {
        Self { slot_id, slot_type }
    }

    /// Whether the slot id lies inside the cluster slot space
    pub fn in_slot_space(&self) -> bool {
        self.slot_id < SLOT_COUNT
    }
}

/// Route to the node serving the slot a key hashes to
///
/// Hashing happens in the dispatch engine, never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKeyRoute {
    pub slot_key: String,
    pub slot_type: SlotType,
}

impl SlotKeyRoute {
    pub fn new(slot_key: impl Into<String>, slot_type: SlotType) -> Self {
        Self {
            slot_key: slot_key.into(),
            slot_type,
        }
    }
}
