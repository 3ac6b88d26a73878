//! valkey-cluster-route library
//!
//! Request routing descriptors for Valkey cluster clients: describe where a
//! command should go and convert it into the directive the dispatch engine
//! consumes.

pub mod config;
pub mod glide;
pub mod output;
pub mod route;
pub mod utils;

pub use route::{
    ByAddressRoute, MultiNodeRoute, NodeFanout, Route, RouteDirective, RouteType,
    SingleNodeRoute, SlotIdRoute, SlotKeyRoute, SlotType, ALL_NODES, ALL_PRIMARIES, RANDOM,
};
pub use utils::{Result, RouteError, RoutingError};
