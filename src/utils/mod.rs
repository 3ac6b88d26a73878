//! Utility modules

pub mod error;

pub use error::{ConfigError, Result, RouteError, RoutingError};
