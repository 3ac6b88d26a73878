//! Configuration module

pub mod cli;
pub mod routing_config;

pub use cli::{CliArgs, OutputFormat};
pub use routing_config::RoutingConfig;
