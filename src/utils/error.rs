//! Error types for valkey-cluster-route

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::route::Route;

/// Top-level library error
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dispatch error: {0}")]
    Dispatch(String),
}

/// Errors raised while building or parsing a route
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No port provided, and host is not in the expected format 'hostname:port'. Received: {0}")]
    MalformedAddress(String),

    #[error("Invalid port in address '{input}': {source}")]
    MalformedPort {
        input: String,
        source: ParseIntError,
    },

    #[error("Unknown route '{0}'")]
    UnknownRoute(String),

    #[error("Invalid slot type '{0}', expected 'primary' or 'replica'")]
    InvalidSlotType(String),

    #[error("Invalid slot id '{input}': {source}")]
    InvalidSlotId {
        input: String,
        source: ParseIntError,
    },

    #[error("Route '{0}' does not have the requested node fanout")]
    WrongFanout(Route),
}

/// Routing configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read routing config {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Failed to parse routing config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoutingError>;
