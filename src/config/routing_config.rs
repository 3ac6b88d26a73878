//! Per-command routing table loaded from JSON

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{de, Deserialize};
use tracing::debug;

use crate::route::Route;
use crate::utils::ConfigError;

/// Routing configuration
///
/// ```json
/// { "default": "random", "commands": { "INFO": "all-nodes" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Route used for commands without an override
    #[serde(default = "default_route")]
    pub default: Route,

    /// Overrides keyed by command name
    #[serde(default, deserialize_with = "deserialize_commands")]
    commands: HashMap<String, Route>,
}

fn default_route() -> Route {
    Route::Random
}

/// Command names are stored uppercased so lookups ignore case
///
/// Two entries that differ only in case are rejected.
fn deserialize_commands<'de, D>(deserializer: D) -> Result<HashMap<String, Route>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = HashMap::<String, Route>::deserialize(deserializer)?;
    let mut commands = HashMap::with_capacity(raw.len());
    for (command, route) in raw {
        let key = command.to_uppercase();
        if commands.contains_key(&key) {
            return Err(de::Error::custom(format!(
                "duplicate route for command '{}' (command names are case-insensitive)",
                key
            )));
        }
        commands.insert(key, route);
    }
    Ok(commands)
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default: default_route(),
            commands: HashMap::new(),
        }
    }
}

impl RoutingConfig {
    /// Parse a routing config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a routing config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        debug!(
            "Loaded routing config from {}: default={}, {} command overrides",
            path.display(),
            config.default,
            config.commands.len()
        );
        Ok(config)
    }

    /// Add or replace the route for a command
    pub fn set_route(&mut self, command: &str, route: Route) {
        self.commands.insert(command.to_uppercase(), route);
    }

    /// Route for a command, falling back to the default
    pub fn route_for(&self, command: &str) -> &Route {
        self.commands
            .get(&command.to_uppercase())
            .unwrap_or(&self.default)
    }

    /// Number of command overrides
    pub fn num_overrides(&self) -> usize {
        self.commands.len()
    }
}
