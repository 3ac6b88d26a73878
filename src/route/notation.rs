//! Textual route notation
//!
//! Used by routing config files and the command line:
//!
//! ```text
//! random
//! all-nodes
//! all-primaries
//! slot-id:<primary|replica>:<id>
//! slot-key:<primary|replica>:<key>
//! address:<host>:<port>
//! address:[<host>]:<port>
//! ```
//!
//! Keywords are case-insensitive and `_` may stand in for `-`. A slot key is
//! the whole remainder after the slot type, so it may itself contain `:` or
//! surrounding whitespace. Hosts containing `:` (IPv6) are written in brackets.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::address::ByAddressRoute;
use super::slot::SlotType;
use super::Route;
use crate::utils::RouteError;

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the keyword is trimmed; the remainder is kept verbatim
        let s = s.trim_start();
        let (keyword, rest) = match s.split_once(':') {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (s, None),
        };

        let route = match (normalize_keyword(keyword.trim()).as_str(), rest) {
            ("random", None) => Route::Random,
            ("all-nodes", None) => Route::AllNodes,
            ("all-primaries", None) => Route::AllPrimaries,
            ("slot-id", Some(rest)) => {
                let (slot_type, id) = split_slot_args(s, rest)?;
                let slot_id = id.parse::<u16>().map_err(|source| RouteError::InvalidSlotId {
                    input: id.to_string(),
                    source,
                })?;
                Route::slot_id(slot_id, slot_type)
            }
            ("slot-key", Some(rest)) => {
                let (slot_type, key) = split_slot_args(s, rest)?;
                Route::slot_key(key, slot_type)
            }
            ("address", Some(rest)) => Route::ByAddress(parse_address_notation(rest)?),
            _ => {
                debug!("Unrecognized route notation: {}", s);
                return Err(RouteError::UnknownRoute(s.to_string()));
            }
        };

        Ok(route)
    }
}

/// Lowercase a keyword and accept `_` or no separator in place of `-`
fn normalize_keyword(keyword: &str) -> String {
    match keyword.to_lowercase().replace('_', "-").as_str() {
        "allnodes" => "all-nodes".to_string(),
        "allprimaries" => "all-primaries".to_string(),
        "slotid" => "slot-id".to_string(),
        "slotkey" => "slot-key".to_string(),
        other => other.to_string(),
    }
}

/// Split `<slot type>:<value>`; the value keeps any further colons
fn split_slot_args<'a>(input: &str, rest: &'a str) -> Result<(SlotType, &'a str), RouteError> {
    let (slot_type, value) = rest
        .split_once(':')
        .ok_or_else(|| RouteError::UnknownRoute(input.to_string()))?;
    Ok((slot_type.parse()?, value))
}

/// Parse `host:port` or `[host]:port`
fn parse_address_notation(rest: &str) -> Result<ByAddressRoute, RouteError> {
    if !rest.starts_with('[') {
        return ByAddressRoute::parse(rest);
    }

    let (host, port) = rest
        .rsplit_once(':')
        .ok_or_else(|| RouteError::MalformedAddress(rest.to_string()))?;
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .ok_or_else(|| RouteError::MalformedAddress(rest.to_string()))?;
    let port = port.parse::<u16>().map_err(|source| RouteError::MalformedPort {
        input: rest.to_string(),
        source,
    })?;

    Ok(ByAddressRoute::new(host, port))
}

/// Hosts that would not survive `ByAddressRoute::parse` are bracketed
fn needs_brackets(host: &str) -> bool {
    host.contains(':') || host.starts_with('[')
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Random => f.write_str("random"),
            Route::AllNodes => f.write_str("all-nodes"),
            Route::AllPrimaries => f.write_str("all-primaries"),
            Route::SlotId(r) => write!(f, "slot-id:{}:{}", r.slot_type, r.slot_id),
            Route::SlotKey(r) => write!(f, "slot-key:{}:{}", r.slot_type, r.slot_key),
            Route::ByAddress(r) if needs_brackets(&r.host) => {
                write!(f, "address:[{}]:{}", r.host, r.port)
            }
            Route::ByAddress(r) => write!(f, "address:{}", r),
        }
    }
}

impl TryFrom<String> for Route {
    type Error = RouteError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{ALL_NODES, ALL_PRIMARIES, RANDOM};

    #[test]
    fn test_parse_stateless() {
        assert_eq!("random".parse::<Route>().unwrap(), RANDOM);
        assert_eq!("ALL_NODES".parse::<Route>().unwrap(), ALL_NODES);
        assert_eq!("allprimaries".parse::<Route>().unwrap(), ALL_PRIMARIES);
        assert_eq!(" all-primaries ".parse::<Route>().unwrap(), ALL_PRIMARIES);
    }

    #[test]
    fn test_parse_slot_routes() {
        assert_eq!(
            "slot-id:replica:100".parse::<Route>().unwrap(),
            Route::slot_id(100, SlotType::Replica)
        );
        assert_eq!(
            "slot-key:primary:user:42".parse::<Route>().unwrap(),
            Route::slot_key("user:42", SlotType::Primary)
        );
        assert_eq!(
            "slot_key:replica:".parse::<Route>().unwrap(),
            Route::slot_key("", SlotType::Replica)
        );
    }

    #[test]
    fn test_parse_address_route() {
        assert_eq!(
            "address:10.0.0.5:6379".parse::<Route>().unwrap(),
            Route::by_address("10.0.0.5", 6379)
        );
        assert_eq!(
            "address:badhost".parse::<Route>(),
            Err(RouteError::MalformedAddress("badhost".to_string()))
        );
        assert!(matches!(
            "address:host:x".parse::<Route>(),
            Err(RouteError::MalformedPort { .. })
        ));
    }

    #[test]
    fn test_parse_bracketed_address() {
        assert_eq!(
            "address:[::1]:6379".parse::<Route>().unwrap(),
            Route::by_address("::1", 6379)
        );
        assert_eq!(Route::by_address("::1", 6379).to_string(), "address:[::1]:6379");
        assert_eq!(Route::by_address("", 6379).to_string(), "address::6379");
        assert!(matches!(
            "address:[::1".parse::<Route>(),
            Err(RouteError::MalformedAddress(_))
        ));
        assert!(matches!(
            "address:[::1]6379".parse::<Route>(),
            Err(RouteError::MalformedAddress(_))
        ));
        assert!(matches!(
            "address:[::1]:port".parse::<Route>(),
            Err(RouteError::MalformedPort { .. })
        ));
    }

    #[test]
    fn test_slot_key_whitespace_preserved() {
        assert_eq!(
            "slot-key:primary:key ".parse::<Route>().unwrap(),
            Route::slot_key("key ", SlotType::Primary)
        );
        assert_eq!(
            "  slot-key:replica: key".parse::<Route>().unwrap(),
            Route::slot_key(" key", SlotType::Replica)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("everywhere".parse::<Route>(), Err(RouteError::UnknownRoute(_))));
        assert!(matches!("random:1".parse::<Route>(), Err(RouteError::UnknownRoute(_))));
        assert!(matches!("slot-id:primary".parse::<Route>(), Err(RouteError::UnknownRoute(_))));
        assert!(matches!(
            "slot-id:leader:1".parse::<Route>(),
            Err(RouteError::InvalidSlotType(_))
        ));
        assert!(matches!(
            "slot-id:primary:abc".parse::<Route>(),
            Err(RouteError::InvalidSlotId { .. })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let routes = [
            RANDOM,
            ALL_NODES,
            ALL_PRIMARIES,
            Route::slot_id(16383, SlotType::Primary),
            Route::slot_key("user:{42}:profile", SlotType::Replica),
            Route::by_address("node-3.cluster.local", 6380),
            Route::slot_key("key ", SlotType::Primary),
            Route::slot_key("  padded\t", SlotType::Replica),
            Route::slot_key(" ", SlotType::Primary),
            Route::by_address("::1", 6379),
            Route::by_address("fe80::1%eth0", 7000),
            Route::by_address("[odd", 7001),
            Route::by_address("", 6379),
        ];
        for route in routes {
            let text = route.to_string();
            assert_eq!(text.parse::<Route>().unwrap(), route, "round trip of {}", text);
        }
    }

    #[test]
    fn test_serde_uses_notation() {
        let route = Route::slot_id(7, SlotType::Replica);
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, "\"slot-id:replica:7\"");
        assert_eq!(serde_json::from_str::<Route>(&json).unwrap(), route);
        assert!(serde_json::from_str::<Route>("\"nowhere\"").is_err());

        for route in [Route::by_address("fe80::1", 7000), Route::slot_key("key ", SlotType::Replica)] {
            let json = serde_json::to_string(&route).unwrap();
            assert_eq!(serde_json::from_str::<Route>(&json).unwrap(), route);
        }
    }
}
