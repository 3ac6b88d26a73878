//! Address-based route

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::utils::RouteError;

/// Routes a request to a node by its address
///
/// `host` is the preferred endpoint as shown in the output of
/// `CLUSTER SLOTS`. It is not validated as an IP or hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByAddressRoute {
    pub host: String,
    pub port: u16,
}

impl ByAddressRoute {
    /// Create a route from a hostname or IP address and a port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse a route from an address formatted as `"host:port"`
    ///
    /// The input must split on `':'` into exactly two segments, so bare
    /// IPv6 literals are rejected.
    ///
    /// The port segment is parsed as a `u16`: surrounding whitespace, a
    /// negative sign and values above 65535 all yield
    /// [`RouteError::MalformedPort`]. A leading `+` is accepted.
    pub fn parse(address: &str) -> Result<Self, RouteError> {
        let parts: Vec<&str> = address.split(':').collect();
        if parts.len() != 2 {
            debug!("Rejecting address without a single port separator: {}", address);
            return Err(RouteError::MalformedAddress(address.to_string()));
        }

        let port = parts[1]
            .parse::<u16>()
            .map_err(|source| RouteError::MalformedPort {
                input: address.to_string(),
                source,
            })?;

        Ok(Self::new(parts[0], port))
    }
}

impl FromStr for ByAddressRoute {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ByAddressRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_address() {
        let route = ByAddressRoute::parse("10.0.0.5:6379").unwrap();
        assert_eq!(route.host, "10.0.0.5");
        assert_eq!(route.port, 6379);
    }

    #[test]
    fn test_parse_matches_two_argument_form() {
        for (host, port) in [("localhost", 6379u16), ("node-1.example.com", 7001), ("", 1)] {
            let parsed: ByAddressRoute = format!("{}:{}", host, port).parse().unwrap();
            assert_eq!(parsed, ByAddressRoute::new(host, port));
        }
    }

    #[test]
    fn test_parse_without_port() {
        assert_eq!(
            ByAddressRoute::parse("badhost"),
            Err(RouteError::MalformedAddress("badhost".to_string()))
        );
    }

    #[test]
    fn test_parse_too_many_segments() {
        assert!(matches!(
            ByAddressRoute::parse("::1:6379"),
            Err(RouteError::MalformedAddress(_))
        ));
        assert!(matches!(
            ByAddressRoute::parse("host:6379:1"),
            Err(RouteError::MalformedAddress(_))
        ));
    }

    #[test]
    fn test_parse_invalid_port() {
        assert!(matches!(
            ByAddressRoute::parse("host:abc"),
            Err(RouteError::MalformedPort { .. })
        ));
        assert!(matches!(
            ByAddressRoute::parse("host:"),
            Err(RouteError::MalformedPort { .. })
        ));
        assert!(matches!(
            ByAddressRoute::parse("host:70000"),
            Err(RouteError::MalformedPort { .. })
        ));
        assert!(matches!(
            ByAddressRoute::parse("host: 6379"),
            Err(RouteError::MalformedPort { .. })
        ));
        assert!(matches!(
            ByAddressRoute::parse("host:-1"),
            Err(RouteError::MalformedPort { .. })
        ));
        assert_eq!(ByAddressRoute::parse("host:+6379").unwrap().port, 6379);
    }

    #[test]
    fn test_display() {
        assert_eq!(ByAddressRoute::new("127.0.0.1", 7000).to_string(), "127.0.0.1:7000");
    }
}
