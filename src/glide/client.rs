//! Glide-core client that sends commands along a route

use glide_core::client::{Client, ConnectionRequest, NodeAddress, TlsMode};
use glide_redis::{Cmd, Value};
use tokio::runtime::Runtime;
use tracing::debug;

use super::routing::to_routing_info;
use crate::route::Route;
use crate::utils::{Result, RoutingError};

/// Blocking wrapper around a glide client that applies [`Route`]s
pub struct RoutedClient {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// Glide client, connected on first use
    client: Option<Client>,
    /// Seed addresses
    addresses: Vec<(String, u16)>,
    /// TLS enabled
    tls: bool,
    /// Request timeout in milliseconds
    request_timeout_ms: u32,
}

impl RoutedClient {
    /// Create a new client; the connection is opened lazily
    pub fn new(addresses: Vec<(String, u16)>, tls: bool) -> Result<Self> {
        let runtime = Runtime::new().map_err(|e| {
            RoutingError::Dispatch(format!("Failed to create tokio runtime: {}", e))
        })?;

        Ok(Self {
            runtime,
            client: None,
            addresses,
            tls,
            request_timeout_ms: 5000,
        })
    }

    /// Override the request timeout
    pub fn with_request_timeout(mut self, timeout_ms: u32) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    async fn create_client(
        addresses: &[(String, u16)],
        tls: bool,
        request_timeout_ms: u32,
    ) -> Result<Client> {
        let addresses: Vec<NodeAddress> = addresses
            .iter()
            .map(|(host, port)| NodeAddress {
                host: host.clone().into(),
                port: *port,
            })
            .collect();

        let request = ConnectionRequest {
            addresses,
            tls_mode: Some(if tls { TlsMode::SecureTls } else { TlsMode::NoTls }),
            cluster_mode_enabled: true,
            request_timeout: Some(request_timeout_ms),
            ..Default::default()
        };

        Client::new(request, None)
            .await
            .map_err(|e| RoutingError::Dispatch(format!("Failed to create glide client: {}", e)))
    }

    /// Execute a command on the node(s) selected by `route`
    pub fn execute(&mut self, cmd: &Cmd, route: &Route) -> Result<Value> {
        if self.client.is_none() {
            let client = self.runtime.block_on(Self::create_client(
                &self.addresses,
                self.tls,
                self.request_timeout_ms,
            ))?;
            self.client = Some(client);
        }

        let Some(client) = self.client.as_mut() else {
            return Err(RoutingError::Dispatch("Glide client not connected".to_string()));
        };

        let routing = to_routing_info(&route.to_directive())?;
        debug!("Sending command with route {}", route);

        self.runtime.block_on(async {
            client
                .send_command(cmd, Some(routing))
                .await
                .map_err(|e| RoutingError::Dispatch(format!("Command failed: {}", e)))
        })
    }

    /// Run `INFO <section>` on the selected node(s)
    pub fn info(&mut self, section: &str, route: &Route) -> Result<Value> {
        let mut cmd = Cmd::new();
        cmd.arg("INFO").arg(section);
        self.execute(&cmd, route)
    }
}
