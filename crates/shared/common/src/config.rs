//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServiceConfig {
    /// Full bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "auth-gateway".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Identity provider client configuration.
///
/// Read once at startup and never changed afterwards.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Provider region (e.g. "eu-west-1"). `None` defers to the SDK's
    /// default region chain.
    pub region: Option<String>,
    /// App client identifier
    pub client_id: String,
}
