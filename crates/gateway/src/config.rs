//! Gateway configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use common::{ProviderConfig, ServiceConfig};

/// How the process receives requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    /// Listen on a TCP socket
    #[default]
    Local,
    /// Receive API gateway events from the Lambda runtime
    Lambda,
}

impl FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "development" | "dev" => Ok(RuntimeMode::Local),
            "lambda" => Ok(RuntimeMode::Lambda),
            other => Err(format!("unknown runtime mode '{}'", other)),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeMode::Local => write!(f, "local"),
            RuntimeMode::Lambda => write!(f, "lambda"),
        }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address
    pub service: ServiceConfig,
    /// Identity provider region and app client
    pub provider: ProviderConfig,
    /// Entry point selection
    pub mode: RuntimeMode,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service_name,
                host: env::var("SERVER_HOST").unwrap_or(defaults.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
            },
            provider: ProviderConfig {
                region: env::var("REGION").ok().filter(|r| !r.is_empty()),
                client_id: env::var("COGNITO_CLIENT_ID").unwrap_or_default(),
            },
            mode: runtime_mode(
                env::var("RUNTIME_MODE").ok().as_deref(),
                env::var("AWS_LAMBDA_RUNTIME_API").is_ok(),
            ),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            provider: ProviderConfig::default(),
            mode: RuntimeMode::Local,
        }
    }
}

/// Pick the runtime mode.
///
/// An explicit, recognised `RUNTIME_MODE` wins. Otherwise the Lambda runtime
/// API variable decides.
fn runtime_mode(explicit: Option<&str>, in_lambda: bool) -> RuntimeMode {
    match explicit.map(RuntimeMode::from_str) {
        Some(Ok(mode)) => mode,
        Some(Err(e)) => {
            tracing::warn!("Ignoring RUNTIME_MODE: {}", e);
            detected_mode(in_lambda)
        }
        None => detected_mode(in_lambda),
    }
}

fn detected_mode(in_lambda: bool) -> RuntimeMode {
    if in_lambda {
        RuntimeMode::Lambda
    } else {
        RuntimeMode::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_mode_parse() {
        assert_eq!("lambda".parse::<RuntimeMode>().unwrap(), RuntimeMode::Lambda);
        assert_eq!("LOCAL".parse::<RuntimeMode>().unwrap(), RuntimeMode::Local);
        assert!("serverless".parse::<RuntimeMode>().is_err());
    }

    #[test]
    fn test_explicit_mode_wins() {
        assert_eq!(runtime_mode(Some("local"), true), RuntimeMode::Local);
        assert_eq!(runtime_mode(Some("lambda"), false), RuntimeMode::Lambda);
    }

    #[test]
    fn test_mode_detected_when_unset_or_invalid() {
        assert_eq!(runtime_mode(None, true), RuntimeMode::Lambda);
        assert_eq!(runtime_mode(None, false), RuntimeMode::Local);
        assert_eq!(runtime_mode(Some("bogus"), true), RuntimeMode::Lambda);
    }

    #[test]
    fn test_default_listens_on_3000() {
        let config = GatewayConfig::default();
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.mode, RuntimeMode::Local);
        assert_eq!(config.service.addr(), "0.0.0.0:3000");
    }
}
