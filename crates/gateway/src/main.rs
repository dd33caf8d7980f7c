//! Auth Gateway - HTTP front for the identity provider.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_gateway::config::{GatewayConfig, RuntimeMode};

#[derive(Parser)]
#[command(name = "auth-gateway")]
#[command(about = "Signup and login gateway for a Cognito user pool")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start with the entry point RUNTIME_MODE selects (default)
    Run,
    /// Listen on a local socket
    Serve {
        #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "SERVER_PORT", default_value = "3000")]
        port: u16,
    },
    /// Serve API gateway events through the Lambda runtime
    Lambda,
    /// Print the OpenAPI document
    Openapi,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    let in_lambda = matches!(command, Commands::Lambda)
        || std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok();
    init_tracing(cli.verbose, in_lambda);

    let mut config = GatewayConfig::from_env();
    tracing::debug!("Configuration loaded: {:?}", config);

    let result = match command {
        Commands::Run => auth_gateway::run(config).await,
        Commands::Serve { host, port } => {
            config.mode = RuntimeMode::Local;
            config.service.host = host;
            config.service.port = port;
            auth_gateway::run(config).await
        }
        Commands::Lambda => {
            config.mode = RuntimeMode::Lambda;
            auth_gateway::run(config).await
        }
        Commands::Openapi => match auth_gateway::openapi::openapi_json() {
            Ok(doc) => {
                println!("{}", doc);
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
///
/// Lambda output goes to CloudWatch, which timestamps lines itself and does
/// not render colours.
fn init_tracing(verbose: bool, in_lambda: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tower_http=debug".into())
    };

    let registry = tracing_subscriber::registry().with(filter);

    if in_lambda {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .without_time(),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
