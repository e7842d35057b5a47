//! CLI entrypoint for git-scripts-bridge
//!
//! This is the main binary that wires together all layers using
//! dependency injection. stdout carries the protocol, so every
//! diagnostic goes to stderr or to the optional log file.

use anyhow::{Context, Result, bail};
use bridge_application::ToolBridge;
use bridge_infrastructure::{
    ConfigLoader, InstallRootLocator, JsonlCallLogger, McpServer, TokioProcessRunner,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "git-scripts-bridge")]
#[command(about = "MCP stdio bridge exposing git safety scripts as typed tools")]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory containing the git scripts (default: parent of the
    /// directory holding this binary)
    #[arg(long, value_name = "DIR")]
    scripts_dir: Option<PathBuf>,

    /// Path to a config file (overrides discovered configs)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Write a JSONL audit record of every tool call to this file
    #[arg(long, value_name = "FILE")]
    audit_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. stdout is the
    // protocol channel; diagnostics must never land there.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Could not load configuration: {}", e))?;

    let log_file = cli
        .log_file
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from));

    // Keep the appender guard alive for the process lifetime
    let _guard = match &log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let file = path
                .file_name()
                .context("log file path has no file name")?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    };

    info!("Starting git-scripts-bridge");

    // Resolve the scripts install root: flag, then config, then the
    // executable-relative default.
    let root = match cli
        .scripts_dir
        .or_else(|| config.scripts.dir.as_ref().map(PathBuf::from))
        .or_else(InstallRootLocator::discover_root)
    {
        Some(root) => root,
        None => bail!("Could not determine the git scripts directory; pass --scripts-dir"),
    };

    let locator = InstallRootLocator::new(&root);
    if let Err(e) = locator.verify_sentinel() {
        error!("{}", e);
        error!(
            "Git scripts not found at {}; is the bridge installed next to the scripts?",
            root.display()
        );
        bail!("git scripts not found at {}", root.display());
    }
    info!("Using git scripts at {}", root.display());

    // === Dependency Injection ===
    let runner = Arc::new(TokioProcessRunner::new());
    let mut bridge = ToolBridge::new(Arc::new(locator), runner);

    let audit_file = cli
        .audit_file
        .or_else(|| config.logging.audit_file.as_ref().map(PathBuf::from));
    if let Some(path) = audit_file
        && let Some(logger) = JsonlCallLogger::new(&path)
    {
        info!("Audit log: {}", logger.path().display());
        bridge = bridge.with_logger(Arc::new(logger));
    }

    let server = McpServer::new(bridge, "git-scripts-bridge", env!("CARGO_PKG_VERSION"));
    server.serve_stdio().await?;

    info!("Client disconnected, shutting down");
    Ok(())
}
