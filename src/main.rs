mod server;
mod settings;
mod tools;

use crate::server::McpServer;
use crate::settings::Settings;
use crate::tools::SportsTools;
use anyhow::{Context, anyhow};
use espn_api::EspnApi;
use log::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load();
    init_logging(&settings.log_filter)?;

    let api = EspnApi::with_endpoints(settings.endpoints());
    let server = McpServer::new(SportsTools::new(api));

    info!("espn-mcp {} listening on stdio", env!("CARGO_PKG_VERSION"));
    server.run().await
}

/// Logs go to stderr; stdout carries the protocol.
fn init_logging(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter: {filter}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("espn-mcp {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "espn-mcp - NFL, NHL and NBA stats tools over stdio JSON-RPC

Usage:
  espn-mcp
  espn-mcp --help
  espn-mcp --version

Tools:
  get_standings, get_scoreboard, get_team, get_schedule, get_game, get_playoffs

Environment:
  ESPN_SITE_BASE   Site API base URL (default https://site.api.espn.com/apis/site/v2/sports)
  ESPN_CORE_BASE   Core API base URL (default https://sports.core.api.espn.com/v2/sports)
  ESPN_MCP_LOG     Log filter, falls back to RUST_LOG (default warn)"
}
