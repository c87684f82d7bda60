use clap::{Parser, Subcommand};
use ferrous_rewrite_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-rewrite")]
#[command(version)]
#[command(about = "Ferrous Rewrite - reversible DNS response rewriting")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Override rewrite.response_rewrite (true/false)
    #[arg(long)]
    response_rewrite: Option<bool>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the response rules and list them in evaluation order
    Check,

    /// Run a synthesized upstream response through the reverter
    Preview(commands::PreviewArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        response_rewrite: cli.response_rewrite,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous Rewrite v{}", env!("CARGO_PKG_VERSION"));

    let services = di::RewriteServices::new(&config)?;

    match cli.command {
        Command::Check => commands::run_check(&services),
        Command::Preview(args) => commands::run_preview(&services, args).await,
    }
}
