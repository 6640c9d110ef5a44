mod keys;
mod poll;
mod prompt;
mod query;

use {
    crate::{keys::KeysCmd, poll::PollCmd, query::QueryCmd},
    anyhow::anyhow,
    clap::Parser,
    home::home_dir,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

// relative to user home directory (~)
const DEFAULT_APP_DIR: &str = ".tally";

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory for keys and configuration
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Logging verbosity: error|warn|info|debug|trace
    #[arg(long, global = true, default_value = "info")]
    tracing_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Manage keys [alias: k]
    #[command(subcommand, next_display_order = None, alias = "k")]
    Keys(KeysCmd),

    /// Create polls and cast votes [alias: p]
    #[command(next_display_order = None, alias = "p")]
    Poll(PollCmd),

    /// Make a query [alias: q]
    #[command(next_display_order = None, alias = "q")]
    Query(QueryCmd),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.tracing_level)
        .init();

    let app_dir = if let Some(dir) = cli.home {
        dir
    } else {
        home_dir()
            .ok_or(anyhow!("Failed to find home directory"))?
            .join(DEFAULT_APP_DIR)
    };
    let keys_dir = app_dir.join("keys");

    match cli.command {
        Command::Keys(cmd) => cmd.run(keys_dir),
        Command::Poll(cmd) => cmd.run(keys_dir).await,
        Command::Query(cmd) => cmd.run().await,
    }
}
