mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use perfcons_core::{DEFAULT_HOST, DEFAULT_PORT, ResourceKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perfcons")]
#[command(about = "Token-guarded HTTP store for per-conversation facts and budgets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (needs API_TOKEN)
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
        host: String,
    },
    /// Print every record of a kind as JSON
    List {
        /// `facts` or `budgets`
        kind: ResourceKind,
    },
    /// Print one record as JSON
    Get {
        kind: ResourceKind,
        conversation_id: String,
    },
    /// Delete one record
    Delete {
        kind: ResourceKind,
        conversation_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::List { kind } => commands::records::run_list(kind).await?,
        Commands::Get { kind, conversation_id } => {
            commands::records::run_get(kind, &conversation_id).await?;
        },
        Commands::Delete { kind, conversation_id } => {
            commands::records::run_delete(kind, &conversation_id).await?;
        },
    }

    Ok(())
}
