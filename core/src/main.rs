use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use todo_core::{ApiClient, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "todo")]
#[command(version, about = "Command-line client for the to-do list", long_about = None)]
struct Cli {
    /// Base URL of the items API.
    #[arg(long, global = true, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items.
    List,
    /// Add a new item.
    Add { name: String },
    /// Mark an item complete.
    Done {
        id: i64,
        /// Mark the item incomplete instead.
        #[arg(long)]
        undo: bool,
    },
    /// Delete an item.
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url);

    match cli.command {
        Commands::List => print_json(&client.get_items().await?)?,
        Commands::Add { name } => print_json(&client.add_item(&name).await?)?,
        Commands::Done { id, undo } => print_json(&client.set_item_completed(id, !undo).await?)?,
        Commands::Delete { id } => client.delete_item(id).await?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
