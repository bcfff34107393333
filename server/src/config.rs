//! Server configuration from command-line flags and environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5006";
pub const DEFAULT_DATABASE: &str = "todo.db";

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(version, about = "HTTP backend for the to-do list", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TODO_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Path of the SQLite database file.
    #[arg(long, env = "TODO_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,
}
