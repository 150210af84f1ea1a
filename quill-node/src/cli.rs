//! Command-line argument parsing.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Quill ledger node.
#[derive(Parser, Debug, Clone)]
#[command(name = "quill-node")]
#[command(about = "Quill ledger node binary")]
#[command(version)]
pub struct Cli {
    /// Data directory for ledger data.
    #[arg(long, default_value = "~/.quill")]
    pub data_dir: PathBuf,

    /// RPC listen address.
    #[arg(long, default_value = "127.0.0.1:9360")]
    pub rpc_listen: SocketAddr,

    /// Run with in-memory storage; nothing is persisted.
    #[arg(long)]
    pub ephemeral: bool,

    /// Expose the test-only RPC methods (tamperBlock, seedBlocks).
    #[arg(long)]
    pub test_endpoints: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Expand the data directory path (handle ~ for home).
    pub fn expanded_data_dir(&self) -> PathBuf {
        let path_str = self.data_dir.to_string_lossy();
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        self.data_dir.clone()
    }
}
