//! Node configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::Cli;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Data directory for ledger data.
    pub data_dir: PathBuf,

    /// RPC listen address.
    pub rpc_addr: SocketAddr,

    /// Run with in-memory storage instead of RocksDB.
    pub ephemeral: bool,

    /// Register the test-only RPC methods.
    pub test_endpoints: bool,

    /// Log level.
    pub log_level: String,
}

impl NodeConfig {
    /// Create a node configuration from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: cli.expanded_data_dir(),
            rpc_addr: cli.rpc_listen,
            ephemeral: cli.ephemeral,
            test_endpoints: cli.test_endpoints,
            log_level: cli.log_level.clone(),
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("~/.quill"),
            rpc_addr: "127.0.0.1:9360".parse().unwrap(),
            ephemeral: false,
            test_endpoints: false,
            log_level: "info".to_string(),
        }
    }
}
