//! Node orchestrator.
//!
//! Wires the configured storage backend into a ledger and serves it over
//! JSON-RPC until a shutdown signal arrives.

use std::sync::Arc;

use quill_ledger::Ledger;
use quill_storage::{BlockStore, KvBackend, MemoryBackend, RocksBackend};

use crate::config::NodeConfig;
use crate::rpc::{start_rpc_server, RpcState};
use crate::shutdown::wait_for_shutdown_signal;

/// The main node structure.
pub struct Node {
    /// Node configuration.
    config: NodeConfig,

    /// Shared RPC state holding the ledger.
    state: Arc<RpcState<dyn KvBackend>>,
}

impl Node {
    /// Create a new node with the given configuration.
    ///
    /// Opens (or creates) the backing store and the ledger over it; the
    /// genesis block is committed here if the store is empty.
    pub async fn new(config: NodeConfig) -> anyhow::Result<Self> {
        let backend: Arc<dyn KvBackend> = if config.ephemeral {
            tracing::info!("Running with in-memory storage (nothing is persisted)");
            Arc::new(MemoryBackend::new())
        } else {
            std::fs::create_dir_all(&config.data_dir)?;
            tracing::info!("Data directory: {:?}", config.data_dir);

            let db_path = config.data_dir.join("blocks.db");
            Arc::new(RocksBackend::open(&db_path)?)
        };

        let ledger = Ledger::open(BlockStore::new(backend)).await?;
        let height = ledger.height().await?;
        tracing::info!(height, "Ledger initialized");

        let state = Arc::new(RpcState::new(ledger, config.test_endpoints));

        Ok(Self { config, state })
    }

    /// Run the node until a shutdown signal arrives.
    pub async fn run(&self) -> anyhow::Result<()> {
        tracing::info!("Starting Quill node...");
        tracing::info!("  RPC address: {}", self.config.rpc_addr);
        tracing::info!("  Ephemeral: {}", self.config.ephemeral);
        tracing::info!("  Test endpoints: {}", self.config.test_endpoints);
        if self.config.test_endpoints {
            tracing::warn!("Test endpoints are enabled; committed blocks can be overwritten");
        }

        let server = start_rpc_server(self.config.rpc_addr, self.state.clone()).await?;
        tracing::info!("RPC server listening on {}", server.local_addr());

        wait_for_shutdown_signal().await;

        server.stop()?;
        self.state.ledger.flush()?;
        tracing::info!("Shutdown complete");

        Ok(())
    }
}
