//! JSON-RPC server.

pub mod ledger;

use std::net::SocketAddr;
use std::sync::Arc;

use jsonrpsee::server::{ServerBuilder, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use jsonrpsee::RpcModule;

use quill_ledger::{Ledger, LedgerError};
use quill_storage::KvBackend;

/// RPC error code for a missing block ("missing resource", not failure).
pub const NOT_FOUND_CODE: i32 = -32001;

/// RPC error code for an append collision.
pub const CONFLICT_CODE: i32 = -32002;

/// RPC error code for internal engine or storage failures.
pub const INTERNAL_CODE: i32 = -32603;

/// Shared state handed to every RPC handler.
pub struct RpcState<B: KvBackend + ?Sized> {
    /// The ledger engine all methods operate on.
    pub ledger: Ledger<B>,

    /// Whether the test-only methods are registered.
    pub test_endpoints: bool,
}

impl<B: KvBackend + ?Sized> RpcState<B> {
    /// Create RPC state over a ledger.
    pub fn new(ledger: Ledger<B>, test_endpoints: bool) -> Self {
        Self {
            ledger,
            test_endpoints,
        }
    }
}

/// Map a ledger error to a JSON-RPC error object.
///
/// `NotFound` and `Conflict` get dedicated codes so callers can
/// distinguish missing resources and collisions from internal failures.
pub(crate) fn to_rpc_error(err: LedgerError) -> ErrorObjectOwned {
    let code = match err {
        LedgerError::NotFound { .. } => NOT_FOUND_CODE,
        LedgerError::Conflict { .. } => CONFLICT_CODE,
        _ => INTERNAL_CODE,
    };
    ErrorObjectOwned::owned(code, err.to_string(), None::<()>)
}

/// Build the complete RPC module.
pub fn build_rpc_module<B>(state: Arc<RpcState<B>>) -> RpcModule<Arc<RpcState<B>>>
where
    B: KvBackend + ?Sized + 'static,
{
    let test_endpoints = state.test_endpoints;
    let mut module = RpcModule::new(state);

    ledger::register_methods(&mut module);

    if test_endpoints {
        ledger::register_test_methods(&mut module);
    }

    module
}

/// RPC server handle with local address.
pub struct RpcServerHandle {
    /// The server handle for shutdown.
    handle: ServerHandle,
    /// The local address the server is bound to.
    local_addr: SocketAddr,
}

impl RpcServerHandle {
    /// Get the local address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop the server.
    pub fn stop(&self) -> Result<(), anyhow::Error> {
        self.handle
            .stop()
            .map_err(|e| anyhow::anyhow!("Failed to stop server: {:?}", e))
    }
}

/// Start the JSON-RPC server.
pub async fn start_rpc_server<B>(
    addr: SocketAddr,
    state: Arc<RpcState<B>>,
) -> anyhow::Result<RpcServerHandle>
where
    B: KvBackend + ?Sized + 'static,
{
    let server = ServerBuilder::default().build(addr).await?;
    let local_addr = server.local_addr()?;

    let module = build_rpc_module(state);

    tracing::info!("Starting JSON-RPC server on {}", local_addr);

    let handle = server.start(module);

    Ok(RpcServerHandle { handle, local_addr })
}
