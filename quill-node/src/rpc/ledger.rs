//! Ledger RPC methods.

use std::sync::Arc;

use jsonrpsee::types::ErrorObjectOwned;
use jsonrpsee::RpcModule;
use serde_json::Value;

use quill_core::Block;
use quill_storage::KvBackend;

use super::{to_rpc_error, RpcState, NOT_FOUND_CODE};

/// RPC error code for malformed or missing parameters.
const INVALID_PARAMS_CODE: i32 = -32602;

fn not_found(height: u64) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(
        NOT_FOUND_CODE,
        format!("no block committed at height {height}"),
        None::<()>,
    )
}

/// Register the ledger RPC methods.
pub fn register_methods<B>(module: &mut RpcModule<Arc<RpcState<B>>>)
where
    B: KvBackend + ?Sized + 'static,
{
    module
        .register_async_method("getHeight", |_params, state, _| async move {
            state.ledger.height().await.map_err(to_rpc_error)
        })
        .unwrap();

    module
        .register_async_method("getBlock", |params, state, _| async move {
            let height: u64 = params.one()?;

            state
                .ledger
                .block(height)
                .await
                .map_err(to_rpc_error)?
                .ok_or_else(|| not_found(height))
        })
        .unwrap();

    module
        .register_async_method("getChain", |_params, state, _| async move {
            state.ledger.chain().await.map_err(to_rpc_error)
        })
        .unwrap();

    module
        .register_async_method("submitBlock", |params, state, _| async move {
            let body: Value = params.one()?;
            if body.is_null() {
                return Err(ErrorObjectOwned::owned(
                    INVALID_PARAMS_CODE,
                    "the block body is missing or empty",
                    None::<()>,
                ));
            }

            state.ledger.append(body).await.map_err(to_rpc_error)
        })
        .unwrap();

    module
        .register_async_method("validateBlock", |params, state, _| async move {
            let height: u64 = params.one()?;
            state.ledger.validate_block(height).await.map_err(to_rpc_error)
        })
        .unwrap();

    module
        .register_async_method("validateChain", |_params, state, _| async move {
            state.ledger.validate_chain().await.map_err(to_rpc_error)
        })
        .unwrap();
}

/// Register the test-only RPC methods.
///
/// These exist to exercise the validators: `tamperBlock` breaks the hash
/// invariant on purpose, `seedBlocks` bulk-appends marker payloads.
/// Only registered when the node runs with `--test-endpoints`.
pub fn register_test_methods<B>(module: &mut RpcModule<Arc<RpcState<B>>>)
where
    B: KvBackend + ?Sized + 'static,
{
    module
        .register_async_method("tamperBlock", |params, state, _| async move {
            let (height, block): (u64, Block) = params.parse()?;
            state
                .ledger
                .tamper_block(height, block)
                .await
                .map_err(to_rpc_error)
        })
        .unwrap();

    module
        .register_async_method("seedBlocks", |params, state, _| async move {
            let count: u64 = params.one()?;

            for i in 0..count {
                state
                    .ledger
                    .append(Value::String(format!("Test Block - {}", i + 1)))
                    .await
                    .map_err(to_rpc_error)?;
            }

            state.ledger.height().await.map_err(to_rpc_error)
        })
        .unwrap();
}
