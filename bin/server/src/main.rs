//! Whitelist proof API server
//!
//! Loads the whitelist from disk, builds the Merkle commitment once, and
//! serves inclusion proofs over HTTP:
//! - `GET /proof/<address>` returns the authentication path for a member
//! - `GET /root` exports the commitment an external verifier checks against
//!
//! The tree is immutable after startup and shared read-only across
//! handlers; no lookup is served before construction completes.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use mintlist_core::{Whitelist, WhitelistError};

/// Server configuration
#[derive(Clone, Debug)]
struct Config {
    /// Path to the whitelist file, a JSON array of address strings
    whitelist_path: String,
    /// Listen address
    rpc_addr: String,
}

impl Config {
    /// Load from environment variables
    fn from_env() -> Self {
        Self {
            whitelist_path: std::env::var("WHITELIST_PATH")
                .unwrap_or_else(|_| "private/whitelist.json".to_string()),
            rpc_addr: std::env::var("RPC_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}

/// Proof response payload
#[derive(Serialize)]
struct ProofResponse {
    leaf: String,
    proof: Vec<String>,
    root: String,
}

/// Error payload, field name kept stable for API clients
#[derive(Serialize)]
struct ErrorResponse {
    #[serde(rename = "errorMessage")]
    error_message: String,
}

type SharedWhitelist = Arc<Whitelist>;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting whitelist proof server...");

    let config = Config::from_env();
    info!("  Whitelist path: {}", config.whitelist_path);

    // Load the whitelist and build the commitment before binding the
    // listener: a malformed or empty list aborts startup, and no lookup
    // is ever served against a partially built tree.
    let raw = fs::read_to_string(&config.whitelist_path)
        .with_context(|| format!("failed to read whitelist file {}", config.whitelist_path))?;
    let addresses: Vec<String> =
        serde_json::from_str(&raw).context("whitelist file is not a JSON array of addresses")?;

    let whitelist = Whitelist::new(&addresses).context("failed to build whitelist commitment")?;
    info!("  Whitelisted addresses: {}", whitelist.len());
    info!("  Merkle root: 0x{}", hex::encode(whitelist.root()));

    let app = Router::new()
        .route("/", get(usage))
        .route("/health", get(health))
        .route("/root", get(merkle_root))
        .route("/proof/:address", get(proof))
        .with_state(Arc::new(whitelist));

    info!("API server listening on {}", config.rpc_addr);
    let listener = tokio::net::TcpListener::bind(&config.rpc_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.rpc_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Usage hint for the bare path
async fn usage() -> &'static str {
    "Use /proof/<wallet_address>"
}

/// Health check endpoint
async fn health() -> &'static str {
    "ok"
}

/// Commitment export, e.g. for recording on-chain
async fn merkle_root(State(whitelist): State<SharedWhitelist>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "root": format!("0x{}", hex::encode(whitelist.root())),
    }))
}

/// Inclusion proof lookup
async fn proof(
    State(whitelist): State<SharedWhitelist>,
    Path(address): Path<String>,
) -> Result<Json<ProofResponse>, (StatusCode, Json<ErrorResponse>)> {
    match whitelist.proof(&address) {
        Ok(proof) => {
            info!("Proof served: address={}, siblings={}", address, proof.len());
            Ok(Json(ProofResponse {
                leaf: format!("0x{}", hex::encode(proof.leaf)),
                proof: proof.to_hex(),
                root: format!("0x{}", hex::encode(whitelist.root())),
            }))
        }
        Err(WhitelistError::NotFound) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error_message: "Address not found on the whitelist.".to_string(),
            }),
        )),
        Err(err) => {
            warn!("Rejected malformed address: {}", address);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error_message: err.to_string(),
                }),
            ))
        }
    }
}
