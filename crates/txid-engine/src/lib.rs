//! # TxID Engine - Canonical Transaction Identifiers
//!
//! Computes the canonical 32-byte identifier for a transaction, selecting
//! one of two mutually exclusive algorithms by the transaction's declared
//! format version.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `hashing` | SHA-256 and double-SHA-256 one-shot primitives |
//! | `txid` | Algorithm dispatch and both identifier computations |
//!
//! ## Properties
//!
//! - **Pure**: no I/O, no shared state, no mutation of inputs. Safe to call
//!   from any number of threads without synchronization.
//! - **Deterministic**: identical inputs always yield identical identifiers.
//! - **Bit-exact**: every multi-byte integer is encoded little-endian; any
//!   deviation changes the identifier and breaks consensus.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;
pub mod txid;

// Re-exports
pub use hashing::{double_sha256, sha256};
pub use txid::{calculate_txid, TxIdAlgorithm, SEGMENTED_TXID_VERSION};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
