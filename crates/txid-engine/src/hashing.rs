//! # SHA-256 Hashing
//!
//! One-shot SHA-256 primitives used by the TxID computation.

use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Hash data with a single SHA-256 pass.
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash data with double SHA-256: `SHA-256(SHA-256(data))`.
///
/// This is the finalization hash for transaction identifiers.
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}
