//! # Core Domain Entities
//!
//! Defines the canonical, version-agnostic transaction model consumed by
//! the TxID engine, independent of any wire encoding.
//!
//! ## Clusters
//!
//! - **Transaction**: `Transaction`, `TxInput`, `TxOutput`, `PkScript`
//! - **Byte Order**: `Hash`, `reverse_bytes`, display-hex helpers

use serde::{Deserialize, Serialize};

use crate::errors::HashParseError;
use crate::wire::WireTx;

// =============================================================================
// CLUSTER A: BYTE ORDER
// =============================================================================

/// Size of a transaction hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A 32-byte SHA-256 hash in internal (little-endian) byte order.
pub type Hash = [u8; HASH_SIZE];

/// Reverse a byte sequence into a fresh vector.
///
/// Used to move between internal (little-endian) and display (big-endian)
/// byte order for hashes.
pub fn reverse_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Parse a display-order (big-endian) hex string into an internal-order hash.
///
/// The returned hash is byte-reversed from the input, following the
/// convention that identifiers are displayed big-endian but carried
/// little-endian internally.
pub fn hash_from_display_hex(hex_str: &str) -> Result<Hash, HashParseError> {
    let bytes = hex::decode(hex_str)?;
    if bytes.len() != HASH_SIZE {
        return Err(HashParseError::InvalidLength {
            expected: HASH_SIZE,
            actual: bytes.len(),
        });
    }
    let mut hash = [0u8; HASH_SIZE];
    for (i, byte) in bytes.iter().rev().enumerate() {
        hash[i] = *byte;
    }
    Ok(hash)
}

/// Render an internal-order hash as a display-order (big-endian) hex string.
pub fn hash_to_display_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

// =============================================================================
// CLUSTER B: THE TRANSACTION MODEL
// =============================================================================

/// A transaction input referencing a previous output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Hash of the previous transaction, in internal (little-endian) order
    /// exactly as it appeared on the wire. Never reversed by this crate.
    pub previous_tx_hash: Hash,
    /// Index of the output being spent in the previous transaction.
    pub previous_output_index: u32,
    /// Unlocking script (may be empty).
    pub signature_script: Vec<u8>,
    /// Sequence number.
    pub sequence: u32,
}

/// An output script, named purely for semantic clarity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PkScript(pub Vec<u8>);

impl PkScript {
    /// Borrow the raw script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Output value in the smallest currency unit.
    ///
    /// Normalized to unsigned at the wire boundary; a negative wire value
    /// is a contract violation by the parsing layer, not checked here.
    pub value: u64,
    /// Locking script (may be empty).
    pub pk_script: PkScript,
}

/// The canonical in-memory transaction, independent of wire encoding.
///
/// ## Invariants
///
/// - `version` and `lock_time` are immutable once constructed.
/// - Input and output order is semantically significant: it feeds the
///   serialization the TxID is computed over.
/// - Counts are derived from the vectors via [`Transaction::input_count`]
///   and [`Transaction::output_count`]; they are never stored separately,
///   so they cannot drift from the sequence lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction format version. Selects the TxID algorithm.
    pub version: u32,
    /// Lock time, carried verbatim into the segmented TxID header.
    pub lock_time: u32,
    /// Ordered list of inputs.
    pub inputs: Vec<TxInput>,
    /// Ordered list of outputs.
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    /// Reshape a parsed wire transaction into the canonical model.
    ///
    /// Pure data reshaping: allocates a fresh transaction and fresh nested
    /// vectors, never aliasing the wire layer's buffers.
    ///
    /// - Previous-transaction hashes are copied verbatim in their
    ///   little-endian wire order; no reversal happens here.
    /// - Output values are cast from the wire's signed representation to
    ///   `u64`. A negative wire value wraps; supplying one is a wire-layer
    ///   defect, not detected here.
    pub fn from_wire(wire_tx: &WireTx) -> Self {
        let inputs = wire_tx
            .inputs
            .iter()
            .map(|txin| TxInput {
                previous_tx_hash: txin.previous_out_point.hash,
                previous_output_index: txin.previous_out_point.index,
                signature_script: txin.signature_script.clone(),
                sequence: txin.sequence,
            })
            .collect();

        let outputs = wire_tx
            .outputs
            .iter()
            .map(|txout| TxOutput {
                value: txout.value as u64,
                pk_script: PkScript(txout.pk_script.clone()),
            })
            .collect();

        Self {
            version: wire_tx.version,
            lock_time: wire_tx.lock_time,
            inputs,
            outputs,
        }
    }

    /// Number of inputs, always equal to `inputs.len()`.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of outputs, always equal to `outputs.len()`.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
