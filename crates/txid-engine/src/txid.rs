//! # Transaction Identifier Computation
//!
//! Dual-algorithm TxID calculation:
//!
//! - **Legacy**: double SHA-256 over the transaction's original
//!   wire-serialized bytes.
//! - **Segmented**: a three-layer hash over independently serialized
//!   transaction segments (inputs, input scripts, outputs), combined with
//!   the transaction header into a final double SHA-256. Selected by the
//!   version tag [`SEGMENTED_TXID_VERSION`].
//!
//! ## Invariants
//!
//! - Every multi-byte integer (version, lock time, counts, indexes,
//!   sequences, values) is encoded little-endian.
//! - Segment and script hashes are single SHA-256; only the raw bytes in
//!   the legacy path and the final serialization in the segmented path are
//!   double-hashed.
//! - Input and output order feeds the segments in sequence order, so
//!   reordering changes the identifier.
//!
//! No validation happens here: callers hand over pre-validated, mutually
//! consistent arguments, and malformed data yields a wrong identifier
//! rather than an error.

use shared_types::{Hash, Transaction};

use crate::hashing::{double_sha256, sha256};

/// Version tag that selects the segmented TxID algorithm.
pub const SEGMENTED_TXID_VERSION: u32 = 10;

/// Bytes contributed to segment A per input: hash + index + sequence.
const INPUT_ENTRY_SIZE: usize = 32 + 4 + 4;

/// Bytes contributed to segment C per output: value + script hash.
const OUTPUT_ENTRY_SIZE: usize = 8 + 32;

/// The two mutually exclusive TxID algorithms.
///
/// Dispatch is a pure branch on the transaction version; the enum makes
/// the special-cased version visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxIdAlgorithm {
    /// Double SHA-256 over the original wire-serialized bytes.
    Legacy,
    /// Three-layer segment hash over the transaction model.
    Segmented,
}

impl TxIdAlgorithm {
    /// Select the algorithm for a transaction format version.
    pub fn for_version(version: u32) -> Self {
        if version == SEGMENTED_TXID_VERSION {
            Self::Segmented
        } else {
            Self::Legacy
        }
    }
}

/// Compute the canonical transaction identifier.
///
/// `raw_bytes` must be exactly the original wire serialization that `tx`
/// was parsed from. The legacy path hashes it verbatim and never
/// re-serializes from the model; if the two arguments disagree the result
/// is meaningless but no error is raised. The segmented path ignores
/// `raw_bytes` entirely and computes from the model alone.
///
/// Pure and deterministic: no I/O, no mutation, no hidden state.
pub fn calculate_txid(raw_bytes: &[u8], tx: &Transaction) -> Hash {
    let algorithm = TxIdAlgorithm::for_version(tx.version);
    tracing::trace!(
        version = tx.version,
        ?algorithm,
        inputs = tx.input_count(),
        outputs = tx.output_count(),
        "computing txid"
    );

    match algorithm {
        TxIdAlgorithm::Legacy => double_sha256(raw_bytes),
        TxIdAlgorithm::Segmented => segmented_txid(tx),
    }
}

/// The segmented (three-layer) TxID computation.
///
/// ## Algorithm
///
/// 1. Segment A: per input, previous hash (verbatim little-endian) +
///    index (LE32) + sequence (LE32).
/// 2. Segment B: per input, single SHA-256 of the signature script.
/// 3. Segment C: per output, value (LE64) + single SHA-256 of the script.
/// 4. Header: version, lock time, input count, output count, each LE32.
///    Counts truncate from the sequence lengths; the caller guarantees
///    they fit in 32 bits.
/// 5. Final: double SHA-256 over header + SHA-256(A) + SHA-256(B) + SHA-256(C).
///
/// Empty input or output lists are legal: the segments are empty and
/// hash normally, with no short-circuit.
fn segmented_txid(tx: &Transaction) -> Hash {
    // Pre-sized scratch buffers; purely an allocation optimization.
    let mut segment_inputs = Vec::with_capacity(tx.input_count() * INPUT_ENTRY_SIZE);
    let mut segment_scripts = Vec::with_capacity(tx.input_count() * 32);
    let mut segment_outputs = Vec::with_capacity(tx.output_count() * OUTPUT_ENTRY_SIZE);

    for input in &tx.inputs {
        segment_inputs.extend_from_slice(&input.previous_tx_hash);
        segment_inputs.extend_from_slice(&input.previous_output_index.to_le_bytes());
        segment_inputs.extend_from_slice(&input.sequence.to_le_bytes());

        segment_scripts.extend_from_slice(&sha256(&input.signature_script));
    }

    for output in &tx.outputs {
        segment_outputs.extend_from_slice(&output.value.to_le_bytes());
        segment_outputs.extend_from_slice(&sha256(output.pk_script.as_bytes()));
    }

    let hash_inputs = sha256(&segment_inputs);
    let hash_scripts = sha256(&segment_scripts);
    let hash_outputs = sha256(&segment_outputs);

    // Header + segment hashes form the final serialization.
    let mut final_serialization = Vec::with_capacity(16 + 3 * 32);
    final_serialization.extend_from_slice(&tx.version.to_le_bytes());
    final_serialization.extend_from_slice(&tx.lock_time.to_le_bytes());
    final_serialization.extend_from_slice(&(tx.input_count() as u32).to_le_bytes());
    final_serialization.extend_from_slice(&(tx.output_count() as u32).to_le_bytes());
    final_serialization.extend_from_slice(&hash_inputs);
    final_serialization.extend_from_slice(&hash_scripts);
    final_serialization.extend_from_slice(&hash_outputs);

    double_sha256(&final_serialization)
}
