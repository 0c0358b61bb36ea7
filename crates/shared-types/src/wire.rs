//! # Wire-Boundary Containers
//!
//! Plain data containers for a transaction as the wire layer hands it over,
//! already parsed. Parsing and serialization of the wire encoding live in
//! the wire layer itself; these types only define the shape of the handoff.
//!
//! Field layouts mirror the wire encoding: previous-transaction hashes are
//! little-endian and output values are signed, exactly as parsed.

use serde::{Deserialize, Serialize};

use crate::entities::Hash;

/// Reference to an output of a previous transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireOutPoint {
    /// Previous transaction hash in little-endian wire order.
    pub hash: Hash,
    /// Output index within the previous transaction.
    pub index: u32,
}

/// A parsed wire transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTxIn {
    /// The previous output being spent.
    pub previous_out_point: WireOutPoint,
    /// Unlocking script bytes.
    pub signature_script: Vec<u8>,
    /// Sequence number.
    pub sequence: u32,
}

/// A parsed wire transaction output.
///
/// The value is signed here because that is how it travels on the wire;
/// the canonical model normalizes it to unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTxOut {
    /// Output value in the smallest currency unit.
    pub value: i64,
    /// Locking script bytes.
    pub pk_script: Vec<u8>,
}

/// A fully parsed wire transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTx {
    /// Transaction format version.
    pub version: u32,
    /// Lock time.
    pub lock_time: u32,
    /// Ordered inputs.
    pub inputs: Vec<WireTxIn>,
    /// Ordered outputs.
    pub outputs: Vec<WireTxOut>,
}
