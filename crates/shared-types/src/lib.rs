//! # Shared Types Crate
//!
//! This crate contains the canonical transaction model consumed by the
//! TxID engine, the wire-boundary container types handed over by the
//! parsing layer, and the byte-order utilities shared across subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem transaction types are
//!   defined here.
//! - **Internal Byte Order**: Previous-transaction hashes are carried in
//!   little-endian wire order end to end; display-order reversal is a
//!   presentation concern handled by the hex helpers.
//! - **Pre-Validated Inputs**: The model performs no field validation; the
//!   wire layer is responsible for handing over well-formed data.

pub mod entities;
pub mod errors;
pub mod wire;

pub use entities::{
    hash_from_display_hex, hash_to_display_hex, reverse_bytes, Hash, PkScript, Transaction,
    TxInput, TxOutput, HASH_SIZE,
};
pub use errors::HashParseError;
pub use wire::{WireOutPoint, WireTx, WireTxIn, WireTxOut};
