//! Cross-crate integration tests: wire handoff through model reshaping to
//! identifier computation.

pub mod flows;
