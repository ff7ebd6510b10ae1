//! Integration test crate for ChromaBlend.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the chromablend crates to verify they work together.

#[cfg(test)]
mod conventions;
