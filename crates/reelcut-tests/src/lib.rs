//! Integration test crate for Reelcut.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on both reelcut crates to verify they work together.

#[cfg(test)]
mod pipeline;
