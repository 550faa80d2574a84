//! Injected sources of nondeterminism.
//!
//! The catalog is plain data (see [`crate::catalog`]); the only behaviour the
//! engine borrows from its environment is randomness, so tests can replace
//! dice rolls and shuffles with a scripted sequence.
mod rng;

pub use rng::{PcgRng, RngOracle};
