//! Collaborators injected into the rules.
//!
//! The rules never own a source of entropy. Randomness arrives through the
//! [`RngOracle`] trait together with an explicit seed so that every roll can
//! be replayed from the game seed and the encounter nonce.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
