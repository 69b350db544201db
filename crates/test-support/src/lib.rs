#![deny(unsafe_code)]

//! Shared test utilities for the sstr workspace.
//!
//! The generators use a thread-local RNG; tests that need reproducible input
//! should use [`seeded`] and the `*_with` variants.

use rand::distributions::{Alphanumeric, DistString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns a random alphanumeric string of exactly `len` characters.
pub fn random_alnum(len: usize) -> String {
    random_alnum_with(&mut rand::thread_rng(), len)
}

/// Like [`random_alnum`] but drawing from `rng`.
pub fn random_alnum_with<R: Rng>(rng: &mut R, len: usize) -> String {
    Alphanumeric.sample_string(rng, len)
}

/// Returns `len` random bytes, zero bytes included.
pub fn random_bytes(len: usize) -> Vec<u8> {
    random_bytes_with(&mut rand::thread_rng(), len)
}

/// Like [`random_bytes`] but drawing from `rng`.
pub fn random_bytes_with<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    bytes
}

/// Returns a uniformly distributed value in `0..bound`, or 0 when `bound` is 0.
pub fn random_below(bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..bound)
}

/// Deterministic RNG for reproducible test input.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
