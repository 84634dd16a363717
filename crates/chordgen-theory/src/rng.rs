//! Seedable RNG using PCG32 with BLAKE3 stream derivation.
//!
//! Selectors take the RNG as a parameter, so a fixed seed reproduces a
//! progression exactly. Each selector gets its own stream derived from the
//! base seed, keeping key choice and template choice independent.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Stream key for the key/mode selector.
pub const KEY_STREAM: &str = "key";

/// Stream key for the progression selector.
pub const PROGRESSION_STREAM: &str = "progression";

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit PCG32 state seed.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named stream from the base seed.
///
/// Hashes the little-endian base seed followed by the UTF-8 key with BLAKE3
/// and keeps the first four bytes.
pub fn derive_stream_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates the RNG for a named stream.
pub fn create_stream_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_stream_seed(base_seed, key))
}
