//! # Deterministic Index Derivation
//!
//! Closed-form hash from (seed, slot, attempt) to a pool index. Splitmix64
//! finalizer over a weighted sum of the inputs: no state to carry, the same
//! inputs always produce the same index, and the output is close enough to
//! uniform for pool sizes in the tens.

const SLOT_WEIGHT: u64 = 0x9E37_79B9_7F4A_7C15;
const ATTEMPT_WEIGHT: u64 = 0xBF58_476D_1CE4_E5B9;

/// Mix seed, slot and attempt into a 64-bit value
pub fn mix(seed: u64, slot: u64, attempt: u64) -> u64 {
    let mut z = seed
        .wrapping_add(slot.wrapping_mul(SLOT_WEIGHT))
        .wrapping_add(attempt.wrapping_mul(ATTEMPT_WEIGHT));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derive an index into a candidate list of the given length
///
/// `len` must be non-zero; callers check for an empty candidate list first.
pub fn index(seed: u64, slot: u64, attempt: u64, len: usize) -> usize {
    (mix(seed, slot, attempt) % len as u64) as usize
}
