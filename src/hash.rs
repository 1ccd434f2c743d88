//! Stateless key hashing for the map and for callers that need a stable
//! in-process digest.
//!
//! The hasher is 64-bit FNV-1a. It is deterministic for the lifetime of the
//! process and unseeded, so hashes must not be persisted or compared across
//! runs. Equal keys always produce equal hashes; colliding hashes are
//! expected and resolved by the map, not here.

use core::hash::{BuildHasherDefault, Hash, Hasher};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a hasher over a raw byte stream.
#[derive(Debug, Clone)]
pub struct FnvHasher {
    state: u64,
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self { state: FNV_OFFSET }
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }
}

/// Hasher state factory used as the map's default.
pub type FnvBuildHasher = BuildHasherDefault<FnvHasher>;

/// Hashes a raw byte string over its exact length.
#[must_use]
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

/// Hashes any hashable key with the default hasher.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FnvHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}
