//! Seeded hash rounds for Bloom filters
//!
//! One seedable primitive stands in for a family of hash functions: round
//! `i` hashes the key with seed `i`, so a filter with `k` rounds derives
//! `k` positions from a single algorithm.

use std::hash::Hasher;
use std::io::Cursor;

use fnv::FnvHasher;

/// Trait for hash rounds used in Bloom filters
pub trait HashFunction: Send + Sync {
    /// Hash a key and reduce it to a position below `modulus`
    fn hash(&self, key: &[u8], modulus: u64) -> u64;

    /// Get a name/identifier for this hash function
    fn name(&self) -> String;
}

/// MurmurHash3 (x64, 128-bit variant) with a per-round seed
#[derive(Debug, Clone)]
pub struct Murmur3Hash {
    seed: u32,
}

impl Murmur3Hash {
    /// Create a new round with the given seed
    pub fn new(seed: u32) -> Self {
        Murmur3Hash { seed }
    }
}

impl HashFunction for Murmur3Hash {
    fn hash(&self, key: &[u8], modulus: u64) -> u64 {
        if modulus == 0 {
            return 0;
        }

        // Reading from an in-memory cursor cannot fail
        let digest =
            murmur3::murmur3_x64_128(&mut Cursor::new(key), self.seed).unwrap_or_default();
        (digest as u64) % modulus
    }

    fn name(&self) -> String {
        format!("murmur3-{}", self.seed)
    }
}

/// FNV-1a with the round seed folded in ahead of the key bytes
#[derive(Debug, Clone)]
pub struct Fnv1aHash {
    seed: u64,
}

impl Fnv1aHash {
    /// Create a new round with the given seed
    pub fn new(seed: u64) -> Self {
        Fnv1aHash { seed }
    }
}

impl HashFunction for Fnv1aHash {
    fn hash(&self, key: &[u8], modulus: u64) -> u64 {
        if modulus == 0 {
            return 0;
        }

        let mut hasher = FnvHasher::default();
        hasher.write(&self.seed.to_le_bytes());
        hasher.write(key);
        hasher.finish() % modulus
    }

    fn name(&self) -> String {
        format!("fnv1a-{}", self.seed)
    }
}

/// Create the hash rounds for a filter, seeded 0..count-1
///
/// Sequential seeds keep construction fully deterministic: two filters built
/// with the same parameters always hash every key to the same positions.
pub fn create_hash_functions(count: usize) -> Vec<Box<dyn HashFunction>> {
    let mut functions: Vec<Box<dyn HashFunction>> = Vec::with_capacity(count);

    for seed in 0..count {
        functions.push(Box::new(Murmur3Hash::new(seed as u32)) as Box<dyn HashFunction>);
    }

    functions
}
