//! Standard Bloom filter implementation
//!
//! A space-efficient probabilistic data structure for membership testing.
//! Lookups answer "definitely not present" or "possibly present"; a key that
//! was inserted is never reported absent.

use crate::{hash::HashFunction, utils, FilterError, Result};
use bit_vec::BitVec;

/// A fixed-size Bloom filter over byte-string keys
///
/// The filter owns its bit array outright, and bits only ever go from unset
/// to set. There is no removal and no resizing, so answers can only move
/// from "definitely not" to "possibly present" as keys are inserted.
pub struct BloomFilter {
    /// Bit array storing the filter data
    bits: BitVec,
    /// Hash rounds used for this filter
    hash_functions: Vec<Box<dyn HashFunction>>,
}

impl BloomFilter {
    /// Create a new Bloom filter
    ///
    /// # Arguments
    /// * `capacity` - Expected number of distinct keys to insert
    /// * `error_rate` - Tolerated false positive probability, strictly in (0, 1)
    ///
    /// The bit count and number of hash rounds are derived by
    /// [`utils::optimal_parameters`]; the filter starts with every bit unset.
    pub fn new(capacity: usize, error_rate: f64) -> Result<Self> {
        let params = utils::optimal_parameters(capacity, error_rate)?;
        Self::with_parameters(params.num_bits, params.num_hashes)
    }

    /// Create a Bloom filter with specific parameters
    pub fn with_parameters(num_bits: usize, num_hashes: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(FilterError::InvalidParameter(
                "Bit count must be > 0".to_string(),
            ));
        }
        if num_hashes == 0 {
            return Err(FilterError::InvalidParameter(
                "Number of hashes must be > 0".to_string(),
            ));
        }

        let hash_functions = crate::hash::create_hash_functions(num_hashes);

        Ok(BloomFilter {
            bits: BitVec::from_elem(num_bits, false),
            hash_functions,
        })
    }

    /// Insert a key into the filter
    pub fn insert(&mut self, key: &[u8]) {
        let num_bits = self.bits.len() as u64;

        for hash_fn in &self.hash_functions {
            let index = hash_fn.hash(key, num_bits);
            self.bits.set(index as usize, true);
        }
    }

    /// Check if a key might be in the filter
    /// Returns true if the key might be present (with possible false positives)
    /// Returns false if the key is definitely not present
    pub fn contains(&self, key: &[u8]) -> bool {
        let num_bits = self.bits.len() as u64;

        for hash_fn in &self.hash_functions {
            let index = hash_fn.hash(key, num_bits);
            if !self.bits.get(index as usize).unwrap_or(false) {
                return false;
            }
        }

        true
    }

    /// Get the size of the bit array
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of hash rounds per key
    pub fn num_hashes(&self) -> usize {
        self.hash_functions.len()
    }

    /// Check if no key has been inserted yet
    pub fn is_empty(&self) -> bool {
        !self.bits.any()
    }

    /// Get the current load factor (fraction of bits set)
    pub fn load_factor(&self) -> f64 {
        let set_bits = self.bits.iter().filter(|&bit| bit).count();
        set_bits as f64 / self.bits.len() as f64
    }

    /// Get the estimated false positive rate at the current load
    pub fn estimated_fpr(&self) -> f64 {
        let load = self.load_factor();
        load.powi(self.hash_functions.len() as i32)
    }

    /// Get statistics about the filter
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            num_bits: self.bits.len(),
            num_hashes: self.hash_functions.len(),
            bits_set: self.bits.iter().filter(|&bit| bit).count(),
            load_factor: self.load_factor(),
            estimated_fpr: self.estimated_fpr(),
        }
    }
}

/// Point-in-time statistics about a Bloom filter
#[derive(Debug, Clone)]
pub struct FilterStats {
    pub num_bits: usize,
    pub num_hashes: usize,
    pub bits_set: usize,
    pub load_factor: f64,
    pub estimated_fpr: f64,
}

impl std::fmt::Display for FilterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Size: {} bits\n\
             - Hash rounds: {}\n\
             - Bits set: {}\n\
             - Load factor: {:.3}\n\
             - Estimated FPR: {:.6}",
            self.num_bits, self.num_hashes, self.bits_set, self.load_factor, self.estimated_fpr
        )
    }
}
