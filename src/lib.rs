//! # bitsieve
//!
//! A fixed-size Bloom filter for fast, space-efficient set-membership tests.
//! Keys are opaque byte strings; lookups answer either "definitely not
//! present" or "possibly present", and a key that was inserted is never
//! reported absent.

pub mod bloom;
pub mod hash;
pub mod utils;

pub use bloom::BloomFilter;
pub use hash::{Fnv1aHash, HashFunction, Murmur3Hash};

/// Common error type for the library
#[derive(Debug, Clone)]
pub enum FilterError {
    InvalidParameter(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FilterError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for FilterError {}

pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_membership() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();

        // Insert some keys
        bloom.insert(b"foo");
        bloom.insert(b"bar");
        bloom.insert(b"baz");

        // Test membership
        assert!(bloom.contains(b"foo"));
        assert!(bloom.contains(b"bar"));
        assert!(bloom.contains(b"baz"));
    }

    #[test]
    fn test_sizing_without_building() {
        let params = utils::optimal_parameters(1000, 0.01).unwrap();
        let bloom = BloomFilter::new(1000, 0.01).unwrap();

        assert_eq!(bloom.num_bits(), params.num_bits);
        assert_eq!(bloom.num_hashes(), params.num_hashes);
    }

    #[test]
    fn test_error_display() {
        let err = FilterError::InvalidParameter("Capacity must be > 0".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: Capacity must be > 0");
    }
}
