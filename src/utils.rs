//! Parameter derivation for Bloom filters

use crate::{FilterError, Result};

/// Sizing derived from an expected key count and a target false positive rate
#[derive(Debug, Clone, Copy)]
pub struct FilterParameters {
    pub num_bits: usize,
    pub num_hashes: usize,
    pub expected_fpr: f64,
}

/// Calculate filter parameters for the given constraints
///
/// # Arguments
/// * `capacity` - Expected number of distinct keys to insert
/// * `error_rate` - Tolerated false positive probability, strictly in (0, 1)
///
/// The bit count is `m = -n * ln(p) / (ln(2))^2` and the number of hash
/// rounds is `k = -log2(p)`, both rounded up, so the realized rate stays at
/// or below the requested one.
pub fn optimal_parameters(capacity: usize, error_rate: f64) -> Result<FilterParameters> {
    if capacity == 0 {
        return Err(FilterError::InvalidParameter(
            "Capacity must be > 0".to_string(),
        ));
    }
    // NaN fails both comparisons and lands here as well
    if !(error_rate > 0.0 && error_rate < 1.0) {
        return Err(FilterError::InvalidParameter(format!(
            "Error rate must be in (0, 1), got {}",
            error_rate
        )));
    }

    let n = capacity as f64;
    let p = error_rate;

    // m = -n * ln(p) / (ln(2))^2
    let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
    let num_bits = (-n * p.ln() / ln2_squared).ceil() as usize;

    // k = -log2(p)
    let num_hashes = (-p.log2()).ceil() as usize;

    // Realized rate with the rounded parameters: (1 - e^(-k*n/m))^k
    let m = num_bits as f64;
    let k = num_hashes as f64;
    let expected_fpr = (1.0 - (-k * n / m).exp()).powi(num_hashes as i32);

    Ok(FilterParameters {
        num_bits,
        num_hashes,
        expected_fpr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_parameters() {
        // 1000 keys at 1% -> 9586 bits, 7 hash rounds
        let params = optimal_parameters(1000, 0.01).unwrap();

        assert_eq!(params.num_bits, 9586);
        assert_eq!(params.num_hashes, 7);
        assert!(params.expected_fpr > 0.0);
        assert!(params.expected_fpr <= 0.02); // Should be close to desired 0.01
    }

    #[test]
    fn test_tighter_rate_needs_more_bits() {
        let loose = optimal_parameters(1000, 0.05).unwrap();
        let tight = optimal_parameters(1000, 0.001).unwrap();

        assert!(tight.num_bits > loose.num_bits);
        assert!(tight.num_hashes > loose.num_hashes);
    }

    #[test]
    fn test_parameters_scale_with_capacity() {
        let small = optimal_parameters(100, 0.01).unwrap();
        let large = optimal_parameters(100_000, 0.01).unwrap();

        assert!(large.num_bits > small.num_bits);
        // Hash rounds depend only on the error rate
        assert_eq!(large.num_hashes, small.num_hashes);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert!(optimal_parameters(0, 0.01).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        assert!(optimal_parameters(1000, 0.0).is_err());
        assert!(optimal_parameters(1000, 1.0).is_err());
        assert!(optimal_parameters(1000, -0.01).is_err());
        assert!(optimal_parameters(1000, 1.5).is_err());
        assert!(optimal_parameters(1000, f64::NAN).is_err());
    }
}
