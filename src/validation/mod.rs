// src/validation/mod.rs

//! Invariant checks for the amplitude vector.
//!
//! The diffusion transform is norm-preserving for the canonical Grover
//! construction, but the codebase checks this rather than assuming it,
//! both at runtime (after every iterate) and under test (across the full
//! supported qubit range).

use crate::core::{AmplitudeVector, GrovizError};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
const DEFAULT_SUM_TOLERANCE: f64 = 1e-9;

/// Sum of squared amplitudes of the vector.
pub fn total_probability(vector: &AmplitudeVector) -> f64 {
    vector.total_probability()
}

/// Checks that the vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `vector` - The [`AmplitudeVector`] to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(GrovizError::NormDrift)` if normalization fails.
pub fn check_normalization(
    vector: &AmplitudeVector,
    tolerance: Option<f64>,
) -> Result<(), GrovizError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm = vector.total_probability();
    if (norm - 1.0).abs() > effective_tolerance {
        Err(GrovizError::NormDrift {
            message: format!(
                "Amplitude vector normalization failed. Sum(a_i^2) = {} (Deviation > {})",
                norm, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks the amplitude-conservation identity of a reflection about the mean:
/// the amplitude sum after a diffusion must equal `2*N*mean - sum_before`.
///
/// # Arguments
/// * `sum_before` - Amplitude sum before the diffusion.
/// * `mean` - The mean the diffusion reflected about.
/// * `len` - Number of basis states `N`.
/// * `sum_after` - Amplitude sum after the diffusion.
/// * `tolerance` - Allowed absolute deviation. Defaults to 1e-9.
pub fn check_reflection_identity(
    sum_before: f64,
    mean: f64,
    len: usize,
    sum_after: f64,
    tolerance: Option<f64>,
) -> Result<(), GrovizError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_SUM_TOLERANCE);
    let expected = 2.0 * len as f64 * mean - sum_before;
    if (sum_after - expected).abs() > effective_tolerance {
        Err(GrovizError::NormDrift {
            message: format!(
                "Reflection identity failed. Sum after diffusion = {} (expected {})",
                sum_after, expected
            ),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchConfig;

    #[test]
    fn test_uniform_vector_is_normalized() {
        let vector = AmplitudeVector::new(&SearchConfig::new(4));
        assert!(check_normalization(&vector, None).is_ok());
    }

    #[test]
    fn test_drifted_vector_is_rejected() {
        // Not reachable through the public API; built raw on purpose.
        let vector = AmplitudeVector::from_raw(vec![0.5, 0.5, 0.5, 0.6], 2);
        match check_normalization(&vector, None) {
            Err(GrovizError::NormDrift { .. }) => {}
            other => panic!("expected NormDrift, got {:?}", other),
        }
    }

    #[test]
    fn test_reflection_identity_holds_after_diffusion() {
        let config = SearchConfig::new(3);
        let mut vector = AmplitudeVector::new(&config);
        vector.apply_oracle(config.target_index);
        let sum_before: f64 = vector.amplitudes().iter().sum();
        let mean = vector.apply_diffusion();
        let sum_after: f64 = vector.amplitudes().iter().sum();
        assert!(
            check_reflection_identity(sum_before, mean, vector.len(), sum_after, None).is_ok()
        );
        assert!(
            check_reflection_identity(sum_before + 0.5, mean, vector.len(), sum_after, None)
                .is_err()
        );
    }
}
