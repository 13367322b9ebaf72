// src/core/config.rs

use super::constants::groviz_constants::{MAX_QUBITS, MIN_QUBITS};
use rand::RngExt;
use std::f64::consts::FRAC_PI_4;
use std::fmt;

/// Static description of one search: how many basis states exist, which one
/// the oracle marks, and how many Grover iterates the animation will allow.
///
/// The qubit count is clamped to the supported range on construction, so a
/// `SearchConfig` is always structurally valid. Everything else is derived:
/// - `num_states = 2^num_qubits`
/// - `initial_amplitude = 1/sqrt(num_states)`
/// - `optimal_iterations = max(1, round((pi/4) * sqrt(num_states)))`
/// - `max_iterations = optimal_iterations + 4`
///
/// The extra four iterations past the optimum let the animation show the
/// target probability falling again once the rotation overshoots.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Number of qubits after clamping to `[MIN_QUBITS, MAX_QUBITS]`.
    pub num_qubits: u32,
    /// Size of the search space, `2^num_qubits`.
    pub num_states: usize,
    /// Index of the basis state the oracle marks.
    pub target_index: usize,
    /// Uniform starting amplitude, `1/sqrt(num_states)`.
    pub initial_amplitude: f64,
    /// Iteration count that maximizes the target probability.
    pub optimal_iterations: u32,
    /// Hard stop for the animation, `optimal_iterations + 4`.
    pub max_iterations: u32,
}

impl SearchConfig {
    /// Builds a configuration for `num_qubits`, marking the all-ones state
    /// `|1..1>` (the last basis index) as the target.
    pub fn new(num_qubits: u32) -> Self {
        let qubits = num_qubits.clamp(MIN_QUBITS, MAX_QUBITS);
        let num_states = 1usize << qubits;
        Self::with_target(qubits, num_states - 1)
    }

    /// Builds a configuration marking an explicit `target_index`.
    ///
    /// The target is clamped into `[0, num_states)` so the configuration
    /// stays structurally valid even for an out-of-range request.
    pub fn with_target(num_qubits: u32, target_index: usize) -> Self {
        let qubits = num_qubits.clamp(MIN_QUBITS, MAX_QUBITS);
        let num_states = 1usize << qubits;
        let optimal_iterations = ((FRAC_PI_4 * (num_states as f64).sqrt()).round() as u32).max(1);

        Self {
            num_qubits: qubits,
            num_states,
            target_index: target_index.min(num_states - 1),
            initial_amplitude: 1.0 / (num_states as f64).sqrt(),
            optimal_iterations,
            max_iterations: optimal_iterations + 4,
        }
    }

    /// Builds a configuration with a uniformly random marked state, for demo
    /// runs where the "unknown" target should actually be unknown.
    pub fn with_random_target(num_qubits: u32) -> Self {
        let qubits = num_qubits.clamp(MIN_QUBITS, MAX_QUBITS);
        let num_states = 1usize << qubits;
        let target = rand::rng().random_range(0..num_states);
        Self::with_target(qubits, target)
    }

    /// Ket label for the marked state, e.g. `|101>` style output `|101⟩`.
    pub fn target_label(&self) -> String {
        self.state_label(self.target_index)
    }

    /// Ket label for an arbitrary basis index: zero-padded binary between
    /// `|` and `⟩`, e.g. index 2 at 3 qubits is `|010⟩`.
    pub fn state_label(&self, index: usize) -> String {
        format!("|{:0width$b}⟩", index, width = self.num_qubits as usize)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(super::constants::groviz_constants::DEFAULT_QUBITS)
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchConfig[{} qubits, {} states, target {}, optimal {} / max {} iterations]",
            self.num_qubits,
            self.num_states,
            self.target_label(),
            self.optimal_iterations,
            self.max_iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_count_is_clamped() {
        assert_eq!(SearchConfig::new(0).num_qubits, MIN_QUBITS);
        assert_eq!(SearchConfig::new(99).num_qubits, MAX_QUBITS);
        assert_eq!(SearchConfig::new(4).num_qubits, 4);
    }

    #[test]
    fn test_derived_quantities() {
        let config = SearchConfig::new(2);
        assert_eq!(config.num_states, 4);
        assert_eq!(config.target_index, 3);
        assert!((config.initial_amplitude - 0.5).abs() < 1e-12);
        // (pi/4) * sqrt(4) = pi/2 ~ 1.57 rounds to 2
        assert_eq!(config.optimal_iterations, 2);
        assert_eq!(config.max_iterations, 6);
    }

    #[test]
    fn test_optimal_iterations_has_floor_of_one() {
        // Even the smallest space keeps at least one iterate.
        for qubits in MIN_QUBITS..=MAX_QUBITS {
            assert!(SearchConfig::new(qubits).optimal_iterations >= 1);
        }
    }

    #[test]
    fn test_labels_are_zero_padded_kets() {
        let config = SearchConfig::new(3);
        assert_eq!(config.state_label(0), "|000⟩");
        assert_eq!(config.state_label(2), "|010⟩");
        assert_eq!(config.target_label(), "|111⟩");
    }

    #[test]
    fn test_explicit_target_is_clamped_into_range() {
        let config = SearchConfig::with_target(2, 17);
        assert_eq!(config.target_index, 3);
    }

    #[test]
    fn test_random_target_in_range() {
        for _ in 0..32 {
            let config = SearchConfig::with_random_target(3);
            assert!(config.target_index < config.num_states);
        }
    }
}
