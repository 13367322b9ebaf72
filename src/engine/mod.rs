// src/engine/mod.rs

//! Applies the Grover iterate, one step at a time, and narrates what changed.
//!
//! This module contains the [`StepEngine`], which owns the amplitude vector
//! and the iteration counter, and enforces the completion policy: once
//! `max_iterations` iterates have been applied, further steps are refused
//! until a reset.

use crate::core::{AmplitudeVector, GrovizError, SearchConfig};
use crate::render::{format_amplitude, format_probability};
use crate::validation;
use std::fmt;

/// Result of asking the engine for one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// One full iterate (oracle then diffusion) was applied.
    Applied(StepReport),
    /// The iteration budget is exhausted; nothing was mutated.
    Complete,
}

/// Human-readable record of a single iterate, capturing the target amplitude
/// before the oracle, after the oracle, and after the diffusion, along with
/// the mean the diffusion reflected about.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Iteration number after this step (1-based).
    pub iteration: u32,
    /// Ket label of the marked state.
    pub target_label: String,
    /// Target amplitude before the oracle.
    pub amplitude_before: f64,
    /// Target amplitude after the oracle's sign flip.
    pub amplitude_after_oracle: f64,
    /// Mean amplitude the diffusion reflected about.
    pub mean: f64,
    /// Target amplitude after the diffusion.
    pub amplitude_after: f64,
    /// Target probability after the step, clamped non-negative.
    pub probability: f64,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iteration {}: oracle inverted {} ({} → {}) and diffusion reflected \
             around the mean {}, yielding amplitude {} (probability {}).",
            self.iteration,
            self.target_label,
            format_amplitude(self.amplitude_before),
            format_amplitude(self.amplitude_after_oracle),
            format_amplitude(self.mean),
            format_amplitude(self.amplitude_after),
            format_probability(self.probability),
        )
    }
}

/// Owns one search run: configuration, amplitude vector and iteration count.
///
/// The iterate is applied atomically; callers never observe the state
/// between the oracle and the diffusion. The intermediate values appear
/// only in the returned [`StepReport`]. Callers wanting the half-step view
/// can drive an [`AmplitudeVector`] directly.
#[derive(Debug, Clone)]
pub struct StepEngine {
    config: SearchConfig,
    vector: AmplitudeVector,
    iteration: u32,
}

impl StepEngine {
    /// Creates an engine for the given configuration, starting in the
    /// uniform superposition at iteration 0.
    pub fn new(config: SearchConfig) -> Self {
        let vector = AmplitudeVector::new(&config);
        Self {
            config,
            vector,
            iteration: 0,
        }
    }

    /// Convenience constructor from a (clamped) qubit count.
    pub fn new_for_qubits(num_qubits: u32) -> Self {
        Self::new(SearchConfig::new(num_qubits))
    }

    /// Applies one Grover iterate, or refuses if the budget is spent.
    ///
    /// On success the iteration counter advances and the norm-preservation
    /// invariant is checked: diffusion about the mean must leave the total
    /// probability at 1. A [`GrovizError::NormDrift`] here means the
    /// invariant broke, not that the caller did anything wrong.
    pub fn execute_step(&mut self) -> Result<StepOutcome, GrovizError> {
        if self.iteration >= self.config.max_iterations {
            return Ok(StepOutcome::Complete);
        }

        let target_index = self.config.target_index;
        let amplitude_before = self.vector.amplitude(target_index);
        let amplitude_after_oracle = self.vector.apply_oracle(target_index);
        let mean = self.vector.apply_diffusion();
        self.iteration += 1;

        validation::check_normalization(&self.vector, None)?;

        let amplitude_after = self.vector.amplitude(target_index);
        Ok(StepOutcome::Applied(StepReport {
            iteration: self.iteration,
            target_label: self.config.target_label(),
            amplitude_before,
            amplitude_after_oracle,
            mean,
            amplitude_after,
            probability: self.vector.probability(target_index),
        }))
    }

    /// Rebuilds the vector from the configuration and zeroes the iteration
    /// count, regardless of prior state.
    pub fn reset(&mut self) {
        self.vector = AmplitudeVector::new(&self.config);
        self.iteration = 0;
    }

    /// Iterations applied since the last reset.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// `true` once the iteration budget is spent; steps are refused until
    /// [`reset`](StepEngine::reset).
    pub fn is_complete(&self) -> bool {
        self.iteration >= self.config.max_iterations
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The current amplitude vector.
    pub fn vector(&self) -> &AmplitudeVector {
        &self.vector
    }

    /// Current probability of observing the marked state.
    pub fn target_probability(&self) -> f64 {
        self.vector.probability(self.config.target_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_report_narration() -> Result<(), GrovizError> {
        let mut engine = StepEngine::new_for_qubits(2);
        let outcome = engine.execute_step()?;
        let report = match outcome {
            StepOutcome::Applied(report) => report,
            StepOutcome::Complete => panic!("first step must apply"),
        };
        assert_eq!(
            report.to_string(),
            "Iteration 1: oracle inverted |11⟩ (0.500 → -0.500) and diffusion \
             reflected around the mean 0.250, yielding amplitude 1.000 \
             (probability 1.000)."
        );
        Ok(())
    }

    #[test]
    fn test_completion_refuses_without_mutating() -> Result<(), GrovizError> {
        let mut engine = StepEngine::new_for_qubits(2);
        for _ in 0..engine.config().max_iterations {
            assert!(matches!(engine.execute_step()?, StepOutcome::Applied(_)));
        }
        assert!(engine.is_complete());

        let frozen = engine.vector().clone();
        assert_eq!(engine.execute_step()?, StepOutcome::Complete);
        assert_eq!(engine.vector(), &frozen);
        assert_eq!(engine.iteration(), engine.config().max_iterations);
        Ok(())
    }

    #[test]
    fn test_reset_restores_initial_state() -> Result<(), GrovizError> {
        let mut engine = StepEngine::new_for_qubits(3);
        engine.execute_step()?;
        engine.execute_step()?;
        engine.reset();
        assert_eq!(engine.iteration(), 0);
        assert_eq!(engine.vector(), &AmplitudeVector::new(engine.config()));
        Ok(())
    }
}
