// src/core/state.rs

use super::config::SearchConfig;
use std::fmt;

/// The evolving model: an ordered sequence of real amplitudes indexed by
/// basis-state integer.
///
/// Amplitudes are plain `f64` throughout. The Grover iterate visualized here
/// only ever needs a sign flip and a reflection about the mean, both of which
/// keep a real vector real, so no complex component is modeled.
///
/// The vector is created fresh on initialization or reset, mutated in place
/// by [`apply_oracle`](AmplitudeVector::apply_oracle) and
/// [`apply_diffusion`](AmplitudeVector::apply_diffusion), and discarded on
/// the next reset.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeVector {
    /// One signed amplitude per basis state, `amplitudes[i]` for `|i⟩`.
    amplitudes: Vec<f64>,
    /// Qubit count the vector was built for; fixes the label width.
    num_qubits: u32,
}

/// Read-only labelled view of one entry of an [`AmplitudeVector`].
#[derive(Debug, Clone, PartialEq)]
pub struct BasisState {
    /// Basis-state integer in `[0, num_states)`.
    pub index: usize,
    /// Ket display string, e.g. `|010⟩`.
    pub label: String,
    /// Current signed amplitude.
    pub amplitude: f64,
}

impl AmplitudeVector {
    /// Builds the uniform superposition for `config`: every amplitude set to
    /// `config.initial_amplitude`.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            amplitudes: vec![config.initial_amplitude; config.num_states],
            num_qubits: config.num_qubits,
        }
    }

    // Test-only hook to build a vector from raw amplitudes, for exercising
    // the validation checks on states the public API cannot produce.
    #[cfg(test)]
    pub(crate) fn from_raw(amplitudes: Vec<f64>, num_qubits: u32) -> Self {
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Negates the amplitude at `target_index` and returns the new value.
    ///
    /// This is the whole oracle: the marked state is tagged with a phase of
    /// -1, invisible to probabilities until the diffusion converts it into
    /// a magnitude difference.
    pub fn apply_oracle(&mut self, target_index: usize) -> f64 {
        self.amplitudes[target_index] = -self.amplitudes[target_index];
        self.amplitudes[target_index]
    }

    /// Reflects every amplitude about the mean of all amplitudes and returns
    /// the mean used: `a_i <- 2*mean - a_i`.
    pub fn apply_diffusion(&mut self) -> f64 {
        let mean = self.amplitudes.iter().sum::<f64>() / self.amplitudes.len() as f64;
        for amplitude in &mut self.amplitudes {
            *amplitude = 2.0 * mean - *amplitude;
        }
        mean
    }

    /// Provides read-only access to the raw amplitude slice.
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Signed amplitude of basis state `index`.
    pub fn amplitude(&self, index: usize) -> f64 {
        self.amplitudes[index]
    }

    /// Probability of observing basis state `index`, clamped non-negative
    /// against floating-point dust.
    pub fn probability(&self, index: usize) -> f64 {
        (self.amplitudes[index] * self.amplitudes[index]).max(0.0)
    }

    /// Sum of squared amplitudes. Equals 1 within tolerance for any state
    /// reachable from the uniform superposition via oracle and diffusion.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a * a).sum()
    }

    /// Number of basis states represented.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Returns `true` if the vector holds no amplitudes.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Qubit count the vector was built for.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Labelled view of all entries, in basis order.
    pub fn basis_states(&self) -> Vec<BasisState> {
        let width = self.num_qubits as usize;
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(index, &amplitude)| BasisState {
                index,
                label: format!("|{:0width$b}⟩", index, width = width),
                amplitude,
            })
            .collect()
    }
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, a) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, a)?;
        }
        write!(f, "]")
    }
}
