//! Error handling logic

use std::fmt;

/// Error types for the simulation and its presentation boundary.
///
/// The scheduler's forbidden transitions (stepping past completion, pausing
/// while idle, and so on) are deliberately *not* errors; they are silent
/// no-ops. An error here means an invariant broke or an external sink failed.
#[derive(Debug, Clone, PartialEq)]
pub enum GrovizError {
    /// The amplitude vector's total probability drifted from 1 after a
    /// diffusion. Reflection about the mean is norm-preserving for the
    /// canonical Grover construction; this is checked after every iterate
    /// rather than assumed.
    NormDrift {
        /// Norm-drift failure message
        message: String,
    },

    /// The injected renderer sink failed (typically an underlying I/O error).
    Render {
        /// Render failure message
        message: String,
    },
}

impl fmt::Display for GrovizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrovizError::NormDrift { message } => write!(f, "Norm Drift: {}", message),
            GrovizError::Render { message } => write!(f, "Render Failure: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for GrovizError {}
