// src/render/mod.rs

//! The presentation seam: projection types, numeric formatting, and the
//! [`Renderer`] trait the scheduler writes frames to.
//!
//! The simulation never touches a display directly. After every observable
//! change the scheduler builds a [`FrameView`], a pure projection of the
//! model, and hands it to whatever `Renderer` was injected. This keeps the
//! core logic testable without any display at all.

mod console;

pub use console::{ConsoleRenderer, NullRenderer, RecordingRenderer};

use crate::core::{GrovizError, MIN_VISIBLE_SCALE};
use std::fmt;

/// A sink that can display one projected frame.
pub trait Renderer {
    /// Presents `frame`. Implementations map their own failures into
    /// [`GrovizError::Render`].
    fn render(&mut self, frame: &FrameView) -> Result<(), GrovizError>;
}

/// Presentation status line. `ManualStep` is a label, not a machine state:
/// the scheduler stays Paused (or Idle) underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    /// Freshly initialized, nothing run yet.
    Idle,
    /// Automatic iteration in progress.
    Running,
    /// A run was interrupted and can resume.
    Paused,
    /// The last change came from a manual step.
    ManualStep,
    /// The iteration budget is spent; reset to continue.
    Complete,
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusLabel::Idle => "Idle",
            StatusLabel::Running => "Running",
            StatusLabel::Paused => "Paused",
            StatusLabel::ManualStep => "Manual step",
            StatusLabel::Complete => "Complete",
        };
        write!(f, "{}", label)
    }
}

/// Signed fill of one amplitude bar. The scale is the bar height fraction
/// in `[MIN_VISIBLE_SCALE, 1.0]`; exact zero renders empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarFill {
    /// Positive amplitude, fill fraction of full height.
    Positive(f64),
    /// Negative amplitude, fill fraction of full height.
    Negative(f64),
    /// Exactly zero amplitude.
    Empty,
}

impl BarFill {
    /// Projects an amplitude onto a signed bar fill: magnitude capped at 1,
    /// floored at [`MIN_VISIBLE_SCALE`] so near-zero values stay visible,
    /// exact zero empty.
    pub fn from_amplitude(amplitude: f64) -> Self {
        if amplitude == 0.0 {
            return BarFill::Empty;
        }
        let scale = amplitude.abs().clamp(MIN_VISIBLE_SCALE, 1.0);
        if amplitude > 0.0 {
            BarFill::Positive(scale)
        } else {
            BarFill::Negative(scale)
        }
    }
}

/// One labelled bar of the projection.
#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    /// Ket label for the basis state.
    pub label: String,
    /// Whether this is the marked state.
    pub is_target: bool,
    /// Signed fill for the bar.
    pub fill: BarFill,
    /// Amplitude at 3 decimals.
    pub amplitude_text: String,
    /// Probability at 3 decimals, clamped non-negative.
    pub probability_text: String,
}

/// A complete projected frame: everything a display needs, nothing it has
/// to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    /// One bar per basis state, in index order.
    pub bars: Vec<BarView>,
    /// Iterations applied since the last reset.
    pub iteration: u32,
    /// Status line label.
    pub status: StatusLabel,
    /// Free-text narration of the latest change.
    pub description: String,
    /// Ket label of the marked state.
    pub target_label: String,
    /// Target probability as a percentage at 1 decimal, e.g. `78.1%`.
    pub target_probability_text: String,
}

/// Fixed-point formatting with two guards carried over from the original
/// display code: non-finite values render as a literal `NaN`, and a rounded
/// negative zero collapses to a plain zero string.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }
    let rounded = format!("{:.*}", decimals, value);
    // "-0.000" and friends parse back to zero; display them unsigned.
    if rounded.parse::<f64>() == Ok(0.0) {
        format!("{:.*}", decimals, 0.0)
    } else {
        rounded
    }
}

/// Amplitude display: 3 decimal places.
pub fn format_amplitude(value: f64) -> String {
    format_fixed(value, 3)
}

/// Probability display: 3 decimal places, clamped non-negative.
pub fn format_probability(value: f64) -> String {
    format_fixed(value.max(0.0), 3)
}

/// Target-probability display: percentage at 1 decimal place.
pub fn format_percent(probability: f64) -> String {
    let percent = probability.max(0.0) * 100.0;
    format!("{}%", format_fixed(percent, 1))
}
