// src/render/console.rs

//! Renderer implementations: an ASCII console projection plus the headless
//! sinks used by tests and benchmarks.

use super::{BarFill, FrameView, Renderer};
use crate::core::GrovizError;
use std::io::Write;

// Bar cells drawn on each side of the sign axis.
const BAR_CELLS: usize = 20;
const FILL: char = '█';

/// Draws frames as text: one signed bar per basis state around a `│` axis,
/// negative fill growing left and positive fill growing right, followed by
/// the numeric lines and the narration.
///
/// ```text
/// Iteration 1  [Running]  target |11⟩  probability 100.0%
///   |00⟩                      │                       Amplitude: 0.000  Probability: 0.000
///   |01⟩                      │                       Amplitude: 0.000  Probability: 0.000
///   |10⟩                      │                       Amplitude: 0.000  Probability: 0.000
/// > |11⟩                      │████████████████████   Amplitude: 1.000  Probability: 1.000
/// ```
pub struct ConsoleRenderer<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Wraps an output sink, typically `std::io::stdout()`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the renderer and returns the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_frame(&mut self, frame: &FrameView) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "Iteration {}  [{}]  target {}  probability {}",
            frame.iteration, frame.status, frame.target_label, frame.target_probability_text
        )?;

        for bar in &frame.bars {
            let (neg_cells, pos_cells) = match bar.fill {
                BarFill::Positive(scale) => (0, scaled_cells(scale)),
                BarFill::Negative(scale) => (scaled_cells(scale), 0),
                BarFill::Empty => (0, 0),
            };
            let marker = if bar.is_target { '>' } else { ' ' };
            writeln!(
                self.writer,
                "{} {}  {}{}│{}{}  Amplitude: {}  Probability: {}",
                marker,
                bar.label,
                " ".repeat(BAR_CELLS - neg_cells),
                FILL.to_string().repeat(neg_cells),
                FILL.to_string().repeat(pos_cells),
                " ".repeat(BAR_CELLS - pos_cells),
                bar.amplitude_text,
                bar.probability_text,
            )?;
        }

        writeln!(self.writer, "{}", frame.description)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, frame: &FrameView) -> Result<(), GrovizError> {
        self.write_frame(frame).map_err(|e| GrovizError::Render {
            message: format!("console sink failed: {}", e),
        })
    }
}

// Never returns 0 for a non-empty fill: MIN_VISIBLE_SCALE rounds up to one cell.
fn scaled_cells(scale: f64) -> usize {
    ((scale * BAR_CELLS as f64).ceil() as usize).min(BAR_CELLS)
}

/// Discards every frame. Useful when the simulation is driven headless.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameView) -> Result<(), GrovizError> {
        Ok(())
    }
}

/// Retains every frame it is handed, in order. This is the display-free test
/// seam: assertions can inspect exactly what a real display would have shown.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    frames: Vec<FrameView>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames rendered so far, oldest first.
    pub fn frames(&self) -> &[FrameView] {
        &self.frames
    }

    /// The most recent frame, if any.
    pub fn last(&self) -> Option<&FrameView> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &FrameView) -> Result<(), GrovizError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
