// src/lib.rs

//! `groviz` - An animated visualization of Grover's quantum search
//!
//! This library simulates the oracle-and-diffusion Grover iterate on a
//! classical array of real-valued amplitudes and projects the evolving
//! state through an injected renderer: signed bars, numeric text and
//! status labels. It exists purely to teach.

pub mod core;
pub mod engine;
pub mod render;
pub mod scheduler;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{AmplitudeVector, BasisState, GrovizError, SearchConfig};
pub use crate::engine::{StepEngine, StepOutcome, StepReport};
pub use crate::render::{
    BarFill, BarView, ConsoleRenderer, FrameView, NullRenderer, RecordingRenderer, Renderer,
    StatusLabel,
};
pub use crate::scheduler::{ControlEvent, Phase, Scheduler, StepTimer};
pub use crate::validation::{check_normalization, check_reflection_identity, total_probability};

// Example 1: The canonical 4-state search, stepped by hand.
// One iterate takes the uniform vector [0.5, 0.5, 0.5, 0.5] through the
// oracle to [0.5, 0.5, 0.5, -0.5] (mean 0.25) and through the diffusion
// to [0, 0, 0, 1]: the target is certain after a single step.
/// ```
/// use groviz::{StepEngine, StepOutcome, GrovizError};
///
/// let mut engine = StepEngine::new_for_qubits(2);
/// assert_eq!(engine.config().num_states, 4);
/// assert!((engine.target_probability() - 0.25).abs() < 1e-12);
///
/// match engine.execute_step()? {
///     StepOutcome::Applied(report) => {
///         assert!((report.mean - 0.25).abs() < 1e-12);
///         assert!((report.amplitude_after - 1.0).abs() < 1e-12);
///         println!("{}", report);
///     }
///     StepOutcome::Complete => unreachable!("the budget allows more steps"),
/// }
///
/// assert!((engine.target_probability() - 1.0).abs() < 1e-12);
/// # Ok::<(), GrovizError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: A full automatic run under manufactured time.
// The scheduler is pumped with explicit instants, so the whole animation
// can run (and be asserted on) without sleeping or a display.
/// ```
/// use groviz::{GrovizError, Phase, RecordingRenderer, Scheduler, SearchConfig};
/// use std::time::{Duration, Instant};
///
/// let config = SearchConfig::new(3);
/// let max = config.max_iterations;
/// let mut scheduler = Scheduler::new(config, RecordingRenderer::new());
///
/// let mut now = Instant::now();
/// scheduler.start(now)?;
/// while scheduler.phase() == Phase::Running {
///     now += scheduler.delay();
///     scheduler.tick(now)?;
/// }
///
/// assert_eq!(scheduler.phase(), Phase::Complete);
/// assert_eq!(scheduler.engine().iteration(), max);
///
/// let frames = scheduler.into_renderer();
/// assert_eq!(frames.frames().len(), max as usize);
/// # Ok::<(), GrovizError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
