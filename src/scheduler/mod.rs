// src/scheduler/mod.rs

//! The cooperative animation loop: a finite-state machine over
//! Idle/Running/Paused/Complete that paces the [`StepEngine`] with a
//! cancellable one-shot timer and projects every observable change through
//! the injected [`Renderer`].
//!
//! Nothing here runs concurrently. The owner of the scheduler pumps
//! [`Scheduler::tick`] from its event loop with the current time; starting,
//! pausing, resetting and delay changes always cancel or replace the single
//! pending deadline, so at most one step can ever be outstanding.

mod timer;

pub use timer::StepTimer;

use crate::core::{GrovizError, SearchConfig, DEFAULT_ANIMATION_DELAY};
use crate::engine::{StepEngine, StepOutcome};
use crate::render::{
    format_amplitude, format_percent, format_probability, BarFill, BarView, FrameView, Renderer,
    StatusLabel,
};
use std::time::{Duration, Instant};

/// Machine state of the animation.
///
/// `Reset` is not a state: it is the transition that takes any state back to
/// `Idle` with a freshly built model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly initialized or reset; a run may be started.
    Idle,
    /// Automatic stepping is in progress and a deadline is pending.
    Running,
    /// A run was interrupted; start resumes it.
    Paused,
    /// The iteration budget is spent. Only reset (or a qubit-count change)
    /// leaves this state.
    Complete,
}

/// User-triggered events at the control boundary, one per widget of the
/// original page (buttons, delay slider, qubit selector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Begin or resume automatic stepping.
    Start,
    /// Interrupt automatic stepping.
    Pause,
    /// Apply exactly one iterate, independent of the timer.
    Step,
    /// Rebuild the model and return to Idle.
    Reset,
    /// Change the pacing delay for future scheduling.
    DelayChanged(Duration),
    /// Rebuild for a new (clamped) qubit count.
    QubitCountChanged(u32),
}

/// Drives one search animation end to end.
///
/// Owns the engine, the pending-step timer, the pacing delay and the
/// narration text. All time-dependent methods take `now` explicitly, so the
/// whole machine is deterministic under test.
pub struct Scheduler<R: Renderer> {
    engine: StepEngine,
    timer: StepTimer,
    phase: Phase,
    status: StatusLabel,
    delay: Duration,
    description: String,
    renderer: R,
}

impl<R: Renderer> Scheduler<R> {
    /// Creates an idle scheduler for `config` with the default pacing delay.
    ///
    /// No frame is rendered until the first event (or an explicit
    /// [`render_now`](Scheduler::render_now)).
    pub fn new(config: SearchConfig, renderer: R) -> Self {
        let engine = StepEngine::new(config);
        let description = intro_message(engine.config());
        Self {
            engine,
            timer: StepTimer::new(),
            phase: Phase::Idle,
            status: StatusLabel::Idle,
            delay: DEFAULT_ANIMATION_DELAY,
            description,
            renderer,
        }
    }

    /// Creates a scheduler with the default qubit count.
    pub fn with_default_config(renderer: R) -> Self {
        Self::new(SearchConfig::default(), renderer)
    }

    /// Dispatches one control event.
    pub fn handle(&mut self, event: ControlEvent, now: Instant) -> Result<(), GrovizError> {
        match event {
            ControlEvent::Start => self.start(now),
            ControlEvent::Pause => self.pause(),
            ControlEvent::Step => self.step(),
            ControlEvent::Reset => self.reset(),
            ControlEvent::DelayChanged(delay) => self.set_delay(now, delay),
            ControlEvent::QubitCountChanged(qubits) => self.set_qubit_count(qubits),
        }
    }

    /// Starts (from Idle) or resumes (from Paused) automatic stepping:
    /// one step immediately, then a pending deadline per `delay` until the
    /// run completes. No-op from Running or Complete.
    pub fn start(&mut self, now: Instant) -> Result<(), GrovizError> {
        if !matches!(self.phase, Phase::Idle | Phase::Paused) || self.engine.is_complete() {
            return Ok(());
        }
        self.phase = Phase::Running;
        self.status = StatusLabel::Running;
        let applied = self.execute_step(false)?;
        if applied && self.phase == Phase::Running {
            self.timer.arm(now, self.delay);
        }
        self.render_frame()
    }

    /// Interrupts a run, cancelling the pending step. No-op unless Running.
    pub fn pause(&mut self) -> Result<(), GrovizError> {
        if self.phase != Phase::Running {
            return Ok(());
        }
        self.timer.cancel();
        self.phase = Phase::Paused;
        self.status = StatusLabel::Paused;
        self.render_frame()
    }

    /// Applies exactly one iterate, pausing first if a run is in progress.
    /// The step is independent of the timer. No-op once Complete.
    pub fn step(&mut self) -> Result<(), GrovizError> {
        if self.phase == Phase::Complete {
            return Ok(());
        }
        if self.phase == Phase::Running {
            self.timer.cancel();
            self.phase = Phase::Paused;
        }
        self.execute_step(true)?;
        self.render_frame()
    }

    /// Cancels any pending step, rebuilds the model from configuration and
    /// returns to Idle, regardless of prior state.
    pub fn reset(&mut self) -> Result<(), GrovizError> {
        self.timer.cancel();
        self.engine.reset();
        self.phase = Phase::Idle;
        self.status = StatusLabel::Idle;
        self.description = intro_message(self.engine.config());
        self.render_frame()
    }

    /// The cooperative pump. Fires at most one step per armed deadline;
    /// a quiet call (nothing due) costs nothing and changes nothing.
    pub fn tick(&mut self, now: Instant) -> Result<(), GrovizError> {
        if !self.timer.fire_due(now) {
            return Ok(());
        }
        if self.phase != Phase::Running {
            return Ok(());
        }
        let applied = self.execute_step(false)?;
        if applied && self.phase == Phase::Running {
            self.timer.arm(now, self.delay);
        }
        self.render_frame()
    }

    /// Updates the pacing delay. When a step is pending, the wait restarts
    /// in full with the new delay; the single-deadline timer makes a double
    /// fire for one scheduled wait impossible.
    pub fn set_delay(&mut self, now: Instant, delay: Duration) -> Result<(), GrovizError> {
        self.delay = delay;
        if self.phase == Phase::Running && self.timer.is_armed() {
            self.timer.arm(now, delay);
        }
        Ok(())
    }

    /// Stops any run and rebuilds configuration and model for a new qubit
    /// count (clamped to the supported range). No-op when the clamped count
    /// equals the current one.
    pub fn set_qubit_count(&mut self, num_qubits: u32) -> Result<(), GrovizError> {
        let config = SearchConfig::new(num_qubits);
        if config.num_qubits == self.engine.config().num_qubits {
            return Ok(());
        }
        self.timer.cancel();
        self.engine = StepEngine::new(config);
        self.phase = Phase::Idle;
        self.status = StatusLabel::Idle;
        self.description = intro_message(self.engine.config());
        self.render_frame()
    }

    /// Projects and renders the current frame without changing any state.
    pub fn render_now(&mut self) -> Result<(), GrovizError> {
        self.render_frame()
    }

    /// Pure projection of the current state for display.
    pub fn frame(&self) -> FrameView {
        let config = self.engine.config();
        let bars = self
            .engine
            .vector()
            .basis_states()
            .into_iter()
            .map(|state| BarView {
                is_target: state.index == config.target_index,
                fill: BarFill::from_amplitude(state.amplitude),
                amplitude_text: format_amplitude(state.amplitude),
                probability_text: format_probability(state.amplitude * state.amplitude),
                label: state.label,
            })
            .collect();

        FrameView {
            bars,
            iteration: self.engine.iteration(),
            status: self.status,
            description: self.description.clone(),
            target_label: config.target_label(),
            target_probability_text: format_percent(self.engine.target_probability()),
        }
    }

    /// Current machine state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current presentation status label.
    pub fn status(&self) -> StatusLabel {
        self.status
    }

    /// Current pacing delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The engine driving this animation.
    pub fn engine(&self) -> &StepEngine {
        &self.engine
    }

    /// The injected renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the scheduler and returns the renderer, for inspecting
    /// recorded frames after a run.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Runs one engine step and folds the outcome into phase, status and
    /// description. Returns `true` if an iterate was applied and the run may
    /// continue.
    fn execute_step(&mut self, manual: bool) -> Result<bool, GrovizError> {
        match self.engine.execute_step()? {
            StepOutcome::Complete => {
                self.complete();
                Ok(false)
            }
            StepOutcome::Applied(report) => {
                self.description = report.to_string();
                if self.phase == Phase::Running {
                    self.status = StatusLabel::Running;
                } else if manual {
                    self.status = StatusLabel::ManualStep;
                }
                if self.engine.is_complete() {
                    // The landing step still renders and narrates; the
                    // completion notice is appended to its description.
                    self.description.push(' ');
                    self.description
                        .push_str(&completion_message(self.engine.config()));
                    self.complete();
                    return Ok(false);
                }
                Ok(true)
            }
        }
    }

    fn complete(&mut self) {
        self.timer.cancel();
        self.phase = Phase::Complete;
        self.status = StatusLabel::Complete;
    }

    fn render_frame(&mut self) -> Result<(), GrovizError> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }
}

fn intro_message(config: &SearchConfig) -> String {
    format!(
        "Ready to search {} states. The oracle marks {} as the solution. \
         Use Start for continuous iterations or Step to apply the Grover iterate once.",
        config.num_states,
        config.target_label()
    )
}

fn completion_message(config: &SearchConfig) -> String {
    format!(
        "Maximum of {} Grover iterations reached for this configuration. \
         Reset to start again or choose a different qubit count.",
        config.max_iterations
    )
}
