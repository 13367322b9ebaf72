//! Tuning constants for the search configuration and the animation.

/// Constants shared by the configuration, scheduler and renderer.
pub mod groviz_constants {
    use std::time::Duration;

    /// Qubit count used when none is specified.
    pub const DEFAULT_QUBITS: u32 = 5;
    /// Smallest supported qubit count (4 basis states).
    pub const MIN_QUBITS: u32 = 2;
    /// Largest supported qubit count (64 basis states).
    pub const MAX_QUBITS: u32 = 6;

    /// Pacing delay between automatic steps when none is configured.
    pub const DEFAULT_ANIMATION_DELAY: Duration = Duration::from_millis(1200);

    /// Floor for the rendered bar scale so near-zero amplitudes stay visible.
    pub const MIN_VISIBLE_SCALE: f64 = 0.04;
}
