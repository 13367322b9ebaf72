// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod config;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `groviz::core::TypeName`
pub use config::SearchConfig;
pub use error::GrovizError;
pub use state::{AmplitudeVector, BasisState};

pub mod constants;
pub use constants::groviz_constants::{
    DEFAULT_ANIMATION_DELAY, DEFAULT_QUBITS, MAX_QUBITS, MIN_QUBITS, MIN_VISIBLE_SCALE,
};
