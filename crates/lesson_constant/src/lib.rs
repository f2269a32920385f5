//! Shared constants for lesson-eval.

pub mod app;
pub mod defaults;
