//! Metric definitions and recorder setup for projector.
//!
//! Call sites record through the `metrics` crate facade, so nothing is
//! collected until [`init_metrics`] installs a recorder.
//!
//! ```rust,ignore
//! use projector_metrics::{counter, catalog};
//!
//! counter!(catalog::LOADS_TOTAL).increment(1);
//! ```

mod definitions;
pub mod recorder;

pub use {
    definitions::*,
    recorder::{MetricsHandle, MetricsRecorderConfig, init_metrics},
};

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge};
