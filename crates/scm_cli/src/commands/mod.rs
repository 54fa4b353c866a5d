//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use scm_core::stage::{PipelineStep, ProgressCallback};
use std::sync::Arc;

pub mod check;
pub mod generate;
pub mod run;
pub mod transform;

/// Progress callback that logs every update at debug level
pub(crate) fn log_progress() -> ProgressCallback {
    Arc::new(|step: PipelineStep, pct: f64| {
        tracing::debug!(step = step.name(), progress = pct, "Progress");
    })
}
