//! textpipe - a fixed-stage text transformation pipeline

pub mod cli;
pub mod core;
pub mod execution;
pub mod history;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{
    Run, RunRequestError, Step, StepKind, StepResult, DEFAULT_WORKFLOW_NAME, MAX_KEY_POINTS,
    MIN_STEP_COUNT, PIPELINE_STEPS, STEP_COUNT, SUMMARY_SENTENCES,
};
pub use execution::{ExecutionEvent, PipelineEngine};
pub use history::{HistoryStore, HISTORY_CAPACITY};
