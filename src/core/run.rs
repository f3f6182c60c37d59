//! Run record models

use serde::Serialize;
use thiserror::Error;

/// Placeholder used when the caller supplies a blank workflow name.
pub const DEFAULT_WORKFLOW_NAME: &str = "Untitled Workflow";

/// The output of a single step within a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// Identifier of the step that produced this output
    pub step_id: String,

    /// Display name of the step
    pub step_label: String,

    /// The step's output after re-normalization
    pub output: String,
}

/// One complete pipeline execution
///
/// Constructed atomically after all steps complete; a partial run is never
/// observable. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    /// Unique identifier derived from creation time
    pub id: String,

    /// Free-form label for the run
    pub workflow_name: String,

    /// The original raw input, before normalization
    pub input: String,

    /// One result per step, in execution order
    pub results: Vec<StepResult>,

    /// Human-readable start timestamp
    pub started_at: String,

    /// Wall-clock duration of the step loop, in milliseconds
    pub duration_ms: u64,
}

impl Run {
    /// Look up a step result by step id
    pub fn result_for(&self, step_id: &str) -> Option<&StepResult> {
        self.results.iter().find(|r| r.step_id == step_id)
    }

    /// The output of the final step, if any
    pub fn final_output(&self) -> Option<&str> {
        self.results.last().map(|r| r.output.as_str())
    }
}

/// Reasons a run request is refused
///
/// A refused request records nothing; there are no step-level errors since
/// every transformation is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunRequestError {
    /// The input was empty or contained only whitespace
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// Another run is currently executing
    #[error("a run is already in flight")]
    RunInFlight,

    /// The engine was built with fewer steps than the pipeline requires
    #[error("pipeline has {actual} steps but requires at least {required}")]
    TooFewSteps { actual: usize, required: usize },
}
