//! Step domain model

use crate::transform;
use serde::Serialize;

/// Number of steps in the fixed pipeline.
pub const STEP_COUNT: usize = 4;

/// Minimum number of steps required for a pipeline to be runnable.
///
/// The step table is fixed, so this always holds; the executor still checks
/// it to guard against misconfiguration.
pub const MIN_STEP_COUNT: usize = 4;

/// Default number of sentences kept by the summarize step.
pub const SUMMARY_SENTENCES: usize = 2;

/// Default number of bullet points produced by key-point extraction.
pub const MAX_KEY_POINTS: usize = 5;

/// The kind of transformation a step performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    /// Collapse whitespace and tidy casing
    Clean,
    /// Keep the first few sentences
    Summarize,
    /// Bullet the leading sentences
    ExtractKeyPoints,
    /// Keyword-based category labels
    TagCategory,
}

impl StepKind {
    /// Apply this step's transformation to the given text.
    ///
    /// Every kind is total over all string inputs; there is no failure mode.
    pub fn apply(&self, input: &str) -> String {
        match self {
            StepKind::Clean => transform::clean(input),
            StepKind::Summarize => transform::summarize(input, SUMMARY_SENTENCES),
            StepKind::ExtractKeyPoints => transform::extract_key_points(input, MAX_KEY_POINTS),
            StepKind::TagCategory => transform::tag_category(input),
        }
    }
}

/// A single step in the pipeline
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    /// Stable step identifier
    pub id: &'static str,

    /// The transformation this step performs
    pub kind: StepKind,

    /// Display name
    pub label: &'static str,
}

/// The fixed step table, in execution order.
///
/// The set of steps never changes at runtime; consumers iterate this slice
/// rather than building their own order.
pub const PIPELINE_STEPS: &[Step] = &[
    Step {
        id: "clean",
        kind: StepKind::Clean,
        label: "Clean Text",
    },
    Step {
        id: "summarize",
        kind: StepKind::Summarize,
        label: "Summarize",
    },
    Step {
        id: "extract-key-points",
        kind: StepKind::ExtractKeyPoints,
        label: "Extract Key Points",
    },
    Step {
        id: "tag-category",
        kind: StepKind::TagCategory,
        label: "Tag Category",
    },
];
