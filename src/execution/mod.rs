//! Pipeline execution

pub mod engine;

pub use engine::{EventHandler, ExecutionEvent, PipelineEngine};
