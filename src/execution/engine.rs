//! Pipeline execution engine - runs the fixed step sequence over one input

use crate::core::{
    Run, RunRequestError, Step, StepResult, DEFAULT_WORKFLOW_NAME, MIN_STEP_COUNT, PIPELINE_STEPS,
};
use crate::transform::normalize;
use chrono::{Local, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Events that can occur during a pipeline run
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted {
        run_id: String,
        workflow_name: String,
    },
    StepCompleted {
        step_id: String,
        step_label: String,
        output: String,
    },
    RunCompleted {
        run_id: String,
        duration_ms: u64,
    },
}

/// Type for event handlers
pub type EventHandler = Box<dyn Fn(&ExecutionEvent) + Send + Sync>;

// Clears the in-flight flag when the run leaves scope, including by unwind
// from a panicking event handler.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Executes the fixed step sequence against one input at a time
///
/// Execution is synchronous and total: once a run starts it always finishes,
/// and the resulting [`Run`] is built only after every step has completed.
pub struct PipelineEngine {
    steps: &'static [Step],
    in_flight: AtomicBool,
    event_handlers: Vec<EventHandler>,
}

impl PipelineEngine {
    /// Create an engine over the fixed step table
    pub fn new() -> Self {
        Self::with_steps(PIPELINE_STEPS)
    }

    /// Create an engine over a custom step table
    pub fn with_steps(steps: &'static [Step]) -> Self {
        Self {
            steps,
            in_flight: AtomicBool::new(false),
            event_handlers: Vec::new(),
        }
    }

    /// The steps this engine runs, in order
    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Box::new(handler));
    }

    /// Whether a run request would currently be accepted.
    ///
    /// True when the input is non-blank, the step table meets the minimum
    /// count, and no run is in flight.
    pub fn can_run(&self, input: &str) -> bool {
        !input.trim().is_empty()
            && self.steps.len() >= MIN_STEP_COUNT
            && !self.in_flight.load(Ordering::SeqCst)
    }

    /// Execute the full pipeline against `input`.
    ///
    /// Refuses blank input, an under-sized step table, and a request while
    /// another run is in flight; a refusal records nothing. A blank
    /// `workflow_name` falls back to [`DEFAULT_WORKFLOW_NAME`].
    pub fn execute(&self, input: &str, workflow_name: &str) -> Result<Run, RunRequestError> {
        if self.steps.len() < MIN_STEP_COUNT {
            return Err(RunRequestError::TooFewSteps {
                actual: self.steps.len(),
                required: MIN_STEP_COUNT,
            });
        }

        if input.trim().is_empty() {
            return Err(RunRequestError::EmptyInput);
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(RunRequestError::RunInFlight);
        }
        let _in_flight = InFlightGuard(&self.in_flight);

        let workflow_name = if workflow_name.trim().is_empty() {
            DEFAULT_WORKFLOW_NAME.to_string()
        } else {
            workflow_name.to_string()
        };

        let run_id = format!("run-{}", Utc::now().timestamp_nanos_opt().unwrap_or_default());
        let started_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        info!("Starting run: {} ({})", workflow_name, run_id);
        self.emit_event(&ExecutionEvent::RunStarted {
            run_id: run_id.clone(),
            workflow_name: workflow_name.clone(),
        });

        let started = Instant::now();
        let mut current = normalize(input);
        let mut results = Vec::with_capacity(self.steps.len());

        for step in self.steps {
            let output = normalize(&step.kind.apply(&current));
            debug!("Step {} produced {} bytes", step.id, output.len());

            self.emit_event(&ExecutionEvent::StepCompleted {
                step_id: step.id.to_string(),
                step_label: step.label.to_string(),
                output: output.clone(),
            });

            results.push(StepResult {
                step_id: step.id.to_string(),
                step_label: step.label.to_string(),
                output: output.clone(),
            });
            current = output;
        }

        let duration_ms = (started.elapsed().as_secs_f64() * 1000.0).round() as u64;

        info!("Run finished: {} in {}ms", run_id, duration_ms);
        self.emit_event(&ExecutionEvent::RunCompleted {
            run_id: run_id.clone(),
            duration_ms,
        });

        Ok(Run {
            id: run_id,
            workflow_name,
            input: input.to_string(),
            results,
            started_at,
            duration_ms,
        })
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: &ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(event);
        }
    }
}

impl Default for PipelineEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::STEP_COUNT;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_execute_produces_one_result_per_step() {
        let engine = PipelineEngine::new();
        let run = engine.execute("hello world. this is a test!", "demo").unwrap();

        assert_eq!(run.results.len(), STEP_COUNT);
        let ids: Vec<&str> = run.results.iter().map(|r| r.step_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["clean", "summarize", "extract-key-points", "tag-category"]
        );
    }

    #[test]
    fn test_execute_keeps_raw_input() {
        let engine = PipelineEngine::new();
        let raw = "  hello   world.  ";
        let run = engine.execute(raw, "demo").unwrap();
        assert_eq!(run.input, raw);
    }

    #[test]
    fn test_refuses_blank_input() {
        let engine = PipelineEngine::new();
        assert_eq!(engine.execute("", "demo"), Err(RunRequestError::EmptyInput));
        assert_eq!(
            engine.execute("   \n ", "demo"),
            Err(RunRequestError::EmptyInput)
        );
    }

    #[test]
    fn test_refuses_under_sized_step_table() {
        static SHORT: &[Step] = &[];
        let engine = PipelineEngine::with_steps(SHORT);
        assert_eq!(
            engine.execute("hello", "demo"),
            Err(RunRequestError::TooFewSteps {
                actual: 0,
                required: MIN_STEP_COUNT,
            })
        );
        assert!(!engine.can_run("hello"));
    }

    #[test]
    fn test_blank_workflow_name_defaults() {
        let engine = PipelineEngine::new();
        let run = engine.execute("hello", "  ").unwrap();
        assert_eq!(run.workflow_name, DEFAULT_WORKFLOW_NAME);
    }

    #[test]
    fn test_can_run_predicate() {
        let engine = PipelineEngine::new();
        assert!(engine.can_run("hello"));
        assert!(!engine.can_run(""));
        assert!(!engine.can_run("   "));
    }

    #[test]
    fn test_events_fire_in_order() {
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut engine = PipelineEngine::new();
        engine.add_event_handler(move |event| {
            let tag = match event {
                ExecutionEvent::RunStarted { .. } => "started".to_string(),
                ExecutionEvent::StepCompleted { step_id, .. } => step_id.clone(),
                ExecutionEvent::RunCompleted { .. } => "completed".to_string(),
            };
            sink.lock().unwrap().push(tag);
        });

        engine.execute("hello world.", "demo").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                "started",
                "clean",
                "summarize",
                "extract-key-points",
                "tag-category",
                "completed",
            ]
        );
    }

    #[test]
    fn test_refuses_run_while_one_is_in_flight() {
        use crate::history::HistoryStore;
        use std::sync::Barrier;

        let entered = Arc::new(Barrier::new(2));
        let released = Arc::new(Barrier::new(2));

        let mut engine = PipelineEngine::new();
        {
            let entered = Arc::clone(&entered);
            let released = Arc::clone(&released);
            engine.add_event_handler(move |event| {
                if matches!(event, ExecutionEvent::RunStarted { .. }) {
                    entered.wait();
                    released.wait();
                }
            });
        }

        let mut history = HistoryStore::new();
        std::thread::scope(|s| {
            let first = s.spawn(|| engine.execute("first input.", "first"));

            // The handler holds the first run mid-flight until released.
            entered.wait();
            assert!(!engine.can_run("second input."));
            assert_eq!(
                engine.execute("second input.", "second"),
                Err(RunRequestError::RunInFlight)
            );
            released.wait();

            let run = first.join().unwrap().unwrap();
            history.record(run);
        });

        // Only the accepted run was recorded; the refusal left no trace.
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().workflow_name, "first");
        assert!(engine.can_run("third input."));
    }

    #[test]
    fn test_recovers_after_handler_panic() {
        let mut engine = PipelineEngine::new();
        engine.add_event_handler(|event| {
            if matches!(event, ExecutionEvent::StepCompleted { .. }) {
                panic!("handler failure");
            }
        });

        let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            engine.execute("hello world.", "demo")
        }));
        assert!(unwound.is_err());

        // The in-flight flag was cleared on unwind; new requests are accepted.
        assert!(engine.can_run("hello world."));
    }

    #[test]
    fn test_run_ids_are_unique_across_runs() {
        let engine = PipelineEngine::new();
        let a = engine.execute("first input.", "demo").unwrap();
        let b = engine.execute("second input.", "demo").unwrap();
        assert_ne!(a.id, b.id);
    }
}
