//! CLI output formatting

use crate::core::Run;
use crate::execution::ExecutionEvent;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format an execution event for display
pub fn format_execution_event(event: &ExecutionEvent) -> String {
    match event {
        ExecutionEvent::RunStarted {
            run_id,
            workflow_name,
        } => format!(
            "{} Starting {} ({})",
            ROCKET,
            style(workflow_name).bold(),
            style(short_id(run_id)).dim()
        ),
        ExecutionEvent::StepCompleted {
            step_label, output, ..
        } => format!(
            "{} {}\n{}",
            CHECK,
            style(step_label).green(),
            indent(output)
        ),
        ExecutionEvent::RunCompleted {
            run_id,
            duration_ms,
        } => format!(
            "{} Run ({}) completed in {}ms",
            INFO,
            style(short_id(run_id)).dim(),
            style(duration_ms).cyan()
        ),
    }
}

/// Format a completed run with each step's output
pub fn format_run(run: &Run) -> String {
    let mut out = format!(
        "{} {} ({}) - {} - {}ms\n",
        CHECK,
        style(&run.workflow_name).bold(),
        style(short_id(&run.id)).dim(),
        style(&run.started_at).dim(),
        run.duration_ms
    );

    for result in &run.results {
        out.push_str(&format!(
            "\n  {}\n{}\n",
            style(&result.step_label).cyan().bold(),
            indent(&result.output)
        ));
    }

    out
}

/// One-line history entry for a run
pub fn format_history_entry(run: &Run) -> String {
    let category = run
        .final_output()
        .unwrap_or("General");

    format!(
        "{} {} - {} - {} - {}ms",
        style(short_id(&run.id)).dim(),
        style(&run.workflow_name).bold(),
        style(category).cyan(),
        style(&run.started_at).dim(),
        run.duration_ms
    )
}

fn short_id(id: &str) -> &str {
    // ids look like "run-<nanos>"; keep them readable in one line
    if id.len() > 12 {
        &id[..12]
    } else {
        id
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("    {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
