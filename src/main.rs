use anyhow::{Context, Result};
use std::io::Read;
use textpipe::cli::commands::{BatchCommand, RunCommand, StepsCommand};
use textpipe::cli::output::*;
use textpipe::cli::{Cli, Command};
use textpipe::{HistoryStore, PipelineEngine, PIPELINE_STEPS};
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Run(cmd) => run_pipeline(cmd, cli.stream)?,
        Command::Batch(cmd) => run_batch(cmd, cli.stream)?,
        Command::Steps(cmd) => list_steps(cmd)?,
    }

    Ok(())
}

fn run_pipeline(cmd: &RunCommand, stream: bool) -> Result<()> {
    let input = resolve_input(cmd)?;
    let name = cmd.name.clone().unwrap_or_default();

    let mut engine = PipelineEngine::new();
    if stream {
        engine.add_event_handler(|event| {
            println!("{}", format_execution_event(event));
        });
    }

    let run = match engine.execute(&input, &name) {
        Ok(run) => run,
        Err(e) => {
            println!("{} Run refused: {}", CROSS, style(e).red());
            std::process::exit(1);
        }
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else if !stream {
        println!("{}", format_run(&run));
    }

    Ok(())
}

fn run_batch(cmd: &BatchCommand, stream: bool) -> Result<()> {
    let content = std::fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;

    let inputs: Vec<&str> = content
        .split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if inputs.is_empty() {
        println!("{} No inputs found in {}", INFO, cmd.file.display());
        return Ok(());
    }

    let base_name = cmd.name.clone().unwrap_or_else(|| "Batch".to_string());

    let mut engine = PipelineEngine::new();
    if stream {
        engine.add_event_handler(|event| {
            println!("{}", format_execution_event(event));
        });
    }

    let mut history = HistoryStore::new();
    for (i, input) in inputs.iter().enumerate() {
        let name = format!("{} #{}", base_name, i + 1);
        match engine.execute(input, &name) {
            Ok(run) => {
                history.record(run);
            }
            Err(e) => warn!("Skipping input {}: {}", i + 1, e),
        }
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&history.runs())?);
        return Ok(());
    }

    println!(
        "\n{} Ran {} inputs; history retains {} (capacity {}):",
        INFO,
        inputs.len(),
        history.len(),
        textpipe::HISTORY_CAPACITY
    );
    for run in history.runs() {
        println!("  {}", format_history_entry(run));
    }

    Ok(())
}

fn list_steps(cmd: &StepsCommand) -> Result<()> {
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&PIPELINE_STEPS)?);
        return Ok(());
    }

    println!("{} Pipeline steps:", INFO);
    for (i, step) in PIPELINE_STEPS.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            i + 1,
            style(step.label).bold(),
            style(step.id).dim()
        );
    }

    Ok(())
}

/// Resolve the run input: positional text, then --file, then stdin.
fn resolve_input(cmd: &RunCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }

    if let Some(path) = &cmd.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}
