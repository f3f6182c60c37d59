//! CLI command definitions

use clap::Args;
use std::path::PathBuf;

/// Run the pipeline over a single input
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Input text to process (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the input from a file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Workflow name recorded on the run
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output the run in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the pipeline over each blank-line-separated input in a file
#[derive(Debug, Args, Clone)]
pub struct BatchCommand {
    /// File containing inputs separated by blank lines
    #[arg(short, long)]
    pub file: PathBuf,

    /// Workflow name prefix (runs are numbered)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output the retained history in JSON format
    #[arg(long)]
    pub json: bool,
}

/// List the fixed pipeline steps
#[derive(Debug, Args, Clone)]
pub struct StepsCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
