//! Core domain models for textpipe
//!
//! This module defines the fundamental data structures that represent
//! steps, runs, and their fixed configuration.

pub mod run;
pub mod step;

pub use run::*;
pub use step::*;
