//! Command-line workflow, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::{process, BumpArgs, ProcessOutcome};
