pub mod commands;

pub use commands::{Cli, run, run_from};
