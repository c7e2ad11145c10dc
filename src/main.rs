mod app;
mod board;
mod error;
mod input;
mod render;
mod rules;

use anyhow::Result;
use clap::Parser;

/// Conway's Game of Life in the terminal.
#[derive(Parser)]
pub(crate) struct Args {
    /// milliseconds between generations
    #[arg(long, default_value_t = 500)]
    pub(crate) ms: u64,

    /// delay adjustment applied by '<' and '>'
    #[arg(long, default_value_t = 50)]
    pub(crate) step: u64,

    /// RNG seed; defaults to the wall clock
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    app::run(&args)
}
