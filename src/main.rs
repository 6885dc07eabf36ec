use std::io::{self, Read};

use anyhow::Context;
use pipeloop::Board;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read the pipe grid from standard input")?;

    let board = input.parse::<Board>().context("failed to build the pipe grid")?;
    let solution = board.solve().context("failed to analyze the pipe loop")?;

    println!("{}", solution.max_distance);
    println!("{}", solution.enclosed);
    Ok(())
}
