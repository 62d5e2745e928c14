//! CLI entry point for the jigsaw tile solver

use clap::Parser;
use tilestitch::io::cli::{Cli, Solver};

// Allow print for the puzzle answers
#[allow(clippy::print_stdout)]
fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let solution = Solver::new(cli).run()?;
    println!("product   = {}", solution.corner_product);
    println!("roughness = {}", solution.roughness);
    Ok(())
}
