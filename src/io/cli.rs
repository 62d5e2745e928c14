//! Command-line interface for solving a jigsaw puzzle file

use crate::algorithm::assembler::Assembler;
use crate::algorithm::scanner::{Pattern, ScanReport, scan};
use crate::io::configuration::EXAMPLE_INPUT;
use crate::io::error::{PuzzleError, Result};
use crate::io::image::export_scan_as_png;
use crate::io::input::parse_tiles;
use crate::io::progress::SearchProgress;
use crate::spatial::grid::Assembly;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble a jigsaw of image tiles and search it for sea monsters"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Puzzle file of `Tile <id>:` blocks (defaults to the built-in example)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// ASCII-art pattern file to search for instead of the sea monster
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Write the oriented composite image as PNG with matches highlighted
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Answers to both parts of the puzzle, with the data they came from
#[derive(Debug)]
pub struct Solution {
    /// Product of the four corner tile ids
    pub corner_product: u64,
    /// Set pixels not covered by pattern matches
    pub roughness: usize,
    /// The assembly that was found
    pub assembly: Assembly,
    /// The pattern scan over the composite image
    pub report: ScanReport,
}

/// Runs parsing, assembly, scanning and export for one invocation
pub struct Solver {
    cli: Cli,
}

impl Solver {
    /// Create a solver for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the configured puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input or pattern file cannot be read or parsed
    /// - The tiles do not form a valid square tile set
    /// - No assembly exists
    /// - The PNG export fails
    pub fn run(&self) -> Result<Solution> {
        let text = match &self.cli.input {
            Some(path) => read_file(path, "read puzzle input")?,
            None => EXAMPLE_INPUT.to_string(),
        };
        let tiles = parse_tiles(&text)?;
        let pattern = match &self.cli.pattern {
            Some(path) => Pattern::from_art(&read_file(path, "read pattern")?)?,
            None => Pattern::sea_monster(),
        };

        let mut assembler = Assembler::new(&tiles)?;
        let progress = SearchProgress::new(
            assembler.anchor_count(),
            self.cli.should_show_progress(),
        );

        let assembly = assembler
            .solve_with(|anchor, found| {
                if found {
                    progress.found(anchor);
                } else {
                    progress.tried(anchor);
                }
            })
            .inspect_err(|_| progress.finish())?;
        let corner_product = assembly
            .corner_product()
            .inspect_err(|_| progress.finish())?;

        progress.set_stage("scanning");
        let report = scan(&assembly.composite(), &pattern);

        if let Some(path) = &self.cli.export {
            progress.set_stage("exporting");
            export_scan_as_png(&report, path)?;
        }
        progress.finish();

        Ok(Solution {
            corner_product,
            roughness: report.roughness,
            assembly,
            report,
        })
    }
}

fn read_file(path: &Path, operation: &'static str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source: e,
    })
}
