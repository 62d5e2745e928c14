/// Command-line interface and solver orchestration
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of the composite image
pub mod image;
/// Puzzle text parsing
pub mod input;
/// Progress display
pub mod progress;
