//! Error types for parsing, assembly and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Puzzle text could not be parsed
    InvalidInput {
        /// 1-based line number where parsing failed
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Parsed tiles cannot form a square jigsaw
    InvalidTileSet {
        /// Description of the inconsistency
        reason: String,
    },

    /// Pattern art could not be turned into a search mask
    InvalidPattern {
        /// Description of what's wrong with the pattern
        reason: String,
    },

    /// Corner ids multiply past the range of `u64`
    ProductOverflow {
        /// Corner ids: top-left, top-right, bottom-left, bottom-right
        ids: [u64; 4],
    },

    /// Backtracking exhausted every anchor without a full assembly
    NoTiling {
        /// Number of tiles that were being assembled
        tile_count: usize,
    },

    /// Failed to save the composite image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { line, reason } => {
                write!(f, "Invalid input on line {line}: {reason}")
            }
            Self::InvalidTileSet { reason } => {
                write!(f, "Invalid tile set: {reason}")
            }
            Self::InvalidPattern { reason } => {
                write!(f, "Invalid pattern: {reason}")
            }
            Self::ProductOverflow { ids } => {
                write!(f, "Product of corner ids {ids:?} does not fit in 64 bits")
            }
            Self::NoTiling { tile_count } => {
                write!(
                    f,
                    "No arrangement of the {tile_count} tiles has matching borders everywhere"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error for a 1-based line number
pub fn invalid_input(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidInput {
        line,
        reason: reason.to_string(),
    }
}

/// Create an invalid tile set error
pub fn invalid_tile_set(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidTileSet {
        reason: reason.to_string(),
    }
}
