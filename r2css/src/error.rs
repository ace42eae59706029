//! Error types for the command line front end.

use std::path::PathBuf;

/// Result type alias for command line operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop a command line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An input stylesheet could not be read.
    #[error("Error reading CSS file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A converted stylesheet could not be written.
    #[error("Error writing '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two inputs would be written to the same file in the output directory.
    #[error("'{first}' and '{second}' would both be written to '{path}'")]
    DuplicateOutput {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// Several inputs were given but `--output` names a file.
    #[error("'{0}' is a file, but converting several stylesheets needs an output directory")]
    OutputNotDirectory(PathBuf),
}

impl CliError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
