// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration and file I/O.
//!
//! Geometric infeasibility is not an error: it is encoded in the candidate
//! cache and handled by the search.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors reported to the caller of the packer.
#[derive(Debug)]
pub enum PackError {
    /// Weighting is not a finite number in `[0, 2]`.
    WeightingOutOfRange { weighting: f64 },

    /// A tuning parameter has an unusable value.
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },

    /// The input file does not follow the expected layout.
    MalformedInput { line: usize, reason: String },

    /// The input file lists no circle types.
    EmptyCatalog,

    /// A configuration file is not valid TOML for [`SolverConfig`](crate::config::SolverConfig).
    ConfigParse { path: PathBuf, message: String },
}

impl PackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PackError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        PackError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::WeightingOutOfRange { weighting } => {
                write!(f, "Weighting must be between 0 and 2, got {}", weighting)
            }
            PackError::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
            PackError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            PackError::MalformedInput { line, reason } => {
                write!(f, "Malformed input at line {}: {}", line, reason)
            }
            PackError::EmptyCatalog => {
                write!(f, "Input lists no circle types")
            }
            PackError::ConfigParse { path, message } => {
                write!(f, "Cannot parse configuration {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
