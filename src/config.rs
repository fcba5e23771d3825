// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.
//!
//! The only user-facing knob of the algorithm is `weighting`; the remaining
//! fields are tuning constants with the defaults the packer was tuned with.
//!
//! # Example
//!
//! ```toml
//! weighting = 1.3
//! checkpoint_interval = 1000
//! plateau_checkpoints = 2
//! connection_weight = 0.4
//! perfect_score = 1.0
//! max_circles = 50000
//! ```

use crate::error::PackError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Placements between two plateau checkpoints.
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 1000;

/// Score contributed by each spawned connection that keeps full capacity.
pub const DEFAULT_CONNECTION_WEIGHT: f64 = 0.4;

/// Score at which a candidate is taken without looking any further.
pub const DEFAULT_PERFECT_SCORE: f64 = 1.0;

/// Tunable parameters of the packer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Balance between uniform (0), size-proportional (1) and
    /// size-squared (2) scheduling of circle types.
    pub weighting: f64,

    /// Number of placements between plateau checkpoints.
    pub checkpoint_interval: usize,

    /// Stop after this many consecutive checkpoints without improvement.
    pub plateau_checkpoints: usize,

    /// Per-spawned-connection factor of the candidate score.
    pub connection_weight: f64,

    /// A candidate scoring at least this much ends the candidate search.
    pub perfect_score: f64,

    /// Optional hard limit on the number of placements.
    pub max_circles: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            weighting: 1.0,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            plateau_checkpoints: 2,
            connection_weight: DEFAULT_CONNECTION_WEIGHT,
            perfect_score: DEFAULT_PERFECT_SCORE,
            max_circles: None,
        }
    }
}

impl SolverConfig {
    /// Default configuration with the given weighting.
    pub fn with_weighting(weighting: f64) -> Self {
        Self {
            weighting,
            ..Self::default()
        }
    }

    /// Load a configuration from a TOML file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PackError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| PackError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| PackError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check every field; called before any computation starts.
    pub fn validate(&self) -> Result<(), PackError> {
        if !self.weighting.is_finite() || !(0.0..=2.0).contains(&self.weighting) {
            return Err(PackError::WeightingOutOfRange {
                weighting: self.weighting,
            });
        }
        if self.checkpoint_interval == 0 {
            return Err(PackError::InvalidConfig {
                field: "checkpoint_interval",
                reason: String::from("must be at least 1"),
            });
        }
        if self.plateau_checkpoints == 0 {
            return Err(PackError::InvalidConfig {
                field: "plateau_checkpoints",
                reason: String::from("must be at least 1"),
            });
        }
        if !self.connection_weight.is_finite() || self.connection_weight <= 0.0 {
            return Err(PackError::InvalidConfig {
                field: "connection_weight",
                reason: format!("must be positive, got {}", self.connection_weight),
            });
        }
        if !self.perfect_score.is_finite() || self.perfect_score <= 0.0 {
            return Err(PackError::InvalidConfig {
                field: "perfect_score",
                reason: format!("must be positive, got {}", self.perfect_score),
            });
        }
        Ok(())
    }
}
