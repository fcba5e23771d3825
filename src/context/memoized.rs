// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable problem data (Tier 1: MEMO).

use crate::catalog::RadiusCatalog;
use crate::config::SolverConfig;
use crate::error::PackError;
use crate::geometry::Region;
use crate::io::Problem;

/// Immutable problem data (Tier 1: MEMO).
///
/// Computed once from the input and the configuration, never changed during
/// the run. Everything here is validated: a `MemoizedData` always describes
/// a solvable setup.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// The rectangle to pack.
    pub region: Region,

    /// Distinct radii, largest first.
    pub catalog: RadiusCatalog,

    /// Radii in input order, one per circle type.
    pub radii: Vec<f64>,

    pub config: SolverConfig,
}

impl MemoizedData {
    /// Validate `config` and `problem` and derive the catalog.
    pub fn new(problem: &Problem, config: SolverConfig) -> Result<Self, PackError> {
        config.validate()?;
        if problem.radii.is_empty() {
            return Err(PackError::EmptyCatalog);
        }
        let catalog = RadiusCatalog::new(problem.radii.iter().copied());
        log::info!(
            "{} circle types, {} distinct radii, bounds {}x{}",
            problem.radii.len(),
            catalog.len(),
            problem.width,
            problem.height
        );
        Ok(Self {
            region: Region::new(problem.width, problem.height),
            catalog,
            radii: problem.radii.clone(),
            config,
        })
    }
}
