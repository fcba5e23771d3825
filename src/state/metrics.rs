// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running quality metrics and plateau detection.
//!
//! - coverage `A = placed area / region area`
//! - diversity `D = 1 − Σ countᵢ² / total²`
//! - score `B = A · D`
//!
//! The best score and the number of circles at which it was reached are kept;
//! the result is truncated to that count.

/// Quality of the packing at some number of placed circles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapshot {
    pub coverage: f64,
    pub diversity: f64,
    pub score: f64,
    /// Number of placed circles this snapshot describes.
    pub circles: usize,
}

/// Best score seen at a plateau checkpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Number of placed circles at the checkpoint.
    pub circles: usize,
    /// Best snapshot so far.
    pub best: Snapshot,
    /// Score at the checkpoint itself.
    pub current_score: f64,
}

#[derive(Debug)]
pub struct MetricTracker {
    region_area: f64,
    placed_area: f64,
    checkpoint_interval: usize,
    plateau_checkpoints: usize,
    best: Snapshot,
    last_checkpoint_score: f64,
    unchanged_checkpoints: usize,
    checkpoints: Vec<Checkpoint>,
}

/// Result of recording a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    /// The best score did not improve for the configured number of checkpoints.
    Plateau,
}

impl MetricTracker {
    pub fn new(region_area: f64, checkpoint_interval: usize, plateau_checkpoints: usize) -> Self {
        Self {
            region_area,
            placed_area: 0.0,
            checkpoint_interval,
            plateau_checkpoints,
            best: Snapshot::default(),
            last_checkpoint_score: 0.0,
            unchanged_checkpoints: 0,
            checkpoints: Vec::new(),
        }
    }

    /// Record the placement of a circle of `area`.
    ///
    /// `counts` is the number of placed circles per type (including this one),
    /// `placed` the total number of placed circles.
    pub fn record(&mut self, area: f64, counts: impl Iterator<Item = u64>, placed: usize) -> Progress {
        self.placed_area += area;
        let sum_squares: f64 = counts.map(|c| (c as f64) * (c as f64)).sum();
        let total = placed as f64;
        let coverage = self.placed_area / self.region_area;
        let diversity = 1.0 - sum_squares / (total * total);
        let score = coverage * diversity;

        if score > self.best.score {
            self.best = Snapshot {
                coverage,
                diversity,
                score,
                circles: placed,
            };
        }

        if placed % self.checkpoint_interval != 0 {
            return Progress::Continue;
        }

        if self.last_checkpoint_score == self.best.score {
            self.unchanged_checkpoints += 1;
        } else {
            self.unchanged_checkpoints = 0;
        }
        self.last_checkpoint_score = self.best.score;
        self.checkpoints.push(Checkpoint {
            circles: placed,
            best: self.best,
            current_score: score,
        });
        log::info!(
            "Max: {} = {} * {} at {} circles; Current: {} circles B={}",
            self.best.score,
            self.best.coverage,
            self.best.diversity,
            self.best.circles,
            placed,
            score
        );

        if self.unchanged_checkpoints >= self.plateau_checkpoints {
            Progress::Plateau
        } else {
            Progress::Continue
        }
    }

    pub fn best(&self) -> Snapshot {
        self.best
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_type_has_zero_diversity() {
        let mut tracker = MetricTracker::new(100.0, 1000, 2);
        tracker.record(10.0, [1u64].into_iter(), 1);
        tracker.record(10.0, [2u64].into_iter(), 2);
        assert_eq!(tracker.best().score, 0.0);
        assert_eq!(tracker.best().circles, 0);
    }

    #[test]
    fn test_best_tracks_maximum() {
        let mut tracker = MetricTracker::new(100.0, 1000, 2);
        tracker.record(10.0, [1u64, 0].into_iter(), 1);
        tracker.record(10.0, [1u64, 1].into_iter(), 2);
        let best = tracker.best();
        assert_eq!(best.circles, 2);
        assert!((best.coverage - 0.2).abs() < 1e-12);
        assert!((best.diversity - 0.5).abs() < 1e-12);
        assert!((best.score - 0.1).abs() < 1e-12);

        // Unbalancing the counts lowers diversity more than coverage gains.
        tracker.record(1.0, [2u64, 1].into_iter(), 3);
        assert_eq!(tracker.best().circles, 2);
    }

    #[test]
    fn test_plateau_after_unchanged_checkpoints() {
        let mut tracker = MetricTracker::new(100.0, 2, 2);
        // Single type: best stays at zero, so every checkpoint is unchanged.
        assert_eq!(tracker.record(1.0, [1u64].into_iter(), 1), Progress::Continue);
        assert_eq!(tracker.record(1.0, [2u64].into_iter(), 2), Progress::Continue);
        assert_eq!(tracker.record(1.0, [3u64].into_iter(), 3), Progress::Continue);
        assert_eq!(tracker.record(1.0, [4u64].into_iter(), 4), Progress::Plateau);
        assert_eq!(tracker.checkpoints().len(), 2);
    }

    #[test]
    fn test_improvement_resets_plateau() {
        let mut tracker = MetricTracker::new(1000.0, 1, 2);
        assert_eq!(tracker.record(1.0, [1u64, 0].into_iter(), 1), Progress::Continue);
        assert_eq!(tracker.record(1.0, [1u64, 1].into_iter(), 2), Progress::Continue);
        assert_eq!(tracker.record(1.0, [1u64, 2].into_iter(), 3), Progress::Continue);
        assert_eq!(tracker.record(1.0, [2u64, 2].into_iter(), 4), Progress::Continue);
    }
}
