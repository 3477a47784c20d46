// diagnostics.rs
// Distance statistics used as physical-plausibility checks: a healthy run
// keeps particles interacting at a sizable fraction of the cutoff.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Per-step accumulators threaded through force evaluation.
pub struct StepStats {
    /// Interacting pair count this step.
    pub navg: u32,
    /// Sum of cutoff-scaled pair distances this step.
    pub davg: f32,
    /// Smallest cutoff-scaled pair distance this step.
    pub dmin: f32,
}

impl StepStats {
    pub fn new() -> Self {
        Self {
            navg: 0,
            davg: 0.0,
            dmin: 1.0,
        }
    }

    /// Record one interacting pair's distance, already scaled by the cutoff.
    pub fn observe(&mut self, scaled_r: f32) {
        if scaled_r < self.dmin {
            self.dmin = scaled_r;
        }
        self.davg += scaled_r;
        self.navg += 1;
    }
}

impl Default for StepStats {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the optional per-step export.
#[derive(Clone, Debug)]
pub struct StepRecord {
    pub step: usize,
    pub navg: u32,
    pub davg: f32,
    pub dmin: f32,
}

/// Final distance diagnostics for a whole run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceSummary {
    pub absmin: f32,
    pub absavg: f32,
}

/// Run-level aggregation of the per-step statistics.
pub struct RunDiagnostics {
    absmin: f32,
    avg_sum: f32,
    interacting_steps: u32,
    pub records: Vec<StepRecord>,
}

impl RunDiagnostics {
    pub fn new() -> Self {
        Self {
            absmin: 1.0,
            avg_sum: 0.0,
            interacting_steps: 0,
            records: Vec::new(),
        }
    }

    /// Fold one step's accumulators into the run aggregates. Steps without
    /// any interaction contribute nothing to the average.
    pub fn record_step(&mut self, step: usize, stats: &StepStats) {
        if stats.navg > 0 {
            self.avg_sum += stats.davg / stats.navg as f32;
            self.interacting_steps += 1;
        }
        if stats.dmin < self.absmin {
            self.absmin = stats.dmin;
        }
        self.records.push(StepRecord {
            step,
            navg: stats.navg,
            davg: stats.davg,
            dmin: stats.dmin,
        });
    }

    pub fn finalize(&self) -> DistanceSummary {
        let absavg = if self.interacting_steps > 0 {
            self.avg_sum / self.interacting_steps as f32
        } else {
            0.0
        };
        DistanceSummary {
            absmin: self.absmin,
            absavg,
        }
    }

    /// Write the recorded per-step data to a CSV file.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "step,navg,davg,dmin")?;
        for r in &self.records {
            writeln!(writer, "{},{},{},{}", r.step, r.navg, r.davg, r.dmin)?;
        }
        Ok(())
    }
}

impl Default for RunDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_tracks_min_sum_count() {
        let mut stats = StepStats::new();
        stats.observe(0.75);
        stats.observe(0.5);
        stats.observe(0.75);
        assert_eq!(stats.navg, 3);
        assert_eq!(stats.dmin, 0.5);
        assert_eq!(stats.davg, 2.0);
    }

    #[test]
    fn finalize_averages_only_interacting_steps() {
        let mut diag = RunDiagnostics::new();
        let scripted = [(2u32, 1.0f32, 0.5f32), (0, 0.0, 1.0), (4, 2.0, 0.3)];
        for (step, &(navg, davg, dmin)) in scripted.iter().enumerate() {
            diag.record_step(step, &StepStats { navg, davg, dmin });
        }
        let summary = diag.finalize();
        assert_eq!(summary.absavg, 0.5);
        assert_eq!(summary.absmin, 0.3);
    }

    #[test]
    fn finalize_reports_zero_when_nothing_interacted() {
        let mut diag = RunDiagnostics::new();
        diag.record_step(0, &StepStats::new());
        let summary = diag.finalize();
        assert_eq!(summary.absavg, 0.0);
        assert_eq!(summary.absmin, 1.0);
    }

    #[test]
    fn export_writes_one_row_per_step() {
        let path = std::env::temp_dir().join("particle_bench_diag_export.csv");
        let mut diag = RunDiagnostics::new();
        let mut stats = StepStats::new();
        stats.observe(0.5);
        diag.record_step(0, &stats);
        diag.record_step(1, &StepStats::new());
        diag.export_csv(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "step,navg,davg,dmin");
        assert_eq!(lines[1], "0,1,0.5,0.5");
        let _ = std::fs::remove_file(&path);
    }
}
