// app.rs
// Headless benchmark run: initialize, time the step loop, report.

use std::path::PathBuf;
use std::time::Instant;

use crate::config::{self, SimParams};
use crate::diagnostics::RunDiagnostics;
use crate::io::{self, SnapshotWriter};
use crate::simulation::Simulation;

pub struct RunOptions {
    pub n: usize,
    pub output: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub stats_csv: Option<PathBuf>,
    /// Turns off statistics folding and snapshot output together.
    pub no_stats: bool,
    pub params: SimParams,
}

pub fn run(opts: RunOptions) -> std::io::Result<()> {
    let mut sim = Simulation::new(opts.n, opts.params.clone());
    let mut snapshots = match &opts.output {
        Some(path) => Some(SnapshotWriter::create(path)?),
        None => None,
    };
    let mut diagnostics = RunDiagnostics::new();

    let nsteps = sim.params.nsteps;
    let savefreq = sim.params.savefreq;

    let start = Instant::now();
    for step in 0..nsteps {
        let stats = sim.step();

        if !opts.no_stats {
            diagnostics.record_step(step, &stats);
            if let Some(writer) = snapshots.as_mut() {
                if step % savefreq == 0 {
                    writer.write_frame(sim.size, &sim.bodies)?;
                }
            }
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    print!("n = {}, simulation time = {} seconds", opts.n, elapsed);
    if !opts.no_stats {
        let summary = diagnostics.finalize();
        print!(", absmin = {:.6}, absavg = {:.6}", summary.absmin, summary.absavg);
        if summary.absmin < config::MIN_DISTANCE_WARN {
            print!("\nThe minimum distance is below 0.4 meaning that some particle is not interacting");
        }
        if summary.absavg < config::AVG_DISTANCE_WARN {
            print!("\nThe average distance is below 0.8 meaning that most particles are not interacting");
        }
    }
    println!();

    if let Some(path) = &opts.summary {
        io::append_summary(path, opts.n, elapsed)?;
    }
    if !opts.no_stats {
        if let Some(path) = &opts.stats_csv {
            diagnostics.export_csv(path)?;
        }
    }

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().print_and_clear();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_run_writes_frames_and_summary() {
        let dir = std::env::temp_dir();
        let output = dir.join("particle_bench_run_frames.txt");
        let summary = dir.join("particle_bench_run_summary.txt");
        let _ = std::fs::remove_file(&output);
        let _ = std::fs::remove_file(&summary);

        let params = SimParams {
            nsteps: 3,
            savefreq: 2,
            ..SimParams::default()
        };
        let opts = RunOptions {
            n: 16,
            output: Some(output.clone()),
            summary: Some(summary.clone()),
            stats_csv: None,
            no_stats: false,
            params,
        };
        run(opts).unwrap();

        // Header line plus two saved frames (steps 0 and 2) of 16 bodies.
        let frames = std::fs::read_to_string(&output).unwrap();
        assert_eq!(frames.lines().count(), 1 + 2 * 16);

        let summary_line = std::fs::read_to_string(&summary).unwrap();
        assert!(summary_line.starts_with("16 "));
        assert!(summary_line.ends_with('\n'));

        let _ = std::fs::remove_file(&output);
        let _ = std::fs::remove_file(&summary);
    }

    #[test]
    fn no_stats_run_skips_particle_output() {
        let dir = std::env::temp_dir();
        let output = dir.join("particle_bench_nostats_frames.txt");
        let _ = std::fs::remove_file(&output);

        let params = SimParams {
            nsteps: 2,
            ..SimParams::default()
        };
        let opts = RunOptions {
            n: 8,
            output: Some(output.clone()),
            summary: None,
            stats_csv: None,
            no_stats: true,
            params,
        };
        run(opts).unwrap();

        // The output file is created but no frame is ever written.
        let frames = std::fs::read_to_string(&output).unwrap();
        assert!(frames.is_empty());

        let _ = std::fs::remove_file(&output);
    }
}
