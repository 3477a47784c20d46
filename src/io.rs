// io.rs
// Frame snapshots and the benchmark summary line.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::body::Body;

/// Plain-text frame writer: a one-time `"<n> <size>"` header, then one
/// `"<x> <y>"` line per body for every saved frame.
pub struct SnapshotWriter {
    writer: BufWriter<File>,
    header_written: bool,
}

impl SnapshotWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            header_written: false,
        })
    }

    pub fn write_frame(&mut self, size: f32, bodies: &[Body]) -> std::io::Result<()> {
        if !self.header_written {
            writeln!(self.writer, "{} {}", bodies.len(), size)?;
            self.header_written = true;
        }
        for body in bodies {
            writeln!(self.writer, "{} {}", body.pos.x, body.pos.y)?;
        }
        self.writer.flush()
    }
}

/// Append one `"<n> <elapsed_seconds>"` line for cross-run scaling tables.
pub fn append_summary<P: AsRef<Path>>(path: P, n: usize, elapsed: f64) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{} {}", n, elapsed)?;
    writer.flush()
}
