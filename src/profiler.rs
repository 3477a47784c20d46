use std::time::{Duration, Instant};

/// Scoped wall-clock accounting for the step-loop phases. Sections are
/// kept in first-use order with cumulative time and call counts; builds
/// without the `profiling` feature compile the guards away.
pub struct Profiler {
    sections: Vec<Section>,
}

struct Section {
    name: &'static str,
    total: Duration,
    calls: u64,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        let elapsed = guard.start.elapsed();
        match self.sections.iter_mut().find(|s| s.name == guard.name) {
            Some(section) => {
                section.total += elapsed;
                section.calls += 1;
            }
            None => self.sections.push(Section {
                name: guard.name,
                total: elapsed,
                calls: 1,
            }),
        }
    }

    pub fn print_and_clear(&mut self) {
        for s in &self.sections {
            let per_call = s.total / s.calls.max(1) as u32;
            println!("{:<14} {:>14?} total, {:>12?}/call, x{}", s.name, s.total, per_call, s.calls);
        }
        self.sections.clear();
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. The guard reports back to the global
/// profiler when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard {
        name,
        start: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Profile a scope only when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
