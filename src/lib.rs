pub mod app;
pub mod body;
pub mod cell_list;
pub mod config;
pub mod diagnostics;
pub mod forces;
pub mod io;
pub mod profiler;
pub mod simulation;
pub mod spawn;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
