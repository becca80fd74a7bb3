pub mod body;
pub mod boundary;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod init_config;
pub mod physics;
pub mod profiler;
pub mod renderer;
pub mod simulation;
pub mod units;
pub mod utils;

pub mod app;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
