use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Scoped profiler recording cumulative time and call count per section.
#[derive(Debug, Default)]
pub struct Profiler {
    pub timings: HashMap<&'static str, Duration>,
    pub calls: HashMap<&'static str, u64>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        self.record(guard.name, guard.start.elapsed());
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        *self.timings.entry(name).or_default() += elapsed;
        *self.calls.entry(name).or_default() += 1;
    }

    /// Sections by descending total time.
    pub fn report_sorted(&self) -> Vec<(&'static str, Duration)> {
        let mut v: Vec<_> = self.timings.iter().map(|(n, d)| (*n, *d)).collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    pub fn clear(&mut self) {
        self.timings.clear();
        self.calls.clear();
    }

    pub fn log_and_clear(&mut self) {
        for (name, total) in self.report_sorted() {
            let calls = self.calls.get(name).copied().unwrap_or(0);
            tracing::info!(section = name, ?total, calls, "profile");
        }
        self.clear();
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. Returns a guard that updates the global
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

/// Profile the rest of the enclosing scope, only with the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_sorted_by_total_time() {
        let mut p = Profiler::new();
        p.record("fast", Duration::from_millis(1));
        p.record("slow", Duration::from_millis(5));
        p.record("fast", Duration::from_millis(1));
        let report = p.report_sorted();
        assert_eq!(report[0], ("slow", Duration::from_millis(5)));
        assert_eq!(report[1], ("fast", Duration::from_millis(2)));
        assert_eq!(p.calls["fast"], 2);
        p.clear();
        assert!(p.report_sorted().is_empty());
    }

    #[test]
    fn guard_measures_elapsed_time() {
        let guard = start("section");
        std::thread::sleep(Duration::from_millis(2));
        let mut p = Profiler::new();
        p.finish(&guard);
        assert!(p.timings["section"] >= Duration::from_millis(2));
    }
}
