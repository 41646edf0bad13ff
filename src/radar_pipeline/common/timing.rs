use std::time::{Duration, Instant};

/// Wall-clock durations of each pipeline step, in execution order.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    steps: Vec<(String, Duration)>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        self.steps.push((name.into(), duration));
    }

    /// Runs `f` and records its duration under `name`, whether or not it fails.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.add_step(name, started.elapsed());
        out
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|(_, d)| *d).sum()
    }

    /// Total time spent in every step recorded as `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.steps
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, d)| *d)
            .reduce(|a, b| a + b)
    }

    pub fn steps(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.steps.iter().map(|(n, d)| (n.as_str(), *d))
    }

    pub fn print_summary(&self) {
        let total = self.total_duration().as_secs_f64();
        println!("\nStep timings:");
        for (name, duration) in self.steps() {
            let share = if total > 0.0 {
                duration.as_secs_f64() / total * 100.0
            } else {
                0.0
            };
            println!("  {name:<20} {:>9.3} ms  {share:>5.1}%", duration.as_secs_f64() * 1e3);
        }
        println!("  {:<20} {:>9.3} ms", "total", total * 1e3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_step_accumulates() {
        let mut timings = PipelineTimings::new();
        timings.add_step("write", Duration::from_millis(5));
        timings.add_step("write", Duration::from_millis(7));
        timings.add_step("decode", Duration::from_millis(3));

        let order: Vec<&str> = timings.steps().map(|(n, _)| n).collect();
        assert_eq!(order, ["write", "write", "decode"]);
        assert_eq!(timings.get_step("write"), Some(Duration::from_millis(12)));
        assert_eq!(timings.total_duration(), Duration::from_millis(15));
        assert_eq!(timings.get_step("fetch"), None);
    }

    #[test]
    fn test_time_records_failed_step() {
        let mut timings = PipelineTimings::new();
        let out: Result<(), &str> = timings.time("fetch", || Err("boom"));

        assert!(out.is_err());
        assert_eq!(timings.steps().count(), 1);
        assert!(timings.get_step("fetch").is_some());
    }
}
