use std::sync::Mutex;

/// Counters for scenario runs. Mutex-guarded so a shared reference can
/// record from anywhere in the workflow.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    scenarios: usize,
    failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                scenarios: 0,
                failures: 0,
            }),
        }
    }

    pub fn record_scenario(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.scenarios += 1;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failures += 1;
        }
    }

    /// (scenarios completed, failures).
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.scenarios, metrics.failures)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_counts() {
        let recorder = MetricsRecorder::new();
        recorder.record_scenario();
        recorder.record_scenario();
        recorder.record_failure();
        assert_eq!(recorder.snapshot(), (2, 1));
    }
}
