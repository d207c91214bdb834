// src/bench/timing.rs

use std::time::{Duration, Instant};

pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch {
            start: Instant::now(),
        }
    }

    pub fn stop(self) -> TimingSample {
        TimingSample {
            start: self.start,
            end: Instant::now(),
        }
    }
}

/// Wall-clock bounds of one timed loop.
#[derive(Debug, Clone, Copy)]
pub struct TimingSample {
    pub start: Instant,
    pub end: Instant,
}

impl TimingSample {
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_covers_sleep() {
        let sw = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(5));
        let sample = sw.stop();
        assert!(sample.end >= sample.start);
        assert!(sample.elapsed() >= Duration::from_millis(5));
        assert!(sample.elapsed_secs() >= 0.005);
    }
}
