//! Wall-clock and memory instrumentation for a reindex run

use std::time::{Duration, Instant};

/// Captures the starting point of a run.
#[derive(Debug, Clone)]
pub struct RunStats {
    start_time: Instant,
    start_memory_kb: u64,
}

/// Elapsed time and resident memory growth over a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub elapsed: Duration,
    /// Change in resident set size, in MB; negative if memory was released
    pub memory_delta_mb: i64,
}

impl RunStats {
    /// Start measuring now
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
            start_memory_kb: resident_memory_kb(),
        }
    }

    /// Measure against the starting point
    pub fn finish(&self) -> RunReport {
        let end_memory_kb = resident_memory_kb();
        RunReport {
            elapsed: self.start_time.elapsed(),
            memory_delta_mb: (end_memory_kb as i64 - self.start_memory_kb as i64) / 1024,
        }
    }
}

/// Current process resident memory in KB.
///
/// Read from `/proc/self/status` on Linux; 0 where that is unavailable.
pub fn resident_memory_kb() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|content| parse_vm_rss_kb(&content))
        .unwrap_or(0)
}

fn parse_vm_rss_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with("VmRSS:"))
        .and_then(|line| {
            line.split_whitespace()
                .nth(1)
                .and_then(|kb| kb.parse::<u64>().ok())
        })
}
