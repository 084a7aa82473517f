//! Resident memory sampling
//!
//! Samples the RSS of the current process and reports the change around a
//! unit of work as a themed memory line.

use crate::error::{ChromaError, Result};
use crate::format::{memory_line, Sign};
use tracing::{debug, info};

/// Change in resident memory between two samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryDelta {
    pub sign: Sign,
    /// Magnitude of the change (KB)
    pub delta_kb: u64,
    /// RSS after the work (KB)
    pub current_kb: u64,
}

impl MemoryDelta {
    /// Delta from a before/after pair of RSS samples
    pub fn between(before_kb: u64, after_kb: u64) -> Self {
        let sign = if after_kb >= before_kb {
            Sign::Plus
        } else {
            Sign::Minus
        };
        Self {
            sign,
            delta_kb: after_kb.abs_diff(before_kb),
            current_kb: after_kb,
        }
    }

    /// Themed memory line for this delta
    pub fn line(&self) -> String {
        memory_line(self.sign, self.delta_kb, self.current_kb)
    }
}

/// Current resident set size of this process (KB)
#[cfg(target_os = "linux")]
pub fn rss_kb() -> Result<u64> {
    let status = std::fs::read_to_string("/proc/self/status")
        .map_err(|source| ChromaError::MemorySample { source })?;
    parse_vm_rss(&status)
}

/// Current resident set size of this process (KB)
#[cfg(not(target_os = "linux"))]
pub fn rss_kb() -> Result<u64> {
    let output = std::process::Command::new("ps")
        .args(["-o", "rss=", "-p", &std::process::id().to_string()])
        .output()
        .map_err(|source| ChromaError::MemorySample { source })?;
    parse_ps_rss(&String::from_utf8_lossy(&output.stdout))
}

/// Extract `VmRSS` from `/proc/<pid>/status` content
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_vm_rss(status: &str) -> Result<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
        .ok_or_else(|| ChromaError::MemoryParse {
            output: status.lines().take(1).collect(),
        })
}

/// Parse `ps -o rss=` output (a single KB count)
#[cfg_attr(target_os = "linux", allow(dead_code))]
fn parse_ps_rss(output: &str) -> Result<u64> {
    output
        .trim()
        .parse()
        .map_err(|_| ChromaError::MemoryParse {
            output: output.trim().to_string(),
        })
}

/// Run `work` between two RSS samples and log the memory line at info level
pub fn measure<T>(work: impl FnOnce() -> T) -> Result<(T, MemoryDelta)> {
    measure_with(rss_kb, work)
}

/// `measure` with an explicit sampler
pub fn measure_with<T>(
    mut sample: impl FnMut() -> Result<u64>,
    work: impl FnOnce() -> T,
) -> Result<(T, MemoryDelta)> {
    let before = sample()?;
    let result = work();
    let after = sample()?;

    let delta = MemoryDelta::between(before, after);
    debug!(before, after, "memory sampled");
    info!("{}", delta.line());
    Ok((result, delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dye::strip;

    #[test]
    fn test_delta_growth() {
        let delta = MemoryDelta::between(19968, 20480);
        assert_eq!(delta.sign, Sign::Plus);
        assert_eq!(delta.delta_kb, 512);
        assert_eq!(delta.current_kb, 20480);
        assert_eq!(strip(&delta.line()), "RAM: 20480K (+512K)");
    }

    #[test]
    fn test_delta_shrink_uses_magnitude() {
        let delta = MemoryDelta::between(2048, 1024);
        assert_eq!(delta.sign, Sign::Minus);
        assert_eq!(delta.delta_kb, 1024);
        assert_eq!(strip(&delta.line()), "RAM: 1024K (-1024K)");
    }

    #[test]
    fn test_delta_unchanged_is_plus_zero() {
        let delta = MemoryDelta::between(4096, 4096);
        assert_eq!(delta.sign, Sign::Plus);
        assert_eq!(delta.delta_kb, 0);
    }

    #[test]
    fn test_parse_vm_rss() {
        let status = "Name:\tchroma\nVmPeak:\t  10000 kB\nVmRSS:\t    5120 kB\nThreads:\t1\n";
        assert_eq!(parse_vm_rss(status).unwrap(), 5120);
        assert!(matches!(
            parse_vm_rss("Name:\tchroma\n"),
            Err(ChromaError::MemoryParse { .. })
        ));
    }

    #[test]
    fn test_parse_ps_rss() {
        assert_eq!(parse_ps_rss("  20480\n").unwrap(), 20480);
        assert!(parse_ps_rss("").is_err());
    }

    #[test]
    fn test_measure_with_fixed_samples() {
        let mut samples = vec![1000u64, 1500].into_iter();
        let (value, delta) =
            measure_with(|| Ok(samples.next().unwrap_or(0)), || "done").unwrap();
        assert_eq!(value, "done");
        assert_eq!(delta, MemoryDelta::between(1000, 1500));
    }

    #[test]
    fn test_measure_with_sampler_error() {
        let result = measure_with(
            || {
                Err(ChromaError::MemoryParse {
                    output: String::new(),
                })
            },
            || 1,
        );
        assert!(result.is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_rss_kb_live_sample() {
        assert!(rss_kb().unwrap() > 0);
    }
}
