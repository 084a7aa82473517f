//! Request timing and access logging
//!
//! `RequestTimer` captures the start of a request, `AccessLog` turns finished
//! requests into themed lines and writes them out. When memory tracking is
//! enabled, the handler also runs between two RSS samples taken outside the
//! request timer.

use crate::config::Config;
use crate::error::Result;
use crate::format::{elapsed, request_line, timestamp};
use crate::probe::{self, MemoryDelta};
use crate::status::status_code;
use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn};

/// Start time of an in-flight request
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    began_at: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(began_at: Instant) -> Self {
        Self { began_at }
    }

    /// Finish the request now and build its access line
    pub fn finish(&self, status: &str, method: &str, path: &str, stamp_format: &str) -> String {
        self.finish_at(Instant::now(), &Local::now(), status, method, path, stamp_format)
    }

    /// Build the access line for a request that ended at `now` / `at`
    pub fn finish_at<Tz>(
        &self,
        now: Instant,
        at: &DateTime<Tz>,
        status: &str,
        method: &str,
        path: &str,
        stamp_format: &str,
    ) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let took = now.saturating_duration_since(self.began_at);
        request_line(
            &timestamp(at, stamp_format),
            status_code(status),
            method,
            path,
            &elapsed(took),
        )
    }
}

/// Writes access lines for finished requests
pub struct AccessLog<W: Write> {
    writer: W,
    config: Config,
}

impl<W: Write> AccessLog<W> {
    pub fn new(writer: W, config: Config) -> Self {
        Self { writer, config }
    }

    /// Write the line for a request timed by `timer`
    pub fn record(
        &mut self,
        timer: &RequestTimer,
        status: &str,
        method: &str,
        path: &str,
    ) -> Result<()> {
        let line = timer.finish(status, method, path, &self.config.format.timestamp_format);
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Time `handler`, log its access line and return its result
    ///
    /// The handler returns its value together with the response status.
    /// The memory delta is `None` when tracking is disabled or sampling fails.
    pub fn handle<T>(
        &mut self,
        method: &str,
        path: &str,
        handler: impl FnOnce() -> (T, String),
    ) -> Result<(T, Option<MemoryDelta>)> {
        self.handle_with(probe::rss_kb, method, path, handler)
    }

    /// `handle` with an explicit RSS sampler
    ///
    /// Only the handler itself is timed; sampling happens outside the timer.
    pub fn handle_with<T>(
        &mut self,
        mut sample: impl FnMut() -> Result<u64>,
        method: &str,
        path: &str,
        handler: impl FnOnce() -> (T, String),
    ) -> Result<(T, Option<MemoryDelta>)> {
        let before = self.sample_rss(&mut sample);

        let timer = RequestTimer::start();
        let (value, status) = handler();
        let line = timer.finish(&status, method, path, &self.config.format.timestamp_format);

        let delta = before
            .and_then(|b| self.sample_rss(&mut sample).map(|a| MemoryDelta::between(b, a)));
        if let Some(d) = &delta {
            info!("{}", d.line());
        }

        self.writer.write_all(line.as_bytes())?;
        Ok((value, delta))
    }

    fn sample_rss(&self, sample: &mut impl FnMut() -> Result<u64>) -> Option<u64> {
        if !self.config.memory.enabled {
            return None;
        }
        match sample() {
            Ok(kb) => Some(kb),
            Err(e) => {
                warn!("Memory sampling failed: {}", e);
                None
            }
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
