//! The announcement loop.
//!
//! One line per interval on the output sink, in the form
//! `2024-03-01T12:00:00.123+00:00: 3fa85f64-5717-4562-b3fc-2c963f66afa6`.
//! The identifier never changes within one process run; only the timestamp
//! advances.

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use tokio_util::sync::CancellationToken;

use crate::clock::{Clock, SystemClock};
use crate::identity::InstanceId;

/// Format one announcement line for `now` and `id`.
///
/// The timestamp is RFC 3339 with exactly three fractional digits and a
/// numeric UTC offset (`+00:00`, never `Z`).
pub fn announcement_line(now: DateTime<Utc>, id: &InstanceId) -> String {
    format!("{}: {}", now.to_rfc3339_opts(SecondsFormat::Millis, false), id)
}

/// Emits one announcement line per interval until cancelled.
pub struct Announcer {
    id: InstanceId,
    interval: Duration,
    clock: Box<dyn Clock>,
}

impl Announcer {
    /// Announcer reading the system clock.
    pub fn new(id: InstanceId, interval: Duration) -> Self {
        Self::with_clock(id, interval, Box::new(SystemClock))
    }

    /// Announcer with an injected clock. Tests use this to pin timestamps.
    pub fn with_clock(id: InstanceId, interval: Duration, clock: Box<dyn Clock>) -> Self {
        Self { id, interval, clock }
    }

    /// The identifier this announcer emits.
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    /// Run the loop, writing one line per tick to `out`.
    ///
    /// The first line is emitted immediately; each subsequent line follows
    /// after [`interval`](Self::new). Returns `Ok(())` once `cancel` fires,
    /// or the I/O error when a write or flush fails — a broken sink ends the
    /// loop and is fatal to the caller.
    pub async fn run<W: Write>(&self, mut out: W, cancel: CancellationToken) -> std::io::Result<()> {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => return Ok(()),
                _ = ticker.tick() => {
                    let line = announcement_line(self.clock.now(), &self.id);
                    writeln!(out, "{line}")?;
                    out.flush()?;
                }
            }
        }
    }
}
