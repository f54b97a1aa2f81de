//! Minimal identity beacon.
//!
//! Two disconnected utilities share this library:
//!
//! - `beacon-announcer` — generates one process-lifetime [`InstanceId`] and
//!   prints a `<timestamp>: <identifier>` line to stdout every few seconds.
//! - `beacon-status` — binds an HTTP listener and answers `GET /` with a
//!   plain-text report of the configured port.
//!
//! Neither component talks to the other; each binary is a standalone entry
//! point over the modules below.

pub mod announcer;
pub mod api;
pub mod clock;
pub mod config;
pub mod identity;
pub mod shutdown;

pub use announcer::Announcer;
pub use config::{AnnouncerConfig, ConfigError, ServerConfig};
pub use identity::InstanceId;
