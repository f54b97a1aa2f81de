//! Configuration for both binaries.
//!
//! Config is read once from the process environment at startup and validated
//! before anything binds a port or enters a loop. Invalid values are rejected
//! with a clear error rather than silently falling back to defaults; missing
//! values use the documented defaults.
//!
//! # Variables
//! ```text
//! PORT                  status server TCP port          (default 8080)
//! HOST                  status server bind host         (default 0.0.0.0)
//! ANNOUNCE_INTERVAL_MS  delay between announcements, ms (default 5000)
//! ```

use std::time::Duration;

use thiserror::Error;

/// Environment variable naming the status server's TCP port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable naming the status server's bind host.
pub const HOST_VAR: &str = "HOST";
/// Environment variable naming the announcement interval in milliseconds.
pub const INTERVAL_VAR: &str = "ANNOUNCE_INTERVAL_MS";

/// An environment value that cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The value does not parse as a TCP port (1–65535).
    #[error("`{var}` is not a valid port number: `{value}`")]
    InvalidPort { var: &'static str, value: String },

    /// Port 0 would let the OS pick an arbitrary port, which the status
    /// endpoint could then not report truthfully.
    #[error("`{var}` must be between 1 and 65535")]
    PortZero { var: &'static str },

    /// The value does not parse as a millisecond interval.
    #[error("`{var}` is not a valid interval in milliseconds: `{value}`")]
    InvalidInterval { var: &'static str, value: String },

    /// A zero interval would busy-loop the announcer.
    #[error("`{var}` must be greater than zero")]
    IntervalZero { var: &'static str },
}

/// Status server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind and report (default: 8080).
    pub port: u16,
    /// Host or interface to bind (default: all interfaces).
    pub host: String,
}

impl ServerConfig {
    /// Read the server configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration from an arbitrary variable source.
    ///
    /// Split out of [`from_env`][Self::from_env] so tests can supply values
    /// without mutating process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(PORT_VAR) {
            Some(raw) => parse_port(PORT_VAR, &raw)?,
            None => defaults::port(),
        };
        let host = lookup(HOST_VAR).unwrap_or_else(defaults::host);
        Ok(Self { port, host })
    }

    /// The address string the listener binds, `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Identity announcer settings.
#[derive(Debug, Clone)]
pub struct AnnouncerConfig {
    /// Delay between announcements (default: 5 s).
    pub interval: Duration,
}

impl AnnouncerConfig {
    /// Read the announcer configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let interval = match lookup(INTERVAL_VAR) {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidInterval {
                    var: INTERVAL_VAR,
                    value: raw.clone(),
                })?;
                if ms == 0 {
                    return Err(ConfigError::IntervalZero { var: INTERVAL_VAR });
                }
                Duration::from_millis(ms)
            }
            None => defaults::interval(),
        };
        Ok(Self { interval })
    }
}

fn parse_port(var: &'static str, raw: &str) -> Result<u16, ConfigError> {
    let port: u16 = raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
        var,
        value: raw.to_string(),
    })?;
    if port == 0 {
        return Err(ConfigError::PortZero { var });
    }
    Ok(port)
}

mod defaults {
    use std::time::Duration;

    pub fn port() -> u16 {
        8080
    }

    pub fn host() -> String {
        "0.0.0.0".to_string()
    }

    pub fn interval() -> Duration {
        Duration::from_millis(5_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    // -----------------------------------------------------------------------
    // Server config
    // -----------------------------------------------------------------------

    #[test]
    fn server_defaults_applied_when_env_is_empty() {
        let config = ServerConfig::from_lookup(no_env).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn port_override_is_used() {
        let config =
            ServerConfig::from_lookup(|var| (var == PORT_VAR).then(|| "9090".into())).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn host_override_is_used() {
        let config =
            ServerConfig::from_lookup(|var| (var == HOST_VAR).then(|| "127.0.0.1".into())).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = ServerConfig::from_lookup(|var| (var == PORT_VAR).then(|| "not-a-port".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "got {err:?}");
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = ServerConfig::from_lookup(|var| (var == PORT_VAR).then(|| "70000".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "got {err:?}");
    }

    #[test]
    fn zero_port_is_rejected() {
        let err =
            ServerConfig::from_lookup(|var| (var == PORT_VAR).then(|| "0".into())).unwrap_err();
        assert!(matches!(err, ConfigError::PortZero { .. }), "got {err:?}");
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = ServerConfig { port: 9090, host: "127.0.0.1".into() };
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    // -----------------------------------------------------------------------
    // Announcer config
    // -----------------------------------------------------------------------

    #[test]
    fn announcer_default_interval_is_five_seconds() {
        let config = AnnouncerConfig::from_lookup(no_env).unwrap();
        assert_eq!(config.interval, Duration::from_secs(5));
    }

    #[test]
    fn interval_override_is_used() {
        let config =
            AnnouncerConfig::from_lookup(|var| (var == INTERVAL_VAR).then(|| "250".into()))
                .unwrap();
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn non_numeric_interval_is_rejected() {
        let err = AnnouncerConfig::from_lookup(|var| (var == INTERVAL_VAR).then(|| "soon".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterval { .. }), "got {err:?}");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = AnnouncerConfig::from_lookup(|var| (var == INTERVAL_VAR).then(|| "0".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::IntervalZero { .. }), "got {err:?}");
    }
}
