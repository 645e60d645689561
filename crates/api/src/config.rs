//! Server configuration, resolved once at startup.
//!
//! Sources, highest precedence first:
//! - the positional `[port]` command line argument
//! - environment variables (`MOCK_PORT`, `MOCK_LONG_DELAY_MS`, `MOCK_LEGACY_ROUTES`)
//! - built-in defaults
//!
//! Bad values are never fatal: they are logged and the default is used.

use std::fmt::Debug;
use std::time::Duration;

use mockapi_core::{ConfigError, ConfigResult};

pub const DEFAULT_PORT: u16 = 4567;
pub const DEFAULT_LONG_DELAY: Duration = Duration::from_millis(2000);

pub const PORT_ENV: &str = "MOCK_PORT";
pub const LONG_DELAY_ENV: &str = "MOCK_LONG_DELAY_MS";
pub const LEGACY_ROUTES_ENV: &str = "MOCK_LEGACY_ROUTES";

/// Name used in logs for the command line port argument.
pub const CLI_PORT_SOURCE: &str = "command line";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port bound on all interfaces.
    pub port: u16,
    /// How long `GET /long` waits before answering.
    pub long_delay: Duration,
    /// Whether undocumented compatibility routes (`/chiquito`) are served.
    pub legacy_routes: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            long_delay: DEFAULT_LONG_DELAY,
            legacy_routes: false,
        }
    }
}

impl ServerConfig {
    /// Resolve from the command line port argument and the process environment.
    pub fn from_env(cli_port: Option<&str>) -> Self {
        Self::from_sources(cli_port, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn from_sources<F>(cli_port: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = resolve_port(cli_port, lookup(PORT_ENV).as_deref());

        let long_delay = lookup(LONG_DELAY_ENV)
            .map(|raw| or_default(parse_delay(LONG_DELAY_ENV, &raw), DEFAULT_LONG_DELAY))
            .unwrap_or(DEFAULT_LONG_DELAY);

        let legacy_routes = lookup(LEGACY_ROUTES_ENV)
            .map(|raw| or_default(parse_flag(LEGACY_ROUTES_ENV, &raw), false))
            .unwrap_or(false);

        Self {
            port,
            long_delay,
            legacy_routes,
        }
    }
}

/// Pick the listening port.
///
/// A command line value wins even when it is invalid: in that case the
/// default is used and the environment is not consulted.
pub fn resolve_port(cli: Option<&str>, env: Option<&str>) -> u16 {
    let (source, raw) = match (cli, env) {
        (Some(raw), _) => (CLI_PORT_SOURCE, raw),
        (None, Some(raw)) => (PORT_ENV, raw),
        (None, None) => return DEFAULT_PORT,
    };

    or_default(parse_port(source, raw), DEFAULT_PORT)
}

pub fn parse_port(source: &'static str, raw: &str) -> ConfigResult<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::invalid_port(source, raw))
}

/// Parse a non-zero delay in milliseconds.
pub fn parse_delay(source: &'static str, raw: &str) -> ConfigResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::invalid_delay(source, raw)),
    }
}

pub fn parse_flag(source: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid_flag(source, raw)),
    }
}

fn or_default<T: Debug>(result: ConfigResult<T>, default: T) -> T {
    result.unwrap_or_else(|err| {
        warn_fallback(&err, &default);
        default
    })
}

fn warn_fallback(err: &ConfigError, default: &impl Debug) {
    tracing::warn!(
        source = err.source_name(),
        error = %err,
        default = ?default,
        "invalid configuration value; using default"
    );
}
