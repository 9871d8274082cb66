//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::gamepad::DEFAULT_POLL_BUDGET;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory holding the built client (`index.html`, wasm, css).
    pub static_dir: PathBuf,
    pub poll_budget: Duration,
    /// Extra SDL controller mappings (`gamecontrollerdb.txt` format).
    pub sdl_mappings_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `127.0.0.1`
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `client/dist` next to this crate
    /// - `POLL_BUDGET_MICROS`: device event drain budget, default 50
    /// - `SDL_MAPPINGS_FILE`: no default
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or address variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env_parse("BIND_ADDR", IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let poll_budget_micros = env_parse("POLL_BUDGET_MICROS", duration_micros(DEFAULT_POLL_BUDGET))?;
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());
        let sdl_mappings_file = std::env::var("SDL_MAPPINGS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            port,
            static_dir,
            poll_budget: Duration::from_micros(poll_budget_micros),
            sdl_mappings_file,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist")
}

fn duration_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// Parse `key` if set; unset falls back to `default`, garbage is an error.
fn env_parse<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var: key, value: raw }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
