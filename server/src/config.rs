//! Listener configuration parsed from environment variables.
//!
//! Leptos options (`LEPTOS_OUTPUT_NAME`, `LEPTOS_SITE_ROOT`, ...) are read
//! separately by `leptos::config::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build listener config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars("HOST", "PORT")
    }

    fn from_vars(host_var: &str, port_var: &str) -> Result<Self, ServerError> {
        let host = parse_host(std::env::var(host_var).ok().as_deref())?;
        let port = parse_port(std::env::var(port_var).ok().as_deref())?;
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_HOST),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::Config { var: "HOST", value: value.to_owned() }),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::Config { var: "PORT", value: value.to_owned() }),
    }
}
