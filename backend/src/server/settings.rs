//! Process settings loaded via OrthoConfig.
//!
//! Values come from `FLEET_*` environment variables, matching command-line
//! flags, or a configuration file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use fleet_backend::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings controlling the HTTP listener and the vehicle store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FLEET")]
pub struct ServerSettings {
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: String,
    /// PostgreSQL URL. When absent the in-process fixture store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = PoolConfig::DEFAULT_MAX_SIZE)]
    pub db_max_connections: u32,
}

impl ServerSettings {
    /// Parse the configured bind address (`0.0.0.0:8080` by default).
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] of kind `InvalidInput` when the
    /// configured value is not a socket address.
    pub fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_str();
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid FLEET_BIND_ADDR {raw:?}: {err}"),
            )
        })
    }

    /// Return the pool configuration when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        Some(PoolConfig::new(url).with_max_size(self.db_max_connections))
    }
}
