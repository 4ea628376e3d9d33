//! Command-line and environment configuration.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "twd-api",
    version,
    about = "Read/write JSON API over The Walking Dead character and episode dataset"
)]
pub struct Config {
    /// Backing JSON document with `characters` and `episodes`
    #[arg(long = "data", env = "TWD_DATA_PATH", default_value = "data.json")]
    pub data_path: PathBuf,

    /// Listen address
    #[arg(long, env = "TWD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Capacity of the character writer's request channel
    #[arg(long, env = "TWD_WRITER_BUFFER", default_value_t = 32)]
    pub writer_buffer: usize,
}

impl Config {
    /// Socket address to bind. `host` must be a literal IPv4 or IPv6 address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "twd-api",
            "--data",
            "/srv/twd/data.json",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--writer-buffer",
            "4",
        ])
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/srv/twd/data.json"));
        assert_eq!(config.writer_buffer, 4);
        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn test_ipv6_host() {
        let config =
            Config::try_parse_from(["twd-api", "--host", "::1", "--port", "3000"]).unwrap();
        assert_eq!(config.bind_addr().unwrap(), "[::1]:3000".parse().unwrap());
    }

    #[test]
    fn test_invalid_host_and_port() {
        let config =
            Config::try_parse_from(["twd-api", "--host", "not a host", "--port", "3000"]).unwrap();
        assert!(matches!(
            config.bind_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));

        assert!(Config::try_parse_from(["twd-api", "--port", "70000"]).is_err());
    }
}
