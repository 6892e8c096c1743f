//! Process configuration, read once from the environment (and `.env` when present).

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use utils_trace::LogFormat;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://instagram.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	pub upstream_base_url: String,
	pub upstream_timeout: Duration,
	pub debug_errors: bool,
	pub log_level: String,
	pub log_format: LogFormat,
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		dotenvy::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let host = match lookup("FORWARDER_HOST") {
			Some(value) => value
				.parse()
				.map_err(|_| ConfigError::invalid("FORWARDER_HOST", &value))?,
			None => IpAddr::from([0, 0, 0, 0]),
		};

		let port = match lookup("FORWARDER_PORT") {
			Some(value) => value
				.parse()
				.map_err(|_| ConfigError::invalid("FORWARDER_PORT", &value))?,
			None => DEFAULT_PORT,
		};

		let upstream_base_url = lookup("UPSTREAM_BASE_URL")
			.unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());
		if !(upstream_base_url.starts_with("http://") || upstream_base_url.starts_with("https://"))
		{
			return Err(ConfigError::invalid("UPSTREAM_BASE_URL", &upstream_base_url));
		}

		let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
			Some(value) => match value.parse::<u64>() {
				Ok(secs) if secs > 0 => secs,
				_ => return Err(ConfigError::invalid("UPSTREAM_TIMEOUT_SECS", &value)),
			},
			None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
		};

		let debug_errors = match lookup("DEBUG_ERRORS") {
			Some(value) => parse_flag(&value)
				.ok_or_else(|| ConfigError::invalid("DEBUG_ERRORS", &value))?,
			None => false,
		};

		let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

		let log_format = match lookup("LOG_FORMAT") {
			Some(value) => value
				.parse()
				.map_err(|_| ConfigError::invalid("LOG_FORMAT", &value))?,
			None => LogFormat::default(),
		};

		Ok(Config {
			host,
			port,
			upstream_base_url,
			upstream_timeout: Duration::from_secs(timeout_secs),
			debug_errors,
			log_level,
			log_format,
		})
	}

	pub fn addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}
}

fn parse_flag(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("Invalid value for {key}: {value:?}")]
	InvalidValue {
		key: &'static str,
		value: String,
	},
}

impl ConfigError {
	fn invalid(key: &'static str, value: &str) -> Self {
		ConfigError::InvalidValue {
			key,
			value: value.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
		let vars: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		Config::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults_match_the_historical_service() {
		let config = load(&[]).unwrap();
		assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
		assert_eq!(config.upstream_base_url, "https://instagram.com");
		assert_eq!(config.upstream_timeout, Duration::from_secs(10));
		assert!(!config.debug_errors);
		assert_eq!(config.log_level, "info");
		assert_eq!(config.log_format, LogFormat::Compact);
	}

	#[test]
	fn reads_overrides() {
		let config = load(&[
			("FORWARDER_HOST", "127.0.0.1"),
			("FORWARDER_PORT", "9090"),
			("UPSTREAM_BASE_URL", "http://localhost:3000"),
			("UPSTREAM_TIMEOUT_SECS", "3"),
			("DEBUG_ERRORS", "yes"),
			("LOG_FORMAT", "json"),
		])
		.unwrap();

		assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
		assert_eq!(config.upstream_base_url, "http://localhost:3000");
		assert_eq!(config.upstream_timeout, Duration::from_secs(3));
		assert!(config.debug_errors);
		assert_eq!(config.log_format, LogFormat::Json);
	}

	#[test]
	fn rejects_bad_values() {
		for (key, value) in [
			("FORWARDER_PORT", "eighty"),
			("FORWARDER_HOST", "localhost:80"),
			("UPSTREAM_BASE_URL", "ftp://example.com"),
			("UPSTREAM_TIMEOUT_SECS", "0"),
			("DEBUG_ERRORS", "maybe"),
			("LOG_FORMAT", "pretty"),
		] {
			let err = load(&[(key, value)]).unwrap_err();
			assert!(
				matches!(&err, ConfigError::InvalidValue { key: k, .. } if *k == key),
				"{key}={value} gave {err}"
			);
		}
	}
}
