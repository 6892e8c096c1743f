use std::sync::Arc;

use interfaces_media_feed::index::{build_client, BuildClientError};
use reqwest::Client;

use crate::config::Config;

/// Read-only state shared by every request; built once at start-up.
#[derive(Clone)]
pub struct AppState {
	pub client: Client,
	pub upstream_base_url: Arc<str>,
	pub debug_errors: bool,
}

impl AppState {
	pub fn new(client: Client, upstream_base_url: &str, debug_errors: bool) -> Self {
		AppState {
			client,
			upstream_base_url: Arc::from(upstream_base_url),
			debug_errors,
		}
	}

	pub fn from_config(config: &Config) -> Result<Self, BuildClientError> {
		let client = build_client(config.upstream_timeout)?;
		Ok(AppState::new(
			client,
			&config.upstream_base_url,
			config.debug_errors,
		))
	}
}
