use axum::{serve, Router};
use thiserror::Error;
use tracing::{error, info};
use utils_trace::tracing_init;

use crate::config::{Config, ConfigError};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[source]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("BuildClient: {source}")]
	BuildClient {
		#[source]
		source: interfaces_media_feed::index::BuildClientError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	},
}

/// Loads config, installs tracing, builds the router once and serves it until shutdown.
pub async fn run(service: &str, router: fn(AppState) -> Router) -> Result<(), MainError> {
	let config = Config::from_env().map_err(|source| MainError::Config { source })?;

	tracing_init(&config.log_level, config.log_format)
		.map_err(|source| MainError::TracingInit { source })?;

	let state = AppState::from_config(&config)
		.map_err(|source| MainError::BuildClient { source })?;
	let app = router(state);

	let addr = config.addr();
	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!(
		%service,
		%addr,
		upstream = %config.upstream_base_url,
		timeout_secs = config.upstream_timeout.as_secs(),
		"Server running"
	);

	serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.map_err(|source| MainError::Serve { source })?;

	info!(%service, "Server stopped");
	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = tokio::signal::ctrl_c().await {
			error!(error = %err, "failed to listen for ctrl-c");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			Err(err) => {
				error!(error = %err, "failed to listen for SIGTERM");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}

	info!("Received shutdown signal");
}
