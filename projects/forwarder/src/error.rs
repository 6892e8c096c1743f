//! Client-facing view of upstream failures, shared by the REST and GraphQL surfaces.

use std::error::Error as StdError;

use axum::http::StatusCode;
use interfaces_media_feed::index::FetchUserMediaError;

/// Status the forwarders answer with when the upstream call fails.
pub fn upstream_status(err: &FetchUserMediaError) -> StatusCode {
	if err.is_timeout() {
		StatusCode::GATEWAY_TIMEOUT
	} else {
		StatusCode::BAD_GATEWAY
	}
}

/// Stable GraphQL `extensions.code` for an upstream failure.
pub fn error_code(err: &FetchUserMediaError) -> &'static str {
	if err.is_timeout() {
		"GATEWAY_TIMEOUT"
	} else {
		"BAD_GATEWAY"
	}
}

/// Message safe to hand to clients: names the failure class, nothing internal.
pub fn public_message(err: &FetchUserMediaError) -> String {
	match err {
		FetchUserMediaError::RequestSend { .. } => "Upstream request failed".to_string(),
		FetchUserMediaError::Timeout { .. } => "Upstream request timed out".to_string(),
		FetchUserMediaError::UpstreamStatus { status } => {
			format!("Upstream responded with status {}", status.as_u16())
		}
		FetchUserMediaError::ResponseRead { .. } => {
			"Upstream response could not be read".to_string()
		}
		FetchUserMediaError::DeserializeResponseBody { .. } => {
			"Upstream response was not valid JSON".to_string()
		}
	}
}

/// `err: cause: cause...`, only ever exposed behind the debug flag.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
	let mut chain = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		chain.push_str(": ");
		chain.push_str(&cause.to_string());
		source = cause.source();
	}
	chain
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	use interfaces_media_feed::index::{build_client, fetch_user_media};

	#[test]
	fn maps_status_failures_to_bad_gateway() {
		let err = FetchUserMediaError::UpstreamStatus {
			status: StatusCode::NOT_FOUND,
		};
		assert_eq!(upstream_status(&err), StatusCode::BAD_GATEWAY);
		assert_eq!(error_code(&err), "BAD_GATEWAY");
		assert_eq!(public_message(&err), "Upstream responded with status 404");
	}

	#[test]
	fn maps_body_failures_to_bad_gateway() {
		let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
		let err = FetchUserMediaError::DeserializeResponseBody { source };
		assert_eq!(upstream_status(&err), StatusCode::BAD_GATEWAY);
		assert_eq!(error_code(&err), "BAD_GATEWAY");
		assert!(error_chain(&err).starts_with("DeserializeResponseBody: "));
	}

	#[tokio::test]
	async fn maps_timeouts_to_gateway_timeout() {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		let client = build_client(Duration::from_millis(100)).unwrap();

		// Accepted connections are held open without ever answering.
		let _held = tokio::spawn(async move {
			let mut open = Vec::new();
			while let Ok((socket, _)) = listener.accept().await {
				open.push(socket);
			}
		});

		let err = fetch_user_media(&client, &format!("http://{addr}"), "alice")
			.await
			.err()
			.unwrap();

		assert_eq!(upstream_status(&err), StatusCode::GATEWAY_TIMEOUT);
		assert_eq!(error_code(&err), "GATEWAY_TIMEOUT");
		assert_eq!(public_message(&err), "Upstream request timed out");
	}
}
