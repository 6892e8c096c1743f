use axum::{
	extract::{Json, Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use interfaces_media_feed::index::{fetch_user_media, FetchUserMediaError, MediaFeedResult};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::{error_chain, public_message, upstream_status};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("FetchUserMedia: {source}")]
	FetchUserMedia {
		source: FetchUserMediaError,
	},
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub error: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

impl HandlerError {
	pub fn status(&self) -> StatusCode {
		match self {
			HandlerError::FetchUserMedia { source } => upstream_status(source),
		}
	}

	/// Renders the error; the source chain is only attached when `debug_errors` is set.
	pub fn into_response_with(self, debug_errors: bool) -> Response {
		let status = self.status();
		let body = match &self {
			HandlerError::FetchUserMedia { source } => ErrorBody {
				error: public_message(source),
				detail: debug_errors.then(|| error_chain(source)),
			},
		};

		(status, Json(body)).into_response()
	}
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> Response {
		self.into_response_with(false)
	}
}

/// Axum handler: GET /api/user/{username}
pub async fn handler(
	State(state): State<AppState>,
	Path(username): Path<String>,
) -> Response {
	match fetch_user_media(&state.client, &state.upstream_base_url, &username).await {
		Ok(MediaFeedResult { body, status }) => {
			info!(%username, upstream_status = %status, "relayed user media");
			// Raw text is written back as-is, number precision included.
			(StatusCode::OK, Json(body)).into_response()
		}
		Err(source) => {
			let err = HandlerError::FetchUserMedia { source };
			warn!(%username, error = %err, "user media fetch failed");
			err.into_response_with(state.debug_errors)
		}
	}
}
