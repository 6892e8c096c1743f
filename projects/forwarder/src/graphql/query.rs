use async_graphql::{Context, Error, ErrorExtensions, Object, Result as GraphQLResult};
use interfaces_media_feed::index::{fetch_user_media, MediaFeedResult};
use serde_json::Value;
use tracing::{info, warn};

use super::types::Feed;
use crate::error::{error_chain, error_code, public_message};
use crate::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
	/// Media feed of `username`, fetched from the upstream on every call.
	async fn feed(&self, ctx: &Context<'_>, username: String) -> GraphQLResult<Option<Feed>> {
		let state = ctx.data::<AppState>()?;

		let MediaFeedResult { body, .. } =
			fetch_user_media(&state.client, &state.upstream_base_url, &username)
				.await
				.map_err(|source| {
					warn!(%username, error = %source, "feed fetch failed");
					let detail = state.debug_errors.then(|| error_chain(&source));
					client_error(public_message(&source), error_code(&source), detail)
				})?;

		let body: Value = serde_json::from_str(body.get()).map_err(|source| {
			warn!(%username, error = %source, "feed document could not be parsed");
			let detail = state.debug_errors.then(|| source.to_string());
			not_a_feed(detail)
		})?;

		if body.is_null() {
			return Ok(None);
		}

		// A bare array would otherwise deserialize positionally into `Feed`.
		if !body.is_object() {
			warn!(%username, "upstream body is not a JSON object");
			let detail = state.debug_errors.then(|| format!("unexpected body: {body}"));
			return Err(not_a_feed(detail));
		}

		let feed = serde_json::from_value::<Feed>(body).map_err(|source| {
			warn!(%username, error = %source, "feed document has an unexpected shape");
			let detail = state.debug_errors.then(|| source.to_string());
			not_a_feed(detail)
		})?;

		info!(%username, "resolved feed");
		Ok(Some(feed))
	}
}

fn not_a_feed(detail: Option<String>) -> Error {
	client_error(
		"Upstream response was not a feed document".to_string(),
		"BAD_GATEWAY",
		detail,
	)
}

fn client_error(message: String, code: &'static str, detail: Option<String>) -> Error {
	Error::new(message).extend_with(|_, extensions| {
		extensions.set("code", code);
		if let Some(detail) = &detail {
			extensions.set("detail", detail.clone());
		}
	})
}
