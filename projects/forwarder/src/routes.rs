use axum::{routing::get, Router};

use crate::endpoints::api::user::read_media::index::handler as api_user_read_media_handler;
use crate::graphql::{build_schema, graphiql, graphql_handler, GRAPHQL_PATH};
use crate::state::AppState;

pub const USER_MEDIA_PATH: &str = "/api/user/{username}";

/// Route table of the plain REST forwarder.
pub fn rest_router(state: AppState) -> Router {
	Router::new()
		.route(USER_MEDIA_PATH, get(api_user_read_media_handler))
		.with_state(state)
}

/// Route table of the GraphQL forwarder: `/graphql` plus the shared REST route.
pub fn graphql_router(state: AppState) -> Router {
	let schema = build_schema(state.clone());

	Router::new()
		.route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
		.with_state(schema)
		.merge(rest_router(state))
}
