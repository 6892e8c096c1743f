//! `/graphql`: typed view over the same upstream fetch as the REST route.

pub mod coerce;
pub mod query;
pub mod types;

use async_graphql::{http::GraphiQLSource, EmptyMutation, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
	extract::State,
	response::{Html, IntoResponse},
};

use crate::state::AppState;
use query::QueryRoot;

pub type FeedSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Built once at start-up; the schema is immutable afterwards.
pub fn build_schema(state: AppState) -> FeedSchema {
	Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
		.data(state)
		.finish()
}

/// Axum handler: POST /graphql
pub async fn graphql_handler(
	State(schema): State<FeedSchema>,
	req: GraphQLRequest,
) -> GraphQLResponse {
	schema.execute(req.into_inner()).await.into()
}

/// Axum handler: GET /graphql (GraphiQL explorer)
pub async fn graphiql() -> impl IntoResponse {
	Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
