use projects_forwarder::routes::graphql_router;
use projects_forwarder::server::{run, MainError};

#[tokio::main]
async fn main() -> Result<(), MainError> {
	run("graphql_forwarder", graphql_router).await
}
