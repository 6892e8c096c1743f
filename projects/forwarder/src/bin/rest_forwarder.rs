use projects_forwarder::routes::rest_router;
use projects_forwarder::server::{run, MainError};

#[tokio::main]
async fn main() -> Result<(), MainError> {
	run("rest_forwarder", rest_router).await
}
