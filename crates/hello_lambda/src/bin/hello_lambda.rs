use hello_lambda::handlers::hello::handle_request;
use lambda_runtime::{service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(handle_request)).await
}
