use biome::Config;
use lambda_runtime::{run, service_fn, tracing, Error};

mod handler;
mod transport;
use handler::function_handler;
use transport::Transport;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // The transport is fixed for the lifetime of this instance.
    let config = Config::from_env();
    let transport = Transport::select(&config, biome::lambda_client).await;
    tracing::info!(env = ?config.env(), transport = transport.kind(), "galvanic ready");

    run(service_fn(|event| function_handler(&transport, event))).await
}
