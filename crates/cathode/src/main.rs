use biome::Config;
use lambda_runtime::{run, service_fn, tracing, Error};

mod handler;
use handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env();
    let client = biome::lambda_client().await;

    run(service_fn(|event| function_handler(&client, &config, event))).await
}
