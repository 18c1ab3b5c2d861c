use biome::{Config, Gate, Invoke};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

/// Stamps the event with the environment, hands it to this biome's jumpgate
/// and returns the jumpgate's parsed reply.
pub(crate) async fn function_handler<I>(
    invoker: &I,
    config: &Config,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    I: Invoke + ?Sized,
{
    let (mut event, _context) = event.into_parts();
    biome::stamp_env(&mut event, config.env());

    let target = config.target(Gate::Jumpgate);
    let payload = biome::forward(invoker, &target, &event)
        .await?
        .ok_or_else(|| biome::Error::EmptyPayload {
            function_name: target,
        })?;

    Ok(serde_json::from_slice(&payload)?)
}
