use async_trait::async_trait;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::primitives::Blob;
use serde_json::Value;

use crate::error::{Error, Result};

/// Raw outcome of a synchronous function invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub payload: Option<Vec<u8>>,
    /// Set by Lambda when the downstream function itself failed. The payload
    /// then holds its error document.
    pub function_error: Option<String>,
}

/// Invoke-by-name transport to another function.
#[async_trait]
pub trait Invoke: Send + Sync {
    async fn invoke_function(&self, function_name: &str, payload: Vec<u8>) -> Result<Invocation>;
}

#[async_trait]
impl Invoke for aws_sdk_lambda::Client {
    async fn invoke_function(&self, function_name: &str, payload: Vec<u8>) -> Result<Invocation> {
        let output = self
            .invoke()
            .function_name(function_name)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|err| Error::Invoke {
                function_name: function_name.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(Invocation {
            payload: output.payload().map(|blob| blob.as_ref().to_vec()),
            function_error: output.function_error().map(str::to_owned),
        })
    }
}

/// Builds a Lambda client from the default credential and region chain.
///
/// `AWS_ENDPOINT_URL` is honoured by the chain, which is how the client is
/// pointed at a local emulator.
pub async fn lambda_client() -> aws_sdk_lambda::Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    aws_sdk_lambda::Client::new(&config)
}

/// Sends `event` as JSON to `function_name` and returns the response payload
/// as received.
pub async fn forward<I>(invoker: &I, function_name: &str, event: &Value) -> Result<Option<Vec<u8>>>
where
    I: Invoke + ?Sized,
{
    let payload = serde_json::to_vec(event)?;
    tracing::debug!(function_name, bytes = payload.len(), "forwarding event");

    let invocation = invoker.invoke_function(function_name, payload).await?;
    if let Some(function_error) = &invocation.function_error {
        tracing::warn!(function_name, %function_error, "downstream function failed");
    }

    Ok(invocation.payload)
}
