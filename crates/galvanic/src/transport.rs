use std::future::Future;

use biome::{Config, Gate, Invoke};
use lambda_runtime::tracing;
use serde_json::{json, Value};

/// Development gateway that stands in for the warpgate when `ENV=NONE`.
pub(crate) const LOCAL_ENDPOINT: &str = "http://localhost:4000";

/// Wire path to the warpgate, picked once per instance.
pub(crate) enum Transport<I> {
    Local(LocalTransport),
    Remote(RemoteTransport<I>),
}

impl<I: Invoke> Transport<I> {
    /// Picks the local HTTP path for the `NONE` environment and the remote
    /// invocation path otherwise. `connect` only runs for the remote path.
    pub(crate) async fn select<F, Fut>(config: &Config, connect: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = I>,
    {
        if config.is_local() {
            Transport::Local(LocalTransport::new(LOCAL_ENDPOINT))
        } else {
            Transport::Remote(RemoteTransport::new(connect().await, config))
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Transport::Local(_) => "local",
            Transport::Remote(_) => "remote",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LocalError {
    #[error("request to local gateway failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("local gateway responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to read local gateway response: {0}")]
    Body(#[source] reqwest::Error),
}

impl LocalError {
    fn name(&self) -> &'static str {
        match self {
            LocalError::Request(_) => "RequestError",
            LocalError::Status { .. } => "ResponseError",
            LocalError::Body(_) => "BodyError",
        }
    }

    fn code(&self) -> Option<&'static str> {
        match self {
            LocalError::Request(err) | LocalError::Body(err) if err.is_timeout() => {
                Some("ETIMEDOUT")
            }
            LocalError::Request(err) if err.is_connect() => Some("ECONNREFUSED"),
            LocalError::Status { status, .. } if *status >= 500 => Some("ERR_BAD_RESPONSE"),
            LocalError::Status { .. } => Some("ERR_BAD_REQUEST"),
            _ => None,
        }
    }

    fn status(&self) -> Option<u16> {
        match self {
            LocalError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error document handed back to the caller in place of a reply.
    pub(crate) fn envelope(&self) -> Value {
        json!({
            "error": {
                "name": self.name(),
                "message": self.to_string(),
                "code": self.code(),
                "status": self.status(),
            }
        })
    }
}

pub(crate) struct LocalTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl LocalTransport {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POSTs the event as JSON and returns the reply body.
    ///
    /// A JSON body is returned parsed. Any other body is returned as a JSON
    /// string so the caller always gets a value back.
    pub(crate) async fn post(&self, event: &Value) -> Result<Value, LocalError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(event)
            .send()
            .await
            .map_err(LocalError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                tracing::debug!(error = %err, "failed to read error response body");
                String::new()
            });
            return Err(LocalError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(LocalError::Body)?;
        Ok(serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())))
    }
}

pub(crate) struct RemoteTransport<I> {
    invoker: I,
    env: Option<String>,
    target: String,
}

impl<I: Invoke> RemoteTransport<I> {
    pub(crate) fn new(invoker: I, config: &Config) -> Self {
        Self {
            invoker,
            env: config.env().map(str::to_owned),
            target: config.target(Gate::Warpgate),
        }
    }

    /// Stamps the event and sends it to the warpgate. The reply payload is
    /// handed back as its raw text, without parsing.
    pub(crate) async fn forward(&self, mut event: Value) -> biome::Result<Value> {
        biome::stamp_env(&mut event, self.env.as_deref());
        tracing::debug!(target_function = %self.target, "forwarding to warpgate");

        let payload = biome::forward(&self.invoker, &self.target, &event).await?;
        Ok(payload
            .map(|bytes| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
            .unwrap_or(Value::Null))
    }
}
