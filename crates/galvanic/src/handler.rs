use biome::Invoke;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde_json::Value;

use crate::transport::{LocalTransport, Transport};

pub(crate) async fn function_handler<I: Invoke>(
    transport: &Transport<I>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let (event, _context) = event.into_parts();

    match transport {
        Transport::Local(local) => Ok(Value::String(local_reply(local, &event).await)),
        Transport::Remote(remote) => Ok(remote.forward(event).await?),
    }
}

/// Local mode always answers with a JSON string: the gateway's reply, or an
/// `{"error": ...}` document when the request failed.
async fn local_reply(local: &LocalTransport, event: &Value) -> String {
    match local.post(event).await {
        Ok(data) => data.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "local gateway request failed");
            err.envelope().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RemoteTransport;
    use axum::{routing::post, Json, Router};
    use biome::testing::RecordingInvoker;
    use biome::Config;
    use lambda_runtime::Context;
    use serde_json::json;

    fn lambda_event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    async fn local_mode_posts_the_raw_event() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let app = Router::new().route(
            "/",
            post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }),
        );
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let transport: Transport<RecordingInvoker> =
            Transport::Local(LocalTransport::new(format!("http://{addr}")));
        let reply = function_handler(&transport, lambda_event(json!({ "action": "warp" })))
            .await
            .expect("handler failed");

        assert_eq!(reply, json!(r#"{"received":{"action":"warp"}}"#));
    }

    #[tokio::test]
    async fn local_mode_resolves_network_failures_as_error_envelopes() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let transport: Transport<RecordingInvoker> =
            Transport::Local(LocalTransport::new(format!("http://{addr}")));
        let reply = function_handler(&transport, lambda_event(json!({})))
            .await
            .expect("local mode must not reject");

        let text = reply.as_str().expect("reply is a string");
        let envelope: Value = serde_json::from_str(text).expect("envelope is JSON");
        assert_eq!(envelope["error"]["name"], json!("RequestError"));
        assert!(envelope["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn remote_mode_returns_the_payload_unparsed() {
        let invoker = RecordingInvoker::replying(br#"{"body":"warped"}"#);
        let config = Config::new(Some("dev".to_string()));
        let transport = Transport::Remote(RemoteTransport::new(invoker, &config));

        let reply = function_handler(&transport, lambda_event(json!({ "action": "warp" })))
            .await
            .expect("handler failed");

        assert_eq!(reply, Value::String(r#"{"body":"warped"}"#.to_string()));
    }

    #[tokio::test]
    async fn remote_mode_propagates_failures() {
        let invoker = RecordingInvoker::failing("throttled");
        let config = Config::new(Some("prod".to_string()));
        let transport = Transport::Remote(RemoteTransport::new(invoker, &config));

        let result = function_handler(&transport, lambda_event(json!({}))).await;

        assert!(result.is_err());
    }
}
