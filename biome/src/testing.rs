//! In-memory [`Invoke`] for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::invoke::{Invocation, Invoke};

/// Records every call and answers each one with the same canned outcome.
pub struct RecordingInvoker {
    reply: std::result::Result<Invocation, String>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingInvoker {
    pub fn new(reply: Invocation) -> Self {
        Self {
            reply: Ok(reply),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(payload: &[u8]) -> Self {
        Self::new(Invocation {
            payload: Some(payload.to_vec()),
            function_error: None,
        })
    }

    pub fn empty() -> Self {
        Self::new(Invocation::default())
    }

    /// Every call fails at the transport with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Function names and decoded payloads, in call order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Invoke for RecordingInvoker {
    async fn invoke_function(&self, function_name: &str, payload: Vec<u8>) -> Result<Invocation> {
        let event = serde_json::from_slice(&payload)?;
        self.calls
            .lock()
            .unwrap()
            .push((function_name.to_string(), event));

        self.reply.clone().map_err(|message| Error::Invoke {
            function_name: function_name.to_string(),
            message,
        })
    }
}
