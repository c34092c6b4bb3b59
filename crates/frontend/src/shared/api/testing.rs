//! Scripted transport for access-layer tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::request::HttpRequest;
use super::transport::{RawResponse, Transport, TransportError};

enum Script {
    Respond(RawResponse),
    Fail(String),
    RespondAfter(oneshot::Receiver<()>, RawResponse),
}

/// Answers each URL once with a canned outcome and records what was sent.
/// Unscripted URLs get a 404 with a `detail`.
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: Mutex<HashMap<String, Script>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: String, response: RawResponse) -> Self {
        self.script(url, Script::Respond(response))
    }

    pub fn fail(self, url: String, detail: &str) -> Self {
        self.script(url, Script::Fail(detail.to_string()))
    }

    /// Hold the response until `gate` fires (or its sender is dropped).
    pub fn respond_after(
        self,
        url: String,
        gate: oneshot::Receiver<()>,
        response: RawResponse,
    ) -> Self {
        self.script(url, Script::RespondAfter(gate, response))
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    fn script(self, url: String, script: Script) -> Self {
        self.scripts.lock().unwrap().insert(url, script);
        self
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let script = self.scripts.lock().unwrap().remove(&request.url);
        self.sent.lock().unwrap().push(request);

        match script {
            Some(Script::Respond(response)) => Ok(response),
            Some(Script::Fail(detail)) => Err(TransportError(detail)),
            Some(Script::RespondAfter(gate, response)) => {
                let _ = gate.await;
                Ok(response)
            }
            None => Ok(RawResponse::new(404, r#"{"detail": "Not found."}"#)),
        }
    }
}
