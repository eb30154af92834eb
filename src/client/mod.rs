//! HTTP client for the five environment operations.
//!
//! Every call is a single blocking round trip: no retries, no caching, no
//! session state held between calls. Transport failures and non-2xx statuses
//! surface immediately as [`ClientError`].

pub mod errors;
pub mod types;

pub use errors::ClientError;
pub use types::{Action, ActionCatalog, StepResult};

use reqwest::blocking::{Client as HttpClient, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Blocking client for the environment API at `<base>/env/...`.
pub struct EnvClient {
    env_url: String,
    http: HttpClient,
}

impl EnvClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            env_url: format!("{}/env", base_url.trim_end_matches('/')),
            http: HttpClient::new(),
        }
    }

    /// Reset the environment and return the initial state snapshot.
    ///
    /// Unwraps the response envelope's `state` key, defaulting to `{}` when
    /// the backend omits it.
    pub fn reset(&self) -> Result<Value, ClientError> {
        let body: Value = self.post("reset", None::<&Value>)?;
        debug!("env reset");
        Ok(unwrap_envelope(body, "state"))
    }

    /// Fetch the current state snapshot without advancing the environment.
    ///
    /// Same `state` envelope unwrap as [`reset`](Self::reset).
    pub fn state(&self) -> Result<Value, ClientError> {
        let body: Value = self.get("state")?;
        Ok(unwrap_envelope(body, "state"))
    }

    /// Execute one action and return the step result verbatim.
    pub fn step(&self, action: &Action) -> Result<StepResult, ClientError> {
        let result: StepResult = self.post("step", Some(&json!({ "action": action })))?;
        debug!(reward = result.reward, done = result.done, "env step");
        Ok(result)
    }

    /// List the action types and channels the backend currently offers.
    pub fn actions(&self) -> Result<ActionCatalog, ClientError> {
        self.get("actions")
    }

    /// Fetch the running episode counters.
    ///
    /// Unwraps the envelope's `stats` key, defaulting to `{}` when absent.
    pub fn stats(&self) -> Result<Value, ClientError> {
        let body: Value = self.get("stats")?;
        Ok(unwrap_envelope(body, "stats"))
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(format!("{}/{endpoint}", self.env_url))
            .send()?;
        decode(endpoint, response)
    }

    fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let mut request = self.http.post(format!("{}/{endpoint}", self.env_url));
        if let Some(body) = body {
            request = request.json(body);
        }
        decode(endpoint, request.send()?)
    }
}

impl Default for EnvClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            endpoint: endpoint.to_string(),
            status,
        });
    }
    response.json().map_err(|source| ClientError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

// The envelope asymmetry is deliberate: reset/state/stats extract one key
// with an empty-object default, while step/actions pass through verbatim.
fn unwrap_envelope(mut body: Value, key: &str) -> Value {
    match body.get_mut(key) {
        Some(inner) => inner.take(),
        None => Value::Object(Map::new()),
    }
}
