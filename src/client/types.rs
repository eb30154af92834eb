use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A tagged instruction sent to the environment to advance it one step.
///
/// The client performs no validation of `kind` or `payload`; the backend is
/// the authority on action shape and rejects what it does not understand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl Action {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Send a message to the agent's current channel.
    pub fn send_message(content: &str) -> Self {
        Self::new("send_message", json!({ "content": content }))
    }

    /// Send a message to a specific channel.
    pub fn send_message_to(content: &str, channel_id: &str) -> Self {
        Self::new(
            "send_message",
            json!({ "content": content, "channelId": channel_id }),
        )
    }

    /// Switch the agent to a different channel.
    pub fn switch_channel(channel_id: &str) -> Self {
        Self::new("switch_channel", json!({ "channelId": channel_id }))
    }

    /// React to a message with an emoji.
    pub fn react_to_message(message_id: &str, reaction: &str) -> Self {
        Self::new(
            "react_to_message",
            json!({ "messageId": message_id, "reaction": reaction }),
        )
    }

    /// Join a call in the agent's current channel.
    pub fn join_call() -> Self {
        Self::new("join_call", json!({}))
    }

    /// Join a call in a specific channel.
    pub fn join_call_in(channel_id: &str) -> Self {
        Self::new("join_call", json!({ "channelId": channel_id }))
    }
}

/// The backend's `/env/step` response, passed through verbatim.
///
/// All four documented keys are required; a response missing one of them is
/// a decode failure, not something the client papers over. Keys beyond the
/// documented four are kept in `extra` so nothing the backend sent is lost.
#[derive(Debug, Clone, Deserialize)]
pub struct StepResult {
    /// Next state snapshot.
    pub state: Value,
    /// Reward signal for the action just taken.
    pub reward: f64,
    /// Whether the episode has terminated.
    pub done: bool,
    /// Auxiliary backend data, arbitrary shape.
    pub info: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The backend's `/env/actions` response, passed through verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionCatalog {
    /// Action type tags the backend accepts.
    pub actions: Vec<String>,
    /// Channel identifiers actions can target.
    pub channels: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
