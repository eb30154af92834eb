//! Typed sub-views of a state snapshot.
//!
//! The backend owns the snapshot shape and guarantees nothing, so every
//! field defaults on absence. Tolerance for missing data lives here, at
//! deserialization, rather than at each access site.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentState {
    pub current_team_id: String,
    pub current_channel_id: String,
    /// Absent until the backend assigns an identity; queries fall back to
    /// the literal id `agent`.
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: Option<f64>,
    pub reactions: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Channel {
    /// Kept optional: a channel with no id still occupies its slot in the
    /// flattened id list.
    pub id: Option<String>,
    pub name: String,
    pub team_id: String,
    pub unread: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub status: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeStats {
    pub step_count: u64,
    pub total_reward: f64,
    pub messages_sent: u64,
    pub channels_switched: u64,
    pub start_time: Option<f64>,
}
