//! Read-only projection over one environment state snapshot.

pub mod types;

pub use types::{AgentState, Channel, EpisodeStats, Message, Team, User};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default trailing window for [`Observation::recent_message_contents`].
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// One state snapshot, destructured into typed sub-views.
///
/// Construction never fails: a missing or malformed sub-structure degrades
/// to its empty default. The snapshot is copied at construction, so the
/// source `Value` is free to be dropped or mutated afterwards without
/// affecting query results. No query performs I/O.
#[derive(Debug, Clone, Default)]
pub struct Observation {
    agent_state: AgentState,
    current_channel: Channel,
    recent_messages: Vec<Message>,
    teams: Vec<Team>,
    users: Vec<User>,
    episode_stats: EpisodeStats,
}

impl Observation {
    pub fn new(snapshot: &Value) -> Self {
        Self {
            agent_state: sub_view(snapshot, "agentState"),
            current_channel: sub_view(snapshot, "currentChannel"),
            recent_messages: sub_items(snapshot, "recentMessages"),
            teams: sub_items(snapshot, "teams"),
            users: sub_items(snapshot, "users"),
            episode_stats: sub_view(snapshot, "episodeStats"),
        }
    }

    /// The channel the agent is currently in, or `""` if unknown.
    pub fn current_channel_id(&self) -> &str {
        &self.agent_state.current_channel_id
    }

    /// Contents of the last `limit` messages, oldest to newest.
    ///
    /// Returns all of them when fewer than `limit` exist; a message with no
    /// content contributes an empty string. See [`DEFAULT_RECENT_LIMIT`].
    pub fn recent_message_contents(&self, limit: usize) -> Vec<String> {
        let start = self.recent_messages.len().saturating_sub(limit);
        self.recent_messages[start..]
            .iter()
            .map(|msg| msg.content.clone())
            .collect()
    }

    /// Whether any recent message mentions the agent.
    ///
    /// Scans the entire message sequence for the literal substring
    /// `@<userId>` (no word-boundary check, so the id `bo` matches `@bob`).
    pub fn has_unread_mentions(&self) -> bool {
        let needle = format!("@{}", self.agent_id());
        self.recent_messages
            .iter()
            .any(|msg| msg.content.contains(&needle))
    }

    /// Every channel id across all teams, in team order then channel order.
    ///
    /// A channel lacking an id contributes `None` rather than being skipped,
    /// so positions line up with the backend's channel listing.
    pub fn all_channel_ids(&self) -> Vec<Option<String>> {
        self.teams
            .iter()
            .flat_map(|team| team.channels.iter().map(|channel| channel.id.clone()))
            .collect()
    }

    /// The agent's user id, falling back to the literal id `agent`.
    pub fn agent_id(&self) -> &str {
        self.agent_state.user_id.as_deref().unwrap_or("agent")
    }

    pub fn agent_state(&self) -> &AgentState {
        &self.agent_state
    }

    /// Metadata of the active channel.
    pub fn current_channel(&self) -> &Channel {
        &self.current_channel
    }

    pub fn recent_messages(&self) -> &[Message] {
        &self.recent_messages
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Running episode counters.
    pub fn episode_stats(&self) -> &EpisodeStats {
        &self.episode_stats
    }
}

// Only an object is a candidate sub-view; serde would otherwise fill a
// struct positionally from a JSON array, turning `[1, 2, 3]` into counters.
fn sub_view<T>(snapshot: &Value, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    snapshot
        .get(key)
        .filter(|value| value.is_object())
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}

// Sequences get per-item leniency: one malformed element degrades to that
// element's default instead of emptying the whole list. The same
// object-only rule applies per element.
fn sub_items<T>(snapshot: &Value, key: &str) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    match snapshot.get(key).and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(|item| {
                if item.is_object() {
                    serde_json::from_value(item.clone()).unwrap_or_default()
                } else {
                    T::default()
                }
            })
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_snapshot_answers_every_query_with_defaults() {
        let obs = Observation::new(&json!({}));
        assert_eq!(obs.current_channel_id(), "");
        assert!(obs.recent_message_contents(DEFAULT_RECENT_LIMIT).is_empty());
        assert!(!obs.has_unread_mentions());
        assert!(obs.all_channel_ids().is_empty());
        assert_eq!(obs.agent_id(), "agent");
        assert_eq!(obs.episode_stats().step_count, 0);
    }

    #[test]
    fn malformed_sub_structures_degrade_to_defaults() {
        let obs = Observation::new(&json!({
            "agentState": 42,
            "recentMessages": "not a list",
            "teams": { "oops": true },
            "episodeStats": [1, 2, 3],
        }));
        assert_eq!(obs.current_channel_id(), "");
        assert!(obs.recent_message_contents(5).is_empty());
        assert!(obs.all_channel_ids().is_empty());
        assert_eq!(obs.episode_stats().step_count, 0);
        assert_eq!(obs.episode_stats().total_reward, 0.0);
    }

    #[test]
    fn array_shaped_sub_view_does_not_fill_fields_positionally() {
        let obs = Observation::new(&json!({
            "agentState": ["team-1", "channel-1", "bot"],
        }));
        assert_eq!(obs.current_channel_id(), "");
        assert_eq!(obs.agent_id(), "agent");
    }

    #[test]
    fn recent_contents_take_trailing_window_in_order() {
        let messages: Vec<Value> = (0..10).map(|i| json!({ "content": format!("m{i}") })).collect();
        let obs = Observation::new(&json!({ "recentMessages": messages }));
        assert_eq!(
            obs.recent_message_contents(5),
            vec!["m5", "m6", "m7", "m8", "m9"]
        );
    }

    #[test]
    fn recent_contents_return_all_when_fewer_than_limit() {
        let obs = Observation::new(&json!({
            "recentMessages": [{ "content": "a" }, { "content": "b" }],
        }));
        assert_eq!(obs.recent_message_contents(5), vec!["a", "b"]);
    }

    #[test]
    fn message_without_content_contributes_empty_string() {
        let obs = Observation::new(&json!({
            "recentMessages": [{ "content": "a" }, { "userId": "user-1" }, 7],
        }));
        assert_eq!(obs.recent_message_contents(5), vec!["a", "", ""]);
    }

    #[test]
    fn array_shaped_message_element_degrades_to_default() {
        // An element must be an object; positional fill from an array would
        // otherwise invent id/channel/content fields.
        let obs = Observation::new(&json!({
            "recentMessages": [{ "content": "a" }, ["m-1", "channel-1", "user-1", "hello"]],
        }));
        assert_eq!(obs.recent_message_contents(5), vec!["a", ""]);
        assert!(!obs.has_unread_mentions());
    }

    #[test]
    fn mention_of_agent_user_id_is_detected() {
        let obs = Observation::new(&json!({
            "agentState": { "userId": "bot" },
            "recentMessages": [{ "content": "hello @bot" }],
        }));
        assert!(obs.has_unread_mentions());
    }

    #[test]
    fn mention_falls_back_to_literal_agent_id() {
        let obs = Observation::new(&json!({
            "recentMessages": [{ "content": "ping @agent" }],
        }));
        assert!(obs.has_unread_mentions());
    }

    #[test]
    fn mention_scan_covers_entire_sequence_not_just_window() {
        let mut messages = vec![json!({ "content": "hey @bot, early ping" })];
        messages.extend((0..9).map(|i| json!({ "content": format!("filler {i}") })));
        let obs = Observation::new(&json!({
            "agentState": { "userId": "bot" },
            "recentMessages": messages,
        }));
        assert!(obs.has_unread_mentions());
    }

    #[test]
    fn mention_match_is_literal_substring() {
        // No word-boundary logic: the id `bo` matches inside `@bob`.
        let obs = Observation::new(&json!({
            "agentState": { "userId": "bo" },
            "recentMessages": [{ "content": "ask @bob about it" }],
        }));
        assert!(obs.has_unread_mentions());
    }

    #[test]
    fn no_mention_returns_false() {
        let obs = Observation::new(&json!({
            "agentState": { "userId": "bot" },
            "recentMessages": [{ "content": "quiet day" }],
        }));
        assert!(!obs.has_unread_mentions());
    }

    #[test]
    fn channel_ids_flatten_in_team_then_channel_order() {
        let obs = Observation::new(&json!({
            "teams": [
                { "channels": [{ "id": "c1" }, { "id": "c2" }] },
                { "channels": [{ "id": "c3" }] },
            ],
        }));
        assert_eq!(
            obs.all_channel_ids(),
            vec![
                Some("c1".to_string()),
                Some("c2".to_string()),
                Some("c3".to_string()),
            ]
        );
    }

    #[test]
    fn channel_without_id_keeps_its_placeholder() {
        let obs = Observation::new(&json!({
            "teams": [{ "channels": [{ "id": "c1" }, { "name": "nameless" }] }],
        }));
        assert_eq!(obs.all_channel_ids(), vec![Some("c1".to_string()), None]);
    }

    #[test]
    fn typed_sub_views_parse_backend_shapes() {
        let obs = Observation::new(&json!({
            "agentState": {
                "currentTeamId": "team-1",
                "currentChannelId": "channel-1",
                "userId": "agent",
            },
            "currentChannel": {
                "id": "channel-1",
                "name": "General",
                "teamId": "team-1",
                "unread": 2,
            },
            "users": [{ "id": "user-1", "name": "Alice", "status": "available", "avatar": "👩" }],
            "episodeStats": {
                "stepCount": 7,
                "totalReward": 1.25,
                "messagesSent": 3,
                "channelsSwitched": 1,
                "startTime": 1700000000000.0,
            },
        }));
        assert_eq!(obs.current_channel_id(), "channel-1");
        assert_eq!(obs.current_channel().name, "General");
        assert_eq!(obs.current_channel().unread, 2);
        assert_eq!(obs.users()[0].name, "Alice");
        assert_eq!(obs.episode_stats().step_count, 7);
        assert_eq!(obs.episode_stats().total_reward, 1.25);
    }

    #[test]
    fn construction_copies_the_snapshot() {
        let mut snapshot = json!({ "agentState": { "currentChannelId": "channel-1" } });
        let obs = Observation::new(&snapshot);
        snapshot["agentState"]["currentChannelId"] = json!("channel-9");
        assert_eq!(obs.current_channel_id(), "channel-1");
    }
}
