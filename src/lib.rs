//! Blocking Rust client for the TeamsClone chat-simulation environment.
//!
//! The backend drives a Teams-style chat world and exposes the classic RL
//! loop over HTTP (`/env/reset`, `/env/step`, ...). [`EnvClient`] handles the
//! wire protocol; [`Observation`] is a read-only projection over one state
//! snapshot for agent-side queries.

pub mod client;
pub mod obs;

pub use client::{Action, ActionCatalog, ClientError, EnvClient, StepResult};
pub use obs::Observation;
