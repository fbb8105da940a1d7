//! Request-scoped entities exchanged with callers.
//!
//! Nothing here outlives a single `POST /api/agent/run` call.

use super::types::{ChatMessage, MessageRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Speaker of a caller-supplied conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
    System,
}

impl From<TurnRole> for MessageRole {
    fn from(role: TurnRole) -> Self {
        match role {
            TurnRole::User => MessageRole::User,
            TurnRole::Assistant => MessageRole::Assistant,
            TurnRole::System => MessageRole::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl From<&ConversationTurn> for ChatMessage {
    fn from(turn: &ConversationTurn) -> Self {
        ChatMessage::new(turn.role.into(), turn.content.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentRequest {
    /// Opaque correlation key chosen by the caller.
    #[serde(alias = "conversation_id")]
    pub conversation_id: String,
    /// The task handed to the agent.
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

impl AgentRequest {
    pub fn new(conversation_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            message: message.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

/// Consolidated outcome of one agent run, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgentRunResult {
    #[serde(rename = "response")]
    pub final_answer: String,
    #[serde(rename = "steps")]
    pub steps_taken: Vec<String>,
}
