use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod history;
pub mod typing;

pub use history::{History, HistoryEntry};
pub use typing::TypingReveal;

/// The only failure text ever shown to the user; the underlying detail is logged instead.
pub const GENERIC_FAILURE_MESSAGE: &str = "We are facing some issues, please try again later";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	System,
	User,
	Assistant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
	pub role: Role,
	pub content: String,
}

/// What the user asked the model to do with their text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionMode {
	#[default]
	Summarize,
	Translate,
}

impl ActionMode {
	/// Display label for the mode selector.
	pub fn label(self) -> &'static str {
		match self {
			Self::Summarize => "Summarize",
			Self::Translate => "Translate",
		}
	}

	pub fn system_prompt(self) -> &'static str {
		match self {
			Self::Summarize => "You are a text summarizer. Please summarize the following text without generating any extra content.",
			Self::Translate => "You are a translator. Please translate the following text without generating any extra content.",
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
	pub messages: Vec<Message>,
}

impl QueryRequest {
	/// Builds the two-message prompt for one submission: the mode's fixed
	/// system instruction followed by the user's text verbatim.
	pub fn for_action(mode: ActionMode, input: impl Into<String>) -> Self {
		Self {
			messages: vec![
				Message { role: Role::System, content: mode.system_prompt().to_string() },
				Message { role: Role::User, content: input.into() },
			],
		}
	}

	pub fn validate(&self) -> Result<(), InvalidRequest> {
		if self.messages.is_empty() {
			return Err(InvalidRequest::EmptyMessages);
		}
		Ok(())
	}
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
	#[error("messages must be a non-empty list")]
	EmptyMessages,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QueryResponse {
	pub response: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
	pub error: String,
}

/// Client-side failure reaching the query server. The UI collapses every
/// variant into [`GENERIC_FAILURE_MESSAGE`] for display.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("Could not reach the query server")]
	Network,
	#[error("The server rejected the request: {0}")]
	Server(String),
	#[error("Could not decode the server response")]
	Decode,
}
