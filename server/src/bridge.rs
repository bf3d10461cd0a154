use async_openai::error::OpenAIError;
use async_openai::types::{
	ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
	CreateChatCompletionRequestArgs, CreateChatCompletionStreamResponse,
};
use async_openai::{Client, config::OpenAIConfig};
use common::{Message, Role};
use futures::{Stream, StreamExt};

/// Explicit bridge configuration, read from the environment at startup and
/// handed to [`InferenceBridge::new`]. The API key never leaves the server.
pub struct BridgeConfig {
	pub api_key: String,
	pub api_base: String,
	pub model: String,
	pub max_tokens: u32,
}

/// Forwards a list of chat messages to the hosted inference API as one
/// streaming chat-completion call and buffers the streamed text into a single
/// string. Stateless across invocations; safe to share behind an `Arc`.
pub struct InferenceBridge {
	client: Client<OpenAIConfig>,
	model: String,
	max_tokens: u32,
}

impl InferenceBridge {
	pub fn new(config: BridgeConfig) -> Self {
		let client = Client::with_config(OpenAIConfig::new().with_api_key(config.api_key).with_api_base(config.api_base));
		Self { client, model: config.model, max_tokens: config.max_tokens }
	}

	/// Runs one streaming completion and returns the full concatenated text.
	/// Any failure while opening or iterating the stream aborts the whole
	/// call; partial accumulation is never returned.
	pub async fn query(&self, messages: &[Message]) -> Result<String, OpenAIError> {
		let messages = messages.iter().map(to_request_message).collect::<Result<Vec<_>, _>>()?;
		let request = CreateChatCompletionRequestArgs::default().model(self.model.clone()).max_tokens(self.max_tokens).messages(messages).stream(true).build()?;
		let stream = self.client.chat().create_stream(request).await?;
		collect_response(stream).await
	}
}

fn to_request_message(message: &Message) -> Result<ChatCompletionRequestMessage, OpenAIError> {
	let content = message.content.clone();
	Ok(match message.role {
		Role::System => ChatCompletionRequestSystemMessageArgs::default().content(content).build()?.into(),
		Role::User => ChatCompletionRequestUserMessageArgs::default().content(content).build()?.into(),
		Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default().content(content).build()?.into(),
	})
}

/// Folds a chunk stream into the ordered concatenation of its text deltas. A
/// chunk without a delta contributes the empty string; that is not an error.
async fn collect_response<S>(mut stream: S) -> Result<String, OpenAIError>
where
	S: Stream<Item = Result<CreateChatCompletionStreamResponse, OpenAIError>> + Unpin,
{
	let mut result = String::new();
	while let Some(chunk) = stream.next().await {
		let chunk = chunk?;
		if let Some(content) = chunk.choices.first().and_then(|choice| choice.delta.content.as_deref()) {
			result.push_str(content);
		}
	}
	Ok(result)
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		futures::stream,
		serde_json::{Value, json},
	};

	fn chunk_with_delta(delta: Value) -> CreateChatCompletionStreamResponse {
		serde_json::from_value(json!({
			"id": "chatcmpl-test",
			"choices": [{ "index": 0, "delta": delta, "finish_reason": null }],
			"created": 0,
			"model": "test-model",
			"object": "chat.completion.chunk",
		}))
		.unwrap()
	}

	fn chunk(content: &str) -> CreateChatCompletionStreamResponse {
		chunk_with_delta(json!({ "content": content }))
	}

	#[tokio::test]
	async fn concatenates_deltas_in_arrival_order() {
		let chunks = stream::iter(vec![Ok(chunk("The ")), Ok(chunk("quick ")), Ok(chunk("fox."))]);
		assert_eq!(collect_response(chunks).await.unwrap(), "The quick fox.");
	}

	#[tokio::test]
	async fn a_chunk_without_a_delta_contributes_nothing() {
		let chunks = stream::iter(vec![Ok(chunk("Hel")), Ok(chunk_with_delta(json!({}))), Ok(chunk("lo"))]);
		assert_eq!(collect_response(chunks).await.unwrap(), "Hello");
	}

	#[tokio::test]
	async fn a_chunk_without_choices_contributes_nothing() {
		let empty: CreateChatCompletionStreamResponse = serde_json::from_value(json!({
			"id": "chatcmpl-test",
			"choices": [],
			"created": 0,
			"model": "test-model",
			"object": "chat.completion.chunk",
		}))
		.unwrap();
		let chunks = stream::iter(vec![Ok(chunk("a")), Ok(empty), Ok(chunk("b"))]);
		assert_eq!(collect_response(chunks).await.unwrap(), "ab");
	}

	#[tokio::test]
	async fn an_empty_stream_yields_an_empty_response() {
		let chunks = stream::iter(Vec::<Result<CreateChatCompletionStreamResponse, OpenAIError>>::new());
		assert_eq!(collect_response(chunks).await.unwrap(), "");
	}

	#[tokio::test]
	async fn a_stream_error_discards_the_partial_accumulation() {
		let chunks = stream::iter(vec![Ok(chunk("partial ")), Err(OpenAIError::StreamError("connection reset".to_string())), Ok(chunk("text"))]);
		assert!(collect_response(chunks).await.is_err());
	}

	#[test]
	fn request_messages_keep_role_and_content() {
		let message = to_request_message(&Message { role: Role::User, content: "translate this".to_string() }).unwrap();
		assert!(matches!(message, ChatCompletionRequestMessage::User(_)));
		let message = to_request_message(&Message { role: Role::System, content: String::new() }).unwrap();
		assert!(matches!(message, ChatCompletionRequestMessage::System(_)));
		let message = to_request_message(&Message { role: Role::Assistant, content: "earlier reply".to_string() }).unwrap();
		assert!(matches!(message, ChatCompletionRequestMessage::Assistant(_)));
	}
}
