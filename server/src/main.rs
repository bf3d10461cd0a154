use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use common::{ErrorResponse, InvalidRequest, QueryRequest, QueryResponse};
use thiserror::Error;
use tracing::{error, info};

use crate::bridge::{BridgeConfig, InferenceBridge};

mod bridge;

const DEFAULT_API_BASE: &str = "https://router.huggingface.co/v1";
const DEFAULT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";
const MAX_OUTPUT_TOKENS: u32 = 500;

#[derive(Clone)]
struct AppState {
	bridge: Arc<InferenceBridge>,
}

#[derive(Debug, Error)]
enum ServerAppError {
	#[error("invalid request: {0}")]
	InvalidRequest(#[from] InvalidRequest),
	// Upstream detail is passed through verbatim; acceptable for this trust model.
	#[error("{0}")]
	Upstream(#[from] async_openai::error::OpenAIError),
}

impl IntoResponse for ServerAppError {
	fn into_response(self) -> Response {
		let status = match self {
			Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
			Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
		};
		(status, Json(ErrorResponse { error: self.to_string() })).into_response()
	}
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();
	dotenvy::dotenv().ok();

	let config = BridgeConfig {
		api_key: env::var("INFERENCE_API_KEY").expect("INFERENCE_API_KEY must be set"),
		api_base: env::var("INFERENCE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
		model: env::var("INFERENCE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
		max_tokens: MAX_OUTPUT_TOKENS,
	};
	let state = AppState { bridge: Arc::new(InferenceBridge::new(config)) };

	let port: u16 = env::var("SERVER_PORT").unwrap_or_else(|_| "3001".to_string()).parse().expect("SERVER_PORT must be a number");

	let app = Router::new().route("/api/query", post(query_handler)).with_state(state);

	let addr = SocketAddr::from(([0, 0, 0, 0], port));
	info!("Server listening on {}", addr);
	let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
	axum::serve(listener, app).await.unwrap();
}

async fn query_handler(State(state): State<AppState>, Json(payload): Json<QueryRequest>) -> Result<Json<QueryResponse>, ServerAppError> {
	payload.validate()?;
	let response = state.bridge.query(&payload.messages).await.inspect_err(|e| error!("upstream inference call failed: {e}"))?;
	Ok(Json(QueryResponse { response }))
}
