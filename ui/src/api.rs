use common::{AppError, ErrorResponse, QueryRequest, QueryResponse};
use reqwest::Client;

fn api_url() -> String {
	let origin = web_sys::window().and_then(|window| window.location().origin().ok()).unwrap_or_else(|| "http://localhost:3001".to_string());
	format!("{origin}/api/query")
}

/// Sends one submission to the query server and returns the full response
/// text. Fails with a structured [`AppError`]; the caller decides what the
/// user gets to see.
pub async fn submit_query(request: &QueryRequest) -> Result<String, AppError> {
	let res = Client::new().post(api_url()).json(request).send().await.map_err(|_| AppError::Network)?;

	if !res.status().is_success() {
		let detail = res.json::<ErrorResponse>().await.map(|body| body.error).unwrap_or_else(|_| "unreadable error body".to_string());
		return Err(AppError::Server(detail));
	}

	let body = res.json::<QueryResponse>().await.map_err(|_| AppError::Decode)?;
	Ok(body.response)
}
