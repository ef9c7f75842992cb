//! Estimation - Model (the Gemini call)

use crate::shared::config;
use contracts::estimation::{
    parse_generate_content, EstimationError, EstimationRequest, EstimationResult,
    GenerateContentRequest,
};
use gloo_net::http::Request;

/// Runs one estimation: exactly one `generateContent` call per invocation.
///
/// Validation failures return before any transport work. No retry and no
/// timeout here; the user resubmits the form.
pub async fn submit(request: &EstimationRequest) -> Result<EstimationResult, EstimationError> {
    request.validate()?;

    let payload = GenerateContentRequest::for_estimation(request);

    let response = Request::post(&config::generate_content_url())
        .header("x-goog-api-key", config::api_key())
        .json(&payload)
        .map_err(|e| EstimationError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| EstimationError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(EstimationError::Network(format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| EstimationError::Network(e.to_string()))?;

    parse_generate_content(&body)
}
