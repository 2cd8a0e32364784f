use gloo_net::http::{Request, Response};
use shared::{AssessmentInput, FieldOptions, PredictionLabel, PredictionResponse};
use thiserror::Error;

/// Base of the gateway API. Same origin unless overridden at build time.
pub const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(base) => base,
    None => "/api",
};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to encode request: {0}")]
    Encode(gloo_net::Error),
    #[error("Network error: {0}")]
    Network(gloo_net::Error),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(gloo_net::Error),
}

fn endpoint(path: &str) -> String {
    format!("{}/{}", API_BASE.trim_end_matches('/'), path)
}

async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

pub async fn fetch_options() -> Result<FieldOptions, ApiError> {
    let resp = Request::get(&endpoint("options"))
        .send()
        .await
        .map_err(ApiError::Network)?;
    let resp = ensure_ok(resp).await?;
    resp.json::<FieldOptions>().await.map_err(ApiError::Decode)
}

pub async fn submit_prediction(input: &AssessmentInput) -> Result<PredictionLabel, ApiError> {
    let resp = Request::post(&endpoint("predict"))
        .json(input)
        .map_err(ApiError::Encode)?
        .send()
        .await
        .map_err(ApiError::Network)?;
    let resp = ensure_ok(resp).await?;
    let payload = resp
        .json::<PredictionResponse>()
        .await
        .map_err(ApiError::Decode)?;
    Ok(payload.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hang_off_one_base() {
        let base = API_BASE.trim_end_matches('/');
        assert_eq!(endpoint("options"), format!("{}/options", base));
        assert_eq!(endpoint("predict"), format!("{}/predict", base));
    }
}
