use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use shared::{AssessmentInput, FieldOptions, PredictionResponse};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("URL construction failed: {0}")]
    Url(#[from] url::ParseError),
    #[error("prediction service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// The inference host that owns the option lists and the classifier.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn fetch_options(&self) -> Result<FieldOptions, UpstreamError>;

    async fn predict(&self, input: &AssessmentInput) -> Result<PredictionResponse, UpstreamError>;
}

#[derive(Clone)]
pub struct HttpPredictionService {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpPredictionService {
    /// `base_url` must end in `/` so endpoint paths join beneath it.
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, UpstreamError> {
        Ok(self.base_url.join(path)?)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn fetch_options(&self) -> Result<FieldOptions, UpstreamError> {
        let url = self.endpoint("options")?;
        log::debug!("Fetching options from {}", url);
        let response = self.http_client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn predict(&self, input: &AssessmentInput) -> Result<PredictionResponse, UpstreamError> {
        let url = self.endpoint("predict")?;
        log::debug!("Posting assessment to {}", url);
        let response = self.http_client.post(url).json(input).send().await?;
        Self::decode(response).await
    }
}
