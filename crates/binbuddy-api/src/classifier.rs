use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PREDICT_PATH: &str = "/predict";

// The server only looks at this multipart field; filename and content type
// are fixed no matter what file the photo actually came from.
const UPLOAD_FIELD: &str = "file";
const UPLOAD_FILENAME: &str = "photo.jpg";
const UPLOAD_MIME: &str = "image/jpeg";

// Liveness probes get a short timeout; predictions get none, since the model
// can take a while to answer on a cold start.
const PING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Bad prediction response: {0}")]
    BadPrediction(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

pub struct ClassifierClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Build a client for the given service base URL, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("binbuddy/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a photo and get the predicted waste category back.
    pub async fn predict(&self, image: Vec<u8>) -> Result<Prediction> {
        let url = format!("{}{}", self.base_url, PREDICT_PATH);

        let part = reqwest::multipart::Part::bytes(image)
            .file_name(UPLOAD_FILENAME)
            .mime_str(UPLOAD_MIME)?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(url = %url, "uploading photo for classification");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_prediction(status, &body)
    }

    /// Check whether the service is reachable. GET on the service root; the
    /// reference server answers it with a plain-text greeting.
    pub async fn ping(&self) -> bool {
        let url = format!("{}/", self.base_url);

        match self.client.get(&url).timeout(PING_TIMEOUT).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!(error = %err, "classifier ping failed");
                false
            }
        }
    }
}

/// Interpret the classifier's HTTP answer.
///
/// Success is a 2xx status with a JSON body carrying a non-empty
/// `predicted_class`; the server reports failures as `{"error": "..."}` under
/// a 4xx/5xx status.
pub fn parse_prediction(status: StatusCode, body: &str) -> Result<Prediction> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("Status {}: {}", status, body));
        return Err(ClassifierError::RequestFailed(message));
    }

    let prediction: Prediction = serde_json::from_str(body)
        .map_err(|e| ClassifierError::BadPrediction(format!("unreadable body: {}", e)))?;

    // An empty class means the model produced nothing usable.
    if prediction.predicted_class.is_empty() {
        return Err(ClassifierError::BadPrediction(
            "response carried no predicted class".to_string(),
        ));
    }

    Ok(prediction)
}

/// Successful answer from `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_class: String,
    #[serde(default)]
    pub confidence: f32,
}

/// Error answer the service sends alongside a 4xx/5xx status.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    error: String,
}
