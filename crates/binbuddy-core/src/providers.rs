// Remote classifier provider - bridges the API client with the Classifier trait
use async_trait::async_trait;
use binbuddy_api::{ClassifierClient, ClassifierError};

use crate::{
    capture::{CaptureError, Classifier},
    models::{CapturedPhoto, ScanResult},
};

/// Wrapper around `ClassifierClient` that implements `Classifier`.
pub struct RemoteClassifier {
    client: ClassifierClient,
}

impl RemoteClassifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ClassifierClient::new(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.base_url()
    }

    /// Liveness check, used for the endpoint status badge.
    pub async fn ping(&self) -> bool {
        self.client.ping().await
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, photo: &CapturedPhoto) -> Result<ScanResult, CaptureError> {
        let prediction = self
            .client
            .predict(photo.bytes.clone())
            .await
            .map_err(map_client_error)?;

        Ok(ScanResult {
            category: prediction.predicted_class,
            confidence: prediction.confidence,
        })
    }
}

/// Convert client failures into the alert the flow shows for them.
fn map_client_error(err: ClassifierError) -> CaptureError {
    match err {
        ClassifierError::Network(e) => {
            tracing::warn!(error = %e, "upload failed");
            CaptureError::Network(e.to_string())
        }
        ClassifierError::RequestFailed(msg) => {
            tracing::warn!(error = %msg, "classifier rejected the request");
            CaptureError::Classification(
                "Failed to upload the image. Server responded with an error.".to_string(),
            )
        }
        ClassifierError::BadPrediction(detail) => {
            tracing::warn!(detail = %detail, "prediction missing from response");
            CaptureError::Classification("Error predicting the image.".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failures_read_as_server_errors() {
        let err = map_client_error(ClassifierError::RequestFailed("boom".to_string()));
        assert!(matches!(err, CaptureError::Classification(_)));
        assert_eq!(
            err.to_string(),
            "Failed to upload the image. Server responded with an error."
        );
    }

    #[test]
    fn bad_predictions_read_as_prediction_errors() {
        let err = map_client_error(ClassifierError::BadPrediction("empty".to_string()));
        assert_eq!(err.to_string(), "Error predicting the image.");
    }

    #[test]
    fn endpoint_echoes_the_configured_url() {
        let provider = RemoteClassifier::new("http://10.0.0.7:5000/");
        assert_eq!(provider.endpoint(), "http://10.0.0.7:5000");
    }
}
