// The scan flow - get a photo, send it up, award the point, fetch the advice
use async_trait::async_trait;
use thiserror::Error;

use crate::{
    advisor::{self, Prompt},
    ledger::RewardsLedger,
    models::{CapturedPhoto, ScanResult},
};

/// Ways a scan attempt can end early.
///
/// Display strings double as the alert text shown to the user. Each failure
/// surfaces exactly one alert and sends the flow back to idle; there is no
/// retry. Payloads on `Network` and `Classification` carry detail for the
/// logs.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Permission to access the camera is required!")]
    PermissionDenied,

    #[error("No photo was taken or an error occurred.")]
    Cancelled,

    #[error("Failed to upload the image.")]
    Network(String),

    #[error("{0}")]
    Classification(String),
}

/// Where photos come from. The terminal build reads them off disk; tests
/// substitute mocks.
#[cfg_attr(test, mockall::automock)]
pub trait PhotoSource: Send + Sync {
    /// Confirm the source can be used at all.
    fn request_access(&self) -> Result<(), CaptureError>;
    /// Produce one photo.
    fn capture(&self) -> Result<CapturedPhoto, CaptureError>;
}

/// Sends a photo off for classification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, photo: &CapturedPhoto) -> Result<ScanResult, CaptureError>;
}

/// Everything the presentation layer needs after a successful scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub result: ScanResult,
    pub prompt: Prompt,
}

/// Run one scan end to end: check access, take a photo, classify it, award
/// the point, and look up the follow-up prompt.
///
/// The point lands as soon as classification succeeds. The Yes/No answer to
/// the prompt comes later and never takes it back.
pub async fn capture_and_classify(
    source: &dyn PhotoSource,
    classifier: &dyn Classifier,
    ledger: &mut RewardsLedger,
) -> Result<ScanOutcome, CaptureError> {
    source.request_access()?;
    let photo = source.capture()?;

    tracing::debug!(
        path = %photo.path.display(),
        bytes = photo.bytes.len(),
        "photo captured"
    );

    let result = classifier.classify(&photo).await?;

    tracing::info!(
        category = %result.category,
        confidence = result.confidence,
        "photo classified"
    );

    ledger.record_scan();
    let prompt = advisor::lookup(&result.category);

    Ok(ScanOutcome { result, prompt })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn photo() -> CapturedPhoto {
        CapturedPhoto {
            path: PathBuf::from("/tmp/photo.jpg"),
            bytes: vec![0xFF, 0xD8],
        }
    }

    fn ready_source() -> MockPhotoSource {
        let mut source = MockPhotoSource::new();
        source.expect_request_access().returning(|| Ok(()));
        source.expect_capture().returning(|| Ok(photo()));
        source
    }

    fn classifier_saying(category: &'static str) -> MockClassifier {
        let mut classifier = MockClassifier::new();
        classifier.expect_classify().returning(move |_| {
            Ok(ScanResult {
                category: category.to_string(),
                confidence: 0.9,
            })
        });
        classifier
    }

    #[tokio::test]
    async fn successful_scan_awards_one_point() {
        let mut ledger = RewardsLedger::new();
        let outcome =
            capture_and_classify(&ready_source(), &classifier_saying("metal"), &mut ledger)
                .await
                .unwrap();

        assert_eq!(ledger.points(), 1);
        assert_eq!(ledger.items_scanned(), 1);
        assert_eq!(outcome.result.category, "metal");
        assert_eq!(outcome.prompt.text(), "Is this a can?");
    }

    #[tokio::test]
    async fn answering_no_keeps_the_point() {
        let mut ledger = RewardsLedger::new();
        let outcome =
            capture_and_classify(&ready_source(), &classifier_saying("plastic"), &mut ledger)
                .await
                .unwrap();

        // The point lands before the question is answered; a No does not
        // claw it back.
        assert_eq!(
            outcome.prompt.answer(false),
            "Thanks for checking! This plastic is not recyclable."
        );
        assert_eq!(ledger.points(), 1);
    }

    #[tokio::test]
    async fn classification_failure_leaves_the_ledger_alone() {
        let mut classifier = MockClassifier::new();
        classifier.expect_classify().returning(|_| {
            Err(CaptureError::Classification(
                "Error predicting the image.".to_string(),
            ))
        });

        let mut ledger = RewardsLedger::new();
        let err = capture_and_classify(&ready_source(), &classifier, &mut ledger)
            .await
            .unwrap_err();

        assert!(matches!(err, CaptureError::Classification(_)));
        assert_eq!(ledger.points(), 0);
        assert_eq!(ledger.items_scanned(), 0);
    }

    #[tokio::test]
    async fn denied_access_stops_before_capture() {
        let mut source = MockPhotoSource::new();
        source
            .expect_request_access()
            .returning(|| Err(CaptureError::PermissionDenied));
        source.expect_capture().never();

        let mut classifier = MockClassifier::new();
        classifier.expect_classify().never();

        let mut ledger = RewardsLedger::new();
        let err = capture_and_classify(&source, &classifier, &mut ledger)
            .await
            .unwrap_err();

        assert!(matches!(err, CaptureError::PermissionDenied));
        assert_eq!(ledger.items_scanned(), 0);
    }

    #[tokio::test]
    async fn cancelled_capture_is_not_classified() {
        let mut source = MockPhotoSource::new();
        source.expect_request_access().returning(|| Ok(()));
        source
            .expect_capture()
            .returning(|| Err(CaptureError::Cancelled));

        let mut classifier = MockClassifier::new();
        classifier.expect_classify().never();

        let mut ledger = RewardsLedger::new();
        let err = capture_and_classify(&source, &classifier, &mut ledger)
            .await
            .unwrap_err();

        assert!(matches!(err, CaptureError::Cancelled));
        assert_eq!(ledger.points(), 0);
    }

    #[tokio::test]
    async fn unknown_category_still_scores_a_point() {
        let mut ledger = RewardsLedger::new();
        let outcome =
            capture_and_classify(&ready_source(), &classifier_saying("asbestos"), &mut ledger)
                .await
                .unwrap();

        assert!(!outcome.prompt.is_question());
        assert_eq!(
            outcome.prompt.text(),
            "Item not recognized. Please try again with a different description."
        );
        assert_eq!(ledger.points(), 1);
    }

    #[test]
    fn error_text_matches_the_alerts() {
        assert_eq!(
            CaptureError::PermissionDenied.to_string(),
            "Permission to access the camera is required!"
        );
        assert_eq!(
            CaptureError::Cancelled.to_string(),
            "No photo was taken or an error occurred."
        );
        assert_eq!(
            CaptureError::Network("connection refused".to_string()).to_string(),
            "Failed to upload the image."
        );
        assert_eq!(
            CaptureError::Classification("Error predicting the image.".to_string()).to_string(),
            "Error predicting the image."
        );
    }
}
