use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the classifier said about one photo.
///
/// Held only until the next scan replaces it; nothing persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Category label, e.g. "metal" or "brown-glass"
    pub category: String,
    /// Model confidence in [0, 1]
    pub confidence: f32,
}

impl ScanResult {
    /// The one-line summary shown after a scan.
    pub fn summary(&self) -> String {
        format!(
            "Predicted: {} (Confidence: {:.2})",
            self.category, self.confidence
        )
    }
}

/// A photo as handed over by a `PhotoSource`.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPhoto {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}
