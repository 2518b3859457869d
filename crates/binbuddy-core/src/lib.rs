// Core scanning logic lives here - the brain of the operation
pub mod advisor;
pub mod capture;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod providers;
pub mod sources;

pub use advisor::Prompt;
pub use capture::{capture_and_classify, CaptureError, Classifier, PhotoSource, ScanOutcome};
pub use config::Config;
pub use error::Error;
pub use ledger::{LedgerError, RewardOption, RewardsLedger, REWARD_CATALOG};
pub use models::{CapturedPhoto, ScanResult};
pub use providers::RemoteClassifier;
pub use sources::{list_photos, FilePhoto};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
