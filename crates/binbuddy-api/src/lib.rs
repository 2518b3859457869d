// HTTP client for the remote waste-classification service
pub mod classifier;

// Re-export common types
pub use classifier::{ClassifierClient, ClassifierError, Prediction};
