use thiserror::Error;

/// Plumbing failures outside the scan flow itself
///
/// Scan failures carry user-facing alert text and live in
/// `capture::CaptureError`; this covers config and disk trouble around them.
/// thiserror generates the boilerplate because life's too short to hand-write
/// Display impls.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
