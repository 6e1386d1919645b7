use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failures and non-success statuses collapse into this one
    /// condition. `status` is 0 when the request never reached the host.
    #[error("Unable to download URL")]
    Download { status: u16 },

    #[error("Unable to parse OpenAPI document: {0}")]
    Parse(#[from] serde_yaml::Error),
}
