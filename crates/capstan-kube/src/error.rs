//! Error types for kubeconfig and cluster operations.

use thiserror::Error;

/// Errors that can occur while answering a completion query.
///
/// Predictors never surface these to the shell; they are swallowed into an
/// empty candidate list at the adapter layer. Keeping them typed means unit
/// tests can still assert on the cause.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable kubeconfig was found at the configured source.
    #[error("failed to load kubeconfig: {0}")]
    ConfigLoad(#[from] kube::config::KubeconfigError),

    /// A kubeconfig was loaded but could not be turned into a client.
    #[error("failed to build cluster client: {0}")]
    ClientBuild(#[source] kube::Error),

    /// The API call failed or the cluster was unreachable.
    #[error("cluster request failed: {0}")]
    Request(#[source] kube::Error),

    /// The response arrived but did not deserialize into the expected shape.
    #[error("malformed api response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The blocking runtime for a completion query could not be created.
    #[error("completion runtime unavailable: {0}")]
    Runtime(#[from] std::io::Error),
}

/// A specialized `Result` type for cluster query operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify a failed API call: payloads that arrived but did not parse
    /// are decode failures, everything else is a request failure.
    pub(crate) fn request(err: kube::Error) -> Self {
        match err {
            kube::Error::SerdeError(err) => Self::Decode(err),
            other => Self::Request(other),
        }
    }
}
