//! Synchronous facade over the async cluster queries.
//!
//! Completion frameworks call predictors synchronously, once per keystroke.
//! [`LiveCluster`] resolves each query on a throwaway current-thread runtime.
//! Nothing is cached between calls, so consecutive completions observe
//! kubeconfig edits and cluster changes immediately.

use std::future::Future;

use crate::client;
use crate::config::KubeconfigSource;
use crate::error::Result;

/// The read-only cluster queries completion predictors rely on.
///
/// Implemented by [`LiveCluster`] in production and by in-memory stubs in
/// predictor tests.
pub trait ClusterInfo {
    /// Names of every namespace in the cluster.
    fn namespace_names(&self) -> Result<Vec<String>>;

    /// Completion candidates for every served API resource.
    fn api_resource_names(&self) -> Result<Vec<String>>;
}

/// The production [`ClusterInfo`]: builds a fresh client for every query.
#[derive(Debug, Clone)]
pub struct LiveCluster {
    source: KubeconfigSource,
}

impl LiveCluster {
    /// Cluster queries backed by the given kubeconfig source.
    pub fn new(source: KubeconfigSource) -> Self {
        Self { source }
    }

    /// Shorthand for the default kubeconfig discovery rules.
    pub fn ambient() -> Self {
        Self::new(KubeconfigSource::Ambient)
    }
}

impl ClusterInfo for LiveCluster {
    fn namespace_names(&self) -> Result<Vec<String>> {
        block_on(async {
            let client = client::client_for(&self.source).await?;
            client::namespace_names(client).await
        })
    }

    fn api_resource_names(&self) -> Result<Vec<String>> {
        block_on(async {
            let client = client::client_for(&self.source).await?;
            client::api_resource_names(client).await
        })
    }
}

/// Run a single completion query to completion on a current-thread runtime.
///
/// The runtime is dropped when the query returns; a predictor invocation
/// leaves no background work behind.
fn block_on<F>(future: F) -> Result<Vec<String>>
where
    F: Future<Output = Result<Vec<String>>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
