//! API resource completion.

use capstan_kube::{ClusterInfo, KubeconfigSource, LiveCluster, Result};
use tracing::debug;

use crate::predictor::{Args, Predictor, filter_prefix};

/// Completes API resource kinds via cluster discovery.
///
/// Candidates take the `{kind}.{version}.{group}` form produced by
/// [`capstan_kube::client::api_resource_names`], so typing `Depl` offers
/// `Deployment.v1.apps`. Discovery enumerates everything the server serves,
/// custom resources included.
#[derive(Debug, Clone)]
pub struct ResourcePredictor<C = LiveCluster> {
    cluster: C,
}

impl ResourcePredictor<LiveCluster> {
    /// Resource completion over the given kubeconfig source.
    pub fn new(source: KubeconfigSource) -> Self {
        Self::with_cluster(LiveCluster::new(source))
    }
}

impl<C: ClusterInfo> ResourcePredictor<C> {
    /// Resource completion over a caller-supplied backend.
    pub fn with_cluster(cluster: C) -> Self {
        Self { cluster }
    }

    /// The fallible core: one discovery run, then prefix filtering.
    pub fn candidates(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(filter_prefix(self.cluster.api_resource_names()?, prefix))
    }
}

impl<C: ClusterInfo> Predictor for ResourcePredictor<C> {
    fn predict(&self, args: &Args) -> Vec<String> {
        self.candidates(&args.last).unwrap_or_else(|err| {
            debug!(error = %err, "resource completion failed");
            Vec::new()
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
