//! Namespace completion.

use capstan_kube::{ClusterInfo, KubeconfigSource, LiveCluster, Result};
use tracing::debug;

use crate::predictor::{Args, Predictor, filter_prefix};

/// Completes namespace names by listing them from the cluster.
///
/// Each prediction builds a fresh client from the configured kubeconfig
/// source and issues one list call. Any failure, from a missing kubeconfig
/// to an unreachable cluster, produces an empty candidate list rather than
/// an error in the user's shell.
#[derive(Debug, Clone)]
pub struct NamespacePredictor<C = LiveCluster> {
    cluster: C,
}

impl NamespacePredictor<LiveCluster> {
    /// Namespace completion over the given kubeconfig source.
    pub fn new(source: KubeconfigSource) -> Self {
        Self::with_cluster(LiveCluster::new(source))
    }
}

impl<C: ClusterInfo> NamespacePredictor<C> {
    /// Namespace completion over a caller-supplied backend.
    pub fn with_cluster(cluster: C) -> Self {
        Self { cluster }
    }

    /// The fallible core: one list call, then prefix filtering.
    pub fn candidates(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(filter_prefix(self.cluster.namespace_names()?, prefix))
    }
}

impl<C: ClusterInfo> Predictor for NamespacePredictor<C> {
    fn predict(&self, args: &Args) -> Vec<String> {
        self.candidates(&args.last).unwrap_or_else(|err| {
            debug!(error = %err, "namespace completion failed");
            Vec::new()
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
