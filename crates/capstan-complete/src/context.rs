//! Kubeconfig context completion.

use capstan_kube::{KubeconfigSource, Result};
use tracing::debug;

use crate::predictor::{Args, Predictor, filter_prefix};

/// Completes context names from the kubeconfig itself.
///
/// Unlike the namespace and resource predictors this never builds a client
/// and never touches the network; the kubeconfig file is the whole universe
/// of candidates. Context names are offered in file order.
#[derive(Debug, Clone)]
pub struct ContextPredictor {
    source: KubeconfigSource,
}

impl ContextPredictor {
    /// Context completion over the given kubeconfig source.
    pub fn new(source: KubeconfigSource) -> Self {
        Self { source }
    }

    /// The fallible core: load the kubeconfig, keep prefix-matching names.
    pub fn candidates(&self, prefix: &str) -> Result<Vec<String>> {
        let kubeconfig = self.source.load()?;
        Ok(filter_prefix(
            kubeconfig.contexts.into_iter().map(|context| context.name),
            prefix,
        ))
    }
}

impl Predictor for ContextPredictor {
    fn predict(&self, args: &Args) -> Vec<String> {
        self.candidates(&args.last).unwrap_or_else(|err| {
            debug!(error = %err, "context completion failed");
            Vec::new()
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use capstan_kube::{Error, Kubeconfig};
    use pretty_assertions::assert_eq;

    const KUBECONFIG_YAML: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: shared
  cluster:
    server: https://cluster.example.com:6443
contexts:
- name: prod-cluster
  context:
    cluster: shared
    user: admin
- name: staging
  context:
    cluster: shared
    user: admin
- name: dev-cluster
  context:
    cluster: shared
    user: admin
current-context: staging
users:
- name: admin
  user: {}
"#;

    fn predictor_from_file() -> (tempfile::TempDir, ContextPredictor) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, KUBECONFIG_YAML).unwrap();
        (dir, ContextPredictor::new(KubeconfigSource::Path(path)))
    }

    #[test]
    fn keeps_prefixed_context_names() {
        let (_dir, p) = predictor_from_file();
        assert_eq!(p.predict(&Args::from_last("dev")), vec!["dev-cluster"]);
    }

    #[test]
    fn empty_token_offers_contexts_in_file_order() {
        let (_dir, p) = predictor_from_file();
        assert_eq!(
            p.predict(&Args::from_last("")),
            vec!["prod-cluster", "staging", "dev-cluster"]
        );
    }

    #[test]
    fn missing_kubeconfig_is_swallowed_into_empty() {
        let dir = tempfile::tempdir().unwrap();
        let p = ContextPredictor::new(KubeconfigSource::Path(dir.path().join("absent")));
        assert!(p.predict(&Args::from_last("dev")).is_empty());
        assert!(matches!(p.candidates("dev"), Err(Error::ConfigLoad(_))));
    }

    #[test]
    fn inline_kubeconfig_needs_no_filesystem() {
        let kubeconfig: Kubeconfig = serde_yaml::from_str(KUBECONFIG_YAML).unwrap();
        let p = ContextPredictor::new(KubeconfigSource::from(kubeconfig));
        assert_eq!(p.predict(&Args::from_last("sta")), vec!["staging"]);
    }
}
