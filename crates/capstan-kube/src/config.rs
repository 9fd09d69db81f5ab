//! Kubeconfig source resolution.
//!
//! Cluster predictors never read ambient state implicitly: each one is handed
//! a [`KubeconfigSource`] describing where credentials come from. `Ambient`
//! is the production default and is chosen only at the registry entry point,
//! so everything below it can be pointed at a fixture file in tests.

use std::path::PathBuf;

use kube::config::Kubeconfig;

use crate::error::Result;

/// Where kubeconfig credentials are loaded from.
#[derive(Debug, Clone, Default)]
pub enum KubeconfigSource {
    /// Default discovery rules: `$KUBECONFIG` if set, else `~/.kube/config`.
    #[default]
    Ambient,

    /// A specific kubeconfig file.
    Path(PathBuf),

    /// An already-parsed kubeconfig. Used by tests and embedding hosts.
    Inline(Box<Kubeconfig>),
}

impl KubeconfigSource {
    /// Load the kubeconfig this source points at.
    ///
    /// Every call re-reads the underlying file. Completion requests are
    /// independent and must observe config edits made between keystrokes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLoad`](crate::Error::ConfigLoad) if the file
    /// cannot be read or does not parse as kubeconfig YAML.
    pub fn load(&self) -> Result<Kubeconfig> {
        let kubeconfig = match self {
            Self::Ambient => Kubeconfig::read()?,
            Self::Path(path) => Kubeconfig::read_from(path)?,
            Self::Inline(kubeconfig) => (**kubeconfig).clone(),
        };
        Ok(kubeconfig)
    }
}

impl From<PathBuf> for KubeconfigSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Kubeconfig> for KubeconfigSource {
    fn from(kubeconfig: Kubeconfig) -> Self {
        Self::Inline(Box::new(kubeconfig))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    const KUBECONFIG_YAML: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: local
  cluster:
    server: https://127.0.0.1:6443
contexts:
- name: dev-cluster
  context:
    cluster: local
    user: admin
- name: staging
  context:
    cluster: local
    user: admin
current-context: dev-cluster
users:
- name: admin
  user: {}
"#;

    #[test]
    fn load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, KUBECONFIG_YAML).unwrap();

        let kubeconfig = KubeconfigSource::Path(path).load().unwrap();
        let names: Vec<_> = kubeconfig.contexts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["dev-cluster", "staging"]);
        assert_eq!(kubeconfig.current_context.as_deref(), Some("dev-cluster"));
    }

    #[test]
    fn load_from_missing_path_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = KubeconfigSource::Path(dir.path().join("no-such-config"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)), "unexpected error: {err}");
    }

    #[test]
    fn load_from_garbage_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, "{{ not yaml").unwrap();

        let err = KubeconfigSource::Path(path).load().unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)), "unexpected error: {err}");
    }

    #[test]
    fn load_inline_returns_copy() {
        let kubeconfig: Kubeconfig = serde_yaml::from_str(KUBECONFIG_YAML).unwrap();
        let source = KubeconfigSource::from(kubeconfig);

        let loaded = source.load().unwrap();
        assert_eq!(loaded.current_context.as_deref(), Some("dev-cluster"));
        // Loading twice must work; the source is not consumed.
        assert_eq!(source.load().unwrap().contexts.len(), 2);
    }
}
