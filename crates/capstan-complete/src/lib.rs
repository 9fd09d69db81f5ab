//! Shell-completion predictors for the capstan CLI.
//!
//! A predictor maps the partial token under the user's cursor to candidate
//! completions. This crate ships predictors for filesystem paths, cluster
//! namespaces, kubeconfig contexts, and API resource kinds, and a registry
//! that the CLI's flag definitions look them up in by symbolic name (a
//! `--namespace` flag attaches the `"namespace"` predictor, and so on).
//!
//! Predictors never fail: a missing kubeconfig or an unreachable cluster
//! degrades to an empty candidate list, keeping tab completion silent. The
//! underlying causes are logged at debug level and are visible to unit tests
//! through each predictor's `candidates` method.
//!
//! ```no_run
//! use capstan_complete::{Args, Predictor, predictors};
//!
//! let registry = predictors();
//! let namespaces = registry["namespace"].predict(&Args::from_last("dev"));
//! ```

pub mod context;
pub mod fs;
pub mod namespace;
pub mod predictor;
pub mod resource;

use std::collections::HashMap;

pub use capstan_kube::KubeconfigSource;
pub use context::ContextPredictor;
pub use fs::{DirsPredictor, FilesPredictor};
pub use namespace::NamespacePredictor;
pub use predictor::{Args, OrPredictor, PredictFn, Predictor, or};
pub use resource::ResourcePredictor;

/// The predictor registry, with kubeconfig credentials resolved through the
/// default discovery rules (`$KUBECONFIG`, then `~/.kube/config`).
pub fn predictors() -> HashMap<&'static str, Box<dyn Predictor>> {
    predictors_with_source(KubeconfigSource::Ambient)
}

/// The predictor registry with an explicit kubeconfig source threaded into
/// every cluster predictor.
///
/// Keys: `file`, `directory`, `file_or_directory`, `namespace`, `context`,
/// `k8s_resource`.
pub fn predictors_with_source(
    source: KubeconfigSource,
) -> HashMap<&'static str, Box<dyn Predictor>> {
    let mut registry: HashMap<&'static str, Box<dyn Predictor>> = HashMap::new();
    registry.insert("file", Box::new(FilesPredictor));
    registry.insert("directory", Box::new(DirsPredictor));
    registry.insert("file_or_directory", Box::new(or(FilesPredictor, DirsPredictor)));
    registry.insert("namespace", Box::new(NamespacePredictor::new(source.clone())));
    registry.insert("context", Box::new(ContextPredictor::new(source.clone())));
    registry.insert("k8s_resource", Box::new(ResourcePredictor::new(source)));
    registry
}
