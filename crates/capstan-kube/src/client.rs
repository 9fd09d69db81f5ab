//! Cluster client construction and the read-only queries behind completion.
//!
//! Two queries are served: the namespace list and API resource discovery.
//! Both are plain reads with default parameters, issued once per completion
//! request on a client built fresh for that request.

use std::time::Duration;

use k8s_openapi::api::core::v1::Namespace;
use kube::api::ListParams;
use kube::config::KubeConfigOptions;
use kube::{Api, Client, Config, Discovery, ResourceExt};
use tracing::debug;

use crate::config::KubeconfigSource;
use crate::error::{Error, Result};

/// Caps on how long a completion query may sit on the wire. Tab completion
/// blocks the shell, so an unreachable cluster has to degrade to "no
/// suggestions" quickly rather than hang the prompt.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Build an authenticated cluster client from `source`.
///
/// No context, cluster, or user overrides are applied; the kubeconfig's
/// current context decides where requests go.
///
/// # Errors
///
/// Returns [`Error::ConfigLoad`] if no usable kubeconfig is found and
/// [`Error::ClientBuild`] if the loaded config cannot produce a client.
pub async fn client_for(source: &KubeconfigSource) -> Result<Client> {
    let kubeconfig = source.load()?;
    let mut config =
        Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
    config.connect_timeout = Some(CONNECT_TIMEOUT);
    config.read_timeout = Some(READ_TIMEOUT);

    debug!(cluster_url = %config.cluster_url, "building cluster client");
    Client::try_from(config).map_err(Error::ClientBuild)
}

/// List the name of every namespace in the cluster, in server order.
pub async fn namespace_names(client: Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client);
    let list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(Error::request)?;

    debug!(count = list.items.len(), "listed namespaces");
    Ok(list.iter().map(ResourceExt::name_any).collect())
}

/// Discover every served API resource and render it as a completion
/// candidate.
///
/// Candidates use the `{kind}.{version}.{group}` form; core-group resources
/// drop the empty group segment, so `Pod.v1` but `Deployment.v1.apps`.
pub async fn api_resource_names(client: Client) -> Result<Vec<String>> {
    let discovery = Discovery::new(client).run().await.map_err(Error::request)?;

    let mut names = Vec::new();
    for group in discovery.groups() {
        for (resource, _caps) in group.recommended_resources() {
            names.push(resource_candidate(&resource.kind, &resource.version, &resource.group));
        }
    }

    debug!(count = names.len(), "discovered api resources");
    Ok(names)
}

fn resource_candidate(kind: &str, version: &str, group: &str) -> String {
    if group.is_empty() {
        format!("{kind}.{version}")
    } else {
        format!("{kind}.{version}.{group}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn candidate_for_core_group_resource() {
        assert_eq!(resource_candidate("Pod", "v1", ""), "Pod.v1");
    }

    #[test]
    fn candidate_for_named_group_resource() {
        assert_eq!(
            resource_candidate("Deployment", "v1", "apps"),
            "Deployment.v1.apps"
        );
        assert_eq!(
            resource_candidate("Composition", "v1", "apiextensions.example.org"),
            "Composition.v1.apiextensions.example.org"
        );
    }

    #[tokio::test]
    async fn client_for_missing_kubeconfig_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = KubeconfigSource::Path(dir.path().join("absent"));
        let err = client_for(&source).await.unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn client_for_valid_kubeconfig_builds_without_network() {
        let yaml = r#"
apiVersion: v1
kind: Config
clusters:
- name: local
  cluster:
    server: https://127.0.0.1:6443
contexts:
- name: local
  context:
    cluster: local
    user: admin
current-context: local
users:
- name: admin
  user: {}
"#;
        let kubeconfig: kube::config::Kubeconfig = serde_yaml::from_str(yaml).unwrap();
        let source = KubeconfigSource::from(kubeconfig);
        // Client construction only wires up the transport stack; no request
        // is sent until a query runs.
        client_for(&source).await.unwrap();
    }
}
