//! Kubeconfig resolution and read-only cluster queries for capstan.
//!
//! Completion predictors need three things from a cluster: a client built
//! from local credentials, the list of namespace names, and the set of served
//! API resources. This crate provides all three, plus the [`ClusterInfo`]
//! trait that lets predictors run against in-memory stubs in tests.
//!
//! Nothing in this crate writes to the cluster or to the kubeconfig.

pub mod client;
pub mod cluster;
pub mod config;
pub mod error;

pub use cluster::{ClusterInfo, LiveCluster};
pub use config::KubeconfigSource;
pub use error::{Error, Result};
pub use kube::config::Kubeconfig;
