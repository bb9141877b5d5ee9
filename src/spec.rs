//! The configuration tree for a Pulsar cluster's global spec.
//!
//! Every field is an `Option<T>` sparse slot: `None` means the user never
//! supplied the field, `Some(v)` means the field was set explicitly — even
//! when `v` is `false` or an empty string. The resolver fills `None` slots
//! with canonical defaults and never touches `Some` slots, so absence and
//! explicit-falsy stay distinguishable all the way through.
//!
//! Field names follow the Kubernetes CRD wire format (`camelCase`), so these
//! structs deserialize directly from the user-authored cluster document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of the cluster configuration tree.
///
/// Deserialize one from a user document (see [`crate::from_yaml`]), run
/// [`crate::resolve`] on it, and every defaultable field is populated.
/// Pass-through fields (`name`, `dns_config`, `node_selectors`, `image`)
/// are never defaulted here; downstream consumers own their meaning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSpec {
    /// Cluster base name. Required by the external schema; the resolver
    /// treats it as an opaque pass-through.
    pub name: Option<String>,
    /// Per-role base names for the cluster components.
    pub components: Option<Components>,
    /// Additional pod DNS config. Opaque pass-through, never defaulted.
    pub dns_config: Option<serde_json::Value>,
    /// Domain name of the Kubernetes cluster, used to fully qualify service
    /// names. Defaults to `cluster.local`.
    pub kubernetes_cluster_domain: Option<String>,
    /// Global node selectors applied to every component. Pass-through.
    pub node_selectors: Option<BTreeMap<String, String>>,
    /// Cluster-wide TLS configuration.
    pub tls: Option<TlsConfig>,
    /// Whether stateful components get PersistentVolumeClaims (`true`) or
    /// emptyDir volumes for test deployments (`false`). Defaults to `true`.
    pub persistence: Option<bool>,
    /// Restart pods when their configmap changes, via a checksum annotation.
    /// Defaults to `false`.
    pub restart_on_config_map_change: Option<bool>,
    /// Authentication configuration.
    pub auth: Option<AuthConfig>,
    /// Default Pulsar image. Pass-through; components may override it.
    pub image: Option<String>,
    /// Default image pull policy. Defaults to `IfNotPresent`.
    pub image_pull_policy: Option<String>,
    /// Storage configuration.
    pub storage: Option<GlobalStorageConfig>,
}

/// Base names for the seven cluster roles. Each slot defaults independently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub zookeeper_base_name: Option<String>,
    pub bookkeeper_base_name: Option<String>,
    pub broker_base_name: Option<String>,
    pub proxy_base_name: Option<String>,
    pub autorecovery_base_name: Option<String>,
    pub bastion_base_name: Option<String>,
    pub functions_worker_base_name: Option<String>,
}

/// Cluster-wide TLS switches plus per-component entries.
///
/// Only `enabled` and `default_secret_name` participate in defaulting. The
/// per-component entries are left exactly as the user wrote them, even when
/// TLS is enabled — resolving those is the caller's concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    /// Global switch for the TLS configuration. Defaults to `false`.
    pub enabled: Option<bool>,
    /// Secret holding the certificates unless a component overrides it.
    /// Defaults to `pulsar-tls`.
    pub default_secret_name: Option<String>,
    pub zookeeper: Option<TlsEntryConfig>,
    pub bookkeeper: Option<TlsEntryConfig>,
    pub broker: Option<TlsEntryConfig>,
    pub proxy: Option<TlsEntryConfig>,
}

/// TLS settings for a single component. Never defaulted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsEntryConfig {
    pub enabled: Option<bool>,
    pub tls_secret_name: Option<String>,
}

/// Storage selection: either a storage class the operator manages, or the
/// name of one that already exists. The resolver fills at most one side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStorageConfig {
    /// StorageClass definition the operator will create if needed.
    pub storage_class: Option<StorageClassConfig>,
    /// Name of an already existing storage class. Defaults to `default`
    /// only when no storage class definition is supplied.
    pub existing_storage_class_name: Option<String>,
}

/// Definition of an operator-managed StorageClass.
///
/// Only `reclaim_policy` participates in defaulting; the rest is carried
/// verbatim into the created StorageClass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageClassConfig {
    /// Reclaim policy for the created class. Defaults to `Retain` when the
    /// storage class itself is defined.
    pub reclaim_policy: Option<String>,
    pub provisioner: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub fs_type: Option<String>,
    pub extra_params: Option<BTreeMap<String, String>>,
}

/// Authentication configuration. Four levels deep: auth → token →
/// provisioner → rbac, each level resolved absent-replace-or-merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    /// Global switch for authentication. Defaults to `false`.
    pub enabled: Option<bool>,
    /// Token-based authentication settings.
    pub token: Option<TokenConfig>,
}

/// Token authentication: key files, role lists, and the provisioner job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    pub public_key_file: Option<String>,
    pub private_key_file: Option<String>,
    pub super_user_roles: Option<Vec<String>>,
    pub proxy_roles: Option<Vec<String>>,
    pub provisioner: Option<ProvisionerConfig>,
}

/// Settings for the token-auth provisioner job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionerConfig {
    pub initialize: Option<bool>,
    pub image: Option<String>,
    pub image_pull_policy: Option<String>,
    pub rbac: Option<RbacConfig>,
}

/// RBAC resources for the provisioner job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacConfig {
    pub create: Option<bool>,
    pub namespaced: Option<bool>,
}
