//! Canonical default values and template factories.
//!
//! Templates are built fresh on every call — plain functions, no statics —
//! so default role lists and nested configs are never aliased between two
//! resolved specs. Mutating one resolved tree can never corrupt another's
//! defaults.

use crate::spec::{AuthConfig, ProvisionerConfig, RbacConfig, TlsConfig, TokenConfig};

/// Domain name used to fully qualify service names.
pub const DEFAULT_CLUSTER_DOMAIN: &str = "cluster.local";

/// Image pull policy applied when none is configured.
pub const DEFAULT_IMAGE_PULL_POLICY: &str = "IfNotPresent";

/// Existing storage class name used when no storage class is defined.
pub const DEFAULT_STORAGE_CLASS_NAME: &str = "default";

/// Reclaim policy applied to a defined storage class without one.
pub const DEFAULT_RECLAIM_POLICY: &str = "Retain";

/// Secret name used for TLS certificates unless overridden.
pub const DEFAULT_TLS_SECRET_NAME: &str = "pulsar-tls";

/// Image run by the token-auth provisioner job.
pub const DEFAULT_PROVISIONER_IMAGE: &str = "datastax/burnell:latest";

/// Base names for the seven cluster roles, in declaration order:
/// zookeeper, bookkeeper, broker, proxy, autorecovery, bastion, functions
/// worker.
pub const DEFAULT_COMPONENT_BASE_NAMES: [&str; 7] = [
    "zookeeper",
    "bookkeeper",
    "broker",
    "proxy",
    "autorecovery",
    "bastion",
    "function",
];

/// Fully populated TLS template: disabled, with the stock secret name.
/// Per-component entries stay absent — the resolver never defaults them.
pub fn default_tls() -> TlsConfig {
    TlsConfig {
        enabled: Some(false),
        default_secret_name: Some(DEFAULT_TLS_SECRET_NAME.to_string()),
        zookeeper: None,
        bookkeeper: None,
        broker: None,
        proxy: None,
    }
}

/// Fully populated auth template: disabled, with the complete token →
/// provisioner → rbac subtree filled in.
pub fn default_auth() -> AuthConfig {
    AuthConfig {
        enabled: Some(false),
        token: Some(default_token()),
    }
}

/// Token config template: stock key file names and role lists.
pub fn default_token() -> TokenConfig {
    TokenConfig {
        public_key_file: Some("my-public.key".to_string()),
        private_key_file: Some("my-private.key".to_string()),
        super_user_roles: Some(
            ["superuser", "admin", "websocket", "proxy"]
                .map(String::from)
                .to_vec(),
        ),
        proxy_roles: Some(vec!["proxy".to_string()]),
        provisioner: Some(default_provisioner()),
    }
}

/// Provisioner template: initialization on, stock image, namespaced RBAC.
pub fn default_provisioner() -> ProvisionerConfig {
    ProvisionerConfig {
        initialize: Some(true),
        image: Some(DEFAULT_PROVISIONER_IMAGE.to_string()),
        image_pull_policy: Some(DEFAULT_IMAGE_PULL_POLICY.to_string()),
        rbac: Some(default_rbac()),
    }
}

/// RBAC template: create namespaced resources.
pub fn default_rbac() -> RbacConfig {
    RbacConfig {
        create: Some(true),
        namespaced: Some(true),
    }
}
