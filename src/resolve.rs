//! Core defaulting pass: resolve a sparse spec into a fully populated one.
//!
//! Operates on an in-memory [`GlobalSpec`] with no I/O. Rules run in a fixed
//! order (fixed for reproducibility; correctness does not depend on it):
//!
//! 1. Root scalars — cluster domain, pull policy, persistence, restart flag
//! 2. Components — seven independent first-non-null coalesces
//! 3. Storage — allocate if absent, then two mutually exclusive branches
//! 4. TLS — absent-replace, or coalesce the two top-level fields only
//! 5. Auth — absent-replace, or generic merge plus a fixed-depth descent
//!    through token → provisioner → rbac
//!
//! Coalescing only ever fills `None` slots, so the pass is idempotent and an
//! explicit `false` or `""` survives untouched.

use crate::defaults::{
    DEFAULT_CLUSTER_DOMAIN, DEFAULT_COMPONENT_BASE_NAMES, DEFAULT_IMAGE_PULL_POLICY,
    DEFAULT_RECLAIM_POLICY, DEFAULT_STORAGE_CLASS_NAME, default_auth, default_provisioner,
    default_rbac, default_tls, default_token,
};
use crate::merge::merge_defaults;
use crate::spec::{Components, GlobalSpec, GlobalStorageConfig};

/// Resolve `spec` in place: after this returns, every defaultable field
/// holds a value and every field the user set is unchanged.
///
/// Idempotent — a second call finds no `None` slots left to fill. The spec
/// must not be resolved concurrently from two references; the pass assumes
/// exclusive ownership for its duration.
pub fn resolve(spec: &mut GlobalSpec) {
    coalesce_str(&mut spec.kubernetes_cluster_domain, DEFAULT_CLUSTER_DOMAIN);
    coalesce_str(&mut spec.image_pull_policy, DEFAULT_IMAGE_PULL_POLICY);
    coalesce(&mut spec.persistence, || true);
    coalesce(&mut spec.restart_on_config_map_change, || false);

    resolve_components(spec);
    resolve_storage(spec);
    resolve_tls(spec);
    resolve_auth(spec);
}

/// Fill `slot` from `default` only when it is `None`. Presence is nullity,
/// never truthiness: `Some(false)` and `Some("")` are left alone.
fn coalesce<T>(slot: &mut Option<T>, default: impl FnOnce() -> T) {
    if slot.is_none() {
        *slot = Some(default());
    }
}

/// String-literal shorthand for [`coalesce`].
fn coalesce_str(slot: &mut Option<String>, literal: &str) {
    coalesce(slot, || literal.to_string());
}

/// First-non-null against a template slot: fill `slot` from `template_slot`
/// only when `slot` is `None`.
fn fill_from<T>(slot: &mut Option<T>, template_slot: Option<T>) {
    if slot.is_none() {
        *slot = template_slot;
    }
}

/// Each role's base name coalesces independently; setting one never changes
/// a sibling's default.
fn resolve_components(spec: &mut GlobalSpec) {
    let components = spec.components.get_or_insert_with(Components::default);
    let [zookeeper, bookkeeper, broker, proxy, autorecovery, bastion, function] =
        DEFAULT_COMPONENT_BASE_NAMES;
    coalesce_str(&mut components.zookeeper_base_name, zookeeper);
    coalesce_str(&mut components.bookkeeper_base_name, bookkeeper);
    coalesce_str(&mut components.broker_base_name, broker);
    coalesce_str(&mut components.proxy_base_name, proxy);
    coalesce_str(&mut components.autorecovery_base_name, autorecovery);
    coalesce_str(&mut components.bastion_base_name, bastion);
    coalesce_str(&mut components.functions_worker_base_name, function);
}

/// Two mutually exclusive branches: an existing class name is defaulted only
/// when no storage class is defined; a reclaim policy only when one is.
fn resolve_storage(spec: &mut GlobalSpec) {
    let storage = spec.storage.get_or_insert_with(GlobalStorageConfig::default);
    if storage.storage_class.is_none() && storage.existing_storage_class_name.is_none() {
        storage.existing_storage_class_name = Some(DEFAULT_STORAGE_CLASS_NAME.to_string());
    }
    if let Some(storage_class) = &mut storage.storage_class {
        coalesce_str(&mut storage_class.reclaim_policy, DEFAULT_RECLAIM_POLICY);
    }
}

/// Only the global switch and default secret name are coalesced; the
/// per-component TLS entries stay exactly as the user wrote them, even when
/// TLS is enabled.
fn resolve_tls(spec: &mut GlobalSpec) {
    let Some(tls) = spec.tls.as_mut() else {
        spec.tls = Some(default_tls());
        return;
    };
    let template = default_tls();
    fill_from(&mut tls.enabled, template.enabled);
    fill_from(&mut tls.default_secret_name, template.default_secret_name);
}

/// Fixed-depth descent, terminating at the rbac leaf. At each level an
/// absent node is replaced wholesale from the template; a present node gets
/// the shallow generic merge, then the descent continues.
fn resolve_auth(spec: &mut GlobalSpec) {
    let Some(auth) = spec.auth.as_mut() else {
        spec.auth = Some(default_auth());
        return;
    };
    merge_defaults(auth, default_auth);
    let token = auth.token.get_or_insert_with(default_token);
    merge_defaults(token, default_token);
    let provisioner = token.provisioner.get_or_insert_with(default_provisioner);
    merge_defaults(provisioner, default_provisioner);
    let rbac = provisioner.rbac.get_or_insert_with(default_rbac);
    merge_defaults(rbac, default_rbac);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{AuthConfig, StorageClassConfig, TlsConfig, TlsEntryConfig, TokenConfig};

    fn resolved_empty() -> GlobalSpec {
        let mut spec = GlobalSpec::default();
        resolve(&mut spec);
        spec
    }

    #[test]
    fn empty_spec_gets_every_default() {
        let spec = resolved_empty();
        assert_eq!(spec.kubernetes_cluster_domain.as_deref(), Some("cluster.local"));
        assert_eq!(spec.image_pull_policy.as_deref(), Some("IfNotPresent"));
        assert_eq!(spec.persistence, Some(true));
        assert_eq!(spec.restart_on_config_map_change, Some(false));

        let components = spec.components.unwrap();
        assert_eq!(components.zookeeper_base_name.as_deref(), Some("zookeeper"));
        assert_eq!(components.bookkeeper_base_name.as_deref(), Some("bookkeeper"));
        assert_eq!(components.broker_base_name.as_deref(), Some("broker"));
        assert_eq!(components.proxy_base_name.as_deref(), Some("proxy"));
        assert_eq!(components.autorecovery_base_name.as_deref(), Some("autorecovery"));
        assert_eq!(components.bastion_base_name.as_deref(), Some("bastion"));
        assert_eq!(components.functions_worker_base_name.as_deref(), Some("function"));

        let storage = spec.storage.unwrap();
        assert_eq!(storage.existing_storage_class_name.as_deref(), Some("default"));
        assert_eq!(storage.storage_class, None);

        let tls = spec.tls.unwrap();
        assert_eq!(tls.enabled, Some(false));
        assert_eq!(tls.default_secret_name.as_deref(), Some("pulsar-tls"));

        let auth = spec.auth.unwrap();
        assert_eq!(auth.enabled, Some(false));
        let token = auth.token.unwrap();
        assert_eq!(token.public_key_file.as_deref(), Some("my-public.key"));
        assert_eq!(token.private_key_file.as_deref(), Some("my-private.key"));
        assert_eq!(token.super_user_roles.as_ref().unwrap().len(), 4);
        assert_eq!(token.proxy_roles.as_deref(), Some(&["proxy".to_string()][..]));
        let provisioner = token.provisioner.unwrap();
        assert_eq!(provisioner.initialize, Some(true));
        assert_eq!(provisioner.image.as_deref(), Some("datastax/burnell:latest"));
        assert_eq!(provisioner.image_pull_policy.as_deref(), Some("IfNotPresent"));
        let rbac = provisioner.rbac.unwrap();
        assert_eq!(rbac.create, Some(true));
        assert_eq!(rbac.namespaced, Some(true));
    }

    #[test]
    fn pass_through_fields_stay_absent() {
        let spec = resolved_empty();
        assert_eq!(spec.name, None);
        assert_eq!(spec.image, None);
        assert_eq!(spec.dns_config, None);
        assert_eq!(spec.node_selectors, None);
    }

    #[test]
    fn explicit_false_persistence_preserved() {
        let mut spec = GlobalSpec {
            persistence: Some(false),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        assert_eq!(spec.persistence, Some(false));
        // Siblings still default normally.
        assert_eq!(spec.kubernetes_cluster_domain.as_deref(), Some("cluster.local"));
        assert_eq!(spec.restart_on_config_map_change, Some(false));
    }

    #[test]
    fn explicit_empty_string_preserved() {
        let mut spec = GlobalSpec {
            kubernetes_cluster_domain: Some(String::new()),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        assert_eq!(spec.kubernetes_cluster_domain.as_deref(), Some(""));
    }

    #[test]
    fn resolve_is_idempotent() {
        let make = || GlobalSpec {
            persistence: Some(false),
            tls: Some(TlsConfig {
                enabled: Some(true),
                ..TlsConfig::default()
            }),
            auth: Some(AuthConfig {
                enabled: Some(true),
                token: None,
            }),
            ..GlobalSpec::default()
        };
        let mut once = make();
        resolve(&mut once);
        let mut twice = make();
        resolve(&mut twice);
        resolve(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn component_base_names_default_independently() {
        let mut spec = GlobalSpec {
            components: Some(Components {
                broker_base_name: Some("my-broker".into()),
                ..Components::default()
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let components = spec.components.unwrap();
        assert_eq!(components.broker_base_name.as_deref(), Some("my-broker"));
        assert_eq!(components.zookeeper_base_name.as_deref(), Some("zookeeper"));
        assert_eq!(components.proxy_base_name.as_deref(), Some("proxy"));
        assert_eq!(components.functions_worker_base_name.as_deref(), Some("function"));
    }

    #[test]
    fn storage_class_without_reclaim_policy_gets_retain() {
        let mut spec = GlobalSpec {
            storage: Some(GlobalStorageConfig {
                storage_class: Some(StorageClassConfig {
                    provisioner: Some("kubernetes.io/aws-ebs".into()),
                    ..StorageClassConfig::default()
                }),
                existing_storage_class_name: None,
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let storage = spec.storage.unwrap();
        let storage_class = storage.storage_class.unwrap();
        assert_eq!(storage_class.reclaim_policy.as_deref(), Some("Retain"));
        assert_eq!(storage_class.provisioner.as_deref(), Some("kubernetes.io/aws-ebs"));
        // A defined storage class suppresses the existing-name default.
        assert_eq!(storage.existing_storage_class_name, None);
    }

    #[test]
    fn explicit_reclaim_policy_preserved() {
        let mut spec = GlobalSpec {
            storage: Some(GlobalStorageConfig {
                storage_class: Some(StorageClassConfig {
                    reclaim_policy: Some("Delete".into()),
                    ..StorageClassConfig::default()
                }),
                existing_storage_class_name: None,
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let storage_class = spec.storage.unwrap().storage_class.unwrap();
        assert_eq!(storage_class.reclaim_policy.as_deref(), Some("Delete"));
    }

    #[test]
    fn explicit_existing_storage_class_name_suppresses_default() {
        let mut spec = GlobalSpec {
            storage: Some(GlobalStorageConfig {
                storage_class: None,
                existing_storage_class_name: Some("fast-ssd".into()),
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let storage = spec.storage.unwrap();
        assert_eq!(storage.existing_storage_class_name.as_deref(), Some("fast-ssd"));
        assert_eq!(storage.storage_class, None);
    }

    #[test]
    fn storage_branches_are_mutually_exclusive() {
        // With both sides supplied, neither branch's allocation fires; only
        // the supplied storage class gets its reclaim policy.
        let mut spec = GlobalSpec {
            storage: Some(GlobalStorageConfig {
                storage_class: Some(StorageClassConfig::default()),
                existing_storage_class_name: Some("legacy".into()),
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let storage = spec.storage.unwrap();
        assert_eq!(storage.existing_storage_class_name.as_deref(), Some("legacy"));
        assert_eq!(
            storage.storage_class.unwrap().reclaim_policy.as_deref(),
            Some("Retain")
        );
    }

    #[test]
    fn tls_explicit_values_preserved() {
        let mut spec = GlobalSpec {
            tls: Some(TlsConfig {
                enabled: Some(true),
                default_secret_name: Some("custom".into()),
                ..TlsConfig::default()
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let tls = spec.tls.unwrap();
        assert_eq!(tls.enabled, Some(true));
        assert_eq!(tls.default_secret_name.as_deref(), Some("custom"));
    }

    #[test]
    fn per_component_tls_entries_left_alone() {
        // Component entries are out of scope for this pass, even when TLS
        // is enabled: absent entries stay absent and a user-supplied entry
        // keeps its unset sub-fields.
        let mut spec = GlobalSpec {
            tls: Some(TlsConfig {
                enabled: Some(true),
                broker: Some(TlsEntryConfig {
                    enabled: Some(true),
                    tls_secret_name: None,
                }),
                ..TlsConfig::default()
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let tls = spec.tls.unwrap();
        assert_eq!(tls.zookeeper, None);
        assert_eq!(tls.bookkeeper, None);
        assert_eq!(tls.proxy, None);
        let broker = tls.broker.unwrap();
        assert_eq!(broker.enabled, Some(true));
        assert_eq!(broker.tls_secret_name, None);
    }

    #[test]
    fn auth_enabled_true_fills_whole_subtree() {
        let mut spec = GlobalSpec {
            auth: Some(AuthConfig {
                enabled: Some(true),
                token: None,
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let auth = spec.auth.unwrap();
        assert_eq!(auth.enabled, Some(true));
        let token = auth.token.unwrap();
        assert_eq!(token.public_key_file.as_deref(), Some("my-public.key"));
        let provisioner = token.provisioner.unwrap();
        assert_eq!(provisioner.initialize, Some(true));
        assert_eq!(provisioner.rbac.unwrap().create, Some(true));
    }

    #[test]
    fn partial_token_config_merges_against_template() {
        let mut spec = GlobalSpec {
            auth: Some(AuthConfig {
                enabled: None,
                token: Some(TokenConfig {
                    public_key_file: Some("ours.pub".into()),
                    super_user_roles: Some(vec![]),
                    ..TokenConfig::default()
                }),
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let auth = spec.auth.unwrap();
        assert_eq!(auth.enabled, Some(false));
        let token = auth.token.unwrap();
        // Explicit values survive, including the empty role list.
        assert_eq!(token.public_key_file.as_deref(), Some("ours.pub"));
        assert_eq!(token.super_user_roles.as_deref(), Some(&[][..]));
        // Absent siblings and the nested subtree fill from the template.
        assert_eq!(token.private_key_file.as_deref(), Some("my-private.key"));
        assert_eq!(token.proxy_roles.as_deref(), Some(&["proxy".to_string()][..]));
        assert!(token.provisioner.unwrap().rbac.is_some());
    }

    #[test]
    fn partial_provisioner_merges_and_descends_to_rbac() {
        let mut spec = GlobalSpec {
            auth: Some(AuthConfig {
                enabled: None,
                token: Some(TokenConfig {
                    provisioner: Some(crate::spec::ProvisionerConfig {
                        initialize: Some(false),
                        image: Some("custom/provisioner:1".into()),
                        image_pull_policy: None,
                        rbac: Some(crate::spec::RbacConfig {
                            create: Some(false),
                            namespaced: None,
                        }),
                    }),
                    ..TokenConfig::default()
                }),
            }),
            ..GlobalSpec::default()
        };
        resolve(&mut spec);
        let provisioner = spec.auth.unwrap().token.unwrap().provisioner.unwrap();
        assert_eq!(provisioner.initialize, Some(false));
        assert_eq!(provisioner.image.as_deref(), Some("custom/provisioner:1"));
        assert_eq!(provisioner.image_pull_policy.as_deref(), Some("IfNotPresent"));
        let rbac = provisioner.rbac.unwrap();
        assert_eq!(rbac.create, Some(false));
        assert_eq!(rbac.namespaced, Some(true));
    }

    #[test]
    fn resolved_trees_share_no_default_containers() {
        let mut first = resolved_empty();
        let second = resolved_empty();
        first
            .auth
            .as_mut()
            .unwrap()
            .token
            .as_mut()
            .unwrap()
            .super_user_roles
            .as_mut()
            .unwrap()
            .push("extra".into());
        assert_eq!(
            second
                .auth
                .unwrap()
                .token
                .unwrap()
                .super_user_roles
                .unwrap()
                .len(),
            4
        );
    }
}
