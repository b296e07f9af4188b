// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Copying a rule's source secret into a single target namespace.

use crate::error::Result;
use crate::sync::backend::SyncBackend;
use crate::sync::ownership::Ownership;
use crate::types::{ReclaimPolicy, SecretCopier, SecretCopierRule};
use k8s_openapi::api::core::v1::Secret;
use kube::{api::ObjectMeta, Resource, ResourceExt};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Result of syncing one rule into one namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The copy did not exist and was created
    Created,
    /// The copy was stale and has been overwritten
    Updated,
    /// The copy is already current
    Unchanged,
    /// The target namespace is the source namespace
    SameNamespace,
    /// The source secret does not exist
    SourceMissing,
    /// A secret with the target name exists but is not managed by this rule
    NotManaged,
}

/// Sync the source secret of a rule into the target namespace.
///
/// A missing copy is created. An existing copy is only touched when it
/// carries the ownership record of this copier and rule, and then only when
/// its type, data or labels differ from the source.
#[instrument(
    skip(backend, copier, rule),
    fields(copier = %copier.name_any(), source = %rule.source_identity())
)]
pub async fn sync_rule<B>(
    backend: &B,
    copier: &SecretCopier,
    rule: &SecretCopierRule,
    target_namespace: &str,
) -> Result<SyncOutcome>
where
    B: SyncBackend + ?Sized,
{
    let source = &rule.source_secret;

    if target_namespace == source.namespace {
        debug!("Skipping copy of secret to its own namespace");
        return Ok(SyncOutcome::SameNamespace);
    }

    let target_name = rule.target_secret_name();

    let Some(source_secret) = backend.get_secret(&source.namespace, &source.name).await? else {
        debug!("Source secret does not exist");
        return Ok(SyncOutcome::SourceMissing);
    };

    let ownership = Ownership::new(copier.name_any(), rule.source_identity());

    let Some(existing) = backend.get_secret(target_namespace, target_name).await? else {
        let copy = build_copy(copier, rule, &source_secret, &ownership, target_namespace);
        backend.create_secret(&copy).await?;
        info!("Created secret {}/{}", target_namespace, target_name);
        return Ok(SyncOutcome::Created);
    };

    if !ownership.owns(&existing) {
        debug!(
            "Secret {}/{} is not managed by this copier, leaving it alone",
            target_namespace, target_name
        );
        return Ok(SyncOutcome::NotManaged);
    }

    let labels = effective_labels(rule, &source_secret);

    if !needs_update(&source_secret, &existing, &labels) {
        debug!("Secret {}/{} is up to date", target_namespace, target_name);
        return Ok(SyncOutcome::Unchanged);
    }

    let mut updated = existing;
    updated.type_ = source_secret.type_.clone();
    updated.data = source_secret.data.clone();
    updated.metadata.labels = Some(labels);

    backend.replace_secret(&updated).await?;
    info!("Updated secret {}/{}", target_namespace, target_name);

    Ok(SyncOutcome::Updated)
}

/// Source labels overlaid with the rule's target labels
pub fn effective_labels(rule: &SecretCopierRule, source: &Secret) -> BTreeMap<String, String> {
    let mut labels = source.labels().clone();
    labels.extend(rule.target_secret.labels.clone());
    labels
}

/// Check if the copy differs from the source in type, data or labels.
/// Absent data is not the same as empty data; absent labels are.
pub fn needs_update(source: &Secret, copy: &Secret, labels: &BTreeMap<String, String>) -> bool {
    source.type_ != copy.type_ || source.data != copy.data || copy.labels() != labels
}

fn build_copy(
    copier: &SecretCopier,
    rule: &SecretCopierRule,
    source: &Secret,
    ownership: &Ownership,
    target_namespace: &str,
) -> Secret {
    let owner_references = match rule.reclaim_policy {
        ReclaimPolicy::Delete => copier.controller_owner_ref(&()).map(|r| vec![r]),
        ReclaimPolicy::Retain => None,
    };

    Secret {
        metadata: ObjectMeta {
            name: Some(rule.target_secret_name().to_string()),
            namespace: Some(target_namespace.to_string()),
            labels: Some(effective_labels(rule, source)),
            annotations: Some(ownership.to_annotations()),
            owner_references,
            ..Default::default()
        },
        type_: source.type_.clone(),
        data: source.data.clone(),
        ..Default::default()
    }
}
