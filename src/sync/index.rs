// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mapping changed secrets and namespaces back to the SecretCopiers that
//! need a new pass. Both lookups scan every known copier and rule.

use crate::types::{NamespaceSnapshot, SecretCopier};
use kube::runtime::reflector::ObjectRef;
use std::sync::Arc;

/// Copiers with a rule whose source is the given secret
pub fn copiers_for_secret(
    copiers: &[Arc<SecretCopier>],
    namespace: &str,
    name: &str,
) -> Vec<ObjectRef<SecretCopier>> {
    copiers
        .iter()
        .filter(|c| c.spec.rules.iter().any(|r| r.is_source(namespace, name)))
        .map(|c| ObjectRef::from_obj(c.as_ref()))
        .collect()
}

/// Copiers with a rule that targets the given namespace
pub fn copiers_for_namespace(
    copiers: &[Arc<SecretCopier>],
    namespace: &NamespaceSnapshot,
) -> Vec<ObjectRef<SecretCopier>> {
    copiers
        .iter()
        .filter(|c| c.spec.rules.iter().any(|r| r.targets(namespace)))
        .map(|c| ObjectRef::from_obj(c.as_ref()))
        .collect()
}
