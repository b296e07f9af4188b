// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Point-in-time view of a namespace, as evaluated by the selectors.

use crate::constants::NAMESPACE_TERMINATING;
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::ResourceExt;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamespaceSnapshot {
    pub name: String,
    pub uid: String,
    pub labels: BTreeMap<String, String>,
    pub owner_references: Vec<OwnerReference>,
    pub terminating: bool,
}

impl NamespaceSnapshot {
    pub fn named(name: &str) -> Self {
        NamespaceSnapshot {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl From<&Namespace> for NamespaceSnapshot {
    fn from(namespace: &Namespace) -> Self {
        let terminating = namespace
            .status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .is_some_and(|phase| phase == NAMESPACE_TERMINATING);

        NamespaceSnapshot {
            name: namespace.name_any(),
            uid: namespace.uid().unwrap_or_default(),
            labels: namespace.labels().clone(),
            owner_references: namespace.owner_references().to_vec(),
            terminating,
        }
    }
}
