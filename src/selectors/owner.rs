// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference as KubeOwnerReference;
use serde::{Deserialize, Serialize};

/// Owner descriptor to match on. All four fields must be equal.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub uid: String,
}

impl OwnerReference {
    fn is_same_owner(&self, other: &KubeOwnerReference) -> bool {
        self.api_version == other.api_version
            && self.kind == other.kind
            && self.name == other.name
            && self.uid == other.uid
    }
}

/// Selector matching on the owner references of a resource
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSelector {
    #[serde(default)]
    pub match_owners: Vec<OwnerReference>,
}

impl OwnerSelector {
    pub fn is_empty(&self) -> bool {
        self.match_owners.is_empty()
    }

    /// Matches if any owner reference equals any of the configured owners
    pub fn matches(&self, owner_references: &[KubeOwnerReference]) -> bool {
        owner_references
            .iter()
            .any(|o| self.match_owners.iter().any(|m| m.is_same_owner(o)))
    }
}
