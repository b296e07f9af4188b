// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{DEFAULT_SYNC_PERIOD, MAX_SYNC_PERIOD_SECS};
use crate::error::{Result, SecretCopierError};
use crate::selectors::TargetNamespaces;
use crate::types::duration::parse_duration;
use crate::types::namespace::NamespaceSnapshot;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "secrets-manager.advok8s.io", version = "v1beta1", kind = "SecretCopier")]
#[kube(shortname = "scp")]
#[serde(rename_all = "camelCase")]
pub struct SecretCopierSpec {
    /// Rules for copying secrets, evaluated in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<SecretCopierRule>,
    /// Interval between periodic passes, "0s" disables them
    #[serde(default = "default_sync_period")]
    pub sync_period: String,
}

fn default_sync_period() -> String {
    DEFAULT_SYNC_PERIOD.to_string()
}

impl SecretCopier {
    /// Parsed sync period of this copier, at most one year
    pub fn sync_period(&self) -> Result<Duration> {
        let period = parse_duration(&self.spec.sync_period)?;
        if period > Duration::from_secs(MAX_SYNC_PERIOD_SECS) {
            return Err(SecretCopierError::InvalidDuration(format!(
                "sync period '{}' exceeds {}s",
                self.spec.sync_period, MAX_SYNC_PERIOD_SECS
            )));
        }
        Ok(period)
    }

    /// Check if the copier is in the process of being deleted
    pub fn is_being_deleted(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretCopierRule {
    pub source_secret: SourceSecret,
    #[serde(default)]
    pub target_namespaces: TargetNamespaces,
    #[serde(default)]
    pub target_secret: TargetSecret,
    #[serde(default)]
    pub reclaim_policy: ReclaimPolicy,
}

impl SecretCopierRule {
    /// Name of the copy, falling back to the source secret name
    pub fn target_secret_name(&self) -> &str {
        match self.target_secret.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.source_secret.name,
        }
    }

    /// Identity of the source secret as `<namespace>/<name>`
    pub fn source_identity(&self) -> String {
        format!("{}/{}", self.source_secret.namespace, self.source_secret.name)
    }

    /// Check if the namespace should receive a copy under this rule.
    /// The source namespace is never a target.
    pub fn targets(&self, namespace: &NamespaceSnapshot) -> bool {
        namespace.name != self.source_secret.namespace && self.target_namespaces.matches(namespace)
    }

    /// Check if the given secret is the source of this rule
    pub fn is_source(&self, namespace: &str, name: &str) -> bool {
        self.source_secret.namespace == namespace && self.source_secret.name == name
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct SourceSecret {
    pub name: String,
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct TargetSecret {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Labels applied on top of the source secret labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
pub enum ReclaimPolicy {
    /// Copies are garbage collected together with the SecretCopier
    #[default]
    Delete,
    /// Copies are left behind when the SecretCopier goes away
    Retain,
}
