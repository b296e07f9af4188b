// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{LabelSelector, NameSelector, OwnerSelector, UidSelector};
use crate::constants::DEFAULT_NAMESPACE_EXCLUDE;
use crate::types::namespace::NamespaceSnapshot;
use serde::{Deserialize, Serialize};

/// Matchers for the namespaces a secret is copied to
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetNamespaces {
    #[serde(default)]
    pub name_selector: NameSelector,
    #[serde(default)]
    pub uid_selector: UidSelector,
    #[serde(default)]
    pub owner_selector: OwnerSelector,
    #[serde(default)]
    pub label_selector: LabelSelector,
}

/// One of the selector kinds a namespace is checked against
#[derive(Debug, Clone, Copy)]
pub enum Selector<'a> {
    Name(&'a NameSelector),
    Uid(&'a UidSelector),
    Owner(&'a OwnerSelector),
    Label(&'a LabelSelector),
}

impl Selector<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            Selector::Name(s) => s.is_empty(),
            Selector::Uid(s) => s.is_empty(),
            Selector::Owner(s) => s.is_empty(),
            Selector::Label(s) => s.is_empty(),
        }
    }

    pub fn matches(&self, namespace: &NamespaceSnapshot) -> bool {
        match self {
            Selector::Name(s) => s.matches(&namespace.name),
            Selector::Uid(s) => s.matches(&namespace.uid),
            Selector::Owner(s) => s.matches(&namespace.owner_references),
            Selector::Label(s) => s.matches(&namespace.labels),
        }
    }
}

impl TargetNamespaces {
    /// Selectors in evaluation order
    pub fn selectors(&self) -> [Selector<'_>; 4] {
        [
            Selector::Name(&self.name_selector),
            Selector::Uid(&self.uid_selector),
            Selector::Owner(&self.owner_selector),
            Selector::Label(&self.label_selector),
        ]
    }

    /// Check a namespace against every configured selector. Without a name
    /// selector, all namespaces except `kube-*` pass the name check.
    pub fn matches(&self, namespace: &NamespaceSnapshot) -> bool {
        if self.name_selector.is_empty()
            && !NameSelector::new([DEFAULT_NAMESPACE_EXCLUDE]).matches(&namespace.name)
        {
            return false;
        }

        self.selectors()
            .iter()
            .filter(|s| !s.is_empty())
            .all(|s| s.matches(namespace))
    }
}
