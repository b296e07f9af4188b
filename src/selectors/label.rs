// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::glob_any;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Operator of a label selector requirement
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum LabelOperator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

/// A single requirement on a label. `In` and `NotIn` compare the label value
/// against `values` using glob patterns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: LabelOperator,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl LabelSelectorRequirement {
    fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        let patterns = || self.values.iter().map(String::as_str);

        match (labels.get(&self.key), self.operator) {
            (Some(value), LabelOperator::In) => glob_any(patterns(), value),
            (Some(value), LabelOperator::NotIn) => !glob_any(patterns(), value),
            (Some(_), LabelOperator::Exists) => true,
            (Some(_), LabelOperator::DoesNotExist) => false,
            (None, LabelOperator::In | LabelOperator::Exists) => false,
            (None, LabelOperator::NotIn | LabelOperator::DoesNotExist) => true,
        }
    }
}

/// Selector matching on labels. All `match_labels` entries and all
/// `match_expressions` must hold.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_expressions: Vec<LabelSelectorRequirement>,
}

impl LabelSelector {
    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty() && self.match_expressions.is_empty()
    }

    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        if self.is_empty() {
            return false;
        }

        self.match_labels
            .iter()
            .all(|(key, value)| labels.get(key) == Some(value))
            && self.match_expressions.iter().all(|e| e.matches(labels))
    }
}
