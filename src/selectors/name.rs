// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::glob_any;
use serde::{Deserialize, Serialize};

/// Selector matching on names using glob patterns. A pattern prefixed with
/// `!` excludes matching names.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NameSelector {
    #[serde(default)]
    pub match_names: Vec<String>,
}

impl NameSelector {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameSelector {
            match_names: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.match_names.is_empty()
    }

    /// A name matches when it hits at least one include pattern (if any are
    /// configured) and none of the exclude patterns.
    pub fn matches(&self, name: &str) -> bool {
        if self.is_empty() {
            return false;
        }

        let (excludes, includes): (Vec<&str>, Vec<&str>) = self
            .match_names
            .iter()
            .map(String::as_str)
            .partition(|p| p.starts_with('!'));

        if !includes.is_empty() && !glob_any(includes, name) {
            return false;
        }

        !glob_any(excludes.into_iter().map(|p| &p[1..]), name)
    }
}
