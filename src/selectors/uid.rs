// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Selector matching on exact UIDs
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UidSelector {
    #[serde(default)]
    pub match_uids: Vec<String>,
}

impl UidSelector {
    pub fn is_empty(&self) -> bool {
        self.match_uids.is_empty()
    }

    pub fn matches(&self, uid: &str) -> bool {
        self.match_uids.iter().any(|u| u == uid)
    }
}
