// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ownership record stored on managed copies.

use crate::constants::annotations;
use k8s_openapi::api::core::v1::Secret;
use std::collections::BTreeMap;

/// Proof that a secret was created by a SecretCopier from a given source.
/// A copy is only managed when both fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ownership {
    /// Name of the SecretCopier
    pub copier: String,
    /// Source secret as `<namespace>/<name>`
    pub source: String,
}

impl Ownership {
    pub fn new(copier: impl Into<String>, source: impl Into<String>) -> Self {
        Ownership {
            copier: copier.into(),
            source: source.into(),
        }
    }

    /// Read the ownership record from a secret's annotations
    pub fn from_secret(secret: &Secret) -> Option<Self> {
        let annotations = secret.metadata.annotations.as_ref()?;

        Some(Ownership {
            copier: annotations.get(annotations::SECRET_COPIER)?.clone(),
            source: annotations.get(annotations::SECRET_NAME)?.clone(),
        })
    }

    pub fn to_annotations(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (annotations::SECRET_COPIER.to_string(), self.copier.clone()),
            (annotations::SECRET_NAME.to_string(), self.source.clone()),
        ])
    }

    /// Check if the secret carries exactly this ownership record
    pub fn owns(&self, secret: &Secret) -> bool {
        Ownership::from_secret(secret).is_some_and(|o| o == *self)
    }
}
