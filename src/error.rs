// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecretCopierError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to list {0}")]
    ListFailure(String),

    #[error("Failed to read {0}")]
    ReadFailure(String),

    #[error("Failed to write {0}")]
    WriteFailure(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

impl SecretCopierError {
    /// Write failures only affect a single target and never abort a pass
    pub fn is_write_failure(&self) -> bool {
        matches!(self, SecretCopierError::WriteFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, SecretCopierError>;
