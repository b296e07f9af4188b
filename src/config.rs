// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay before a failed reconciliation is retried
    pub error_requeue: Duration,
    /// Block startup until the SecretCopier CRD is served by the API server
    pub wait_for_crd: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            error_requeue: Duration::from_secs(60),
            wait_for_crd: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let error_requeue = match lookup("ERROR_REQUEUE_SECS") {
            Some(v) => Duration::from_secs(
                v.trim()
                    .parse()
                    .with_context(|| format!("ERROR_REQUEUE_SECS is not a number: {}", v))?,
            ),
            None => defaults.error_requeue,
        };

        let wait_for_crd = lookup("WAIT_FOR_CRD")
            .map(|v| v.trim().parse().unwrap_or(defaults.wait_for_crd))
            .unwrap_or(defaults.wait_for_crd);

        Ok(Config {
            error_requeue,
            wait_for_crd,
        })
    }
}
