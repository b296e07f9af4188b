// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One convergence pass over all rules of a SecretCopier.

use crate::error::Result;
use crate::sync::backend::SyncBackend;
use crate::sync::secrets::{sync_rule, SyncOutcome};
use crate::types::{NamespaceSnapshot, SecretCopier};
use kube::ResourceExt;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Counts of what happened during a pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Targets left alone: missing source or a secret not managed by us
    pub skipped: usize,
    /// Targets whose write was rejected, retried on the next pass
    pub failed: usize,
}

impl PassSummary {
    fn record(&mut self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Created => self.created += 1,
            SyncOutcome::Updated => self.updated += 1,
            SyncOutcome::Unchanged => self.unchanged += 1,
            SyncOutcome::SameNamespace | SyncOutcome::SourceMissing | SyncOutcome::NotManaged => {
                self.skipped += 1
            }
        }
    }
}

/// Evaluate every rule of the copier against all active namespaces and sync
/// each match.
///
/// Failing to list namespaces or read a secret aborts the pass. A rejected
/// write only affects its own target; the pass carries on with the rest.
#[instrument(skip(backend, copier), fields(copier = %copier.name_any()))]
pub async fn run_pass<B>(backend: &B, copier: &SecretCopier) -> Result<PassSummary>
where
    B: SyncBackend + ?Sized,
{
    let mut summary = PassSummary::default();

    if copier.spec.rules.is_empty() {
        debug!("No rules to process");
        return Ok(summary);
    }

    let namespaces: Vec<NamespaceSnapshot> = backend
        .list_namespaces()
        .await?
        .into_iter()
        .filter(|ns| !ns.terminating)
        .collect();

    debug!(
        "Active namespaces: {:?}",
        namespaces.iter().map(|ns| ns.name.as_str()).collect::<Vec<_>>()
    );

    for rule in &copier.spec.rules {
        let targets: Vec<&str> = namespaces
            .iter()
            .filter(|ns| rule.targets(ns))
            .map(|ns| ns.name.as_str())
            .collect();

        if targets.is_empty() {
            debug!("No target namespaces for {}", rule.source_identity());
            continue;
        }

        debug!(
            "Target namespaces for {}: {:?}",
            rule.source_identity(),
            targets
        );

        for target in targets {
            match sync_rule(backend, copier, rule, target).await {
                Ok(outcome) => summary.record(outcome),
                Err(e) if e.is_write_failure() => {
                    warn!(
                        "Failed to sync {} to namespace {}: {}",
                        rule.source_identity(),
                        target,
                        e
                    );
                    summary.failed += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(summary)
}

/// Delay until the next periodic pass, `None` when the copier is purely
/// event driven
pub fn next_pass_delay(copier: &SecretCopier) -> Result<Option<Duration>> {
    let period = copier.sync_period()?;
    Ok((!period.is_zero()).then_some(period))
}
