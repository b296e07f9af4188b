// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes annotation keys used to mark secrets managed by a SecretCopier
pub mod annotations {
    /// Name of the SecretCopier that created the copy
    pub const SECRET_COPIER: &str = "secrets-manager.advok8s.io/secret-copier";
    /// Source secret of the copy, as `<namespace>/<name>`
    pub const SECRET_NAME: &str = "secrets-manager.advok8s.io/secret-name";
}

/// Name pattern applied when a rule has no name selector
pub const DEFAULT_NAMESPACE_EXCLUDE: &str = "!kube-*";

/// Sync period used when a SecretCopier does not set one
pub const DEFAULT_SYNC_PERIOD: &str = "1m";

/// Longest accepted sync period. Requeues further out than this are
/// rejected by the controller's scheduler.
pub const MAX_SYNC_PERIOD_SECS: u64 = 365 * 24 * 60 * 60;

/// Namespace phase reported while a namespace is being deleted
pub const NAMESPACE_TERMINATING: &str = "Terminating";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}
