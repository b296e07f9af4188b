// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Matching rules to namespaces and converging secret copies.

pub mod backend;
pub mod index;
pub mod ownership;
pub mod pass;
pub mod secrets;

pub use backend::SyncBackend;
pub use index::{copiers_for_namespace, copiers_for_secret};
pub use ownership::Ownership;
pub use pass::{next_pass_delay, run_pass, PassSummary};
pub use secrets::{sync_rule, SyncOutcome};
