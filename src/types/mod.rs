// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource types consumed by the operator.

pub mod duration;
pub mod namespace;
pub mod secret_copier;

pub use duration::parse_duration;
pub use namespace::NamespaceSnapshot;
pub use secret_copier::{
    ReclaimPolicy, SecretCopier, SecretCopierRule, SecretCopierSpec, SourceSecret, TargetSecret,
};
