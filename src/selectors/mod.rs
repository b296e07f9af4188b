// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace selectors used by SecretCopier rules.
//!
//! Every selector is either empty (no constraint configured) or filtering.
//! An empty selector never matches on its own; the composite
//! [`TargetNamespaces`] matcher only applies the selectors that are set.

pub mod label;
pub mod name;
pub mod owner;
pub mod target;
pub mod uid;

pub use label::{LabelOperator, LabelSelector, LabelSelectorRequirement};
pub use name::NameSelector;
pub use owner::{OwnerReference, OwnerSelector};
pub use target::{Selector, TargetNamespaces};
pub use uid::UidSelector;

/// Check if the value glob-matches any of the patterns
pub(crate) fn glob_any<'a, I>(patterns: I, value: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    patterns
        .into_iter()
        .any(|pattern| glob_match::glob_match(pattern, value))
}
