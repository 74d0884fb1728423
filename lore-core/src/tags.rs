//! Actor tag reconciliation.
//!
//! Tags on an actor come from two places: typed in by hand, or auto-applied
//! from the equipped ancestry item. When the ancestry changes, the previous
//! auto tags must be removed without touching the manual ones. The host keeps
//! a snapshot of the last auto-applied set; reconciliation is then a small
//! set computation:
//!
//! ```text
//! manual = existing − previous_auto − any "ancestry:"-prefixed stragglers
//! result = manual ∪ fresh_auto
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ancestry fields that contribute auto-applied tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestry {
    /// Display name.
    pub name: String,
    /// Tag key applied to the actor as `ancestry:{tag}`.
    pub tag: String,
    /// Optional size tag applied as `size:{lowercase}`.
    pub size_tag: String,
    /// Additional tags, comma or whitespace separated, lowercased on apply.
    pub extra_tags: String,
}

/// Compute the auto-applied tags contributed by an equipped ancestry.
///
/// Order is stable: ancestry tag, size tag, then extra tags in written
/// order, deduplicated.
#[must_use]
pub fn auto_tags(ancestry: Option<&Ancestry>) -> Vec<String> {
    let Some(ancestry) = ancestry else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut push = |tag: String| {
        if !tag.is_empty() && seen.insert(tag.clone()) {
            out.push(tag);
        }
    };

    let tag = ancestry.tag.trim();
    if !tag.is_empty() {
        push(format!("ancestry:{tag}"));
    }
    let size = ancestry.size_tag.trim().to_lowercase();
    if !size.is_empty() {
        push(format!("size:{size}"));
    }
    for extra in ancestry.extra_tags.split([' ', ',', '\t', '\n']) {
        push(extra.trim().to_lowercase());
    }

    out
}

/// Reconcile an actor's tag list after the auto-applied set changed.
///
/// Manual tags survive; tags from the previous auto snapshot (and any stale
/// `ancestry:`-prefixed tag) are replaced by the fresh auto set. Insertion
/// order is preserved: manual tags first, then new auto tags.
#[must_use]
pub fn reconcile(
    existing: &[String],
    previous_auto: &[String],
    fresh_auto: &[String],
) -> Vec<String> {
    let prev: HashSet<&str> = previous_auto.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for tag in existing {
        let tag = tag.trim();
        if tag.is_empty() || tag.starts_with("ancestry:") || prev.contains(tag) {
            continue;
        }
        if seen.insert(tag.to_string()) {
            out.push(tag.to_string());
        }
    }
    for tag in fresh_auto {
        let tag = tag.trim();
        if !tag.is_empty() && seen.insert(tag.to_string()) {
            out.push(tag.to_string());
        }
    }

    out
}
