//! Label Resolver
//!
//! Exact-after-normalization lookup of a raw classifier label: knowledge
//! base first, then the alias table. No fuzzy matching, so a given label
//! always maps to the same key.

use crate::knowledge_base::{normalize_label, KnowledgeBase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Normalized label is itself a canonical key
    Direct { key: String },
    /// Normalized label is an alias of a canonical key
    Alias { key: String },
    /// No match; the caller must consult the fallback selector
    Unresolved { normalized: String },
}

impl Resolution {
    pub fn key(&self) -> Option<&str> {
        match self {
            Resolution::Direct { key } | Resolution::Alias { key } => Some(key),
            Resolution::Unresolved { .. } => None,
        }
    }
}

pub fn resolve_label(kb: &KnowledgeBase, raw_label: &str) -> Resolution {
    let normalized = normalize_label(raw_label);

    if kb.get(&normalized).is_some() {
        return Resolution::Direct { key: normalized };
    }

    match kb.alias(&normalized) {
        Some(target) if kb.get(target).is_some() => Resolution::Alias {
            key: target.to_string(),
        },
        _ => Resolution::Unresolved { normalized },
    }
}
