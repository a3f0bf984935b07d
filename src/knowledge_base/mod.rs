//! Knowledge Base
//!
//! Immutable mapping from canonical condition keys to agronomy records, plus
//! the alias table used by the label resolver. Built once at startup
//! (embedded defaults or a JSON file) and passed by reference into the
//! engine; nothing mutates it afterwards.

pub mod aliases;
pub mod entries;

use anyhow::Context;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{DiagnosisError, Result};
use crate::types::{Category, CategoryListing, NutrientSymbol, Severity};

pub use entries::{FALLBACK_NUTRIENT_KEY, FALLBACK_STRESS_KEY};

/// Severity descriptions for one condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityIndicators {
    pub mild: String,
    pub moderate: String,
    pub severe: String,
}

impl SeverityIndicators {
    pub fn for_severity(&self, severity: Severity) -> &str {
        match severity {
            Severity::Mild => &self.mild,
            Severity::Moderate => &self.moderate,
            Severity::Severe => &self.severe,
        }
    }
}

/// Agronomy record for one canonical condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseEntry {
    pub category: Category,
    pub subcategory: String,
    pub name: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub treatment: Vec<String>,
    pub severity_indicators: SeverityIndicators,
}

impl From<&entries::StaticEntry> for KnowledgeBaseEntry {
    fn from(entry: &entries::StaticEntry) -> Self {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        let [mild, moderate, severe] = entry.severity_indicators;
        Self {
            category: entry.category,
            subcategory: entry.subcategory.to_string(),
            name: entry.name.to_string(),
            symptoms: owned(entry.symptoms),
            causes: owned(entry.causes),
            treatment: owned(entry.treatment),
            severity_indicators: SeverityIndicators {
                mild: mild.to_string(),
                moderate: moderate.to_string(),
                severe: severe.to_string(),
            },
        }
    }
}

/// On-disk JSON layout (sorted maps keep saved files diff-friendly)
#[derive(Debug, Serialize, Deserialize)]
struct KnowledgeBaseFile {
    entries: BTreeMap<String, KnowledgeBaseEntry>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Normalize a raw classifier label for exact lookup.
///
/// Trims, lower-cases, and maps spaces/hyphens to underscores, so
/// "Tomato with Late-Blight " becomes "tomato_with_late_blight".
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Read-only diagnostic knowledge
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: FxHashMap<String, KnowledgeBaseEntry>,
    aliases: FxHashMap<String, String>,
}

impl KnowledgeBase {
    /// Knowledge base compiled into the crate
    pub fn builtin() -> Self {
        let entries = entries::ENTRIES
            .iter()
            .map(|e| (e.key.to_string(), KnowledgeBaseEntry::from(e)))
            .collect();
        let aliases = aliases::ALIASES
            .iter()
            .map(|(alias, key)| (alias.to_string(), key.to_string()))
            .collect();
        Self { entries, aliases }
    }

    /// Build a knowledge base from arbitrary records.
    ///
    /// Keys and alias names are normalized. Fails when either fallback
    /// record is missing or miscategorized, or an alias targets an unknown key.
    pub fn from_parts<E, A>(entries: E, aliases: A) -> Result<Self>
    where
        E: IntoIterator<Item = (String, KnowledgeBaseEntry)>,
        A: IntoIterator<Item = (String, String)>,
    {
        let entries: FxHashMap<String, KnowledgeBaseEntry> = entries
            .into_iter()
            .map(|(key, entry)| (normalize_label(&key), entry))
            .collect();
        let aliases: FxHashMap<String, String> = aliases
            .into_iter()
            .map(|(alias, key)| (normalize_label(&alias), normalize_label(&key)))
            .collect();

        let kb = Self { entries, aliases };
        kb.validate()?;
        Ok(kb)
    }

    fn validate(&self) -> Result<()> {
        for (key, category) in [
            (FALLBACK_NUTRIENT_KEY, Category::NutrientDeficiency),
            (FALLBACK_STRESS_KEY, Category::Environmental),
        ] {
            match self.entries.get(key) {
                None => {
                    return Err(DiagnosisError::KnowledgeBase(format!(
                        "missing fallback entry '{}'",
                        key
                    )))
                }
                Some(entry) if entry.category != category => {
                    return Err(DiagnosisError::KnowledgeBase(format!(
                        "fallback entry '{}' must be {}, found {}",
                        key,
                        category.as_str(),
                        entry.category.as_str()
                    )))
                }
                Some(_) => {}
            }
        }

        // Sorted for a stable error message
        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort();
        for (alias, target) in aliases {
            if !self.entries.contains_key(target) {
                return Err(DiagnosisError::KnowledgeBase(format!(
                    "alias '{}' points at unknown key '{}'",
                    alias, target
                )));
            }
        }
        Ok(())
    }

    /// Load a knowledge base from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base file: {:?}", path))?;
        let kb = Self::from_json(&contents)
            .with_context(|| format!("Failed to load knowledge base from {:?}", path))?;
        tracing::info!(
            "Loaded knowledge base from {:?} ({} entries, {} aliases)",
            path,
            kb.len(),
            kb.alias_count()
        );
        Ok(kb)
    }

    /// Parse and validate a JSON knowledge base
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: KnowledgeBaseFile =
            serde_json::from_str(json).context("Failed to parse knowledge base JSON")?;
        Ok(Self::from_parts(file.entries, file.aliases)?)
    }

    /// Serialize to the JSON layout accepted by `from_json`
    pub fn to_json(&self) -> anyhow::Result<String> {
        let file = KnowledgeBaseFile {
            entries: self.entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            aliases: self.aliases.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        };
        serde_json::to_string_pretty(&file).context("Failed to serialize knowledge base")
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write knowledge base file: {:?}", path))
    }

    /// Exact lookup by canonical key
    pub fn get(&self, key: &str) -> Option<&KnowledgeBaseEntry> {
        self.entries.get(key)
    }

    /// Canonical key an alias points at
    pub fn alias(&self, label: &str) -> Option<&str> {
        self.aliases.get(label).map(|s| s.as_str())
    }

    pub fn is_fallback_key(key: &str) -> bool {
        key == FALLBACK_NUTRIENT_KEY || key == FALLBACK_STRESS_KEY
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Supported nutrient symbols and disease types for client display.
    ///
    /// Nutrients come from the specific (non-fallback) nutrient entries,
    /// known symbols first in their conventional order, unknown ones sorted after.
    pub fn category_listing(&self) -> CategoryListing {
        let mut symbols: Vec<&str> = self
            .entries
            .iter()
            .filter(|(key, e)| {
                e.category == Category::NutrientDeficiency && !Self::is_fallback_key(key)
            })
            .map(|(_, e)| e.subcategory.as_str())
            .collect();
        symbols.sort_by_key(|s| {
            let rank = entries::NUTRIENT_NAMES
                .iter()
                .position(|(sym, _)| sym == s)
                .unwrap_or(usize::MAX);
            (rank, s.to_string())
        });
        symbols.dedup();

        let nutrients = symbols
            .into_iter()
            .map(|symbol| NutrientSymbol {
                symbol: symbol.to_string(),
                name: entries::NUTRIENT_NAMES
                    .iter()
                    .find(|(sym, _)| *sym == symbol)
                    .map(|(_, name)| name.to_string())
                    .unwrap_or_else(|| symbol.to_string()),
            })
            .collect();

        CategoryListing {
            nutrients,
            disease_types: vec![Category::Fungal, Category::Bacterial, Category::Viral],
            categories: Category::ALL.to_vec(),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: Category, subcategory: &str, name: &str) -> KnowledgeBaseEntry {
        KnowledgeBaseEntry {
            category,
            subcategory: subcategory.to_string(),
            name: name.to_string(),
            symptoms: vec!["symptom".to_string()],
            causes: vec!["cause".to_string()],
            treatment: vec!["treatment".to_string()],
            severity_indicators: SeverityIndicators {
                mild: "a little".to_string(),
                moderate: "some".to_string(),
                severe: "a lot".to_string(),
            },
        }
    }

    fn fallbacks() -> Vec<(String, KnowledgeBaseEntry)> {
        vec![
            (
                FALLBACK_NUTRIENT_KEY.to_string(),
                entry(Category::NutrientDeficiency, "general", "Potential Nutrient Deficiency"),
            ),
            (
                FALLBACK_STRESS_KEY.to_string(),
                entry(Category::Environmental, "general_stress", "General Plant Stress"),
            ),
        ]
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Nitrogen_Deficiency "), "nitrogen_deficiency");
        assert_eq!(normalize_label("Tomato with Late-Blight"), "tomato_with_late_blight");
        assert_eq!(normalize_label("N_deficiency"), "n_deficiency");
    }

    #[test]
    fn test_builtin_contents() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), 15);
        let n = kb.get("nitrogen_deficiency").unwrap();
        assert_eq!(n.category, Category::NutrientDeficiency);
        assert_eq!(n.subcategory, "N");
        assert_eq!(kb.alias("tomato_with_late_blight"), Some("late_blight"));
        assert!(kb.get("zinc_deficiency").is_none());
    }

    #[test]
    fn test_severity_indicator_lookup() {
        let kb = KnowledgeBase::builtin();
        let pm = kb.get("powdery_mildew").unwrap();
        assert_eq!(
            pm.severity_indicators.for_severity(Severity::Mild),
            "Small white patches on few leaves"
        );
    }

    #[test]
    fn test_from_parts_requires_fallbacks() {
        let result = KnowledgeBase::from_parts(
            vec![("leaf_spot".to_string(), entry(Category::Fungal, "leaf_spot", "Leaf Spot"))],
            Vec::new(),
        );
        assert!(matches!(result, Err(DiagnosisError::KnowledgeBase(_))));
    }

    #[test]
    fn test_from_parts_rejects_miscategorized_fallback() {
        let mut parts = fallbacks();
        parts[1].1.category = Category::Fungal;
        assert!(KnowledgeBase::from_parts(parts, Vec::new()).is_err());
    }

    #[test]
    fn test_from_parts_rejects_dangling_alias() {
        let result = KnowledgeBase::from_parts(
            fallbacks(),
            vec![("mildew".to_string(), "powdery_mildew".to_string())],
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("powdery_mildew"));
    }

    #[test]
    fn test_from_parts_normalizes_keys() {
        let mut parts = fallbacks();
        parts.push((
            "Mosaic Virus".to_string(),
            entry(Category::Viral, "mosaic", "Mosaic Virus"),
        ));
        let kb = KnowledgeBase::from_parts(
            parts,
            vec![("TMV".to_string(), "mosaic virus".to_string())],
        )
        .unwrap();
        assert!(kb.get("mosaic_virus").is_some());
        assert_eq!(kb.alias("tmv"), Some("mosaic_virus"));
    }

    #[test]
    fn test_json_round_trip_preserves_lookups() {
        let kb = KnowledgeBase::builtin();
        let json = kb.to_json().unwrap();
        let reloaded = KnowledgeBase::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), kb.len());
        assert_eq!(reloaded.alias_count(), kb.alias_count());
        assert_eq!(reloaded.get("late_blight"), kb.get("late_blight"));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(KnowledgeBase::from_json("{ not json").is_err());
    }

    #[test]
    fn test_category_listing() {
        let listing = KnowledgeBase::builtin().category_listing();
        let symbols: Vec<_> = listing.nutrients.iter().map(|n| n.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["N", "P", "K", "Fe", "Mg", "Ca"]);
        assert_eq!(listing.nutrients[3].name, "Iron");
        assert_eq!(
            listing.disease_types,
            vec![Category::Fungal, Category::Bacterial, Category::Viral]
        );
        assert_eq!(listing.categories.len(), 5);
    }
}
