//! Reference vocabularies: known drugs, known conditions and brand→generic
//! mappings.
//!
//! A [`Vocabulary`] is built once at startup and never mutated. Loading
//! validates the whole document; any malformed entry aborts the load.

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Category;

/// Vocabulary loading errors. All are fatal.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("Failed to read vocabulary: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Blank {0} entry in vocabulary")]
    EmptyName(&'static str),

    #[error("Duplicate brand name: {0}")]
    DuplicateBrand(String),

    #[error("Vocabulary has no {0} entries")]
    EmptyVocabulary(&'static str),
}

pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Serialized form of a vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VocabularyData {
    pub drugs: Vec<String>,
    pub conditions: Vec<String>,
    /// Brand name → generic name
    #[serde(default)]
    pub brands: Vec<(String, String)>,
}

/// Immutable reference data shared by the normalizer.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    drugs: Vec<String>,
    conditions: Vec<String>,
    drug_index: HashSet<String>,
    condition_index: HashSet<String>,
    /// Lowercased brand → lowercased generic
    brands: BTreeMap<String, String>,
}

impl Vocabulary {
    /// Build and validate a vocabulary.
    pub fn from_data(data: VocabularyData) -> VocabularyResult<Self> {
        let drugs = clean_names(data.drugs, "drug")?;
        let conditions = clean_names(data.conditions, "condition")?;

        if drugs.is_empty() {
            return Err(VocabularyError::EmptyVocabulary("drug"));
        }
        if conditions.is_empty() {
            return Err(VocabularyError::EmptyVocabulary("condition"));
        }

        let mut brands = BTreeMap::new();
        for (brand, generic) in data.brands {
            let brand = clean_name(&brand).ok_or(VocabularyError::EmptyName("brand"))?;
            let generic = clean_name(&generic).ok_or(VocabularyError::EmptyName("generic"))?;
            if brands.insert(brand.clone(), generic).is_some() {
                return Err(VocabularyError::DuplicateBrand(brand));
            }
        }

        debug!(
            drugs = drugs.len(),
            conditions = conditions.len(),
            brands = brands.len(),
            "Vocabulary loaded"
        );

        Ok(Self {
            drug_index: drugs.iter().cloned().collect(),
            condition_index: conditions.iter().cloned().collect(),
            drugs,
            conditions,
            brands,
        })
    }

    /// Parse a JSON vocabulary document.
    ///
    /// Brands are given as an object: `{"humira": "adalimumab", ...}`.
    pub fn from_json_str(json: &str) -> VocabularyResult<Self> {
        let raw: RawVocabulary = serde_json::from_str(json)?;
        Self::from_data(raw.into())
    }

    /// Load a JSON vocabulary document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> VocabularyResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Built-in reference vocabulary (immunology and IBD focused).
    pub fn builtin() -> VocabularyResult<Self> {
        Self::from_data(builtin::data())
    }

    pub fn is_known_drug(&self, name: &str) -> bool {
        self.drug_index.contains(&name.trim().to_lowercase())
    }

    pub fn is_known_condition(&self, name: &str) -> bool {
        self.condition_index.contains(&name.trim().to_lowercase())
    }

    pub fn is_known(&self, category: Category, name: &str) -> bool {
        match category {
            Category::Drug => self.is_known_drug(name),
            Category::Condition => self.is_known_condition(name),
        }
    }

    /// Known drug names, in load order.
    pub fn all_drugs(&self) -> &[String] {
        &self.drugs
    }

    /// Known condition names, in load order.
    pub fn all_conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Drug => &self.drugs,
            Category::Condition => &self.conditions,
        }
    }

    /// Generic name for a brand (case-insensitive exact key match).
    pub fn generic_for(&self, brand: &str) -> Option<&str> {
        self.brands
            .get(&brand.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Brand keys in sorted order.
    pub fn brand_names(&self) -> impl Iterator<Item = &str> {
        self.brands.keys().map(String::as_str)
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }
}

/// On-disk JSON layout with brands as an object.
#[derive(Deserialize)]
struct RawVocabulary {
    drugs: Vec<String>,
    conditions: Vec<String>,
    #[serde(default, deserialize_with = "brand_entries")]
    brands: Vec<(String, serde_json::Value)>,
}

/// Read the brand object entry by entry so repeated keys reach validation.
fn brand_entries<'de, D>(deserializer: D) -> Result<Vec<(String, serde_json::Value)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BrandEntries;

    impl<'de> Visitor<'de> for BrandEntries {
        type Value = Vec<(String, serde_json::Value)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping brand names to generic names")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(BrandEntries)
}

impl From<RawVocabulary> for VocabularyData {
    fn from(raw: RawVocabulary) -> Self {
        // Non-string generics become blank and are rejected by validation.
        let brands = raw
            .brands
            .into_iter()
            .map(|(brand, generic)| {
                let generic = generic.as_str().unwrap_or_default().to_string();
                (brand, generic)
            })
            .collect();

        Self {
            drugs: raw.drugs,
            conditions: raw.conditions,
            brands,
        }
    }
}

fn clean_name(name: &str) -> Option<String> {
    let cleaned = name.trim().to_lowercase();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Lowercase, trim and dedupe while keeping first-seen order.
fn clean_names(names: Vec<String>, label: &'static str) -> VocabularyResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::with_capacity(names.len());
    for name in names {
        let name = clean_name(&name).ok_or(VocabularyError::EmptyName(label))?;
        if seen.insert(name.clone()) {
            cleaned.push(name);
        }
    }
    Ok(cleaned)
}
