//! Pattern table registry
//!
//! Maps language identifiers to their definitions, and file extensions
//! to language identifiers. Built once, then shared read-only.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::builtin;
use super::category::Category;
use super::language::LanguageDefinition;
use super::pattern::PatternRule;
use crate::error::{HighlightError, Result};

/// Registry of language definitions
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    /// Loaded language definitions
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create a registry with the built-in languages
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for lang in builtin::all_languages() {
            registry.register_language(lang);
        }
        registry
    }

    /// Create a registry with no languages
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a language definition, replacing any with the same name
    pub fn register_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        if self.languages.insert(name.clone(), lang).is_some() {
            debug!(language = %name, "replaced language definition");
        }
    }

    /// Get a language definition by identifier
    ///
    /// Exact matches win; otherwise the lookup ignores ASCII case, so
    /// `data-language="sql"` finds the `SQL` table. Among names that
    /// differ only by case, the lexically smallest is returned.
    pub fn get_language(&self, id: &str) -> Option<&LanguageDefinition> {
        self.languages.get(id).or_else(|| {
            self.languages
                .iter()
                .filter(|(name, _)| name.eq_ignore_ascii_case(id))
                .min_by(|a, b| a.0.cmp(b.0))
                .map(|(_, lang)| lang)
        })
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Load extra languages from a TOML file
    ///
    /// Returns the number of languages registered.
    pub fn load_languages_file(&mut self, path: &Path) -> Result<usize> {
        let contents = fs::read_to_string(path)?;
        let languages = parse_languages(&contents)?;
        let count = languages.len();
        for lang in languages {
            self.register_language(lang);
        }
        info!(path = %path.display(), count, "loaded language definitions");
        Ok(count)
    }
}

#[derive(Debug, Deserialize)]
struct LanguageFile {
    #[serde(default)]
    language: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    name: String,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default, rename = "category")]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct CategoryEntry {
    name: String,
    pattern: String,
    #[serde(default)]
    case_insensitive: bool,
    #[serde(default)]
    dot_all: bool,
}

/// Parse language definitions from TOML text
///
/// Categories keep the order they appear in the file. Any pattern that
/// fails to compile rejects the whole file.
pub fn parse_languages(contents: &str) -> Result<Vec<LanguageDefinition>> {
    let file: LanguageFile = toml::from_str(contents)?;

    file.language
        .into_iter()
        .map(|entry| {
            let mut lang = LanguageDefinition::new(&entry.name);
            for ext in &entry.extensions {
                lang.add_extension(ext);
            }
            for cat in entry.categories {
                let rule = PatternRule::with_flags(&cat.pattern, cat.case_insensitive, cat.dot_all)
                    .map_err(|source| HighlightError::InvalidPattern {
                        category: format!("{}/{}", entry.name, cat.name),
                        source,
                    })?;
                lang.add_category(Category::from_name(&cat.name), rule);
            }
            Ok(lang)
        })
        .collect()
}
