//! Language definitions
//!
//! A language is an ordered list of (category, pattern) entries. Order is
//! significant: categories are applied in the order they were added, and
//! each one only sees text the earlier ones left plain.

use std::fmt;

use super::category::Category;
use super::pattern::Pattern;

/// One category of a language and the pattern that finds it
pub struct CategoryRule {
    /// Category assigned to matches
    pub category: Category,
    /// Pattern producing the matches
    pub pattern: Box<dyn Pattern>,
}

impl fmt::Debug for CategoryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryRule")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// A complete language definition for annotation
#[derive(Debug)]
pub struct LanguageDefinition {
    /// Language identifier (e.g., "java", "SQL")
    pub name: String,
    /// File extensions (e.g., ["java"], ["s", "asm"])
    pub extensions: Vec<String>,
    categories: Vec<CategoryRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Append a category; it runs after every category already added
    ///
    /// Adding a category that already exists replaces its pattern in place.
    pub fn add_category(&mut self, category: Category, pattern: impl Pattern + 'static) {
        let pattern: Box<dyn Pattern> = Box::new(pattern);
        match self.categories.iter_mut().find(|r| r.category == category) {
            Some(rule) => rule.pattern = pattern,
            None => self.categories.push(CategoryRule { category, pattern }),
        }
    }

    /// Categories in application order
    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }
}
