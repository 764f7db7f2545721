//! Region highlighting driver
//!
//! Resolves a region's language and applies its categories one pass at
//! a time. Problems are reported as diagnostics on the returned report
//! and logged at warn level; only a spent match budget fails the call,
//! and then the region is handed back exactly as it came in.

use tracing::{debug, warn};

use super::annotate::apply_pass;
use super::pattern::MatchBudget;
use super::registry::LanguageRegistry;
use super::segment::{Region, Segment};
use crate::config::Config;
use crate::error::{HighlightError, Result};

/// Language assumed when a region does not name one
pub const DEFAULT_LANGUAGE: &str = "java";

/// Default ceiling on pattern calls per category pass
pub const DEFAULT_MATCH_BUDGET: usize = 1_000_000;

/// How a region was left after highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightStatus {
    /// Every category of the language was applied
    Done,
    /// Nothing was applied (unknown language or highlighting disabled)
    Skipped,
}

/// Summary of highlighting one region
#[derive(Debug)]
pub struct HighlightReport {
    /// Language the region was highlighted as
    pub language: String,
    /// Final state
    pub status: HighlightStatus,
    /// Number of segments tagged across all passes
    pub tagged: usize,
    /// Non-fatal problems met along the way
    pub diagnostics: Vec<HighlightError>,
}

impl HighlightReport {
    fn skipped(language: &str, diagnostics: Vec<HighlightError>) -> Self {
        Self {
            language: language.to_string(),
            status: HighlightStatus::Skipped,
            tagged: 0,
            diagnostics,
        }
    }
}

/// Applies language tables to regions
#[derive(Debug)]
pub struct Highlighter {
    registry: LanguageRegistry,
    default_language: String,
    match_budget: usize,
    /// Whether highlighting is enabled
    pub enabled: bool,
}

impl Highlighter {
    /// Create a highlighter with the built-in languages
    pub fn new() -> Self {
        Self::with_registry(LanguageRegistry::new())
    }

    /// Create a highlighter over a given registry
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            default_language: DEFAULT_LANGUAGE.to_string(),
            match_budget: DEFAULT_MATCH_BUDGET,
            enabled: true,
        }
    }

    /// Create a highlighter from configuration, loading any extra languages
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = LanguageRegistry::new();
        if let Some(path) = &config.languages_file {
            registry.load_languages_file(path)?;
        }

        let mut highlighter = Self::with_registry(registry);
        highlighter.set_default_language(&config.default_language);
        highlighter.set_match_budget(config.match_budget);
        highlighter.enabled = config.highlight;
        Ok(highlighter)
    }

    /// Get the language registry
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Get the language used for regions without one
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Set the language used for regions without one
    pub fn set_default_language(&mut self, language: &str) {
        self.default_language = language.to_string();
    }

    /// Set the per-pass match budget (at least 1)
    pub fn set_match_budget(&mut self, budget: usize) {
        self.match_budget = budget.max(1);
    }

    /// Toggle highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Highlight one region in place
    pub fn highlight(&self, region: &mut Region) -> Result<HighlightReport> {
        if !self.enabled {
            let language = region.language.as_deref().unwrap_or(&self.default_language);
            return Ok(HighlightReport::skipped(language, Vec::new()));
        }

        let requested = match region.language.as_deref() {
            Some(language) => language,
            None => {
                warn!(
                    "Assuming highlighting language '{}' (no language given)",
                    self.default_language
                );
                self.default_language.as_str()
            }
        };

        let Some(lang) = self.registry.get_language(requested) else {
            let err = HighlightError::UnknownLanguage(requested.to_string());
            warn!("{}", err);
            return Ok(HighlightReport::skipped(requested, vec![err]));
        };

        let original = region.take_segments();
        let mut current: Option<Vec<Segment>> = None;
        let mut diagnostics = Vec::new();
        let mut tagged = 0;

        for rule in lang.categories() {
            let input = current.as_deref().unwrap_or(&original);
            let mut budget = MatchBudget::new(self.match_budget);
            let outcome = apply_pass(input, &rule.category, &*rule.pattern, &mut budget);

            for fault in outcome.faults {
                let err = HighlightError::PatternFault {
                    language: lang.name.clone(),
                    category: rule.category.to_string(),
                    offset: fault.offset,
                    kind: fault.kind,
                };
                warn!("{}", err);
                diagnostics.push(err);
            }

            if outcome.exhausted {
                region.set_segments(original);
                let err = HighlightError::BudgetExhausted {
                    language: lang.name.clone(),
                    category: rule.category.to_string(),
                    budget: budget.limit(),
                };
                warn!("{}", err);
                return Err(err);
            }

            debug!(
                language = %lang.name,
                category = %rule.category,
                tagged = outcome.tagged,
                "applied category"
            );
            tagged += outcome.tagged;
            current = Some(outcome.segments);
        }

        region.set_segments(current.unwrap_or(original));

        Ok(HighlightReport {
            language: lang.name.clone(),
            status: HighlightStatus::Done,
            tagged,
            diagnostics,
        })
    }

    /// Highlight each region independently
    ///
    /// A failure in one region leaves the others unaffected.
    pub fn highlight_all(&self, regions: &mut [Region]) -> Vec<Result<HighlightReport>> {
        regions.iter_mut().map(|region| self.highlight(region)).collect()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
