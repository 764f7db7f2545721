//! Configuration file support
//!
//! Loads settings from ~/.synmark.conf (or %USERPROFILE%\.synmark.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # synmark configuration
//! default-language = java
//! match-budget = 1000000
//! highlight = true
//! languages-file = /home/me/.synmark-languages.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::syntax::{DEFAULT_LANGUAGE, DEFAULT_MATCH_BUDGET};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language for regions that do not name one
    pub default_language: String,
    /// Ceiling on pattern calls per category pass
    pub match_budget: usize,
    /// Whether highlighting is enabled
    pub highlight: bool,
    /// TOML file with extra language definitions
    pub languages_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            match_budget: DEFAULT_MATCH_BUDGET,
            highlight: true,
            languages_file: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".synmark.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".synmark.conf"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                debug!(path = %path.display(), "loading configuration");
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("default-language") {
            if !value.is_empty() {
                self.default_language = value.clone();
            }
        }

        if let Some(value) = settings.get("match-budget") {
            if let Ok(n) = value.parse::<usize>() {
                self.match_budget = n.max(1);
            }
        }

        if let Some(value) = settings.get("highlight") {
            self.highlight = parse_bool(value);
        }

        if let Some(value) = settings.get("languages-file") {
            if !value.is_empty() {
                self.languages_file = Some(PathBuf::from(value));
            }
        }
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}
