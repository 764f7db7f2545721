//! Built-in language definitions
//!
//! The tables are deliberately approximate: each category is a single
//! regular expression, with no notion of nesting or context.

mod asm;
mod c;
mod java;
mod javascript;
mod make;
mod pascal;
mod python;
mod sql;

use tracing::warn;

use super::category::Category;
use super::language::LanguageDefinition;
use super::pattern::PatternRule;

/// Decimal integer or float with optional sign and exponent
const NUMBER: &str = r"\b[+\-]?(?:\d+|\d+\.\d*|\d*\.\d+)(?:[eE][+\-]?\d+)?\b";

/// Double-quoted string with `\"` escapes
const DOUBLE_QUOTED: &str = r#""(?:\\"|[^"])*""#;

/// Double- or single-quoted string with backslash escapes
const QUOTED: &str = r#""(?:\\"|[^"])*"|'(?:\\'|[^'])*'"#;

/// `/* ... */`, possibly spanning lines
const C_BLOCK_COMMENT: &str = r"/\*[\s\S]*?\*/";

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        java::java_language(),
        java::jasm_language(),
        pascal::pascal_language(),
        c::c_language(),
        python::python_language(),
        asm::arm32_language(),
        asm::armv8_language(),
        javascript::javascript_language(),
        sql::sql_language(),
        make::make_language(),
    ]
}

/// Line comment introduced by `marker`, running to the end of the line
///
/// The line break is part of the comment, as is the end of the text.
fn line_comment(marker: &str) -> String {
    format!(r"{}[^\n\r]*(?:[\n\r]|$)", marker)
}

/// Add a category with default flags
fn add_rule(lang: &mut LanguageDefinition, category: Category, pattern: &str) {
    add_rule_with(lang, category, pattern, false, false);
}

/// Add a category, skipping it with a warning if the pattern is invalid
fn add_rule_with(
    lang: &mut LanguageDefinition,
    category: Category,
    pattern: &str,
    case_insensitive: bool,
    dot_matches_newline: bool,
) {
    match PatternRule::with_flags(pattern, case_insensitive, dot_matches_newline) {
        Ok(rule) => lang.add_category(category, rule),
        Err(e) => warn!(
            language = %lang.name,
            %category,
            error = %e,
            "skipping built-in pattern"
        ),
    }
}
