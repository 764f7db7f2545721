//! Syntax categories
//!
//! A category names the syntax class a tagged segment belongs to. The
//! names double as CSS class names in HTML output, so they keep the
//! hyphenated spelling used by style sheets (`line-comment`, not
//! `LineComment`).

use std::fmt;
use std::sync::Arc;

use super::style::{Color, Style};

/// Syntax category of a tagged segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// `/* ... */`, `(* ... *)`
    BlockComment,
    /// `// ...`, `# ...`, `; ...`, `-- ...`
    LineComment,
    /// String literals (and register names in assembly tables)
    String,
    /// Primitive type names
    Type,
    /// Language keywords, directives and mnemonics
    Keyword,
    /// Numeric literals and immediates
    Number,
    /// Any other category a language table defines
    Custom(Arc<str>),
}

impl Category {
    /// Get the category identifier
    pub fn name(&self) -> &str {
        match self {
            Category::BlockComment => "block-comment",
            Category::LineComment => "line-comment",
            Category::String => "string",
            Category::Type => "type",
            Category::Keyword => "keyword",
            Category::Number => "number",
            Category::Custom(name) => name.as_ref(),
        }
    }

    /// Parse a category from its identifier
    ///
    /// Unknown identifiers become `Custom` categories, so this never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "block-comment" => Category::BlockComment,
            "line-comment" => Category::LineComment,
            "string" => Category::String,
            "type" => Category::Type,
            "keyword" => Category::Keyword,
            "number" => Category::Number,
            other => Category::Custom(Arc::from(other)),
        }
    }

    /// Get the terminal style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::BlockComment | Category::LineComment => {
                Style::fg(Color::BrightBlack).with_italic()
            }
            Category::String => Style::fg(Color::Green),
            Category::Type => Style::fg(Color::Yellow),
            Category::Keyword => Style::fg(Color::Magenta).with_bold(),
            Category::Number => Style::fg(Color::Cyan),
            Category::Custom(_) => Style::fg(Color::BrightBlue).with_underline(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        for category in [
            Category::BlockComment,
            Category::LineComment,
            Category::String,
            Category::Type,
            Category::Keyword,
            Category::Number,
        ] {
            assert_eq!(Category::from_name(category.name()), category);
        }
    }

    #[test]
    fn test_custom_name() {
        let category = Category::from_name("register");
        assert_eq!(category, Category::Custom(Arc::from("register")));
        assert_eq!(category.to_string(), "register");
    }

    #[test]
    fn test_styles() {
        assert!(!Category::Keyword.default_style().is_default());
        assert_eq!(
            Category::BlockComment.default_style(),
            Category::LineComment.default_style()
        );
    }
}
