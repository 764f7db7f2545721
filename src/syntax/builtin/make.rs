//! Makefile language definition

use super::{add_rule, line_comment};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// Create Makefile language definition
pub fn make_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("make");
    lang.add_extension("mk");
    lang.add_extension("make");

    add_rule(&mut lang, Category::LineComment, &line_comment("#"));

    lang
}
