//! C language definition

use super::{add_rule, line_comment, C_BLOCK_COMMENT, DOUBLE_QUOTED, NUMBER};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// Create C language definition
pub fn c_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("C");
    lang.add_extension("c");
    lang.add_extension("h");

    add_rule(&mut lang, Category::BlockComment, C_BLOCK_COMMENT);
    add_rule(&mut lang, Category::LineComment, &line_comment("//"));
    add_rule(&mut lang, Category::String, DOUBLE_QUOTED);

    let types = r"\b(?:char|short|int|long|float|double|signed|unsigned)\b";
    add_rule(&mut lang, Category::Type, types);

    // Preprocessor directives ride along with the keywords
    let keywords = r"\b(?:__attribute__|break|case|const|continue|default|do|else|enum|for|goto|if|inline|return|sizeof|static|struct|switch|typedef|void|while)\b|#include|#define|#ifndef|#endif";
    add_rule(&mut lang, Category::Keyword, keywords);

    add_rule(&mut lang, Category::Number, NUMBER);

    lang
}
