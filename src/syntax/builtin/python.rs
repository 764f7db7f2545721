//! Python language definition (incomplete: covers the common keywords only)

use super::{add_rule, line_comment, NUMBER, QUOTED};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python");
    lang.add_extension("py");
    lang.add_extension("pyw");

    add_rule(&mut lang, Category::LineComment, &line_comment("#"));
    add_rule(&mut lang, Category::String, QUOTED);

    let types = r"\b(?:int|float|bool|str|list|set|dict)\b";
    add_rule(&mut lang, Category::Type, types);

    let keywords = r"\b(?:class|def|for|from|if|import|return|self)\b";
    add_rule(&mut lang, Category::Keyword, keywords);

    add_rule(&mut lang, Category::Number, NUMBER);

    lang
}
