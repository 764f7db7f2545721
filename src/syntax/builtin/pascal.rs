//! Pascal language definition

use super::{add_rule, add_rule_with, NUMBER};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// Create Pascal language definition
pub fn pascal_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("pascal");
    lang.add_extension("pas");
    lang.add_extension("pp");

    let block_comment = r"\(\*(?:[^*)]|\*[^)]|[^*]\))*\*\)";
    add_rule_with(&mut lang, Category::BlockComment, block_comment, false, true);

    // Quotes inside strings are doubled
    add_rule(&mut lang, Category::String, r"'(?:''|[^'])*'");

    // Pascal is case-insensitive
    let types = r"\b(?:integer|string|text|array)\b";
    add_rule_with(&mut lang, Category::Type, types, true, false);

    let keywords = r"\b(?:and|asm|begin|break|case|const|constructor|continue|destructor|div|do|downto|else|end|false|file|for|function|goto|if|implementation|in|inline|interface|label|mod|nil|not|object|of|on|operator|or|packed|procedure|program|record|repeat|set|shl|shr|string|then|to|true|type|unit|until|uses|var|while|with|xor)\b";
    add_rule_with(&mut lang, Category::Keyword, keywords, true, false);

    add_rule(&mut lang, Category::Number, NUMBER);

    lang
}
