//! JavaScript language definition

use super::{add_rule, line_comment, C_BLOCK_COMMENT, NUMBER, QUOTED};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("javascript");
    lang.add_extension("js");
    lang.add_extension("mjs");

    add_rule(&mut lang, Category::BlockComment, C_BLOCK_COMMENT);
    add_rule(&mut lang, Category::LineComment, &line_comment("//"));
    add_rule(&mut lang, Category::String, QUOTED);

    let keywords = r"\b(?:await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|false|finally|for|function|if|implements|import|in|instanceof|interface|let|new|null|package|private|protected|public|return|static|super|switch|this|throw|true|try|typeof|undefined|var|void|while|with|yield)\b";
    add_rule(&mut lang, Category::Keyword, keywords);

    add_rule(&mut lang, Category::Number, NUMBER);

    lang
}
