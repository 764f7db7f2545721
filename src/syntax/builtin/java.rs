//! Java and Jasm (Java assembler) language definitions

use super::{add_rule, line_comment, C_BLOCK_COMMENT, DOUBLE_QUOTED, NUMBER};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// Create Java language definition
pub fn java_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("java");
    lang.add_extension("java");

    add_rule(&mut lang, Category::BlockComment, C_BLOCK_COMMENT);
    add_rule(&mut lang, Category::LineComment, &line_comment("//"));
    add_rule(&mut lang, Category::String, DOUBLE_QUOTED);

    let types = r"\b(?:byte|short|int|long|float|double|char|boolean)\b";
    add_rule(&mut lang, Category::Type, types);

    let keywords = r"\b(?:abstract|assert|break|case|catch|class|const|continue|default|do|else|enum|extends|final|finally|for|goto|if|implements|import|instanceof|interface|native|new|package|private|protected|public|return|static|strictfp|super|switch|synchronized|this|throw|throws|transient|try|void|volatile|while)\b";
    add_rule(&mut lang, Category::Keyword, keywords);

    add_rule(&mut lang, Category::Number, NUMBER);

    lang
}

/// Create Jasm language definition
pub fn jasm_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("jasm");
    lang.add_extension("jasm");
    lang.add_extension("j");

    add_rule(&mut lang, Category::LineComment, &line_comment("#"));
    add_rule(&mut lang, Category::String, DOUBLE_QUOTED);

    // Assembler directives
    let directives = r"\.class|\.interface|\.enum|\.source|\.super|\.field|\.method|\.code|\.end code|\.table|\.end table";
    add_rule(&mut lang, Category::Keyword, directives);

    lang
}
