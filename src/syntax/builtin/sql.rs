//! SQL language definition (incomplete keyword list)

use super::{add_rule, line_comment, NUMBER, QUOTED};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("SQL");
    lang.add_extension("sql");

    // `--` must be followed by whitespace to start a comment
    add_rule(&mut lang, Category::LineComment, &line_comment(r"--\s+"));
    add_rule(&mut lang, Category::Number, NUMBER);

    let keywords = r"\b(?:ALL|AFTER|ALTER|AND|ANY|AS|ASC|AT|AUTO_INCREMENT|AVG|BEGIN|BETWEEN|BIGINT|BINARY|BLOB|BOOL|BOOLEAN|BY|BYTE|CASCADE|CASE|CHAR|CHARACTER|COALESCE|COLUMN|COLUMNS|COMMIT|CONSTRAINT|CONTAINS|DATE|DATETIME|DECIMAL|DEFAULT|DELETE|DESC|DESCRIBE|DROP|EXISTS|FOREIGN|FROM|IF|IN|INNER|JOIN|KEY|LIKE|NULL|ON|ORDER|SELECT|SET|TABLE|UNION|UPDATE|WHERE)\b";
    add_rule(&mut lang, Category::Keyword, keywords);

    add_rule(&mut lang, Category::String, QUOTED);

    lang
}
