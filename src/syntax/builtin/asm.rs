//! ARM assembly language definitions (32-bit and ARMv8 teaching subset)

use super::{add_rule, add_rule_with, line_comment};
use crate::syntax::category::Category;
use crate::syntax::language::LanguageDefinition;

/// `#` immediate: hex or signed decimal
const IMMEDIATE: &str = r"#(?:0[xX][0-9a-fA-F]+|-?\d+)";

/// Create ARM32 language definition
pub fn arm32_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("arm32");
    lang.add_extension("s");

    add_rule(&mut lang, Category::LineComment, &line_comment(";"));
    add_rule(&mut lang, Category::Number, IMMEDIATE);

    let mnemonics = r"\b(?:DCD|DCB|EXTERN|ALIGN|FILL|MOV|CMP|(?:BL|B)(?:AL|GT|GE|LT|LE|EQ|NE)?|LDR|LSL|(?:ADD|SUB|STOP|LSR|AND|SWI|TST|LDMFD|STMFD|STR|ORR)(?:AL|GT|GE|LT|LE|EQ|NE)?|BX)\b";
    add_rule_with(&mut lang, Category::Keyword, mnemonics, true, false);

    // Registers are shown in the string style
    let registers = r"\b(?:R(?:1[0-5]|[0-9])|SP|LR|PC)\b";
    add_rule_with(&mut lang, Category::String, registers, true, false);

    lang
}

/// Create ARMv8 (LEGv8 subset) language definition
pub fn armv8_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("armv8");

    add_rule(&mut lang, Category::LineComment, &line_comment("//"));
    add_rule(&mut lang, Category::Number, IMMEDIATE);

    // Conditional branches come before plain B so `B.EQ` is taken whole
    let mnemonics = r"\b(?:LDUR|STUR|ADDIS|ADDI|ADDS|ADD|SUBIS|SUBI|SUBS|SUB|ANDIS|ANDI|ANDS|AND|ORRIS|ORRI|ORRS|ORR|EORIS|EORI|EORS|EOR|LSL|LSR|CBNZ|CBZ|B\.(?:EQ|NE|LT|GT|LE|GE|LO|LS|HI|HS|MI|PL|VS|VC)|BL|B)\b";
    add_rule(&mut lang, Category::Keyword, mnemonics);

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Pattern;

    #[test]
    fn test_armv8_conditional_branch() {
        let lang = armv8_language();
        let keyword = &lang.categories()[2];
        assert_eq!(keyword.category, Category::Keyword);
        let m = keyword.pattern.find_at("    B.EQ done", 0).unwrap();
        assert_eq!((m.offset, m.len), (4, 4));
    }

    #[test]
    fn test_arm32_two_digit_register() {
        let lang = arm32_language();
        let registers = &lang.categories()[3];
        let m = registers.pattern.find_at("MOV r12, #1", 0).unwrap();
        assert_eq!((m.offset, m.len), (4, 3));
    }
}
