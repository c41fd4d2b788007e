use crate::MK_CATEGORY;

use super::classifier::Category;

pub const RESERVED_WORDS: [&str; 7] = ["if", "else", "while", "for", "return", "break", "continue"];

pub const STRING_PATTERN: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#;
pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
pub const HEXADECIMAL_PATTERN: &str = r"0[xX][0-9A-Fa-f]+";
pub const SCIENTIFIC_PATTERN: &str = r"[+-]?\d+(?:\.\d+)?[eE][+-]?\d+";
pub const REAL_PATTERN: &str = r"[+-]?\d+\.\d+";
pub const INTEGER_PATTERN: &str = r"[+-]?\d+";
pub const IDENTIFIER_PATTERN: &str = r"[A-Za-z_][A-Za-z0-9_]*";

/// The built-in categories. Order matters: reserved words must come before
/// identifiers, and the password rule only sees what everything above it
/// rejected.
pub fn builtin_categories() -> Vec<Category> {
    let reserved = RESERVED_WORDS.join("|");

    vec![
        MK_CATEGORY!("PALABRA_RESERVADA", &reserved),
        MK_CATEGORY!("IDENTIFIER", IDENTIFIER_PATTERN),
        MK_CATEGORY!("INTEGER", INTEGER_PATTERN),
        MK_CATEGORY!("REAL_NUMBER", REAL_PATTERN),
        MK_CATEGORY!("NUMERO_CIENTIFICO", SCIENTIFIC_PATTERN),
        MK_CATEGORY!("NUMERO_HEXADECIMAL", HEXADECIMAL_PATTERN),
        MK_CATEGORY!("EMAIL", EMAIL_PATTERN),
        MK_CATEGORY!("PASSWORD_SIMPLE", r"[A-Za-z0-9]{6,}"),
        MK_CATEGORY!("INCREMENTADOR", r"\+\+|--"),
        MK_CATEGORY!("OPERADOR_RELACIONAL", r"==|!=|<=|>=|<|>"),
        MK_CATEGORY!("OPERADOR_LOGICO", r"&&|\|\||!"),
        MK_CATEGORY!("OPERADOR_ARITMETICO", r"\+|-|\*|/|%"),
        MK_CATEGORY!("CADENA_TEXTO", STRING_PATTERN),
        MK_CATEGORY!("BOOLEANO", r"true|false|True|False"),
    ]
}
