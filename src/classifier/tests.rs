//! Unit tests for the classifier module.
//!
//! Covers every built-in category, the order in which overlapping categories
//! are resolved, and the `NO_MATCH` sentinel.

use pretty_assertions::assert_eq;
use test_case::test_case;

use super::{
    categories::RESERVED_WORDS,
    classifier::{classify, Category, Classification, Classifier, NO_MATCH},
};

fn name_of(token: &str) -> &'static str {
    Classifier::new().classify(token).name
}

#[test_case("if", "PALABRA_RESERVADA" ; "reserved if")]
#[test_case("continue", "PALABRA_RESERVADA" ; "reserved continue")]
#[test_case("x", "IDENTIFIER" ; "plain identifier")]
#[test_case("_tmp9", "IDENTIFIER" ; "underscore identifier")]
#[test_case("Ifx", "IDENTIFIER" ; "capitalized keyword is identifier")]
#[test_case("42", "INTEGER" ; "integer")]
#[test_case("-7", "INTEGER" ; "signed integer")]
#[test_case("3.14", "REAL_NUMBER" ; "real")]
#[test_case("+0.5", "REAL_NUMBER" ; "signed real")]
#[test_case("12.5e-3", "NUMERO_CIENTIFICO" ; "scientific")]
#[test_case("1E10", "NUMERO_CIENTIFICO" ; "scientific upper exponent")]
#[test_case("0x1F", "NUMERO_HEXADECIMAL" ; "hexadecimal")]
#[test_case("user@example.com", "EMAIL" ; "email")]
#[test_case("abc123", "IDENTIFIER" ; "alphanumeric identifier")]
#[test_case("123abc", "PASSWORD_SIMPLE" ; "password")]
#[test_case("++", "INCREMENTADOR" ; "increment")]
#[test_case("--", "INCREMENTADOR" ; "decrement")]
#[test_case("<=", "OPERADOR_RELACIONAL" ; "less equals")]
#[test_case(">", "OPERADOR_RELACIONAL" ; "greater")]
#[test_case("&&", "OPERADOR_LOGICO" ; "and")]
#[test_case("!", "OPERADOR_LOGICO" ; "not")]
#[test_case("%", "OPERADOR_ARITMETICO" ; "modulo")]
#[test_case("-", "OPERADOR_ARITMETICO" ; "minus")]
#[test_case(r#""hello world""#, "CADENA_TEXTO" ; "double quoted")]
#[test_case(r"'it\'s'", "CADENA_TEXTO" ; "single quoted")]
fn test_classify_builtin(token: &str, expected: &str) {
    let classification = Classifier::new().classify(token);

    assert_eq!(classification.name, expected);
    assert!(classification.valid);
}

#[test]
fn test_reserved_word_beats_identifier() {
    for word in RESERVED_WORDS {
        assert_eq!(name_of(word), "PALABRA_RESERVADA");
    }
    assert_eq!(name_of("iff"), "IDENTIFIER");
}

#[test]
fn test_booleans_are_shadowed_by_identifier() {
    // IDENTIFIER comes first, so the boolean category never wins for these.
    for word in ["true", "false", "True", "False"] {
        assert_eq!(name_of(word), "IDENTIFIER");
    }
}

#[test]
fn test_hexadecimal_reaches_its_rule() {
    // Neither an identifier nor an integer.
    assert_eq!(name_of("0xff"), "NUMERO_HEXADECIMAL");
    // Six alphanumerics, but the hex rule comes before the password rule.
    assert_eq!(name_of("0xABCDEF"), "NUMERO_HEXADECIMAL");
}

#[test]
fn test_password_only_catches_fallthrough() {
    assert_eq!(name_of("9abcde"), "PASSWORD_SIMPLE");
    assert_eq!(name_of("9abcd"), NO_MATCH);
    assert_eq!(name_of("123456"), "INTEGER");
}

#[test_case("=" ; "bare assignment")]
#[test_case(";" ; "semicolon")]
#[test_case("&" ; "single ampersand")]
#[test_case("@" ; "at sign")]
#[test_case("\"unterminated" ; "unterminated string")]
#[test_case("" ; "empty")]
#[test_case("if " ; "trailing space")]
fn test_classify_no_match(token: &str) {
    let classification = Classifier::new().classify(token);

    assert_eq!(classification, Classification::no_match());
    assert_eq!(classification.name, "NO_MATCH");
    assert!(!classification.valid);
}

#[test]
fn test_classify_is_full_string() {
    // Only a prefix is an integer.
    assert_eq!(name_of("12;"), NO_MATCH);
    // A substring is a reserved word.
    assert_eq!(name_of("xif"), "IDENTIFIER");
}

#[test]
fn test_classify_is_idempotent() {
    let classifier = Classifier::new();

    for token in ["if", "=", "12.5e-3", "a@b.co", "\"s\"", "☃"] {
        assert_eq!(classifier.classify(token), classifier.classify(token));
    }
}

#[test]
fn test_category_order() {
    assert_eq!(
        Classifier::new().category_names(),
        vec![
            "PALABRA_RESERVADA",
            "IDENTIFIER",
            "INTEGER",
            "REAL_NUMBER",
            "NUMERO_CIENTIFICO",
            "NUMERO_HEXADECIMAL",
            "EMAIL",
            "PASSWORD_SIMPLE",
            "INCREMENTADOR",
            "OPERADOR_RELACIONAL",
            "OPERADOR_LOGICO",
            "OPERADOR_ARITMETICO",
            "CADENA_TEXTO",
            "BOOLEANO",
        ]
    );
}

#[test]
fn test_classify_respects_list_order() {
    let broad_first = vec![Category::new("ANY", r".+"), Category::new("DIGITS", r"\d+")];
    let narrow_first = vec![Category::new("DIGITS", r"\d+"), Category::new("ANY", r".+")];

    assert_eq!(classify("123", &broad_first).name, "ANY");
    assert_eq!(classify("123", &narrow_first).name, "DIGITS");
    assert_eq!(classify("", &narrow_first), Classification::no_match());
}

#[test]
fn test_boolean_category_matches_when_reached() {
    let classifier = Classifier::new();
    let booleano = classifier
        .categories()
        .iter()
        .find(|category| category.name() == "BOOLEANO")
        .unwrap();

    assert!(booleano.matches("True"));
    assert!(!booleano.matches("TRUE"));
}

#[test]
fn test_classification_display() {
    assert_eq!(Classifier::new().classify("if").to_string(), "PALABRA_RESERVADA (valid)");
    assert_eq!(Classification::no_match().to_string(), "NO_MATCH (invalid)");
}
