use log::trace;
use regex::Regex;

use crate::{
    classifier::categories::{
        EMAIL_PATTERN, HEXADECIMAL_PATTERN, IDENTIFIER_PATTERN, INTEGER_PATTERN, REAL_PATTERN,
        SCIENTIFIC_PATTERN, STRING_PATTERN,
    },
    rules::Rules,
    Position, Span, MK_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// One alternative of the tokenizer. Its rank is its index in
/// [`Tokenizer::patterns`].
#[derive(Debug, Clone)]
pub struct TokenPattern {
    regex: Regex,
    kind: TokenKind,
}

impl TokenPattern {
    /// Compiles `pattern` anchored at the start of the remaining input.
    pub fn new(pattern: &str, kind: TokenKind) -> TokenPattern {
        let anchored = format!("^(?:{})", pattern);
        let regex = Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("invalid token pattern {:?}: {}", pattern, e));

        TokenPattern { regex, kind }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Length in bytes of the prefix of `input` this pattern matches, if any.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex.find(input).map(|m| m.end())
    }
}

/// The ordered list of tokenizer alternatives.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    patterns: Vec<TokenPattern>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer {
            patterns: vec![
                MK_PATTERN!(STRING_PATTERN, TokenKind::String),
                MK_PATTERN!(EMAIL_PATTERN, TokenKind::Email),
                MK_PATTERN!(HEXADECIMAL_PATTERN, TokenKind::Hexadecimal),
                MK_PATTERN!(SCIENTIFIC_PATTERN, TokenKind::Scientific),
                MK_PATTERN!(REAL_PATTERN, TokenKind::Real),
                MK_PATTERN!(INTEGER_PATTERN, TokenKind::Integer),
                MK_PATTERN!(r"\+\+|--|==|!=|<=|>=|&&|\|\||[+\-*/%<>=!]", TokenKind::Operator),
                MK_PATTERN!(IDENTIFIER_PATTERN, TokenKind::Identifier),
                MK_PATTERN!(r"\S", TokenKind::Symbol),
            ],
        }
    }

    pub fn patterns(&self) -> &[TokenPattern] {
        &self.patterns
    }

    /// Splits `line` into tokens. At every non-whitespace position the first
    /// pattern that matches wins, even when a later one would match more.
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let mut lex = Lexer::new(line);

        while !lex.at_eof() {
            let current = lex.at();

            if is_blank(current) {
                lex.advance_n(current.len_utf8());
                continue;
            }

            let matched = self
                .patterns
                .iter()
                .find_map(|pattern| {
                    pattern
                        .match_len(lex.remainder())
                        .filter(|len| *len > 0)
                        .map(|len| (pattern.kind, len))
                });

            let (kind, len) = matched.unwrap_or((TokenKind::Symbol, current.len_utf8()));
            lex.emit(kind, len);
        }

        lex.tokens
    }
}

/// Scan state over a single line.
struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let value = self.remainder()[..len].to_string();
        let span = Span {
            start: Position(self.pos),
            end: Position(self.pos + len),
        };

        trace!("{} {:?} at byte {}", kind, value, self.pos);

        self.tokens.push(MK_TOKEN!(kind, value, span));
        self.advance_n(len);
    }
}

/// Whitespace for scanning and trimming: Unicode `White_Space` plus the
/// information separators U+001C..=U+001F.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Tokenizes `line` with the built-in pattern list.
pub fn tokenize(line: &str) -> Vec<Token> {
    Rules::builtin().tokenizer().tokenize(line)
}
