//! The tokenizer and classifier tables, built together once.

use lazy_static::lazy_static;

use crate::{classifier::classifier::Classifier, lexer::lexer::Tokenizer};

lazy_static! {
    static ref BUILTIN: Rules = Rules::new();
}

#[derive(Debug, Clone, Default)]
pub struct Rules {
    tokenizer: Tokenizer,
    classifier: Classifier,
}

impl Rules {
    pub fn new() -> Rules {
        Rules {
            tokenizer: Tokenizer::new(),
            classifier: Classifier::new(),
        }
    }

    /// The process-wide built-in rules, compiled on first use.
    pub fn builtin() -> &'static Rules {
        &BUILTIN
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}
