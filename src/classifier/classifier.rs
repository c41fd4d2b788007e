use std::fmt::Display;

use regex::Regex;

use super::categories::builtin_categories;

/// Category name given to tokens that no rule accepts.
pub const NO_MATCH: &str = "NO_MATCH";

/// A named classification rule. The rule must match the whole token.
#[derive(Debug, Clone)]
pub struct Category {
    name: &'static str,
    regex: Regex,
}

impl Category {
    pub fn new(name: &'static str, pattern: &str) -> Category {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("invalid pattern for category {}: {}", name, e));

        Category { name, regex }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub name: &'static str,
    pub valid: bool,
}

impl Classification {
    pub fn no_match() -> Self {
        Classification {
            name: NO_MATCH,
            valid: false,
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, if self.valid { "valid" } else { "invalid" })
    }
}

/// Returns the first category in `categories` that accepts `token`.
pub fn classify(token: &str, categories: &[Category]) -> Classification {
    categories
        .iter()
        .find(|category| category.matches(token))
        .map(|category| Classification {
            name: category.name,
            valid: true,
        })
        .unwrap_or_else(Classification::no_match)
}

/// The ordered category list.
#[derive(Debug, Clone)]
pub struct Classifier {
    categories: Vec<Category>,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new()
    }
}

impl Classifier {
    pub fn new() -> Classifier {
        Classifier {
            categories: builtin_categories(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(Category::name).collect()
    }

    pub fn classify(&self, token: &str) -> Classification {
        classify(token, &self.categories)
    }
}
