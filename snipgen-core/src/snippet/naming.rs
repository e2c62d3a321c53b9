//! Collaborators that turn step text into identifiers.

use serde::{Deserialize, Serialize};

/// Turns the literal words of a step into a function name.
pub trait FunctionNameGenerator: Send + Sync {
    fn generate_function_name(&self, sentence: &str) -> String;
}

/// Maps a step's grammatical keyword to the annotation keyword in code.
pub trait KeywordResolver: Send + Sync {
    fn code_keyword_for(&self, keyword: &str) -> String;
}

/// Drops whitespace, apostrophes, commas and exclamation marks:
/// `"Given "` becomes `Given`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeKeyword;

impl KeywordResolver for CodeKeyword {
    fn code_keyword_for(&self, keyword: &str) -> String {
        keyword
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '\'' | ',' | '!'))
            .collect()
    }
}

/// Word joining style for generated names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// `i_have_apples`
    #[default]
    Underscore,
    /// `iHaveApples`
    CamelCase,
}

/// Splits a sentence into identifier words and joins them in one style.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatenatingNameGenerator {
    style: NameStyle,
}

impl ConcatenatingNameGenerator {
    pub fn new(style: NameStyle) -> Self {
        Self { style }
    }
}

impl FunctionNameGenerator for ConcatenatingNameGenerator {
    fn generate_function_name(&self, sentence: &str) -> String {
        let words: Vec<String> = sentence
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut name = match self.style {
            NameStyle::Underscore => words.join("_"),
            NameStyle::CamelCase => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
                .collect(),
        };

        if name.is_empty() {
            name.push_str("step");
        } else if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        name
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_keyword_strips_punctuation() {
        assert_eq!(CodeKeyword.code_keyword_for("Given "), "Given");
        assert_eq!(CodeKeyword.code_keyword_for("Étant donné qu'"), "Étantdonnéqu");
        assert_eq!(CodeKeyword.code_keyword_for("* "), "*");
    }

    #[test]
    fn test_underscore_names() {
        let namer = ConcatenatingNameGenerator::new(NameStyle::Underscore);
        assert_eq!(namer.generate_function_name("I have   apples"), "i_have_apples");
        assert_eq!(namer.generate_function_name("the user's cart, emptied!"), "the_user_s_cart_emptied");
    }

    #[test]
    fn test_camel_case_names() {
        let namer = ConcatenatingNameGenerator::new(NameStyle::CamelCase);
        assert_eq!(namer.generate_function_name("I have  apples"), "iHaveApples");
    }

    #[test]
    fn test_leading_digit_and_empty_sentence() {
        let namer = ConcatenatingNameGenerator::default();
        assert_eq!(namer.generate_function_name("  3 ways"), "_3_ways");
        assert_eq!(namer.generate_function_name("  "), "step");
    }
}
