//! Step pattern compilation.
//!
//! Turns a phrase into an anchored regex: regex metacharacters in the
//! phrase are escaped first, then every primary-table placeholder found in
//! the escaped text is replaced by its entry's capture form.

use serde::{Deserialize, Serialize};

use crate::pattern::{scan, PatternTable};

/// Characters escaped in phrase text before placeholders are overlaid.
pub const ESCAPED_CHARS: &[char] = &['$', '(', ')', '[', ']', '?', '*', '+', '.', '^'];

/// Markers used to turn positional groups into named ones.
///
/// Each capturing opener `(` becomes `(` + start + index + end, with the
/// index counting from 1 within one compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedGroups {
    start: String,
    end: String,
}

impl NamedGroups {
    /// Returns `None` unless both markers are non-empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Option<Self> {
        let (start, end) = (start.into(), end.into());
        (!start.is_empty() && !end.is_empty()).then_some(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// Escape regex metacharacters in literal phrase text.
///
/// Backslashes are not escaped, so text free of metacharacters is returned
/// unchanged.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Compiles phrases into anchored step patterns.
#[derive(Debug, Clone, Copy)]
pub struct PatternCompiler<'a> {
    table: &'a PatternTable,
    named_groups: Option<&'a NamedGroups>,
}

impl<'a> PatternCompiler<'a> {
    pub fn new(table: &'a PatternTable) -> Self {
        Self {
            table,
            named_groups: None,
        }
    }

    /// Rewrite capturing groups into named groups.
    pub fn with_named_groups(mut self, named_groups: Option<&'a NamedGroups>) -> Self {
        self.named_groups = named_groups;
        self
    }

    /// Compile `text` into a pattern starting with `^` and ending with `$`.
    pub fn compile(&self, text: &str) -> String {
        let escaped = escape_literal(text);
        let mut pattern = String::with_capacity(escaped.len() + 16);
        let mut group_index = 1;

        pattern.push('^');
        for m in &scan(&escaped, self.table) {
            match m.entry.and_then(|i| self.table.get(i)) {
                Some(entry) => match self.named_groups {
                    Some(names) if entry.is_capturing() => {
                        group_index =
                            push_named(&mut pattern, entry.capture_form(), names, group_index);
                    }
                    _ => pattern.push_str(entry.capture_form()),
                },
                None => pattern.push_str(m.text),
            }
        }
        pattern.push('$');

        pattern
    }
}

/// Append `form`, naming each capturing opener. Returns the next index.
fn push_named(out: &mut String, form: &str, names: &NamedGroups, mut index: usize) -> usize {
    let mut chars = form.chars().peekable();
    let mut escaped = false;

    while let Some(c) = chars.next() {
        out.push(c);
        if c == '(' && !escaped && chars.peek() != Some(&'?') {
            out.push_str(&names.start);
            out.push_str(&index.to_string());
            out.push_str(&names.end);
            index += 1;
        }
        escaped = c == '\\' && !escaped;
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn compile(text: &str) -> String {
        PatternCompiler::new(&PatternTable::primary()).compile(text)
    }

    #[test]
    fn test_integer_pattern() {
        assert_eq!(compile("I have 3 apples"), r"^I have (\d+) apples$");
    }

    #[test]
    fn test_quoted_pattern() {
        assert_eq!(compile(r#"I have "red" apples"#), r#"^I have "([^"]*)" apples$"#);
    }

    #[test]
    fn test_dollar_is_escaped_before_overlay() {
        assert_eq!(compile("cost is $5"), r"^cost is \$(\d+)$");
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        assert_eq!(
            compile("what? (maybe) [x] a*b+c.d^e"),
            r"^what\? \(maybe\) \[x\] a\*b\+c\.d\^e$"
        );
    }

    #[test]
    fn test_any_stays_literal() {
        assert_eq!(compile("any integer"), "^any integer$");
    }

    #[test]
    fn test_empty_phrase() {
        assert_eq!(compile(""), "^$");
    }

    #[test]
    fn test_quoted_value_with_metacharacters() {
        let pattern = compile(r#"I search for "a.b" now"#);
        assert_eq!(pattern, r#"^I search for "([^"]*)" now$"#);
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match(r#"I search for "x+y" now"#));
    }

    #[test]
    fn test_named_groups() {
        let names = NamedGroups::new("?<arg", ">").unwrap();
        let table = PatternTable::primary();
        let pattern = PatternCompiler::new(&table)
            .with_named_groups(Some(&names))
            .compile(r#"I move "north" 3 (three) steps"#);
        assert_eq!(
            pattern,
            r#"^I move "(?<arg1>[^"]*)" (?<arg2>\d+) \(three\) steps$"#
        );

        let caps = Regex::new(&pattern)
            .unwrap()
            .captures(r#"I move "south" 7 (three) steps"#)
            .unwrap();
        assert_eq!(&caps["arg1"], "south");
        assert_eq!(&caps["arg2"], "7");
    }

    #[test]
    fn test_named_group_index_resets_per_call() {
        let names = NamedGroups::new("?<arg", ">").unwrap();
        let table = PatternTable::primary();
        let compiler = PatternCompiler::new(&table).with_named_groups(Some(&names));
        assert_eq!(compiler.compile("1"), r"^(?<arg1>\d+)$");
        assert_eq!(compiler.compile("2"), r"^(?<arg1>\d+)$");
    }

    #[test]
    fn test_named_groups_need_both_markers() {
        assert!(NamedGroups::new("", ">").is_none());
        assert!(NamedGroups::new("?<arg", "").is_none());
    }

    #[test]
    fn test_escape_is_stable_without_metacharacters() {
        let text = r"plain words, with \ backslash";
        assert_eq!(escape_literal(text), text);
        assert_eq!(escape_literal(&escape_literal(text)), text);
    }
}
