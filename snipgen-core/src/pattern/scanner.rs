//! Left-to-right phrase scanner.
//!
//! At each position the table entries are tried in order and the first one
//! whose match starts exactly there wins. A position nothing matches
//! becomes a single-character literal. The result covers the whole text.

use super::table::{PatternEntry, PatternTable};

/// One step of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch<'t> {
    /// Matched text (one character for literals)
    pub text: &'t str,
    /// Index of the winning table entry; `None` for a literal character
    pub entry: Option<usize>,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl ScanMatch<'_> {
    /// Whether a table entry produced this match.
    pub fn is_placeholder(&self) -> bool {
        self.entry.is_some()
    }
}

/// Ordered, gap-free matches over a phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult<'t> {
    matches: Vec<ScanMatch<'t>>,
}

impl<'t> ScanResult<'t> {
    pub fn matches(&self) -> &[ScanMatch<'t>] {
        &self.matches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScanMatch<'t>> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches produced by a table entry.
    pub fn placeholders(&self) -> impl Iterator<Item = &ScanMatch<'t>> {
        self.matches.iter().filter(|m| m.is_placeholder())
    }
}

impl<'a, 't> IntoIterator for &'a ScanResult<'t> {
    type Item = &'a ScanMatch<'t>;
    type IntoIter = std::slice::Iter<'a, ScanMatch<'t>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Scan `text` against `table`.
pub fn scan<'t>(text: &'t str, table: &PatternTable) -> ScanResult<'t> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let (entry, end) = match match_at(table.entries(), text, pos) {
            Some((index, end)) => (Some(index), end),
            None => {
                // Always at a char boundary: every step ends on one.
                let width = text[pos..].chars().next().map_or(1, char::len_utf8);
                (None, pos + width)
            }
        };
        matches.push(ScanMatch {
            text: &text[pos..end],
            entry,
            start: pos,
            end,
        });
        pos = end;
    }

    ScanResult { matches }
}

/// First entry, in table order, whose match starts at `pos`.
///
/// Empty matches are ignored so every step consumes at least one character.
fn match_at(entries: &[PatternEntry], text: &str, pos: usize) -> Option<(usize, usize)> {
    entries.iter().enumerate().find_map(|(index, entry)| {
        entry
            .match_at(text, pos)
            .filter(|end| *end > pos)
            .map(|end| (index, end))
    })
}
