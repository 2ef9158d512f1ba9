//! Per-line whitespace compaction.
//!
//! Drops whitespace except a single space between two word characters, copies
//! quoted literals verbatim, and emits token characters on their own.

use crate::classify::{CharClassifier, CharKind};
use minify_core::MinifyConfig;
use std::sync::LazyLock;

static DEFAULT_COMPACTOR: LazyLock<LineCompactor> = LazyLock::new(LineCompactor::default);

/// Compact one comment-free line with the default character sets.
pub fn compact_line(line: &str) -> String {
    DEFAULT_COMPACTOR.compact(line)
}

#[derive(Debug, Clone, Default)]
pub struct LineCompactor {
    classes: CharClassifier,
    collapse_runs: bool,
}

impl LineCompactor {
    pub fn new(classes: CharClassifier, collapse_runs: bool) -> Self {
        Self { classes, collapse_runs }
    }

    pub fn from_config(config: &MinifyConfig) -> Self {
        Self::new(CharClassifier::from_config(config), config.collapse_whitespace_runs)
    }

    pub fn classes(&self) -> &CharClassifier {
        &self.classes
    }

    pub fn compact(&self, line: &str) -> String {
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let mut out = String::with_capacity(line.len());
        let mut cur = 0;

        while cur < chars.len() {
            let (offset, c) = chars[cur];
            match self.classes.classify(c) {
                CharKind::Whitespace => cur += 1,
                CharKind::Quote => {
                    let end = closing_quote(&chars, cur).map_or(chars.len(), |close| close + 1);
                    out.push_str(&line[offset..byte_offset(&chars, end, line.len())]);
                    cur = end;
                }
                CharKind::Token => {
                    out.push(c);
                    cur += 1;
                }
                CharKind::Word => {
                    out.push(c);
                    cur += 1;
                    if let Some(next) = self.word_separator(&chars, cur) {
                        out.push(' ');
                        cur = next;
                    }
                }
            }
        }

        out
    }

    /// Lookahead after a word character at `cur - 1`: if whitespace leads to
    /// another word character, return the index of that word character.
    fn word_separator(&self, chars: &[(usize, char)], cur: usize) -> Option<usize> {
        let mut end = cur;
        while end < chars.len() && self.classes.is_whitespace(chars[end].1) {
            end += 1;
            if !self.collapse_runs {
                break;
            }
        }
        if end == cur {
            return None;
        }
        chars
            .get(end)
            .filter(|(_, c)| self.classes.is_word_char(*c))
            .map(|_| end)
    }
}

/// Index of the quote closing the literal opened at `open`.
///
/// A quote preceded by a backslash does not close; `\\"` is not special-cased.
pub(crate) fn closing_quote(chars: &[(usize, char)], open: usize) -> Option<usize> {
    let quote = chars[open].1;
    (open + 1..chars.len()).find(|&i| chars[i].1 == quote && chars[i - 1].1 != '\\')
}

pub(crate) fn byte_offset(chars: &[(usize, char)], idx: usize, len: usize) -> usize {
    chars.get(idx).map_or(len, |(offset, _)| *offset)
}
