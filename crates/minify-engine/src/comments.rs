//! Single-line and multi-line comment removal.

use crate::classify::CharClassifier;
use crate::compact::closing_quote;
use minify_core::BlockCommentMarkers;

/// Byte offset of the first line-comment marker.
///
/// With `quotes` set, markers inside quoted literals are skipped; otherwise the
/// first occurrence anywhere in the line wins.
pub fn find_line_comment(line: &str, marker: &str, quotes: Option<&CharClassifier>) -> Option<usize> {
    let Some(classes) = quotes else {
        return line.find(marker);
    };
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut cur = 0;
    while cur < chars.len() {
        let (offset, c) = chars[cur];
        if classes.is_quote(c) {
            cur = closing_quote(&chars, cur)? + 1;
            continue;
        }
        if line[offset..].starts_with(marker) {
            return Some(offset);
        }
        cur += 1;
    }
    None
}

/// Truncate `line` at its line comment, if any.
pub fn strip_line_comment<'a>(line: &'a str, marker: &str, quotes: Option<&CharClassifier>) -> &'a str {
    match find_line_comment(line, marker, quotes) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Outcome of scanning one line for multi-line comment spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockScan {
    /// The line with every comment span removed.
    pub residual: String,
    /// Whether the line ends inside an open comment.
    pub inside: bool,
    /// Number of spans removed or truncated on this line.
    pub spans: usize,
}

/// Remove multi-line comment spans from one line.
///
/// `inside` is the comment state carried in from the previous line. Comments
/// do not nest: the first end marker at or after an opening closes it.
pub fn strip_block_comments(line: &str, markers: &BlockCommentMarkers, inside: bool) -> BlockScan {
    let mut residual = line.to_string();
    let mut inside = inside;
    let mut spans = 0;

    loop {
        if inside {
            // close the comment carried in from an earlier line or span
            match residual.find(&markers.end) {
                Some(idx) => {
                    residual.replace_range(..idx + markers.end.len(), "");
                    inside = false;
                    spans += 1;
                }
                None => {
                    if spans == 0 {
                        residual.clear();
                    }
                    break;
                }
            }
            continue;
        }

        let Some(start) = residual.find(&markers.start) else {
            break;
        };
        spans += 1;
        // the end marker may share characters with the start marker, so `/*/` is a whole span
        match residual[start..].find(&markers.end) {
            Some(idx) => {
                residual.replace_range(start..start + idx + markers.end.len(), "");
            }
            None => {
                residual.truncate(start);
                inside = true;
                break;
            }
        }
    }

    BlockScan { residual, inside, spans }
}
