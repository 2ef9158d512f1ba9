//! Minification pipeline — regions, comments, directives, then per-line compaction.

use crate::comments::{strip_block_comments, strip_line_comment};
use crate::compact::LineCompactor;
use crate::regions::{RegionLine, RegionMatcher};
use crate::state::{LineEvent, LineMode};
use minify_core::{MinifyConfig, Profile, Result};
use std::borrow::Cow;

/// Minified text with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MinifyResult {
    pub output: String,
    pub original_len: usize,
    pub minified_len: usize,
    pub reduction_pct: f64,
    pub lines_in: usize,
    /// Lines that contributed nothing: skipped regions, comments, blank lines.
    pub lines_dropped: usize,
    pub directive_lines: usize,
    pub comment_spans: usize,
    /// Input ended inside a multi-line comment.
    pub unterminated_comment: bool,
    /// Input ended inside a skip region.
    pub unterminated_region: bool,
}

impl MinifyResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minified_len as f64 / self.original_len as f64
    }
}

/// A compiled [`MinifyConfig`]. Immutable and shareable across threads.
#[derive(Debug, Clone)]
pub struct Minifier {
    config: MinifyConfig,
    compactor: LineCompactor,
    regions: Option<RegionMatcher>,
}

impl Minifier {
    pub fn new(config: MinifyConfig) -> Result<Self> {
        config.validate()?;
        let regions = if config.regions.skip.is_empty() {
            None
        } else {
            Some(RegionMatcher::from_config(&config.regions)?)
        };
        Ok(Self::assemble(config, regions))
    }

    pub fn for_profile(profile: Profile) -> Result<Self> {
        Self::new(MinifyConfig::for_profile(profile))
    }

    fn assemble(config: MinifyConfig, regions: Option<RegionMatcher>) -> Self {
        Self {
            compactor: LineCompactor::from_config(&config),
            config,
            regions,
        }
    }

    pub fn minify(&self, text: &str) -> String {
        self.minify_detailed(text).output
    }

    pub fn minify_detailed(&self, text: &str) -> MinifyResult {
        let line_ending = self.config.line_ending.as_str();
        let classes = self.compactor.classes();
        let quotes = self.config.quote_aware_comments.then_some(classes);

        let mut out = String::with_capacity(text.len());
        let mut mode = LineMode::Normal;
        let mut ends_with_word = false;
        let mut lines_in = 0;
        let mut lines_dropped = 0;
        let mut directive_lines = 0;
        let mut comment_spans = 0;

        for raw in split_lines(text) {
            lines_in += 1;

            if let Some(regions) = &self.regions {
                match regions.classify(raw, mode.in_region()) {
                    RegionLine::Start => {
                        mode = mode.transition(LineEvent::EnterRegion);
                        lines_dropped += 1;
                        continue;
                    }
                    RegionLine::End => {
                        mode = mode.transition(LineEvent::LeaveRegion);
                        lines_dropped += 1;
                        continue;
                    }
                    RegionLine::Body => {
                        lines_dropped += 1;
                        continue;
                    }
                    RegionLine::Outside => {}
                }
            }

            let line = match &self.config.line_comment {
                Some(marker) => strip_line_comment(raw, marker, quotes),
                None => raw,
            };

            if self.is_directive(line) {
                if !out.is_empty() {
                    out.push_str(line_ending);
                }
                out.push_str(&self.compactor.compact(line));
                out.push_str(line_ending);
                ends_with_word = false;
                directive_lines += 1;
                continue;
            }

            let residual = match &self.config.block_comment {
                Some(markers) => {
                    let scan = strip_block_comments(line, markers, mode.in_comment());
                    mode = mode.transition(LineEvent::Comment(scan.inside));
                    comment_spans += scan.spans;
                    Cow::Owned(scan.residual)
                }
                None => Cow::Borrowed(line),
            };

            let compacted = self.compactor.compact(&residual);
            match compacted.chars().last() {
                Some(last) => {
                    // lines are joined, so keep words on either side of the join apart
                    if ends_with_word {
                        out.push(' ');
                    }
                    out.push_str(&compacted);
                    ends_with_word = classes.is_word_char(last);
                }
                None => lines_dropped += 1,
            }
        }

        let unterminated_comment = mode.in_comment()
            || matches!(mode, LineMode::InRegion { resume_comment: true });
        let unterminated_region = mode.in_region();
        if unterminated_comment {
            tracing::debug!(lines_in, "input ends inside a multi-line comment");
        }
        if unterminated_region {
            tracing::debug!(lines_in, "input ends inside a skip region");
        }

        let original_len = text.len();
        let minified_len = out.len();
        let reduction_pct = if original_len > 0 {
            (original_len.saturating_sub(minified_len) as f64 / original_len as f64) * 100.0
        } else {
            0.0
        };
        tracing::debug!(original_len, minified_len, lines_in, lines_dropped, "minified text");

        MinifyResult {
            output: out,
            original_len,
            minified_len,
            reduction_pct,
            lines_in,
            lines_dropped,
            directive_lines,
            comment_spans,
            unterminated_comment,
            unterminated_region,
        }
    }

    fn is_directive(&self, line: &str) -> bool {
        self.config
            .directive
            .as_deref()
            .is_some_and(|marker| line.trim_start().starts_with(marker))
    }
}

/// Lines of `text` split on `\n`, `\r\n` or a lone `\r`. A final line without a
/// terminator is included; a trailing terminator does not add an empty line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let line = &rest[..idx];
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

impl Default for Minifier {
    fn default() -> Self {
        // the default config has no skip regions, so there is nothing to compile
        Self::assemble(MinifyConfig::default(), None)
    }
}
