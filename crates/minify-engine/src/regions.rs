//! Named regions that are elided wholesale, e.g. `#region header` .. `#endregion`.

use minify_core::{MinifyError, RegionConfig, Result};
use regex::Regex;

/// How a line relates to the skip regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLine {
    /// Opens a region whose name is in the skip list.
    Start,
    /// A region-end directive. Closes the skip region if one is open.
    End,
    /// Any line while a region is being skipped.
    Body,
    /// Not inside a skip region and not opening one.
    Outside,
}

#[derive(Debug, Clone)]
pub struct RegionMatcher {
    start: Regex,
    end: Regex,
    skip: Vec<String>,
}

impl RegionMatcher {
    pub fn from_config(config: &RegionConfig) -> Result<Self> {
        let start = compile(&config.start_pattern)?;
        if start.captures_len() < 2 {
            return Err(MinifyError::InvalidConfig(format!(
                "region start pattern {:?} has no capture group for the region name",
                config.start_pattern
            )));
        }
        Ok(Self {
            start,
            end: compile(&config.end_pattern)?,
            skip: config.skip.clone(),
        })
    }

    /// Name captured by a region-start directive, if the line is one.
    pub fn start_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.start
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn is_skipped_start(&self, line: &str) -> bool {
        self.start_name(line)
            .is_some_and(|name| self.skip.iter().any(|s| s == name))
    }

    pub fn is_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }

    /// Every end directive is consumed, whether or not a region is being skipped.
    pub fn classify(&self, line: &str, inside: bool) -> RegionLine {
        if self.is_skipped_start(line) {
            RegionLine::Start
        } else if self.is_end(line) {
            RegionLine::End
        } else if inside {
            RegionLine::Body
        } else {
            RegionLine::Outside
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| MinifyError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
