use crate::error::{MinifyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_QUOTES: &str = "'\"";
pub const DEFAULT_TOKENS: &str = "+-*/=<>;:{}[](),.?\\%|&";
pub const DEFAULT_REGION_START: &str = r"^\s*#\s*region\s+(\S+)";
pub const DEFAULT_REGION_END: &str = r"^\s*#\s*endregion\b";

/// Region names elided by the `regions` profile.
pub const SKIP_REGION_NAMES: [&str; 2] = ["header", "footer"];

/// Start/end markers of a multi-line comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCommentMarkers {
    pub start: String,
    pub end: String,
}

impl Default for BlockCommentMarkers {
    fn default() -> Self {
        Self { start: "/*".into(), end: "*/".into() }
    }
}

/// Directive-delimited regions that are dropped wholesale.
///
/// `start_pattern` must contain one capture group holding the region name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub start_pattern: String,
    pub end_pattern: String,
    pub skip: Vec<String>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            start_pattern: DEFAULT_REGION_START.into(),
            end_pattern: DEFAULT_REGION_END.into(),
            skip: Vec::new(),
        }
    }
}

/// Everything the engine needs to know about the source language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    /// Quote delimiters.
    pub quotes: String,
    /// Self-delimiting punctuation characters.
    pub tokens: String,
    /// Characters treated as letters in addition to `char::is_alphanumeric`.
    pub word_chars: String,
    pub line_comment: Option<String>,
    pub block_comment: Option<BlockCommentMarkers>,
    /// Marker that keeps a line on its own line, e.g. `#` for preprocessor lines.
    pub directive: Option<String>,
    pub regions: RegionConfig,
    pub line_ending: String,
    /// Ignore line-comment markers that sit inside quoted literals.
    pub quote_aware_comments: bool,
    /// Keep one space between words separated by a run of several whitespace characters.
    pub collapse_whitespace_runs: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES.into(),
            tokens: DEFAULT_TOKENS.into(),
            word_chars: String::new(),
            line_comment: Some("//".into()),
            block_comment: Some(BlockCommentMarkers::default()),
            directive: Some("#".into()),
            regions: RegionConfig::default(),
            line_ending: "\n".into(),
            quote_aware_comments: false,
            collapse_whitespace_runs: false,
        }
    }
}

impl MinifyConfig {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Base => Self::default(),
            Profile::Regions => Self::default().with_skip_regions(SKIP_REGION_NAMES),
            Profile::Corrected => Self::default()
                .with_quote_aware_comments(true)
                .with_collapse_whitespace_runs(true),
        }
    }

    pub fn with_skip_regions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.skip = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quote_aware_comments(mut self, on: bool) -> Self {
        self.quote_aware_comments = on;
        self
    }

    pub fn with_collapse_whitespace_runs(mut self, on: bool) -> Self {
        self.collapse_whitespace_runs = on;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Reject markers the line scanner cannot make progress on.
    ///
    /// Disjointness of the quote/token/word sets is a precondition and is not checked here.
    pub fn validate(&self) -> Result<()> {
        if let Some(marker) = &self.line_comment {
            non_empty("line_comment", marker)?;
        }
        if let Some(block) = &self.block_comment {
            non_empty("block_comment.start", &block.start)?;
            non_empty("block_comment.end", &block.end)?;
        }
        if let Some(marker) = &self.directive {
            non_empty("directive", marker)?;
        }
        if self.regions.skip.iter().any(|n| n.is_empty()) {
            return Err(MinifyError::InvalidConfig("regions.skip contains an empty name".into()));
        }
        if self.line_ending.is_empty() {
            return Err(MinifyError::InvalidConfig("line_ending must not be empty".into()));
        }
        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(MinifyError::InvalidConfig(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Comment and whitespace stripping, no region elision.
    #[default]
    Base,
    /// Base plus elision of the `header` and `footer` regions.
    Regions,
    /// Base with quote-aware line comments and whitespace-run collapsing.
    Corrected,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Regions => "regions",
            Self::Corrected => "corrected",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = MinifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "regions" => Ok(Self::Regions),
            "corrected" => Ok(Self::Corrected),
            other => Err(MinifyError::UnknownProfile(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub profile: Profile,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            profile: Profile::Base,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `MINIFY_HOST`, `MINIFY_PORT` and `MINIFY_PROFILE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("MINIFY_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("MINIFY_PORT") {
            config.port = port
                .parse()
                .map_err(|_| MinifyError::InvalidConfig(format!("MINIFY_PORT is not a port: {port}")))?;
        }
        if let Some(profile) = lookup("MINIFY_PROFILE") {
            config.profile = profile.parse()?;
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
