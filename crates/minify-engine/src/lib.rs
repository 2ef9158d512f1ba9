//! Source minifier — strips comments and insignificant whitespace.
//!
//! Stages, per input line:
//! 1. Region elision — named `#region` blocks are dropped
//! 2. Line comments — truncated at the marker
//! 3. Directives — `#` lines kept on their own line
//! 4. Block comments — spans removed, carried across lines
//! 5. Compaction — whitespace dropped except between words, literals kept verbatim

pub mod classify;
pub mod comments;
pub mod compact;
pub mod pipeline;
pub mod regions;
pub mod state;

pub use classify::{CharClassifier, CharKind};
pub use compact::{compact_line, LineCompactor};
pub use pipeline::{Minifier, MinifyResult};
pub use state::{LineEvent, LineMode};

use minify_core::{MinifyConfig, Result};
use std::sync::LazyLock;

static DEFAULT_MINIFIER: LazyLock<Minifier> = LazyLock::new(Minifier::default);

/// Minify `text` with a one-off configuration.
pub fn minify(text: &str, config: &MinifyConfig) -> Result<String> {
    Ok(Minifier::new(config.clone())?.minify(text))
}

/// Minify `text` with the base profile.
pub fn minify_default(text: &str) -> String {
    DEFAULT_MINIFIER.minify(text)
}
