//! Shared configuration and error types for the minifier crates.

pub mod config;
pub mod error;

pub use config::{BlockCommentMarkers, MinifyConfig, Profile, RegionConfig, ServerConfig};
pub use error::{MinifyError, Result};
