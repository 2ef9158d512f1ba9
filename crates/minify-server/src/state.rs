//! Application state shared across all handlers.

use minify_core::{Profile, Result};
use minify_engine::Minifier;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub profile: Profile,
    pub minifier: Arc<Minifier>,
    pub start_time: Instant,
    requests: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(profile: Profile) -> Result<Self> {
        Ok(Self::with_minifier(profile, Minifier::for_profile(profile)?))
    }

    pub fn with_minifier(profile: Profile, minifier: Minifier) -> Self {
        Self {
            profile,
            minifier: Arc::new(minifier),
            start_time: Instant::now(),
            requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Count a minify request; returns the new total.
    pub fn record_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_minifier(Profile::Base, Minifier::default())
    }
}
