//! User intent signals and how much each one fetches.

use super::range::DEFAULT_CHUNK_BYTES;
use std::fmt;
use std::str::FromStr;

/// Interaction that hints the user is about to open an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Hover,
    TouchStart,
    Click,
}

impl IntentKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::TouchStart => "touchstart",
            Self::Click => "click",
        }
    }

    /// A click is a commitment, the others are only hints.
    pub fn is_commit(self) -> bool {
        self == Self::Click
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hover" => Ok(Self::Hover),
            "touchstart" | "touch" => Ok(Self::TouchStart),
            "click" => Ok(Self::Click),
            other => Err(format!(
                "unknown intent '{}' (expected hover, touchstart or click)",
                other
            )),
        }
    }
}

/// Default chunks fetched on hover or touch.
pub const DEFAULT_HOVER_CHUNKS: usize = 1;

/// Default chunks fetched on click.
pub const DEFAULT_CLICK_CHUNKS: usize = 2;

/// Buffered seconds below which a lookahead fetch is issued.
pub const DEFAULT_LOW_WATER_SECS: f64 = 15.0;

/// How far past the playhead a lookahead fetch aims.
pub const DEFAULT_LOOKAHEAD_SECS: f64 = 20.0;

/// Tuning for the speculative prefetcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefetchConfig {
    /// Bytes per range request.
    pub chunk_bytes: u64,
    /// Chunks fetched for hover and touchstart.
    pub hover_chunks: usize,
    /// Chunks fetched for click.
    pub click_chunks: usize,
    pub low_water_secs: f64,
    pub lookahead_secs: f64,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            chunk_bytes: DEFAULT_CHUNK_BYTES,
            hover_chunks: DEFAULT_HOVER_CHUNKS,
            click_chunks: DEFAULT_CLICK_CHUNKS,
            low_water_secs: DEFAULT_LOW_WATER_SECS,
            lookahead_secs: DEFAULT_LOOKAHEAD_SECS,
        }
    }
}

impl PrefetchConfig {
    /// Number of chunks an intent asks for.
    pub fn chunks_for(&self, intent: IntentKind) -> usize {
        if intent.is_commit() {
            self.click_chunks
        } else {
            self.hover_chunks
        }
    }
}
