//! Per-asset load state tracking.
//!
//! Every thumbnail, gallery image and video shown on a page is registered
//! with an [`AssetLoadTracker`]. The tracker owns the asset's load state and
//! the set of byte ranges already fetched for it, and tells subscribers when
//! the asset becomes usable.
//!
//! # State Machine
//!
//! ```text
//! Unrequested ──► Requested ──► PartiallyBuffered ──► Ready
//!      │              │                 │               │
//!      └──────────────┴────────┬────────┴───────────────┘
//!                              ▼
//!                           Failed (terminal)
//! ```
//!
//! States only move forward. The one way back is an explicit
//! [`AssetLoadTracker::reset`], used when the view owning the asset closes.
//!
//! # Readiness
//!
//! - **Video**: ready once the bytes buffered contiguously ahead of the
//!   playhead cover [`ReadinessPolicy::video_ready_secs`] of playback.
//! - **Image**: ready when decoding completes. A decode failure still marks
//!   the image ready so a broken thumbnail never leaves a spinner up.

mod error;
mod readiness;
mod tracker;
mod types;

pub use error::AssetError;
pub use readiness::{
    covered_ahead, ReadinessPolicy, DEFAULT_ASSUMED_BYTES_PER_SEC, DEFAULT_VIDEO_READY_SECS,
};
pub use tracker::{AssetLoadTracker, RangeRecord, TrackerStats};
pub use types::{
    AssetEvent, AssetId, ImageLoadOutcome, LoadState, MediaAsset, MediaKind, VideoProfile,
};
