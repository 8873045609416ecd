//! Speculative prefetch of media on user intent.
//!
//! Hovering or touching a thumbnail is a strong hint that the user is
//! about to open it. The [`SpeculativePrefetcher`] uses that hint to warm
//! the asset before the click lands:
//!
//! - **Images** are fetched whole and decoded off the async runtime.
//! - **Videos** get ranged `GET`s of [`DEFAULT_CHUNK_BYTES`] anchored at the
//!   playhead. Only `206 Partial Content` responses are recorded on the
//!   [`AssetLoadTracker`](crate::asset::AssetLoadTracker).
//!
//! Prefetching is best effort. Failures become a [`PrefetchMiss`], get
//! logged, and go no further.

mod error;
mod intent;
mod prefetcher;
mod range;

pub use error::PrefetchMiss;
pub use intent::{
    IntentKind, PrefetchConfig, DEFAULT_CLICK_CHUNKS, DEFAULT_HOVER_CHUNKS,
    DEFAULT_LOOKAHEAD_SECS, DEFAULT_LOW_WATER_SECS,
};
pub use prefetcher::{
    PrefetchOutcome, PrefetchStats, PrefetchStatsSnapshot, PrefetchTicket, SpeculativePrefetcher,
};
pub use range::{
    byte_offset_for_time, chunk_at, consecutive_chunks, estimate_range, DEFAULT_CHUNK_BYTES,
    DEFAULT_ESTIMATED_SIZE,
};
