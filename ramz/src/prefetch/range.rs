//! Time to byte conversion for ranged video fetches.

use crate::asset::VideoProfile;
use crate::http::ByteRange;

/// Size of one speculative range request.
pub const DEFAULT_CHUNK_BYTES: u64 = 500_000;

/// Assumed size of a video whose length in bytes is unknown.
pub const DEFAULT_ESTIMATED_SIZE: u64 = 1_000_000;

/// Byte offset matching a playback position.
///
/// The offset is proportional to `secs / duration`. Without a known
/// duration the position cannot be mapped and the offset is zero.
pub fn byte_offset_for_time(secs: f64, profile: &VideoProfile) -> u64 {
    let Some(duration) = profile.duration_secs.filter(|d| *d > 0.0) else {
        return 0;
    };
    if secs <= 0.0 {
        return 0;
    }

    let size = profile.size_bytes.unwrap_or(DEFAULT_ESTIMATED_SIZE);
    let ratio = (secs / duration).min(1.0);
    (ratio * size as f64).floor() as u64
}

/// The chunk to fetch so that `target_secs` is buffered.
///
/// `start = floor(target / duration * size)` and
/// `end = min(start + chunk, size)`. Returns `None` when the duration is
/// unknown or zero, or when the target is past the end of the file.
pub fn estimate_range(
    target_secs: f64,
    duration_secs: Option<f64>,
    estimated_size: Option<u64>,
) -> Option<ByteRange> {
    let duration = duration_secs.filter(|d| *d > 0.0)?;
    let profile = VideoProfile {
        duration_secs: Some(duration),
        size_bytes: estimated_size,
    };
    let size = estimated_size.unwrap_or(DEFAULT_ESTIMATED_SIZE);
    chunk_at(byte_offset_for_time(target_secs, &profile), size, DEFAULT_CHUNK_BYTES)
}

/// One chunk starting at `start`, clipped to `size`.
pub fn chunk_at(start: u64, size: u64, chunk_bytes: u64) -> Option<ByteRange> {
    if start >= size || chunk_bytes == 0 {
        return None;
    }
    Some(ByteRange::new(start, start.saturating_add(chunk_bytes).min(size)))
}

/// Up to `count` back-to-back chunks beginning at `start`.
pub fn consecutive_chunks(start: u64, size: u64, chunk_bytes: u64, count: usize) -> Vec<ByteRange> {
    let mut ranges = Vec::with_capacity(count);
    let mut cursor = start;

    while ranges.len() < count {
        let Some(range) = chunk_at(cursor, size, chunk_bytes) else {
            break;
        };
        ranges.push(range);
        match range.end.checked_add(1) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    ranges
}
