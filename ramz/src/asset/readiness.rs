//! Readiness policy for buffered video.

use super::types::{LoadState, MediaAsset, MediaKind, VideoProfile};
use crate::http::ByteRange;
use crate::prefetch::byte_offset_for_time;
use std::collections::BTreeSet;

/// Seconds buffered ahead of the playhead before a video counts as ready.
pub const DEFAULT_VIDEO_READY_SECS: f64 = 2.0;

/// Bitrate assumed for videos whose size and duration are unknown.
pub const DEFAULT_ASSUMED_BYTES_PER_SEC: f64 = 250_000.0;

/// Decides when buffered bytes make a video usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadinessPolicy {
    /// Playback seconds that must be buffered ahead of the playhead.
    pub video_ready_secs: f64,
    /// Fallback bitrate used to turn seconds into bytes.
    pub assumed_bytes_per_sec: f64,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            video_ready_secs: DEFAULT_VIDEO_READY_SECS,
            assumed_bytes_per_sec: DEFAULT_ASSUMED_BYTES_PER_SEC,
        }
    }
}

impl ReadinessPolicy {
    /// Bytes that must be covered ahead of the playhead.
    pub fn threshold_bytes(&self, profile: &VideoProfile) -> u64 {
        let rate = profile
            .bytes_per_sec()
            .unwrap_or(self.assumed_bytes_per_sec);
        ((self.video_ready_secs * rate).ceil() as u64).max(1)
    }

    /// State implied by the asset's buffered ranges, if any.
    ///
    /// Only videos are judged on bytes; images return `None`.
    pub fn evaluate(&self, asset: &MediaAsset) -> Option<LoadState> {
        if asset.kind != MediaKind::Video {
            return None;
        }

        let playhead = byte_offset_for_time(asset.playhead_secs, &asset.profile);
        let covered = covered_ahead(&asset.buffered_ranges, playhead);

        if covered >= self.threshold_bytes(&asset.profile) {
            Some(LoadState::Ready)
        } else if covered > 0 {
            Some(LoadState::PartiallyBuffered)
        } else {
            None
        }
    }
}

/// Length of the contiguous run of bytes starting at `from` that the union
/// of `ranges` covers.
///
/// Ranges may overlap and arrive in any order; the result only depends on
/// the set.
pub fn covered_ahead(ranges: &BTreeSet<ByteRange>, from: u64) -> u64 {
    let mut cursor = from;

    for range in ranges {
        if range.end < cursor {
            continue;
        }
        if range.start > cursor {
            break;
        }
        if range.end == u64::MAX {
            return u64::MAX - from;
        }
        cursor = range.end + 1;
    }

    cursor - from
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetId;

    fn ranges(pairs: &[(u64, u64)]) -> BTreeSet<ByteRange> {
        pairs.iter().map(|&(s, e)| ByteRange::new(s, e)).collect()
    }

    fn video_with(pairs: &[(u64, u64)]) -> MediaAsset {
        let mut asset = MediaAsset::new(AssetId::new("v"), MediaKind::Video, "https://cdn/v.mp4");
        asset.buffered_ranges = ranges(pairs);
        asset
    }

    #[test]
    fn test_covered_ahead_merges_overlaps() {
        let set = ranges(&[(0, 500_000), (300_000, 800_000)]);
        assert_eq!(covered_ahead(&set, 0), 800_001);
    }

    #[test]
    fn test_covered_ahead_range_to_end_of_address_space() {
        let set = ranges(&[(0, 99), (100, u64::MAX)]);
        assert_eq!(covered_ahead(&set, 0), u64::MAX);
        assert_eq!(covered_ahead(&set, 1_000), u64::MAX - 1_000);
    }

    #[test]
    fn test_covered_ahead_stops_at_gap() {
        let set = ranges(&[(0, 99), (200, 299)]);
        assert_eq!(covered_ahead(&set, 0), 100);
        assert_eq!(covered_ahead(&set, 150), 0);
        assert_eq!(covered_ahead(&set, 250), 50);
    }

    #[test]
    fn test_covered_ahead_adjacent_ranges_join() {
        let set = ranges(&[(0, 99), (100, 199)]);
        assert_eq!(covered_ahead(&set, 0), 200);
    }

    #[test]
    fn test_covered_ahead_empty() {
        assert_eq!(covered_ahead(&BTreeSet::new(), 0), 0);
    }

    #[test]
    fn test_threshold_uses_profile_bitrate() {
        let policy = ReadinessPolicy::default();
        assert_eq!(policy.threshold_bytes(&VideoProfile::default()), 500_000);
        assert_eq!(
            policy.threshold_bytes(&VideoProfile::new(10.0, 1_000_000)),
            200_000
        );
    }

    #[test]
    fn test_evaluate_video_levels() {
        let policy = ReadinessPolicy::default();
        assert_eq!(policy.evaluate(&video_with(&[])), None);
        assert_eq!(
            policy.evaluate(&video_with(&[(0, 1_000)])),
            Some(LoadState::PartiallyBuffered)
        );
        assert_eq!(
            policy.evaluate(&video_with(&[(0, 500_000)])),
            Some(LoadState::Ready)
        );
    }

    #[test]
    fn test_evaluate_ignores_ranges_behind_playhead() {
        let policy = ReadinessPolicy::default();
        let mut asset = video_with(&[(0, 400_000)]);
        asset.profile = VideoProfile::new(100.0, 10_000_000);
        asset.playhead_secs = 50.0;
        assert_eq!(policy.evaluate(&asset), None);
    }

    #[test]
    fn test_evaluate_skips_images() {
        let policy = ReadinessPolicy::default();
        let mut image = video_with(&[(0, 1_000_000)]);
        image.kind = MediaKind::Image;
        assert_eq!(policy.evaluate(&image), None);
    }
}
