//! Asset data types.

use crate::http::ByteRange;
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier for a media asset.
///
/// Galleries key assets by their position; standalone videos by URL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Id for the item at `index` in an ordered media list.
    pub fn from_index(index: usize) -> Self {
        Self(format!("#{}", index))
    }

    /// Id derived from the asset's source URL.
    pub fn from_url(url: &str) -> Self {
        Self(url.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Kind of media behind an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Load state of a media asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadState {
    /// Registered, nothing fetched yet.
    #[default]
    Unrequested,
    /// The asset came into view (or was asked for) and loading has started.
    Requested,
    /// Some data is available; a first frame can be shown.
    PartiallyBuffered,
    /// Enough data is available for instant display or stall-free playback.
    Ready,
    /// Terminal. No transition is accepted afterwards.
    Failed,
}

impl LoadState {
    /// Position along the forward path. `Failed` sits outside it.
    fn rank(self) -> Option<u8> {
        match self {
            Self::Unrequested => Some(0),
            Self::Requested => Some(1),
            Self::PartiallyBuffered => Some(2),
            Self::Ready => Some(3),
            Self::Failed => None,
        }
    }

    /// Whether moving from `self` to `next` is allowed.
    ///
    /// Forward moves are allowed, `Failed` is reachable from any live state,
    /// and nothing leaves `Failed`.
    pub fn can_advance_to(self, next: LoadState) -> bool {
        match (self.rank(), next.rank()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(current), Some(target)) => target > current,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Failed
    }

    /// Whether the UI can swap its placeholder for real content.
    pub fn is_displayable(self) -> bool {
        matches!(self, Self::PartiallyBuffered | Self::Ready)
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrequested => write!(f, "unrequested"),
            Self::Requested => write!(f, "requested"),
            Self::PartiallyBuffered => write!(f, "partially-buffered"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// What is known about a video's encoding, used to convert time to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VideoProfile {
    pub duration_secs: Option<f64>,
    pub size_bytes: Option<u64>,
}

impl VideoProfile {
    pub fn new(duration_secs: f64, size_bytes: u64) -> Self {
        Self {
            duration_secs: Some(duration_secs),
            size_bytes: Some(size_bytes),
        }
    }

    /// Average bytes per second, when both duration and size are known.
    pub fn bytes_per_sec(&self) -> Option<f64> {
        match (self.duration_secs, self.size_bytes) {
            (Some(d), Some(s)) if d > 0.0 => Some(s as f64 / d),
            _ => None,
        }
    }
}

/// A tracked media asset.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaAsset {
    pub id: AssetId,
    pub kind: MediaKind,
    pub source_url: String,
    pub load_state: LoadState,
    /// Ranges fetched so far. Overlapping ranges are kept distinct.
    pub buffered_ranges: BTreeSet<ByteRange>,
    pub profile: VideoProfile,
    pub playhead_secs: f64,
}

impl MediaAsset {
    pub fn new(id: AssetId, kind: MediaKind, source_url: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            source_url: source_url.into(),
            load_state: LoadState::Unrequested,
            buffered_ranges: BTreeSet::new(),
            profile: VideoProfile::default(),
            playhead_secs: 0.0,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Result of decoding an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadOutcome {
    Decoded,
    DecodeFailed(String),
}

/// Emitted once for every state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEvent {
    pub id: AssetId,
    pub from: LoadState,
    pub to: LoadState,
}
