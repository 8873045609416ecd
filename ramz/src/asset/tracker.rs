//! The asset load tracker.

use super::error::AssetError;
use super::readiness::ReadinessPolicy;
use super::types::{
    AssetEvent, AssetId, ImageLoadOutcome, LoadState, MediaAsset, MediaKind, VideoProfile,
};
use crate::http::ByteRange;
use dashmap::DashMap;
use tokio::sync::{broadcast, watch};
use tracing::{debug, trace, warn};

/// Capacity of the transition event channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

struct TrackedAsset {
    asset: MediaAsset,
    state_tx: watch::Sender<LoadState>,
}

/// Outcome of [`AssetLoadTracker::record_buffered_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRecord {
    /// False when the range was already recorded or the asset has failed.
    pub inserted: bool,
    pub state: LoadState,
}

/// Count of tracked assets per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerStats {
    pub unrequested: usize,
    pub requested: usize,
    pub partially_buffered: usize,
    pub ready: usize,
    pub failed: usize,
}

impl TrackerStats {
    pub fn total(&self) -> usize {
        self.unrequested + self.requested + self.partially_buffered + self.ready + self.failed
    }
}

/// Tracks the load state of every registered media asset.
///
/// Shared between the visibility gates, the prefetcher and the UI through
/// `Arc<AssetLoadTracker>`. Per-asset state is published on a `watch`
/// channel; every transition is also broadcast as an [`AssetEvent`].
pub struct AssetLoadTracker {
    assets: DashMap<AssetId, TrackedAsset>,
    policy: ReadinessPolicy,
    events: broadcast::Sender<AssetEvent>,
}

impl AssetLoadTracker {
    pub fn new(policy: ReadinessPolicy) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            assets: DashMap::new(),
            policy,
            events,
        }
    }

    pub fn policy(&self) -> &ReadinessPolicy {
        &self.policy
    }

    /// Registers an asset in `Unrequested` state.
    ///
    /// Registering an id that already exists returns the existing record
    /// unchanged.
    pub fn register(
        &self,
        id: AssetId,
        kind: MediaKind,
        source_url: impl Into<String>,
    ) -> MediaAsset {
        let entry = self.assets.entry(id.clone()).or_insert_with(|| {
            trace!(asset = %id, kind = %kind, "Registering asset");
            let (state_tx, _) = watch::channel(LoadState::Unrequested);
            TrackedAsset {
                asset: MediaAsset::new(id, kind, source_url),
                state_tx,
            }
        });
        entry.asset.clone()
    }

    /// Moves `Unrequested` to `Requested`. No-op in any later state.
    pub fn mark_requested(&self, id: &AssetId) -> Result<LoadState, AssetError> {
        self.with_asset(id, |tracked, events| {
            if tracked.asset.load_state == LoadState::Unrequested {
                transition(tracked, LoadState::Requested, events);
            }
            tracked.asset.load_state
        })
    }

    /// Adds a fetched byte range and re-evaluates readiness.
    ///
    /// Idempotent and commutative: recording the same set of ranges in any
    /// order yields the same final set and state.
    pub fn record_buffered_range(
        &self,
        id: &AssetId,
        range: ByteRange,
    ) -> Result<RangeRecord, AssetError> {
        let policy = self.policy;
        self.with_asset(id, |tracked, events| {
            if tracked.asset.load_state.is_terminal() {
                return RangeRecord {
                    inserted: false,
                    state: LoadState::Failed,
                };
            }

            let inserted = tracked.asset.buffered_ranges.insert(range);
            if inserted {
                trace!(asset = %tracked.asset.id, range = %range, "Recorded buffered range");
                if tracked.asset.load_state == LoadState::Unrequested {
                    transition(tracked, LoadState::Requested, events);
                }
                reevaluate(tracked, &policy, events);
            }

            RangeRecord {
                inserted,
                state: tracked.asset.load_state,
            }
        })
    }

    /// Whether `range` has already been recorded for the asset.
    pub fn has_range(&self, id: &AssetId, range: &ByteRange) -> bool {
        self.assets
            .get(id)
            .map(|t| t.asset.buffered_ranges.contains(range))
            .unwrap_or(false)
    }

    /// Reports the end of an image load.
    ///
    /// Both outcomes mark the image `Ready`: a thumbnail that fails to
    /// decode must not keep its placeholder spinning.
    pub fn complete_image_load(
        &self,
        id: &AssetId,
        outcome: ImageLoadOutcome,
    ) -> Result<LoadState, AssetError> {
        self.with_asset(id, |tracked, events| {
            if let ImageLoadOutcome::DecodeFailed(reason) = &outcome {
                warn!(
                    asset = %tracked.asset.id,
                    reason = %reason,
                    "Image decode failed, showing it as loaded"
                );
            }
            if tracked.asset.load_state.can_advance_to(LoadState::Ready) {
                transition(tracked, LoadState::Ready, events);
            }
            tracked.asset.load_state
        })
    }

    /// Marks the asset failed. Terminal; later transitions are ignored.
    pub fn mark_failed(&self, id: &AssetId) -> Result<LoadState, AssetError> {
        self.with_asset(id, |tracked, events| {
            if !tracked.asset.load_state.is_terminal() {
                transition(tracked, LoadState::Failed, events);
            }
            LoadState::Failed
        })
    }

    /// Sets what is known about a video's size and duration.
    pub fn set_video_profile(
        &self,
        id: &AssetId,
        profile: VideoProfile,
    ) -> Result<LoadState, AssetError> {
        let policy = self.policy;
        self.with_asset(id, |tracked, events| {
            tracked.asset.profile = profile;
            reevaluate(tracked, &policy, events);
            tracked.asset.load_state
        })
    }

    /// Moves the playhead used to measure the buffered window.
    ///
    /// Readiness can be gained at the new position but is never lost.
    pub fn set_playhead(&self, id: &AssetId, position_secs: f64) -> Result<LoadState, AssetError> {
        let policy = self.policy;
        self.with_asset(id, |tracked, events| {
            tracked.asset.playhead_secs = position_secs.max(0.0);
            reevaluate(tracked, &policy, events);
            tracked.asset.load_state
        })
    }

    /// Current state of the asset.
    pub fn query(&self, id: &AssetId) -> Option<LoadState> {
        self.assets.get(id).map(|t| t.asset.load_state)
    }

    /// Copy of the asset record.
    pub fn get(&self, id: &AssetId) -> Option<MediaAsset> {
        self.assets.get(id).map(|t| t.asset.clone())
    }

    /// Receiver that observes the asset's state.
    pub fn subscribe(&self, id: &AssetId) -> Option<watch::Receiver<LoadState>> {
        self.assets.get(id).map(|t| t.state_tx.subscribe())
    }

    /// Receiver for transitions of every asset.
    pub fn events(&self) -> broadcast::Receiver<AssetEvent> {
        self.events.subscribe()
    }

    /// Puts the asset back in `Unrequested` with no buffered ranges.
    ///
    /// This is the only way to move an asset backwards, used when the view
    /// that owns it is closed.
    pub fn reset(&self, id: &AssetId) -> Result<(), AssetError> {
        self.with_asset(id, |tracked, events| {
            let from = tracked.asset.load_state;
            tracked.asset.buffered_ranges.clear();
            tracked.asset.playhead_secs = 0.0;
            if from != LoadState::Unrequested {
                tracked.asset.load_state = LoadState::Unrequested;
                tracked.state_tx.send_replace(LoadState::Unrequested);
                let _ = events.send(AssetEvent {
                    id: tracked.asset.id.clone(),
                    from,
                    to: LoadState::Unrequested,
                });
                debug!(asset = %tracked.asset.id, from = %from, "Asset reset");
            }
        })
    }

    /// Resets every tracked asset.
    pub fn reset_all(&self) {
        let ids: Vec<AssetId> = self.assets.iter().map(|e| e.key().clone()).collect();
        for id in ids {
            // Concurrent removal is not an error here
            let _ = self.reset(&id);
        }
    }

    /// Stops tracking the asset.
    pub fn remove(&self, id: &AssetId) -> Option<MediaAsset> {
        self.assets.remove(id).map(|(_, t)| t.asset)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Counts of tracked assets per state.
    pub fn snapshot(&self) -> TrackerStats {
        let mut stats = TrackerStats::default();
        for entry in self.assets.iter() {
            match entry.asset.load_state {
                LoadState::Unrequested => stats.unrequested += 1,
                LoadState::Requested => stats.requested += 1,
                LoadState::PartiallyBuffered => stats.partially_buffered += 1,
                LoadState::Ready => stats.ready += 1,
                LoadState::Failed => stats.failed += 1,
            }
        }
        stats
    }

    fn with_asset<R>(
        &self,
        id: &AssetId,
        f: impl FnOnce(&mut TrackedAsset, &broadcast::Sender<AssetEvent>) -> R,
    ) -> Result<R, AssetError> {
        let mut entry = self
            .assets
            .get_mut(id)
            .ok_or_else(|| AssetError::UnknownAsset(id.clone()))?;
        Ok(f(entry.value_mut(), &self.events))
    }
}

impl Default for AssetLoadTracker {
    fn default() -> Self {
        Self::new(ReadinessPolicy::default())
    }
}

fn transition(tracked: &mut TrackedAsset, to: LoadState, events: &broadcast::Sender<AssetEvent>) {
    let from = tracked.asset.load_state;
    if !from.can_advance_to(to) {
        return;
    }

    tracked.asset.load_state = to;
    tracked.state_tx.send_replace(to);
    // No receivers is fine
    let _ = events.send(AssetEvent {
        id: tracked.asset.id.clone(),
        from,
        to,
    });

    debug!(asset = %tracked.asset.id, from = %from, to = %to, "Asset state changed");
}

/// Applies the state implied by the buffered ranges.
///
/// A jump straight to `Ready` still passes through `PartiallyBuffered`, so
/// subscribers see the same transitions whatever order ranges arrive in.
fn reevaluate(
    tracked: &mut TrackedAsset,
    policy: &ReadinessPolicy,
    events: &broadcast::Sender<AssetEvent>,
) {
    let Some(target) = policy.evaluate(&tracked.asset) else {
        return;
    };
    if target == LoadState::Ready {
        transition(tracked, LoadState::PartiallyBuffered, events);
    }
    transition(tracked, target, events);
}
