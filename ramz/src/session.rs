//! Gallery view session.
//!
//! Ties the pieces together for one open gallery: the planner lays the
//! items out, each item is gated on visibility, intent signals go to the
//! prefetcher, and closing the view undoes all of it.
//!
//! ```ignore
//! let session = GallerySession::new(client, tracker, config.prefetch_config(), config.observe_options());
//! let blocks = session.open(&sources);
//! for block in &blocks {
//!     for item in &block.items {
//!         session.attach(&item.value, element_for(item), Arc::clone(&viewport))?;
//!     }
//! }
//! session.intent(&blocks[0].items[0].value, IntentKind::Hover)?;
//! session.close();
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

use crate::asset::{AssetError, AssetId, AssetLoadTracker, LoadState, MediaKind};
use crate::gallery::{plan_blocks, GalleryBlock, PRIORITY_ITEMS};
use crate::http::AsyncHttpClient;
use crate::prefetch::{IntentKind, PrefetchConfig, PrefetchTicket, SpeculativePrefetcher};
use crate::visibility::{
    ElementId, GateHandle, ObserveOptions, RegionVisibilityReporter, VisibilityGate,
};

/// One media item handed to [`GallerySession::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    pub kind: MediaKind,
    pub url: String,
}

impl MediaSource {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
        }
    }

    pub fn id(&self) -> AssetId {
        AssetId::from_url(&self.url)
    }
}

/// State of one open gallery view.
pub struct GallerySession<C: AsyncHttpClient + 'static> {
    tracker: Arc<AssetLoadTracker>,
    prefetcher: SpeculativePrefetcher<C>,
    observe_options: ObserveOptions,
    assets: Mutex<Vec<AssetId>>,
    gates: Mutex<HashMap<AssetId, GateHandle>>,
}

impl<C: AsyncHttpClient + 'static> GallerySession<C> {
    pub fn new(
        client: Arc<C>,
        tracker: Arc<AssetLoadTracker>,
        prefetch: PrefetchConfig,
        observe_options: ObserveOptions,
    ) -> Self {
        let prefetcher = SpeculativePrefetcher::with_config(client, Arc::clone(&tracker), prefetch);
        Self {
            tracker,
            prefetcher,
            observe_options,
            assets: Mutex::new(Vec::new()),
            gates: Mutex::new(HashMap::new()),
        }
    }

    pub fn tracker(&self) -> &Arc<AssetLoadTracker> {
        &self.tracker
    }

    pub fn prefetcher(&self) -> &SpeculativePrefetcher<C> {
        &self.prefetcher
    }

    /// Registers `sources` and returns their block layout.
    ///
    /// The first [`PRIORITY_ITEMS`] are requested straight away; the rest
    /// wait for their gate. Opening again replaces the session's asset
    /// list without resetting anything.
    pub fn open(&self, sources: &[MediaSource]) -> Vec<GalleryBlock<AssetId>> {
        let ids: Vec<AssetId> = sources
            .iter()
            .map(|source| {
                self.tracker
                    .register(source.id(), source.kind, source.url.clone())
                    .id
            })
            .collect();

        for id in ids.iter().take(PRIORITY_ITEMS) {
            let _ = self.tracker.mark_requested(id);
        }

        let blocks = plan_blocks(&ids);
        info!(
            items = ids.len(),
            blocks = blocks.len(),
            "Gallery session opened"
        );

        *self.assets.lock().unwrap_or_else(PoisonError::into_inner) = ids;
        blocks
    }

    /// Arms a visibility gate that requests `id` once `element` scrolls
    /// into view.
    ///
    /// Re-attaching an asset disarms its previous gate first.
    pub fn attach<R>(
        &self,
        id: &AssetId,
        element: ElementId,
        reporter: Arc<R>,
    ) -> Result<(), AssetError>
    where
        R: RegionVisibilityReporter + ?Sized + 'static,
    {
        if self.tracker.query(id).is_none() {
            return Err(AssetError::UnknownAsset(id.clone()));
        }

        let gate = VisibilityGate::with_options(reporter, self.observe_options);
        let tracker = Arc::clone(&self.tracker);
        let asset = id.clone();
        let handle = gate.observe(element, move || {
            if let Err(e) = tracker.mark_requested(&asset) {
                warn!(asset = %asset, error = %e, "Visible asset no longer tracked");
            }
        });

        let previous = self
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), handle);
        if let Some(previous) = previous {
            previous.disarm();
        }
        Ok(())
    }

    /// Forwards a hover, touch or click on `id` to the prefetcher.
    pub fn intent(&self, id: &AssetId, kind: IntentKind) -> Result<PrefetchTicket, AssetError> {
        if self.tracker.query(id).is_none() {
            return Err(AssetError::UnknownAsset(id.clone()));
        }
        Ok(self.prefetcher.prefetch_on_intent(id, kind))
    }

    /// Moves the playhead of a playing video and tops up its buffer if it
    /// runs low.
    pub fn playback_progress(
        &self,
        id: &AssetId,
        position_secs: f64,
    ) -> Result<Option<PrefetchTicket>, AssetError> {
        self.tracker.set_playhead(id, position_secs)?;
        Ok(self.prefetcher.prefetch_ahead(id))
    }

    /// States of the session's assets, in gallery order.
    pub fn states(&self) -> Vec<(AssetId, LoadState)> {
        self.assets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter_map(|id| self.tracker.query(id).map(|state| (id.clone(), state)))
            .collect()
    }

    pub fn armed_gates(&self) -> usize {
        self.gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|gate| gate.is_armed())
            .count()
    }

    /// Tears the view down: disarms every gate, cancels prefetches and
    /// resets the session's assets to `Unrequested`.
    pub fn close(&self) {
        let gates: Vec<GateHandle> = self
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, gate)| gate)
            .collect();
        for gate in &gates {
            gate.disarm();
        }

        let ids = std::mem::take(&mut *self.assets.lock().unwrap_or_else(PoisonError::into_inner));
        for id in &ids {
            self.prefetcher.cancel(id);
            if let Err(e) = self.tracker.reset(id) {
                debug!(asset = %id, error = %e, "Asset already gone at close");
            }
        }

        info!(assets = ids.len(), gates = gates.len(), "Gallery session closed");
    }
}

impl<C: AsyncHttpClient + 'static> Drop for GallerySession<C> {
    fn drop(&mut self) {
        for gate in self
            .gates
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
        {
            gate.disarm();
        }
        self.prefetcher.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::BlockKind;
    use crate::http::{HttpResponse, MockHttpClient};
    use crate::prefetch::PrefetchOutcome;
    use crate::visibility::{Region, ScrollViewport, UnavailableReporter};
    use std::time::Duration;

    fn session(mock: MockHttpClient) -> GallerySession<MockHttpClient> {
        GallerySession::new(
            Arc::new(mock),
            Arc::new(AssetLoadTracker::default()),
            PrefetchConfig::default(),
            ObserveOptions::default(),
        )
    }

    fn gallery(n: usize) -> Vec<MediaSource> {
        (0..n)
            .map(|i| MediaSource::image(format!("https://cdn.example.com/id/{i}.webp")))
            .collect()
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    #[test]
    fn test_open_plans_and_prioritises() {
        let session = session(MockHttpClient::partial_content());
        let blocks = session.open(&gallery(7));

        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Single,
                BlockKind::Single,
                BlockKind::Single,
                BlockKind::Single,
                BlockKind::Double,
                BlockKind::Single
            ]
        );

        let states: Vec<LoadState> = session.states().into_iter().map(|(_, s)| s).collect();
        assert_eq!(states[..5], [LoadState::Requested; 5]);
        assert_eq!(states[5..], [LoadState::Unrequested; 2]);
    }

    #[test]
    fn test_empty_gallery() {
        let session = session(MockHttpClient::partial_content());
        assert!(session.open(&[]).is_empty());
        assert!(session.states().is_empty());
    }

    #[tokio::test]
    async fn test_attach_requests_on_scroll() {
        let session = session(MockHttpClient::partial_content());
        session.open(&gallery(6));
        let last = MediaSource::image("https://cdn.example.com/id/5.webp").id();

        let viewport = Arc::new(ScrollViewport::new(800.0));
        viewport.place("item-5", Region::new(3_000.0, 400.0));
        session
            .attach(&last, "item-5".into(), Arc::clone(&viewport))
            .unwrap();
        settle().await;
        assert_eq!(session.tracker().query(&last), Some(LoadState::Unrequested));
        assert_eq!(session.armed_gates(), 1);

        viewport.scroll_to(2_500.0);
        settle().await;
        assert_eq!(session.tracker().query(&last), Some(LoadState::Requested));
        assert_eq!(session.armed_gates(), 0);
    }

    #[test]
    fn test_attach_unknown_asset() {
        let session = session(MockHttpClient::partial_content());
        let result = session.attach(
            &AssetId::new("nope"),
            "x".into(),
            Arc::new(UnavailableReporter),
        );
        assert!(matches!(result, Err(AssetError::UnknownAsset(_))));
    }

    #[tokio::test]
    async fn test_intent_loads_image() {
        let mock = MockHttpClient::new(Ok(HttpResponse::new(200, vec![1, 2, 3])));
        let session = session(mock);
        session.open(&gallery(1));
        let id = MediaSource::image("https://cdn.example.com/id/0.webp").id();

        let outcome = session
            .intent(&id, IntentKind::Hover)
            .unwrap()
            .outcome()
            .await;

        // Not a real image, but thumbnails fail open.
        assert_eq!(outcome, PrefetchOutcome::ImageLoaded);
        assert_eq!(session.tracker().query(&id), Some(LoadState::Ready));
    }

    #[tokio::test]
    async fn test_close_resets_and_disarms() {
        let session = session(MockHttpClient::partial_content());
        session.open(&gallery(8));
        let late = MediaSource::image("https://cdn.example.com/id/7.webp").id();

        let viewport = Arc::new(ScrollViewport::new(800.0));
        viewport.place("item-7", Region::new(5_000.0, 400.0));
        session
            .attach(&late, "item-7".into(), Arc::clone(&viewport))
            .unwrap();
        settle().await;

        session.close();
        settle().await;
        viewport.scroll_to(4_800.0);
        settle().await;

        assert!(session.states().is_empty());
        assert_eq!(session.tracker().query(&late), Some(LoadState::Unrequested));
        let first = MediaSource::image("https://cdn.example.com/id/0.webp").id();
        assert_eq!(session.tracker().query(&first), Some(LoadState::Unrequested));
        assert_eq!(viewport.observer_count(), 0);
    }
}
