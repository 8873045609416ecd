//! Speculative prefetcher driven by user intent.

use super::error::PrefetchMiss;
use super::intent::{IntentKind, PrefetchConfig};
use super::range::{
    byte_offset_for_time, consecutive_chunks, estimate_range, DEFAULT_ESTIMATED_SIZE,
};
use crate::asset::{
    covered_ahead, AssetId, AssetLoadTracker, ImageLoadOutcome, LoadState, MediaAsset, MediaKind,
};
use crate::http::{AsyncHttpClient, ByteRange, HttpResponse};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// How a speculative fetch ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefetchOutcome {
    /// Ranges newly recorded on the tracker.
    Buffered(Vec<ByteRange>),
    /// Every planned range was already recorded.
    AlreadyBuffered,
    /// The image was fetched and handed to the tracker.
    ImageLoaded,
    /// A newer intent or a cancel took over.
    Superseded,
    Missed(PrefetchMiss),
    /// Nothing to do: unknown or failed asset, or nothing left to fetch.
    Skipped,
}

/// Handle to a speculative fetch. Dropping it does not cancel the fetch.
#[derive(Debug)]
pub struct PrefetchTicket {
    generation: u64,
    handle: JoinHandle<PrefetchOutcome>,
}

impl PrefetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits for the fetch to settle.
    pub async fn outcome(self) -> PrefetchOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => PrefetchOutcome::Missed(PrefetchMiss::Task(e.to_string())),
        }
    }
}

/// Counters for prefetch activity.
#[derive(Debug, Default)]
pub struct PrefetchStats {
    /// Requests sent.
    pub issued: AtomicU64,
    /// Ranges recorded from `206` responses.
    pub buffered: AtomicU64,
    /// Fetches abandoned for a newer intent.
    pub superseded: AtomicU64,
    /// Fetches that failed or got an unexpected status.
    pub missed: AtomicU64,
}

impl PrefetchStats {
    pub fn snapshot(&self) -> PrefetchStatsSnapshot {
        PrefetchStatsSnapshot {
            issued: self.issued.load(Ordering::Relaxed),
            buffered: self.buffered.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            missed: self.missed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`PrefetchStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefetchStatsSnapshot {
    pub issued: u64,
    pub buffered: u64,
    pub superseded: u64,
    pub missed: u64,
}

struct InFlight {
    generation: u64,
    token: CancellationToken,
}

enum FetchPlan {
    Image,
    Ranges(Vec<ByteRange>),
}

/// Everything a spawned fetch needs, cloned out of the prefetcher.
struct FetchJob<C> {
    client: Arc<C>,
    tracker: Arc<AssetLoadTracker>,
    inflight: Arc<DashMap<AssetId, InFlight>>,
    stats: Arc<PrefetchStats>,
    id: AssetId,
    url: String,
    generation: u64,
    token: CancellationToken,
}

/// Warms assets on hover, touch and click.
///
/// Images are fetched whole and decoded; videos get ranged requests sized
/// in chunks from the playhead. Each asset has at most one speculative
/// fetch in flight: a new intent cancels the previous one, and a cancelled
/// fetch never records anything on the tracker.
///
/// ```text
/// intent ──► plan ranges ──► skip recorded ──► GET Range ──► 206? ──► record
///              │                                  ▲
///              └── new intent / cancel ───────────┘ (abort)
/// ```
pub struct SpeculativePrefetcher<C: AsyncHttpClient + 'static> {
    client: Arc<C>,
    tracker: Arc<AssetLoadTracker>,
    config: PrefetchConfig,
    inflight: Arc<DashMap<AssetId, InFlight>>,
    next_generation: AtomicU64,
    stats: Arc<PrefetchStats>,
}

impl<C: AsyncHttpClient + 'static> SpeculativePrefetcher<C> {
    pub fn new(client: Arc<C>, tracker: Arc<AssetLoadTracker>) -> Self {
        Self::with_config(client, tracker, PrefetchConfig::default())
    }

    pub fn with_config(
        client: Arc<C>,
        tracker: Arc<AssetLoadTracker>,
        config: PrefetchConfig,
    ) -> Self {
        Self {
            client,
            tracker,
            config,
            inflight: Arc::new(DashMap::new()),
            next_generation: AtomicU64::new(1),
            stats: Arc::new(PrefetchStats::default()),
        }
    }

    pub fn config(&self) -> &PrefetchConfig {
        &self.config
    }

    pub fn tracker(&self) -> &Arc<AssetLoadTracker> {
        &self.tracker
    }

    pub fn stats(&self) -> Arc<PrefetchStats> {
        Arc::clone(&self.stats)
    }

    /// Starts a speculative fetch for `id`, superseding any fetch in flight
    /// for the same asset.
    ///
    /// Must be called inside a Tokio runtime. Returns immediately.
    pub fn prefetch_on_intent(&self, id: &AssetId, intent: IntentKind) -> PrefetchTicket {
        let Some(asset) = self.usable_asset(id) else {
            return self.settled(PrefetchOutcome::Skipped);
        };

        let plan = match asset.kind {
            MediaKind::Image if asset.load_state == LoadState::Ready => {
                trace!(asset = %id, "Image already loaded");
                return self.settled(PrefetchOutcome::AlreadyBuffered);
            }
            MediaKind::Image => FetchPlan::Image,
            MediaKind::Video => {
                let size = asset.profile.size_bytes.unwrap_or(DEFAULT_ESTIMATED_SIZE);
                let start = byte_offset_for_time(asset.playhead_secs, &asset.profile);
                FetchPlan::Ranges(consecutive_chunks(
                    start,
                    size,
                    self.config.chunk_bytes,
                    self.config.chunks_for(intent),
                ))
            }
        };

        debug!(asset = %id, intent = %intent, "Prefetch on intent");
        self.launch(asset, plan)
    }

    /// Tops up a playing video when less than the low-water mark is
    /// buffered ahead of the playhead.
    ///
    /// Aims `lookahead_secs` past the playhead, capped one second before the
    /// end. Returns `None` when the video is unknown, has no duration, or is
    /// buffered far enough.
    pub fn prefetch_ahead(&self, id: &AssetId) -> Option<PrefetchTicket> {
        let asset = self.usable_asset(id)?;
        if !asset.is_video() {
            return None;
        }
        let duration = asset.profile.duration_secs.filter(|d| *d > 0.0)?;
        let rate = asset
            .profile
            .bytes_per_sec()
            .unwrap_or(self.tracker.policy().assumed_bytes_per_sec);

        let playhead_byte = byte_offset_for_time(asset.playhead_secs, &asset.profile);
        let ahead_secs = covered_ahead(&asset.buffered_ranges, playhead_byte) as f64 / rate;
        if ahead_secs >= self.config.low_water_secs
            || asset.playhead_secs + ahead_secs >= duration
        {
            trace!(asset = %id, ahead_secs, "Enough buffered ahead");
            return None;
        }

        let target = (asset.playhead_secs + self.config.lookahead_secs).min(duration - 1.0);
        let range = estimate_range(target, Some(duration), asset.profile.size_bytes)?;

        debug!(asset = %id, ahead_secs, target, "Lookahead prefetch");
        Some(self.launch(asset, FetchPlan::Ranges(vec![range])))
    }

    /// Aborts the fetch in flight for `id`. Returns true if one was running.
    pub fn cancel(&self, id: &AssetId) -> bool {
        match self.inflight.remove(id) {
            Some((_, flight)) => {
                flight.token.cancel();
                debug!(asset = %id, generation = flight.generation, "Prefetch cancelled");
                true
            }
            None => false,
        }
    }

    /// Aborts every fetch in flight.
    pub fn cancel_all(&self) {
        let ids: Vec<AssetId> = self.inflight.iter().map(|e| e.key().clone()).collect();
        for id in ids {
            self.cancel(&id);
        }
    }

    pub fn is_in_flight(&self, id: &AssetId) -> bool {
        self.inflight.contains_key(id)
    }

    pub fn in_flight_count(&self) -> usize {
        self.inflight.len()
    }

    fn usable_asset(&self, id: &AssetId) -> Option<MediaAsset> {
        match self.tracker.get(id) {
            Some(asset) if asset.load_state != LoadState::Failed => Some(asset),
            Some(_) => {
                trace!(asset = %id, "Asset failed, not prefetching");
                None
            }
            None => {
                trace!(asset = %id, "Unknown asset, not prefetching");
                None
            }
        }
    }

    fn settled(&self, outcome: PrefetchOutcome) -> PrefetchTicket {
        PrefetchTicket {
            generation: 0,
            handle: tokio::spawn(async move { outcome }),
        }
    }

    fn launch(&self, asset: MediaAsset, plan: FetchPlan) -> PrefetchTicket {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        let previous = self.inflight.insert(
            asset.id.clone(),
            InFlight {
                generation,
                token: token.clone(),
            },
        );
        if let Some(previous) = previous {
            previous.token.cancel();
            debug!(
                asset = %asset.id,
                superseded = previous.generation,
                generation,
                "Superseding in-flight prefetch"
            );
        }

        // Already registered, so this cannot fail
        let _ = self.tracker.mark_requested(&asset.id);

        let job = FetchJob {
            client: Arc::clone(&self.client),
            tracker: Arc::clone(&self.tracker),
            inflight: Arc::clone(&self.inflight),
            stats: Arc::clone(&self.stats),
            id: asset.id,
            url: asset.source_url,
            generation,
            token,
        };

        let handle = tokio::spawn(async move {
            let outcome = match plan {
                FetchPlan::Image => job.fetch_image().await,
                FetchPlan::Ranges(ranges) => job.fetch_ranges(ranges).await,
            };
            job.finish(&outcome);
            outcome
        });

        PrefetchTicket { generation, handle }
    }
}

impl<C: AsyncHttpClient + 'static> FetchJob<C> {
    async fn fetch_ranges(&self, ranges: Vec<ByteRange>) -> PrefetchOutcome {
        if ranges.is_empty() {
            return PrefetchOutcome::Skipped;
        }

        let mut recorded = Vec::new();
        for range in ranges {
            if self.tracker.has_range(&self.id, &range) {
                trace!(asset = %self.id, range = %range, "Range already buffered");
                continue;
            }

            self.stats.issued.fetch_add(1, Ordering::Relaxed);
            let response = tokio::select! {
                biased;
                _ = self.token.cancelled() => return PrefetchOutcome::Superseded,
                response = self.client.get_range(&self.url, range) => response,
            };

            let response = match self.check(response, HttpResponse::is_partial_content) {
                Ok(response) => response,
                Err(outcome) => return outcome,
            };
            trace!(asset = %self.id, bytes = response.body.len(), "Range fetched");

            // Holding the in-flight entry keeps a newer intent from slipping
            // in between the generation check and the write.
            let Some(current) = self.inflight.get(&self.id) else {
                return PrefetchOutcome::Superseded;
            };
            if current.generation != self.generation {
                return PrefetchOutcome::Superseded;
            }
            match self.tracker.record_buffered_range(&self.id, range) {
                Ok(record) if record.inserted => {
                    self.stats.buffered.fetch_add(1, Ordering::Relaxed);
                    recorded.push(range);
                }
                Ok(_) => {}
                Err(_) => return PrefetchOutcome::Skipped,
            }
        }

        if recorded.is_empty() {
            PrefetchOutcome::AlreadyBuffered
        } else {
            PrefetchOutcome::Buffered(recorded)
        }
    }

    async fn fetch_image(&self) -> PrefetchOutcome {
        self.stats.issued.fetch_add(1, Ordering::Relaxed);
        let response = tokio::select! {
            biased;
            _ = self.token.cancelled() => return PrefetchOutcome::Superseded,
            response = self.client.get(&self.url) => response,
        };

        let response = match self.check(response, HttpResponse::is_success) {
            Ok(response) => response,
            Err(outcome) => return outcome,
        };

        let outcome = decode_image(response.body).await;

        let Some(current) = self.inflight.get(&self.id) else {
            return PrefetchOutcome::Superseded;
        };
        if current.generation != self.generation {
            return PrefetchOutcome::Superseded;
        }
        match self.tracker.complete_image_load(&self.id, outcome) {
            Ok(_) => PrefetchOutcome::ImageLoaded,
            Err(_) => PrefetchOutcome::Skipped,
        }
    }

    /// Turns a response into a usable body or the outcome to stop with.
    fn check(
        &self,
        response: Result<HttpResponse, crate::http::HttpError>,
        accept: fn(&HttpResponse) -> bool,
    ) -> Result<HttpResponse, PrefetchOutcome> {
        let miss = match response {
            Ok(response) if accept(&response) => return Ok(response),
            Ok(response) => PrefetchMiss::UnexpectedStatus {
                url: self.url.clone(),
                status: response.status,
            },
            Err(e) => PrefetchMiss::Network(e),
        };

        self.stats.missed.fetch_add(1, Ordering::Relaxed);
        warn!(asset = %self.id, error = %miss, "Speculative prefetch missed");
        Err(PrefetchOutcome::Missed(miss))
    }

    fn finish(&self, outcome: &PrefetchOutcome) {
        if *outcome == PrefetchOutcome::Superseded {
            self.stats.superseded.fetch_add(1, Ordering::Relaxed);
        }
        self.inflight
            .remove_if(&self.id, |_, flight| flight.generation == self.generation);
        trace!(asset = %self.id, generation = self.generation, ?outcome, "Prefetch settled");
    }
}

async fn decode_image(body: Vec<u8>) -> ImageLoadOutcome {
    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&body)).await;
    match decoded {
        Ok(Ok(_)) => ImageLoadOutcome::Decoded,
        Ok(Err(e)) => ImageLoadOutcome::DecodeFailed(e.to_string()),
        Err(e) => ImageLoadOutcome::DecodeFailed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::VideoProfile;
    use crate::http::{HttpError, MockHttpClient, RecordedRequest};
    use std::time::Duration;

    const VIDEO_URL: &str = "https://cdn.example/reel.mp4";

    fn setup(client: MockHttpClient) -> (SpeculativePrefetcher<MockHttpClient>, AssetId) {
        let tracker = Arc::new(AssetLoadTracker::default());
        let id = AssetId::from_url(VIDEO_URL);
        tracker.register(id.clone(), MediaKind::Video, VIDEO_URL);
        (SpeculativePrefetcher::new(Arc::new(client), tracker), id)
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::new(2, 2);
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn test_hover_buffers_one_chunk() {
        let (prefetcher, id) = setup(MockHttpClient::partial_content());

        let outcome = prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;

        assert_eq!(
            outcome,
            PrefetchOutcome::Buffered(vec![ByteRange::new(0, 500_000)])
        );
        assert_eq!(prefetcher.tracker().query(&id), Some(LoadState::Ready));
        assert!(!prefetcher.is_in_flight(&id));
    }

    #[tokio::test]
    async fn test_click_buffers_consecutive_chunks() {
        let (prefetcher, id) = setup(MockHttpClient::partial_content());
        prefetcher
            .tracker()
            .set_video_profile(&id, VideoProfile::new(60.0, 6_000_000))
            .unwrap();

        let outcome = prefetcher
            .prefetch_on_intent(&id, IntentKind::Click)
            .outcome()
            .await;

        assert_eq!(
            outcome,
            PrefetchOutcome::Buffered(vec![
                ByteRange::new(0, 500_000),
                ByteRange::new(500_001, 1_000_001),
            ])
        );
    }

    #[tokio::test]
    async fn test_repeat_intent_skips_recorded_ranges() {
        let client = MockHttpClient::partial_content();
        let (prefetcher, id) = setup(client.clone());

        prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;
        let again = prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;

        assert_eq!(again, PrefetchOutcome::AlreadyBuffered);
        assert_eq!(client.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_non_partial_response_is_a_miss() {
        let client = MockHttpClient::new(Ok(HttpResponse::new(200, vec![0; 32])));
        let (prefetcher, id) = setup(client);

        let outcome = prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;

        assert!(matches!(
            outcome,
            PrefetchOutcome::Missed(PrefetchMiss::UnexpectedStatus { status: 200, .. })
        ));
        let asset = prefetcher.tracker().get(&id).unwrap();
        assert!(asset.buffered_ranges.is_empty());
        assert_eq!(asset.load_state, LoadState::Requested);
        assert_eq!(prefetcher.stats().snapshot().missed, 1);
    }

    #[tokio::test]
    async fn test_network_error_is_swallowed() {
        let client = MockHttpClient::new(Err(HttpError::Connect("refused".into())));
        let (prefetcher, id) = setup(client);

        let outcome = prefetcher
            .prefetch_on_intent(&id, IntentKind::Click)
            .outcome()
            .await;

        assert!(matches!(
            outcome,
            PrefetchOutcome::Missed(PrefetchMiss::Network(HttpError::Connect(_)))
        ));
        assert_ne!(prefetcher.tracker().query(&id), Some(LoadState::Failed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_intent_supersedes_first() {
        let client = MockHttpClient::partial_content().with_delay(Duration::from_millis(50));
        let (prefetcher, id) = setup(client.clone());
        let tracker = Arc::clone(prefetcher.tracker());
        tracker
            .set_video_profile(&id, VideoProfile::new(100.0, 10_000_000))
            .unwrap();

        let first = prefetcher.prefetch_on_intent(&id, IntentKind::Hover);
        tokio::time::sleep(Duration::from_millis(10)).await;

        tracker.set_playhead(&id, 50.0).unwrap();
        let second = prefetcher.prefetch_on_intent(&id, IntentKind::Hover);
        assert_eq!(prefetcher.in_flight_count(), 1);

        assert_eq!(first.outcome().await, PrefetchOutcome::Superseded);
        assert_eq!(
            second.outcome().await,
            PrefetchOutcome::Buffered(vec![ByteRange::new(5_000_000, 5_500_000)])
        );

        // Both requests went out, only the second landed.
        assert_eq!(client.recorded().len(), 2);
        let asset = tracker.get(&id).unwrap();
        assert_eq!(asset.buffered_ranges.len(), 1);
        assert!(asset
            .buffered_ranges
            .contains(&ByteRange::new(5_000_000, 5_500_000)));
        assert_eq!(prefetcher.stats().snapshot().superseded, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_in_flight() {
        let client = MockHttpClient::partial_content().with_delay(Duration::from_millis(50));
        let (prefetcher, id) = setup(client);

        let ticket = prefetcher.prefetch_on_intent(&id, IntentKind::Click);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(prefetcher.cancel(&id));
        assert!(!prefetcher.cancel(&id));

        assert_eq!(ticket.outcome().await, PrefetchOutcome::Superseded);
        assert!(prefetcher.tracker().get(&id).unwrap().buffered_ranges.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_and_failed_assets_skipped() {
        let client = MockHttpClient::partial_content();
        let (prefetcher, id) = setup(client.clone());

        let unknown = prefetcher
            .prefetch_on_intent(&AssetId::new("nope"), IntentKind::Click)
            .outcome()
            .await;
        assert_eq!(unknown, PrefetchOutcome::Skipped);

        prefetcher.tracker().mark_failed(&id).unwrap();
        let failed = prefetcher
            .prefetch_on_intent(&id, IntentKind::Click)
            .outcome()
            .await;
        assert_eq!(failed, PrefetchOutcome::Skipped);
        assert!(client.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_image_prefetch_decodes() {
        let client = MockHttpClient::new(Ok(HttpResponse::new(200, png_bytes())));
        let tracker = Arc::new(AssetLoadTracker::default());
        let id = AssetId::from_index(0);
        tracker.register(id.clone(), MediaKind::Image, "https://cdn.example/0.png");
        let prefetcher = SpeculativePrefetcher::new(Arc::new(client.clone()), tracker);

        let outcome = prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;

        assert_eq!(outcome, PrefetchOutcome::ImageLoaded);
        assert_eq!(prefetcher.tracker().query(&id), Some(LoadState::Ready));
        assert_eq!(
            client.recorded(),
            vec![RecordedRequest::Get("https://cdn.example/0.png".to_string())]
        );
    }

    #[tokio::test]
    async fn test_loaded_image_not_fetched_again() {
        let client = MockHttpClient::new(Ok(HttpResponse::new(200, png_bytes())));
        let tracker = Arc::new(AssetLoadTracker::default());
        let id = AssetId::from_index(0);
        tracker.register(id.clone(), MediaKind::Image, "https://cdn.example/0.png");
        let prefetcher = SpeculativePrefetcher::new(Arc::new(client.clone()), tracker);

        let first = prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;
        let second = prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;
        let click = prefetcher
            .prefetch_on_intent(&id, IntentKind::Click)
            .outcome()
            .await;

        assert_eq!(first, PrefetchOutcome::ImageLoaded);
        assert_eq!(second, PrefetchOutcome::AlreadyBuffered);
        assert_eq!(click, PrefetchOutcome::AlreadyBuffered);
        assert_eq!(client.recorded().len(), 1);
        assert!(!prefetcher.is_in_flight(&id));
    }

    #[tokio::test]
    async fn test_broken_image_still_ready() {
        let client = MockHttpClient::new(Ok(HttpResponse::new(200, b"not an image".to_vec())));
        let tracker = Arc::new(AssetLoadTracker::default());
        let id = AssetId::from_index(1);
        tracker.register(id.clone(), MediaKind::Image, "https://cdn.example/1.jpg");
        let prefetcher = SpeculativePrefetcher::new(Arc::new(client), tracker);

        let outcome = prefetcher
            .prefetch_on_intent(&id, IntentKind::Hover)
            .outcome()
            .await;

        assert_eq!(outcome, PrefetchOutcome::ImageLoaded);
        assert_eq!(prefetcher.tracker().query(&id), Some(LoadState::Ready));
    }

    #[tokio::test]
    async fn test_prefetch_ahead_when_low() {
        let (prefetcher, id) = setup(MockHttpClient::partial_content());
        let tracker = Arc::clone(prefetcher.tracker());
        tracker
            .set_video_profile(&id, VideoProfile::new(100.0, 10_000_000))
            .unwrap();
        tracker.set_playhead(&id, 10.0).unwrap();

        let outcome = prefetcher.prefetch_ahead(&id).unwrap().outcome().await;
        assert_eq!(
            outcome,
            PrefetchOutcome::Buffered(vec![ByteRange::new(3_000_000, 3_500_000)])
        );
    }

    #[tokio::test]
    async fn test_prefetch_ahead_not_needed() {
        let (prefetcher, id) = setup(MockHttpClient::partial_content());
        let tracker = Arc::clone(prefetcher.tracker());
        tracker
            .set_video_profile(&id, VideoProfile::new(100.0, 10_000_000))
            .unwrap();
        tracker
            .record_buffered_range(&id, ByteRange::new(0, 2_000_000))
            .unwrap();

        // 20 s buffered from the start
        assert!(prefetcher.prefetch_ahead(&id).is_none());

        let (no_duration, other) = setup(MockHttpClient::partial_content());
        assert!(no_duration.prefetch_ahead(&other).is_none());
    }
}
