//! Single speculative prefetch command.
//!
//! Registers one asset, fires one intent at it and reports where the asset
//! ended up. Useful for checking that a CDN honours range requests.

use clap::{Args, ValueEnum};
use ramz::asset::{AssetId, MediaKind, VideoProfile};
use ramz::prefetch::{IntentKind, PrefetchOutcome, SpeculativePrefetcher};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Media kind selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum KindArg {
    /// Fetch the whole file and decode it
    Image,
    /// Fetch byte ranges from the playhead
    Video,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Image => MediaKind::Image,
            KindArg::Video => MediaKind::Video,
        }
    }
}

#[derive(Debug, Args)]
pub struct PrefetchArgs {
    /// URL of the media file
    pub url: String,

    /// Kind of media
    #[arg(long, value_enum, default_value = "video")]
    pub kind: KindArg,

    /// User intent to simulate: hover, touchstart or click
    #[arg(long, default_value = "hover")]
    pub intent: IntentKind,

    /// Video duration in seconds, if known
    #[arg(long)]
    pub duration: Option<f64>,

    /// Video size in bytes, if known
    #[arg(long)]
    pub size: Option<u64>,

    /// Playhead position in seconds
    #[arg(long, default_value = "0")]
    pub playhead: f64,
}

/// Run one prefetch and print the outcome.
pub async fn run(args: PrefetchArgs) -> Result<(), CliError> {
    if args.playhead < 0.0 {
        return Err(CliError::InvalidArgument(
            "--playhead must not be negative".to_string(),
        ));
    }

    let runner = CliRunner::new()?;
    let tracker = runner.tracker();
    let prefetcher = SpeculativePrefetcher::with_config(
        runner.http_client()?,
        tracker.clone(),
        runner.config().prefetch_config(),
    );

    let id = AssetId::from_url(&args.url);
    tracker.register(id.clone(), args.kind.into(), args.url.clone());
    if args.kind == KindArg::Video {
        let profile = VideoProfile {
            duration_secs: args.duration,
            size_bytes: args.size,
        };
        // Registered just above
        let _ = tracker.set_video_profile(&id, profile);
        let _ = tracker.set_playhead(&id, args.playhead);
    }

    println!("Prefetching {} ({}, {})", args.url, args.kind.name(), args.intent);
    let outcome = prefetcher.prefetch_on_intent(&id, args.intent).outcome().await;
    println!("  Outcome: {}", describe(&outcome));

    if let Some(asset) = tracker.get(&id) {
        println!("  State:   {}", asset.load_state);
        for range in &asset.buffered_ranges {
            println!("  Range:   {} ({} bytes)", range, range.len());
        }
    }

    Ok(())
}

impl KindArg {
    fn name(self) -> &'static str {
        match self {
            KindArg::Image => "image",
            KindArg::Video => "video",
        }
    }
}

fn describe(outcome: &PrefetchOutcome) -> String {
    match outcome {
        PrefetchOutcome::Buffered(ranges) => format!("buffered {} range(s)", ranges.len()),
        PrefetchOutcome::AlreadyBuffered => "already buffered".to_string(),
        PrefetchOutcome::ImageLoaded => "image loaded".to_string(),
        PrefetchOutcome::Superseded => "superseded".to_string(),
        PrefetchOutcome::Missed(miss) => format!("missed: {}", miss),
        PrefetchOutcome::Skipped => "skipped".to_string(),
    }
}
