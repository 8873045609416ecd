//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use super::keys::path_to_display;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let api_key = config.management.api_key.as_deref().unwrap_or("");

    format!(
        r#"[site]
; Public URL of the site, used for canonical links
base_url = {}
; Default language for first-time visitors: ar (right-to-left) or en
language = {}

[management]
; Management system that receives contact form leads
; Leads are posted to <api_url>/api/clients/submit
api_url = {}
; API key sent in the x-api-key header
; Leave empty to use the public placeholder key (development only)
; Can also be set with the MANAGEMENT_API_KEY environment variable
api_key = {}

[http]
; Timeout for outbound requests in seconds (default: 30)
timeout_secs = {}

[prefetch]
; Size of one speculative range request in bytes (default: 500000)
chunk_bytes = {}
; Chunks fetched when the pointer hovers or a finger touches a video (default: 1)
hover_chunks = {}
; Chunks fetched on click (default: 2)
click_chunks = {}
; Buffered seconds below which a playing video tops up (default: 15)
low_water_secs = {}
; How far past the playhead a top-up aims, in seconds (default: 20)
lookahead_secs = {}

[readiness]
; Seconds of video buffered ahead of the playhead before it counts as ready (default: 2)
video_ready_secs = {}
; Bitrate assumed when a video's size or duration is unknown (default: 250000)
assumed_bytes_per_sec = {}

[visibility]
; Visible share of an element that starts loading it (default: 0.1)
threshold = {}
; Margin around the viewport in pixels, so loading starts just before
; an element scrolls into view (default: 100)
root_margin_px = {}

[logging]
; Log file path (default: ~/.ramz/logs/ramz.log)
file = {}
"#,
        config.site.base_url,
        config.site.language,
        config.management.api_url,
        api_key,
        config.http.timeout_secs,
        config.prefetch.chunk_bytes,
        config.prefetch.hover_chunks,
        config.prefetch.click_chunks,
        config.prefetch.low_water_secs,
        config.prefetch.lookahead_secs,
        config.readiness.video_ready_secs,
        config.readiness.assumed_bytes_per_sec,
        config.visibility.threshold,
        config.visibility.root_margin_px,
        path_to_display(&config.logging.file),
    )
}
