//! Visibility-gated lazy activation.
//!
//! Media below the fold should not load until the user scrolls near it.
//! A [`VisibilityGate`] arms a one-shot callback per element; the platform
//! side is abstracted behind [`RegionVisibilityReporter`] so the same gate
//! works with a browser observer, a native view hierarchy, or the headless
//! [`ScrollViewport`].
//!
//! Lazy loading is an optimization. When a platform cannot report
//! visibility, gates fire immediately and everything loads eagerly.

mod gate;
mod reporter;
mod viewport;

pub use gate::{GateHandle, VisibilityGate};
pub use reporter::{
    ElementId, IntersectionEntry, ObserveOptions, RegionVisibilityReporter, UnavailableReporter,
    DEFAULT_ROOT_MARGIN_PX, DEFAULT_THRESHOLD,
};
pub use viewport::{Region, ScrollViewport};
