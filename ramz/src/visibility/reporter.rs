//! Platform seam for element visibility.

use std::fmt;
use tokio::sync::mpsc::UnboundedReceiver;

/// Share of an element that must be visible before it counts as entered.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Distance around the viewport inside which elements already count as
/// visible, so loading starts just before they scroll on screen.
pub const DEFAULT_ROOT_MARGIN_PX: f64 = 100.0;

/// Identifies an observable region on screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Observation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Visible ratio in `0.0..=1.0` that counts as entered.
    pub threshold: f64,
    /// Margin added on every side of the viewport.
    pub root_margin_px: f64,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
        }
    }
}

impl ObserveOptions {
    /// Whether `ratio` satisfies the threshold.
    ///
    /// A zero threshold means any overlap at all.
    pub fn is_met_by(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

/// One visibility report for an element.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    /// Visible share of the element, `0.0..=1.0`.
    pub ratio: f64,
    /// Whether the ratio meets the observer's threshold.
    pub is_intersecting: bool,
}

/// Reports when elements become visible.
///
/// One implementation exists per rendering platform. The asset tracker
/// never sees this trait; only [`VisibilityGate`](super::VisibilityGate)
/// does.
pub trait RegionVisibilityReporter: Send + Sync {
    /// Starts observing `element`.
    ///
    /// Returns `None` when the platform cannot observe visibility. Callers
    /// then treat the element as visible immediately.
    fn observe(
        &self,
        element: &ElementId,
        options: ObserveOptions,
    ) -> Option<UnboundedReceiver<IntersectionEntry>>;

    /// Stops observing `element`. The default does nothing; dropping the
    /// receiver is enough for reporters that prune closed channels.
    fn unobserve(&self, _element: &ElementId) {}
}

/// Reporter for platforms without a visibility API.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableReporter;

impl RegionVisibilityReporter for UnavailableReporter {
    fn observe(
        &self,
        _element: &ElementId,
        _options: ObserveOptions,
    ) -> Option<UnboundedReceiver<IntersectionEntry>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ObserveOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin_px, 100.0);
    }

    #[test]
    fn test_threshold_check() {
        let options = ObserveOptions::default();
        assert!(!options.is_met_by(0.05));
        assert!(options.is_met_by(0.1));

        let any = ObserveOptions {
            threshold: 0.0,
            ..ObserveOptions::default()
        };
        assert!(!any.is_met_by(0.0));
        assert!(any.is_met_by(0.001));
    }

    #[test]
    fn test_unavailable_reporter() {
        assert!(UnavailableReporter
            .observe(&ElementId::new("x"), ObserveOptions::default())
            .is_none());
    }
}
