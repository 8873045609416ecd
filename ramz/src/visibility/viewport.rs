//! Headless scrolling viewport.

use super::reporter::{ElementId, IntersectionEntry, ObserveOptions, RegionVisibilityReporter};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

/// Vertical placement of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Visible share of the region inside `[view_top, view_bottom]`.
    fn ratio_within(&self, view_top: f64, view_bottom: f64) -> f64 {
        if self.height == 0.0 {
            let inside = self.top >= view_top && self.top <= view_bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        let overlap = self.bottom().min(view_bottom) - self.top.max(view_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

struct Observer {
    element: ElementId,
    options: ObserveOptions,
    tx: UnboundedSender<IntersectionEntry>,
    intersecting: bool,
}

struct ViewportState {
    scroll_y: f64,
    height: f64,
    regions: HashMap<ElementId, Region>,
    observers: Vec<Observer>,
}

impl ViewportState {
    fn entry_for(&self, element: &ElementId, options: &ObserveOptions) -> IntersectionEntry {
        let ratio = self
            .regions
            .get(element)
            .map(|r| {
                r.ratio_within(
                    self.scroll_y - options.root_margin_px,
                    self.scroll_y + self.height + options.root_margin_px,
                )
            })
            .unwrap_or(0.0);

        IntersectionEntry {
            element: element.clone(),
            ratio,
            is_intersecting: options.is_met_by(ratio),
        }
    }

    /// Sends an entry to every observer whose intersecting flag flipped.
    fn notify(&mut self) {
        let mut observers = std::mem::take(&mut self.observers);
        observers.retain_mut(|observer| {
            let entry = self.entry_for(&observer.element, &observer.options);
            if entry.is_intersecting == observer.intersecting {
                return !observer.tx.is_closed();
            }
            observer.intersecting = entry.is_intersecting;
            trace!(element = %entry.element, ratio = entry.ratio, "Intersection changed");
            observer.tx.send(entry).is_ok()
        });
        self.observers = observers;
    }
}

/// A viewport driven by explicit scroll and resize calls.
///
/// Elements are placed with a [`Region`]; every observer gets an initial
/// entry and then one entry each time the element crosses its threshold.
/// Useful for server-side rendering, tests and the CLI.
pub struct ScrollViewport {
    state: Mutex<ViewportState>,
}

impl ScrollViewport {
    pub fn new(height: f64) -> Self {
        Self {
            state: Mutex::new(ViewportState {
                scroll_y: 0.0,
                height: height.max(0.0),
                regions: HashMap::new(),
                observers: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewportState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Places (or moves) an element.
    pub fn place(&self, element: impl Into<ElementId>, region: Region) {
        let mut state = self.lock();
        state.regions.insert(element.into(), region);
        state.notify();
    }

    /// Removes an element. Its observers see it as hidden.
    pub fn remove(&self, element: &ElementId) {
        let mut state = self.lock();
        state.regions.remove(element);
        state.notify();
    }

    pub fn scroll_to(&self, y: f64) {
        let mut state = self.lock();
        state.scroll_y = y;
        state.notify();
    }

    pub fn resize(&self, height: f64) {
        let mut state = self.lock();
        state.height = height.max(0.0);
        state.notify();
    }

    pub fn scroll_y(&self) -> f64 {
        self.lock().scroll_y
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        let mut state = self.lock();
        state.observers.retain(|o| !o.tx.is_closed());
        state.observers.len()
    }
}

impl RegionVisibilityReporter for ScrollViewport {
    fn observe(
        &self,
        element: &ElementId,
        options: ObserveOptions,
    ) -> Option<UnboundedReceiver<IntersectionEntry>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.lock();
        let initial = state.entry_for(element, &options);
        let intersecting = initial.is_intersecting;
        // Receiver is still in hand, cannot fail
        let _ = tx.send(initial);

        state.observers.push(Observer {
            element: element.clone(),
            options,
            tx,
            intersecting,
        });
        Some(rx)
    }

    fn unobserve(&self, element: &ElementId) {
        self.lock().observers.retain(|o| &o.element != element);
    }
}
