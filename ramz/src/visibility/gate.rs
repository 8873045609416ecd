//! One-shot visibility gates.

use super::reporter::{ElementId, ObserveOptions, RegionVisibilityReporter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

#[derive(Debug)]
struct GateState {
    armed: AtomicBool,
    fired: AtomicBool,
}

impl GateState {
    fn new() -> Self {
        Self {
            armed: AtomicBool::new(true),
            fired: AtomicBool::new(false),
        }
    }

    /// Claims the single firing. Only one caller ever gets `true`.
    fn try_fire(&self) -> bool {
        let won = self
            .armed
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            self.fired.store(true, Ordering::Release);
        }
        won
    }
}

/// Handle to an armed gate.
///
/// Dropping the handle leaves the gate armed; call [`disarm`](Self::disarm)
/// when the element unmounts.
#[derive(Debug, Clone)]
pub struct GateHandle {
    element: ElementId,
    state: Arc<GateState>,
    token: CancellationToken,
}

impl GateHandle {
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Still waiting for the element to enter view.
    pub fn is_armed(&self) -> bool {
        self.state.armed.load(Ordering::Acquire)
    }

    pub fn has_fired(&self) -> bool {
        self.state.fired.load(Ordering::Acquire)
    }

    /// Stops observing. If the gate has not fired yet, it never will.
    pub fn disarm(&self) {
        if self.state.armed.swap(false, Ordering::AcqRel) {
            trace!(element = %self.element, "Gate disarmed");
        }
        self.token.cancel();
    }
}

/// Turns "element entered view" into a one-time callback.
///
/// The callback runs the first time the element's visible ratio meets the
/// threshold and never again, even if the element scrolls away and back.
/// When the reporter cannot observe, the callback runs at once.
pub struct VisibilityGate<R: RegionVisibilityReporter + ?Sized> {
    reporter: Arc<R>,
    options: ObserveOptions,
}

impl<R: RegionVisibilityReporter + ?Sized + 'static> VisibilityGate<R> {
    pub fn new(reporter: Arc<R>) -> Self {
        Self::with_options(reporter, ObserveOptions::default())
    }

    pub fn with_options(reporter: Arc<R>, options: ObserveOptions) -> Self {
        Self { reporter, options }
    }

    pub fn options(&self) -> &ObserveOptions {
        &self.options
    }

    /// Arms a gate for `element`.
    ///
    /// Must be called inside a Tokio runtime when the reporter can observe.
    pub fn observe<F>(&self, element: ElementId, on_enter: F) -> GateHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let state = Arc::new(GateState::new());
        let token = CancellationToken::new();
        let handle = GateHandle {
            element: element.clone(),
            state: Arc::clone(&state),
            token: token.clone(),
        };

        let Some(mut entries) = self.reporter.observe(&element, self.options) else {
            debug!(element = %element, "Visibility unavailable, loading eagerly");
            if state.try_fire() {
                on_enter();
            }
            return handle;
        };

        let reporter = Arc::clone(&self.reporter);
        tokio::spawn(async move {
            let entered = loop {
                let entry = tokio::select! {
                    biased;
                    _ = token.cancelled() => break false,
                    entry = entries.recv() => entry,
                };

                match entry {
                    Some(entry) if entry.is_intersecting => {
                        trace!(element = %element, ratio = entry.ratio, "Element entered view");
                        break true;
                    }
                    Some(_) => continue,
                    None => {
                        // The reporter went away; load rather than wait forever.
                        debug!(element = %element, "Visibility reporter closed, loading eagerly");
                        break true;
                    }
                }
            };

            reporter.unobserve(&element);
            if entered && state.try_fire() {
                debug!(element = %element, "Gate fired");
                on_enter();
            }
        });

        handle
    }
}
