//! Scroll-triggered reveal of page regions.
//!
//! Every region a page wants to fade in is registered with the page's
//! [`RevealController`] and starts out [`RevealState::Hidden`]. Visibility
//! measurements arrive as [`VisibilityEvent`]s from whatever observes the
//! viewport; they are queued by [`RevealController::notify`] and applied by
//! [`RevealController::dispatch`] on the page's event loop.
//!
//! # State machine
//!
//! ```text
//! Hidden ──(visible ratio ≥ threshold)──▶ Visible   (terminal)
//! ```
//!
//! A target is promoted at most once. After promotion it is no longer
//! observed, so later events for it are dropped. Targets that never cross the
//! threshold stay observed until released.
//!
//! # Cancellation
//!
//! [`RevealController::release`] is idempotent and discards events already
//! queued for the handle, so no reveal callback fires for a released region.
//! Handles are never reused, which keeps a stale event from reaching a newer
//! registration.
//!
//! # Scoped mounting
//!
//! [`RevealController::mount`] returns a [`RevealScope`] guard. Dropping the
//! guard releases every outstanding registration, on every exit path of the
//! code that mounted the page.
//!
//! No ordering is promised between different targets that cross the
//! threshold in the same dispatch.

use std::collections::{BTreeMap, VecDeque};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// Default fraction of a region that must be on screen before it is revealed.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default per-card delay step for staggered grid reveals.
pub const DEFAULT_STAGGER_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

/// A visibility measurement for one registered region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub handle: RevealHandle,
    /// Fraction of the region inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
}

impl VisibilityEvent {
    pub fn new(handle: RevealHandle, ratio: f64) -> Self {
        Self { handle, ratio }
    }
}

/// Page-owned registry of revealable regions.
///
/// `R` is whatever the page uses to identify a region (a section id, a DOM
/// node handle, ...).
#[derive(Debug)]
pub struct RevealController<R> {
    threshold: f64,
    next_handle: u64,
    observed: BTreeMap<RevealHandle, R>,
    revealed: BTreeMap<RevealHandle, R>,
    queue: VecDeque<VisibilityEvent>,
}

impl<R> Default for RevealController<R> {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl<R> RevealController<R> {
    /// A zero or negative threshold means "any part visible"; values above
    /// one are clamped to one. A non-finite threshold falls back to the default.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(f64::MIN_POSITIVE, 1.0)
        } else {
            tracing::warn!(threshold, "non-finite reveal threshold, using default");
            DEFAULT_THRESHOLD
        };
        Self {
            threshold,
            next_handle: 0,
            observed: BTreeMap::new(),
            revealed: BTreeMap::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start observing `region`. It is hidden until its first crossing.
    pub fn register(&mut self, region: R) -> RevealHandle {
        let handle = RevealHandle(self.next_handle);
        self.next_handle += 1;
        self.observed.insert(handle, region);
        handle
    }

    /// Stop tracking `handle` and drop any queued events for it.
    ///
    /// Returns `false` if the handle was already released.
    pub fn release(&mut self, handle: RevealHandle) -> bool {
        self.queue.retain(|e| e.handle != handle);
        let was_observed = self.observed.remove(&handle).is_some();
        let was_revealed = self.revealed.remove(&handle).is_some();
        was_observed || was_revealed
    }

    /// Release every registration and discard the pending queue.
    pub fn release_all(&mut self) -> usize {
        let count = self.observed.len() + self.revealed.len();
        self.observed.clear();
        self.revealed.clear();
        self.queue.clear();
        count
    }

    /// `None` once the handle has been released.
    pub fn state(&self, handle: RevealHandle) -> Option<RevealState> {
        if self.observed.contains_key(&handle) {
            Some(RevealState::Hidden)
        } else if self.revealed.contains_key(&handle) {
            Some(RevealState::Visible)
        } else {
            None
        }
    }

    pub fn region(&self, handle: RevealHandle) -> Option<&R> {
        self.observed
            .get(&handle)
            .or_else(|| self.revealed.get(&handle))
    }

    /// Whether `handle` is still waiting for its first crossing.
    pub fn is_observed(&self, handle: RevealHandle) -> bool {
        self.observed.contains_key(&handle)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue a visibility measurement for the next dispatch.
    pub fn notify(&mut self, event: VisibilityEvent) {
        self.queue.push_back(event);
    }

    /// Apply queued events, calling `on_reveal` once per promoted region.
    ///
    /// Returns the number of promotions.
    pub fn dispatch<F>(&mut self, mut on_reveal: F) -> usize
    where
        F: FnMut(RevealHandle, &R),
    {
        let mut promoted = 0;
        while let Some(event) = self.queue.pop_front() {
            if !event.ratio.is_finite() || event.ratio < self.threshold {
                continue;
            }
            let Some(region) = self.observed.remove(&event.handle) else {
                continue;
            };
            on_reveal(event.handle, &region);
            self.revealed.insert(event.handle, region);
            promoted += 1;
            tracing::debug!(handle = event.handle.0, ratio = event.ratio, "region revealed");
        }
        promoted
    }

    /// Borrow the controller for one mounted page; dropping the guard
    /// releases everything registered.
    pub fn mount(&mut self) -> RevealScope<'_, R> {
        RevealScope { controller: self }
    }
}

/// Guard returned by [`RevealController::mount`].
pub struct RevealScope<'c, R> {
    controller: &'c mut RevealController<R>,
}

impl<R> Deref for RevealScope<'_, R> {
    type Target = RevealController<R>;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl<R> DerefMut for RevealScope<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}

impl<R> Drop for RevealScope<'_, R> {
    fn drop(&mut self) {
        let released = self.controller.release_all();
        tracing::debug!(released, "page unmounted, reveal targets released");
    }
}

/// Transition delay for the card at `index` in a grid, capped so that cards
/// loaded by "load more" don't wait longer than the last card of a page.
pub fn stagger_delay(index: usize, page_size: usize, step: Duration) -> Duration {
    let slot = index.min(page_size.saturating_sub(1));
    step.saturating_mul(u32::try_from(slot).unwrap_or(u32::MAX))
}
