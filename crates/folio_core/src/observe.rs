//! Viewport intersection observation
//!
//! An [`IntersectionObserver`] watches a set of element rects and reports,
//! per element, the fraction of its area inside the viewport. Reports are
//! not handed out synchronously: `measure` computes fractions and queues
//! [`Measurement`]s, and the owner drains the queue at a later point in the
//! frame. Each watch handle therefore stands for a lazy, unbounded sequence
//! of measurements that ends when the element is unobserved.
//!
//! Ordering: the queue is FIFO, so measurements for one element arrive in
//! the order they were taken. Measurements for different elements may
//! interleave freely.

use std::collections::VecDeque;

use slotmap::{new_key_type, SlotMap};

use crate::geometry::{Rect, Viewport};

new_key_type! {
    /// Handle for a watched element
    pub struct WatchId;
}

/// One visible-fraction report for a watched element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub target: WatchId,
    /// Fraction of the element's area inside the viewport, `0.0..=1.0`
    pub fraction: f32,
    /// Measurement pass that produced this report
    pub pass: u64,
}

struct Watched {
    rect: Rect,
}

/// Watches element rects against the viewport and queues fraction reports
///
/// Construct with [`IntersectionObserver::new`] normally, or
/// [`IntersectionObserver::new_unsupported`] for hosts without intersection
/// measurement: an unsupported observer reports every watch as fully
/// visible, so content degrades to shown rather than permanently hidden.
pub struct IntersectionObserver {
    watched: SlotMap<WatchId, Watched>,
    pending: VecDeque<Measurement>,
    passes: u64,
    supported: bool,
}

impl IntersectionObserver {
    pub fn new() -> Self {
        Self {
            watched: SlotMap::with_key(),
            pending: VecDeque::new(),
            passes: 0,
            supported: true,
        }
    }

    /// Fail-open observer for hosts that cannot measure intersection
    pub fn new_unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Begin watching a rect. Does not measure; the first report arrives
    /// with the next `measure` pass, even if the rect already intersects.
    pub fn observe(&mut self, rect: Rect) -> WatchId {
        let id = self.watched.insert(Watched { rect });
        tracing::debug!(?id, ?rect, "observing element");
        id
    }

    /// Update a watched rect after layout moved it. Returns false for a
    /// stale handle.
    pub fn set_rect(&mut self, id: WatchId, rect: Rect) -> bool {
        match self.watched.get_mut(id) {
            Some(watched) => {
                watched.rect = rect;
                true
            }
            None => false,
        }
    }

    pub fn rect(&self, id: WatchId) -> Option<Rect> {
        self.watched.get(id).map(|w| w.rect)
    }

    pub fn contains(&self, id: WatchId) -> bool {
        self.watched.contains_key(id)
    }

    /// Stop watching and drop any queued, undelivered reports for the
    /// element. Safe to call repeatedly; a stale handle is a no-op.
    pub fn unobserve(&mut self, id: WatchId) {
        if self.watched.remove(id).is_some() {
            self.pending.retain(|m| m.target != id);
            tracing::debug!(?id, "unobserved element");
        }
    }

    pub fn watch_count(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Take one measurement of every watch and queue the reports.
    /// Returns the number of reports queued.
    pub fn measure(&mut self, viewport: &Viewport) -> usize {
        let pass = self.passes;
        self.passes += 1;

        let mut queued = 0;
        for (id, watched) in self.watched.iter() {
            let fraction = if self.supported {
                viewport.visible_fraction(&watched.rect)
            } else {
                1.0
            };
            self.pending.push_back(Measurement {
                target: id,
                fraction,
                pass,
            });
            queued += 1;
        }

        tracing::trace!(pass, queued, "measurement pass");
        queued
    }

    /// Deliver the oldest queued report, if any
    pub fn poll(&mut self) -> Option<Measurement> {
        self.pending.pop_front()
    }

    /// Deliver every queued report in order
    pub fn drain(&mut self) -> impl Iterator<Item = Measurement> + '_ {
        self.pending.drain(..)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl Default for IntersectionObserver {
    fn default() -> Self {
        Self::new()
    }
}
