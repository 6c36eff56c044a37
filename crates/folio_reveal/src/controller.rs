//! Viewport reveal controller
//!
//! Owns the full pipeline for scroll-reveal animation: an
//! [`IntersectionObserver`] producing visible-fraction measurements, a
//! [`MotionDriver`] animating poses, and the per-element reveal state in
//! between. The frame loop calls `measure`, `process` and `tick` in that
//! order; measurements queue between `measure` and `process`, so delivery
//! is decoupled from the scroll event that caused it.

use folio_core::{IntersectionObserver, Measurement, Rect, Viewport, WatchId};
use folio_motion::{MotionDriver, MotionId, MotionPose, SpringConfig};
use slotmap::SecondaryMap;

/// Per-element reveal lifecycle
///
/// `Hidden` is the initial state. A measurement at or above the element's
/// threshold reveals it; one below hides it again only while the element
/// is repeatable. For a non-repeatable element `Revealed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealed,
}

impl RevealPhase {
    /// Next phase after a measurement
    pub fn next(self, intersecting: bool, repeatable: bool) -> Self {
        match (self, intersecting) {
            (Self::Hidden, true) => Self::Revealed,
            (Self::Revealed, false) if repeatable => Self::Hidden,
            (phase, _) => phase,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Registration parameters for a revealable element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible to reveal
    pub threshold: f32,
    /// Whether the element hides again when scrolled away
    pub repeatable: bool,
    /// Whether the element slides in from the right instead of the left
    pub reverse: bool,
}

impl RevealOptions {
    /// Repeatable, left-entering element at `threshold`
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            repeatable: true,
            reverse: false,
        }
    }

    /// Reveal once and stay
    pub fn once(mut self) -> Self {
        self.repeatable = false;
        self
    }

    /// Enter from the right
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// Handle to a registered element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealHandle(WatchId);

struct RevealElement {
    motion: MotionId,
    options: RevealOptions,
    phase: RevealPhase,
    last_fraction: f32,
}

impl RevealElement {
    fn pose_for(&self, phase: RevealPhase) -> MotionPose {
        match phase {
            RevealPhase::Hidden => MotionPose::hidden(self.options.reverse),
            RevealPhase::Revealed => MotionPose::revealed(),
        }
    }
}

/// Drives reveal state and motion for a dynamic set of elements
pub struct RevealController {
    observer: IntersectionObserver,
    driver: MotionDriver,
    elements: SecondaryMap<WatchId, RevealElement>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::with_observer(IntersectionObserver::new())
    }

    /// Controller for hosts without intersection measurement. Every element
    /// measures as fully visible, so content reveals rather than staying
    /// permanently hidden.
    pub fn new_unsupported() -> Self {
        Self::with_observer(IntersectionObserver::new_unsupported())
    }

    fn with_observer(observer: IntersectionObserver) -> Self {
        Self {
            observer,
            driver: MotionDriver::with_config(SpringConfig::reveal()),
            elements: SecondaryMap::new(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.observer.is_supported()
    }

    /// Begin observing `rect`. Never blocks: the first measurement arrives
    /// with the next measure pass, and an element already past its
    /// threshold reveals on that first delivery.
    pub fn register(&mut self, rect: Rect, options: RevealOptions) -> RevealHandle {
        let watch = self.observer.observe(rect);
        let motion = self.driver.insert(MotionPose::hidden(options.reverse));
        self.elements.insert(
            watch,
            RevealElement {
                motion,
                options,
                phase: RevealPhase::Hidden,
                last_fraction: 0.0,
            },
        );
        tracing::debug!(?watch, ?options, "registered revealable element");
        RevealHandle(watch)
    }

    /// Stop observation, drop queued measurements and abandon any in-flight
    /// animation. Safe to call repeatedly; later calls are no-ops.
    pub fn unregister(&mut self, handle: RevealHandle) {
        if let Some(element) = self.elements.remove(handle.0) {
            self.observer.unobserve(handle.0);
            self.driver.remove(element.motion);
            tracing::debug!(watch = ?handle.0, "unregistered revealable element");
        }
    }

    /// Update an element's rect after layout moved it. Returns false for a
    /// stale handle.
    pub fn set_rect(&mut self, handle: RevealHandle, rect: Rect) -> bool {
        self.observer.set_rect(handle.0, rect)
    }

    pub fn is_registered(&self, handle: RevealHandle) -> bool {
        self.elements.contains_key(handle.0)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Take one measurement of every element against `viewport` and queue
    /// the reports. Returns the number queued.
    pub fn measure(&mut self, viewport: &Viewport) -> usize {
        self.observer.measure(viewport)
    }

    /// Deliver every queued measurement and apply reveal transitions.
    /// Returns how many elements changed phase.
    pub fn process(&mut self) -> usize {
        let measurements: Vec<Measurement> = self.observer.drain().collect();
        let mut transitions = 0;
        for measurement in measurements {
            if self.apply(measurement) {
                transitions += 1;
            }
        }
        transitions
    }

    /// Apply one measurement. Reports for unregistered elements are
    /// dropped. Returns true when the element changed phase.
    fn apply(&mut self, measurement: Measurement) -> bool {
        let Some(element) = self.elements.get_mut(measurement.target) else {
            return false;
        };

        element.last_fraction = measurement.fraction;
        let intersecting = measurement.fraction >= element.options.threshold;
        let next = element
            .phase
            .next(intersecting, element.options.repeatable);

        if next == element.phase {
            return false;
        }

        element.phase = next;
        let target = element.pose_for(next);
        self.driver.retarget(element.motion, target);
        tracing::debug!(
            watch = ?measurement.target,
            fraction = measurement.fraction,
            ?next,
            "reveal transition"
        );
        true
    }

    /// Advance every element's animation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.driver.tick(dt);
    }

    /// True while any element is still animating toward its pose
    pub fn has_active_motion(&self) -> bool {
        self.driver.has_active_motion()
    }

    pub fn phase(&self, handle: RevealHandle) -> Option<RevealPhase> {
        self.elements.get(handle.0).map(|e| e.phase)
    }

    /// Whether the element is currently revealed; `None` for a stale handle
    pub fn is_revealed(&self, handle: RevealHandle) -> Option<bool> {
        self.phase(handle).map(RevealPhase::is_revealed)
    }

    /// Latest delivered visible fraction
    pub fn fraction(&self, handle: RevealHandle) -> Option<f32> {
        self.elements.get(handle.0).map(|e| e.last_fraction)
    }

    /// Current interpolated pose
    pub fn pose(&self, handle: RevealHandle) -> Option<MotionPose> {
        let element = self.elements.get(handle.0)?;
        self.driver.pose(element.motion)
    }

    /// Pose the element is animating toward
    pub fn target_pose(&self, handle: RevealHandle) -> Option<MotionPose> {
        let element = self.elements.get(handle.0)?;
        self.driver.target(element.motion)
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}
