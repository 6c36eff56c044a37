//! Section activity tracking
//!
//! A degenerate cousin of the reveal controller: among a fixed ordered set
//! of sections, at most one is "active" at a time, and the navigation
//! indicator lights up for it. Activity is recomputed from scratch every
//! evaluation pass; there is no memory of the previous pass.

use smallvec::SmallVec;

/// Tracks which one section currently occupies the viewport
///
/// One evaluation pass is the sequence of [`report`](Self::report) calls
/// between two [`commit`](Self::commit)s. Within a pass the last report at
/// or above the threshold wins. Callers delivering a batch of simultaneous
/// reports should feed them in declaration order, which resolves
/// simultaneous crossings to the later-declared section.
#[derive(Debug)]
pub struct SectionActiveTracker {
    threshold: f32,
    names: SmallVec<[String; 8]>,
    candidate: Option<usize>,
    active: Option<usize>,
}

impl SectionActiveTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            names: SmallVec::new(),
            candidate: None,
            active: None,
        }
    }

    /// Add a section to the fixed set. Declaration order is meaningful;
    /// sections cannot be removed.
    pub fn declare(&mut self, name: impl Into<String>) -> usize {
        self.names.push(name.into());
        self.names.len() - 1
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn section_count(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, section: usize) -> Option<&str> {
        self.names.get(section).map(String::as_str)
    }

    /// Feed one visible-fraction report. Reports below the threshold or
    /// for undeclared indices leave the pass candidate untouched.
    pub fn report(&mut self, section: usize, fraction: f32) {
        if section >= self.names.len() {
            tracing::debug!(section, "report for undeclared section dropped");
            return;
        }
        if fraction >= self.threshold {
            self.candidate = Some(section);
        }
    }

    /// Close the pass: the last above-threshold report becomes the active
    /// section, or none if nothing qualified.
    pub fn commit(&mut self) -> Option<usize> {
        self.active = self.candidate.take();
        self.active
    }

    /// Run a whole pass over `reports` in the order given
    pub fn run_pass(&mut self, reports: impl IntoIterator<Item = (usize, f32)>) -> Option<usize> {
        for (section, fraction) in reports {
            self.report(section, fraction);
        }
        self.commit()
    }

    /// Active section as of the last committed pass
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_name(&self) -> Option<&str> {
        self.name(self.active?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(names: &[&str]) -> SectionActiveTracker {
        let mut tracker = SectionActiveTracker::new(0.4);
        for name in names {
            tracker.declare(*name);
        }
        tracker
    }

    #[test]
    fn single_qualifying_section_becomes_active() {
        let mut tracker = tracker_with(&["a", "b", "c"]);

        tracker.report(1, 0.9);
        assert_eq!(tracker.commit(), Some(1));
        assert_eq!(tracker.active_name(), Some("b"));
    }

    #[test]
    fn last_qualifying_report_wins() {
        let mut tracker = tracker_with(&["a", "b", "c"]);

        tracker.report(2, 0.8);
        tracker.report(0, 0.6);
        assert_eq!(tracker.commit(), Some(0));
    }

    #[test]
    fn below_threshold_reports_do_not_steal_the_slot() {
        let mut tracker = tracker_with(&["a", "b"]);

        tracker.report(0, 0.6);
        tracker.report(1, 0.1);
        assert_eq!(tracker.commit(), Some(0));
    }

    #[test]
    fn batch_in_declaration_order_resolves_to_the_later_section() {
        let mut tracker = tracker_with(&["a", "b", "c"]);
        let active = tracker.run_pass([(0, 0.5), (1, 0.5), (2, 0.2)]);
        assert_eq!(active, Some(1));
    }

    #[test]
    fn empty_pass_clears_the_active_slot() {
        let mut tracker = tracker_with(&["a", "b"]);

        assert_eq!(tracker.run_pass([(0, 0.9)]), Some(0));
        assert_eq!(tracker.run_pass([(0, 0.1), (1, 0.0)]), None);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn activity_has_no_memory_across_passes() {
        let mut tracker = tracker_with(&["a", "b"]);

        tracker.run_pass([(1, 0.9)]);
        // A pass with no reports at all also clears.
        assert_eq!(tracker.run_pass([]), None);
    }

    #[test]
    fn undeclared_indices_are_dropped() {
        let mut tracker = tracker_with(&["a"]);

        tracker.report(5, 1.0);
        assert_eq!(tracker.commit(), None);
    }

    #[test]
    fn exact_threshold_qualifies() {
        let mut tracker = tracker_with(&["a"]);
        assert_eq!(tracker.run_pass([(0, 0.4)]), Some(0));
    }
}
