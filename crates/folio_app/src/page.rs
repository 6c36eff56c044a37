//! The page context
//!
//! [`Page`] is the top-level owner: content, section plan, theme
//! preference, reveal controller and the section activity tracker all live
//! here, and nothing reads ambient global state. Sections stack vertically,
//! one viewport tall each; the plan decides which of them animate.
//!
//! Host interactions arrive as queued [`PageEvent`]s and are applied at the
//! start of the next [`frame`](Page::frame), which then runs the reveal
//! pipeline: measure, deliver, tick, track.

use std::path::Path;

use folio_content::{Anchor, Portfolio, SectionKind, SectionPlan, PROJECT_THRESHOLD};
use folio_core::{Rect, Viewport};
use folio_motion::MotionPose;
use folio_reveal::{RevealController, RevealHandle, RevealOptions, SectionActiveTracker};
use folio_theme::{DocumentClass, MemoryStore, PreferenceStore, ThemeMode, ThemePreference};

use crate::error::{PageError, Result};
use crate::events::PageEvent;

/// Page construction parameters
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    /// Logical viewport width
    pub width: f32,
    /// Logical viewport height, also the height of every section
    pub height: f32,
    /// Whether the host can measure element visibility. Hosts without it
    /// get a page where every section reveals, never one stuck hidden.
    pub intersection_supported: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            intersection_supported: true,
        }
    }
}

/// The whole client page
pub struct Page {
    portfolio: Portfolio,
    plan: SectionPlan,
    theme: ThemePreference,
    reveal: RevealController,
    tracker: SectionActiveTracker,
    viewport: Viewport,
    /// Reveal handle per plan position, `None` for static sections
    handles: Vec<Option<RevealHandle>>,
    /// Plan positions of tracked project sections, in declaration order
    tracked: Vec<usize>,
    pending: Vec<PageEvent>,
}

impl Page {
    /// Page over `portfolio` with the default config and a session-only
    /// preference store
    pub fn new(portfolio: Portfolio) -> Self {
        Self::with_config(portfolio, PageConfig::default())
    }

    /// Page with an explicit config and a session-only preference store
    pub fn with_config(portfolio: Portfolio, config: PageConfig) -> Self {
        Self::with_store(portfolio, config, MemoryStore::new())
    }

    /// Page with a persistent preference store. The stored theme is read
    /// once here and its class applied before any interaction.
    pub fn with_store(
        portfolio: Portfolio,
        config: PageConfig,
        store: impl PreferenceStore + 'static,
    ) -> Self {
        let plan = SectionPlan::for_portfolio(&portfolio);
        let viewport = Viewport::new(config.width, config.height);

        let mut theme = ThemePreference::new(store);
        theme.initialize();

        let mut reveal = if config.intersection_supported {
            RevealController::new()
        } else {
            RevealController::new_unsupported()
        };
        let mut tracker = SectionActiveTracker::new(PROJECT_THRESHOLD);

        let mut handles = Vec::with_capacity(plan.len());
        let mut tracked = Vec::new();
        for (position, section) in plan.sections().iter().enumerate() {
            let handle = section.reveal.map(|spec| {
                reveal.register(
                    Self::rect_for(&viewport, position),
                    RevealOptions {
                        threshold: spec.threshold,
                        repeatable: spec.repeatable,
                        reverse: spec.reverse,
                    },
                )
            });
            handles.push(handle);

            if let SectionKind::Project(index) = section.kind {
                tracker.declare(Anchor::Project(index).to_string());
                tracked.push(position);
            }
        }

        tracing::debug!(
            sections = plan.len(),
            tracked = tracked.len(),
            mode = ?theme.mode(),
            "page constructed"
        );

        Self {
            portfolio,
            plan,
            theme,
            reveal,
            tracker,
            viewport,
            handles,
            tracked,
            pending: Vec::new(),
        }
    }

    /// Page from a TOML content file
    pub fn load(path: impl AsRef<Path>, config: PageConfig) -> Result<Self> {
        let portfolio = Portfolio::load(path)?;
        Ok(Self::with_config(portfolio, config))
    }

    fn rect_for(viewport: &Viewport, position: usize) -> Rect {
        Rect::new(
            0.0,
            position as f32 * viewport.height,
            viewport.width,
            viewport.height,
        )
    }

    /// Queue an event for the next frame
    pub fn push(&mut self, event: PageEvent) {
        self.pending.push(event);
    }

    /// Events waiting for the next frame
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Run one frame: apply queued events, then measure every section,
    /// deliver the queued measurements, advance animations by `dt` seconds
    /// and recompute the active section.
    pub fn frame(&mut self, dt: f32) {
        let events = std::mem::take(&mut self.pending);
        for event in events {
            self.apply(event);
        }

        self.reveal.measure(&self.viewport);
        self.reveal.process();
        self.reveal.tick(dt);
        self.update_tracker();
    }

    fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::Scrolled { top } => self.set_scroll(top),
            PageEvent::Resized { width, height } => self.resize(width, height),
            PageEvent::ThemeToggled => {
                self.theme.toggle();
            }
            PageEvent::JumpTo(anchor) => {
                if let Err(error) = self.scroll_to(anchor) {
                    tracing::warn!("Failed to jump to anchor: {}", error);
                }
            }
        }
    }

    /// One tracker pass over the latest delivered fractions, in section
    /// declaration order
    fn update_tracker(&mut self) {
        for slot in 0..self.tracked.len() {
            let position = self.tracked[slot];
            let Some(handle) = self.handles[position] else {
                continue;
            };
            if let Some(fraction) = self.reveal.fraction(handle) {
                self.tracker.report(slot, fraction);
            }
        }
        self.tracker.commit();
    }

    /// Scroll to an absolute vertical offset, clamped to the page
    pub fn set_scroll(&mut self, top: f32) {
        let top = top.clamp(0.0, self.max_scroll());
        self.viewport.set_scroll_y(top);
    }

    /// Resize the viewport. Sections are one viewport tall, so every
    /// section rect moves with the new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        self.set_scroll(self.viewport.scroll_y);
        for position in 0..self.handles.len() {
            if let Some(handle) = self.handles[position] {
                self.reveal
                    .set_rect(handle, Self::rect_for(&self.viewport, position));
            }
        }
    }

    /// Scroll so `anchor`'s section sits at the top of the viewport.
    /// Returns the offset scrolled to.
    pub fn scroll_to(&mut self, anchor: Anchor) -> Result<f32> {
        let position = self
            .plan
            .position_of(anchor)
            .ok_or(PageError::UnknownAnchor(anchor))?;
        let top = (position as f32 * self.viewport.height).min(self.max_scroll());
        self.viewport.set_scroll_y(top);
        tracing::debug!(%anchor, top, "scrolled to anchor");
        Ok(top)
    }

    /// Flip the theme, apply the document class and persist. Returns the
    /// new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn plan(&self) -> &SectionPlan {
        &self.plan
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_top(&self) -> f32 {
        self.viewport.scroll_y
    }

    /// Total page height in viewport units
    pub fn page_height(&self) -> f32 {
        self.plan.len() as f32 * self.viewport.height
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f32 {
        (self.page_height() - self.viewport.height).max(0.0)
    }

    pub fn mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Document root class set the theme applies to
    pub fn document(&self) -> &DocumentClass {
        self.theme.document()
    }

    pub fn section_count(&self) -> usize {
        self.plan.len()
    }

    /// Page-space rect of the section at `position`
    pub fn section_rect(&self, position: usize) -> Option<Rect> {
        (position < self.plan.len()).then(|| Self::rect_for(&self.viewport, position))
    }

    /// Reveal handle of the section at `position`, `None` for static
    /// sections
    pub fn section_handle(&self, position: usize) -> Option<RevealHandle> {
        self.handles.get(position).copied().flatten()
    }

    /// Whether the animated section at `position` is revealed
    pub fn is_revealed(&self, position: usize) -> Option<bool> {
        self.reveal.is_revealed(self.section_handle(position)?)
    }

    /// Latest delivered visible fraction for the section at `position`
    pub fn section_fraction(&self, position: usize) -> Option<f32> {
        self.reveal.fraction(self.section_handle(position)?)
    }

    /// Current interpolated pose of the section at `position`
    pub fn section_pose(&self, position: usize) -> Option<MotionPose> {
        self.reveal.pose(self.section_handle(position)?)
    }

    /// Poses for a project's two panels. The text panel carries the
    /// section pose; the image panel mirrors its horizontal offset.
    pub fn project_poses(&self, index: usize) -> Option<(MotionPose, MotionPose)> {
        let position = self.plan.position_of(Anchor::Project(index))?;
        let pose = self.section_pose(position)?;
        Some((pose, pose.mirrored()))
    }

    /// Project index lit by the navigation indicator, per the last frame
    pub fn active_project(&self) -> Option<usize> {
        self.tracker.active()
    }

    /// True while any section is still animating toward its pose
    pub fn has_active_motion(&self) -> bool {
        self.reveal.has_active_motion()
    }

    pub fn intersection_supported(&self) -> bool {
        self.reveal.is_supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::STORAGE_KEY;

    fn page() -> Page {
        Page::with_config(
            Portfolio::sample(),
            PageConfig {
                width: 1000.0,
                height: 1000.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn animated_sections_get_handles_static_ones_do_not() {
        let page = page();

        // hero + 4 projects + 3 experience entries + contact
        assert_eq!(page.section_count(), 9);
        assert!(page.section_handle(0).is_none());
        for position in 1..=7 {
            assert!(page.section_handle(position).is_some());
        }
        assert!(page.section_handle(8).is_none());
        assert!(page.section_handle(9).is_none());
    }

    #[test]
    fn stored_mode_is_applied_at_construction() {
        let store = MemoryStore::new().with_entry(STORAGE_KEY, "dark");
        let page = Page::with_store(Portfolio::sample(), PageConfig::default(), store);

        assert!(page.is_dark());
        assert!(page.document().contains("dark"));
    }

    #[test]
    fn events_queue_until_the_next_frame() {
        let mut page = page();

        page.push(PageEvent::Scrolled { top: 2000.0 });
        assert_eq!(page.pending_events(), 1);
        assert_eq!(page.scroll_top(), 0.0);

        page.frame(1.0 / 60.0);
        assert_eq!(page.pending_events(), 0);
        assert_eq!(page.scroll_top(), 2000.0);
    }

    #[test]
    fn scroll_clamps_to_page_bounds() {
        let mut page = page();

        // 9 sections of 1000 leave 8000 of scroll range.
        page.set_scroll(1.0e9);
        assert_eq!(page.scroll_top(), 8000.0);

        page.set_scroll(-50.0);
        assert_eq!(page.scroll_top(), 0.0);
    }

    #[test]
    fn resize_moves_section_rects_and_reclamps_scroll() {
        let mut page = page();
        page.set_scroll(8000.0);

        page.resize(800.0, 500.0);

        assert_eq!(page.section_rect(1), Some(Rect::new(0.0, 500.0, 800.0, 500.0)));
        assert_eq!(page.max_scroll(), 4000.0);
        assert_eq!(page.scroll_top(), 4000.0);
    }

    #[test]
    fn jump_to_unknown_anchor_is_swallowed() {
        let mut page = page();

        page.push(PageEvent::JumpTo(Anchor::Project(99)));
        page.frame(1.0 / 60.0);
        assert_eq!(page.scroll_top(), 0.0);
    }

    #[test]
    fn scroll_to_unknown_anchor_errors() {
        let mut page = page();

        let result = page.scroll_to(Anchor::Project(99));
        assert!(matches!(result, Err(PageError::UnknownAnchor(_))));
    }

    #[test]
    fn toggle_event_flips_mode_and_classes() {
        let mut page = page();
        assert_eq!(page.mode(), ThemeMode::Light);

        page.push(PageEvent::ThemeToggled);
        page.frame(1.0 / 60.0);

        assert_eq!(page.mode(), ThemeMode::Dark);
        assert!(page.document().contains("dark"));
        assert!(!page.document().contains("light"));
    }

    #[test]
    fn project_panels_start_mirrored() {
        let page = page();

        let (text, image) = page.project_poses(0).unwrap();
        assert_eq!(text.offset_x, -100.0);
        assert_eq!(image.offset_x, 100.0);

        // Odd projects enter from the other side.
        let (text, image) = page.project_poses(1).unwrap();
        assert_eq!(text.offset_x, 100.0);
        assert_eq!(image.offset_x, -100.0);
    }
}
