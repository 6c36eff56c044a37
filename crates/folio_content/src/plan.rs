//! Section plan
//!
//! Walks the content and produces the ordered list of page sections with
//! their reveal parameters. Only the counts and indices of the content
//! matter here: project sections alternate their slide direction by index,
//! experience entries animate once and stay.

use crate::anchor::Anchor;
use crate::model::Portfolio;

/// Visible-fraction threshold for project sections
pub const PROJECT_THRESHOLD: f32 = 0.4;

/// Visible-fraction threshold for experience entries
pub const EXPERIENCE_THRESHOLD: f32 = 0.3;

/// What a section shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    /// Hero blurb and skill grid
    Hero,
    /// Project at this index in the content's project list
    Project(usize),
    /// Experience entry at this index in the timeline
    Experience(usize),
    /// Contact form
    Contact,
}

/// Reveal parameters for an animated section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    /// Fraction of the section that must be visible to reveal
    pub threshold: f32,
    /// Whether the section hides again when scrolled away
    pub repeatable: bool,
    /// Whether the section slides in from the right instead of the left
    pub reverse: bool,
}

/// One entry in page order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpec {
    pub kind: SectionKind,
    /// Reveal animation, or `None` for static sections
    pub reveal: Option<RevealSpec>,
}

impl SectionSpec {
    /// Anchor resolving to this section, if it has one
    pub fn anchor(&self) -> Option<Anchor> {
        match self.kind {
            SectionKind::Hero => None,
            SectionKind::Project(index) => Some(Anchor::Project(index)),
            SectionKind::Experience(_) => None,
            SectionKind::Contact => Some(Anchor::Contact),
        }
    }
}

/// Ordered sections for a portfolio
#[derive(Clone, Debug, Default)]
pub struct SectionPlan {
    sections: Vec<SectionSpec>,
}

impl SectionPlan {
    /// Lay out sections in page order: hero, projects, experience, contact.
    /// Odd-indexed projects reverse their slide direction.
    pub fn for_portfolio(portfolio: &Portfolio) -> Self {
        let mut sections =
            Vec::with_capacity(portfolio.projects.len() + portfolio.experience.len() + 2);

        sections.push(SectionSpec {
            kind: SectionKind::Hero,
            reveal: None,
        });

        for index in 0..portfolio.projects.len() {
            sections.push(SectionSpec {
                kind: SectionKind::Project(index),
                reveal: Some(RevealSpec {
                    threshold: PROJECT_THRESHOLD,
                    repeatable: true,
                    reverse: index % 2 != 0,
                }),
            });
        }

        for index in 0..portfolio.experience.len() {
            sections.push(SectionSpec {
                kind: SectionKind::Experience(index),
                reveal: Some(RevealSpec {
                    threshold: EXPERIENCE_THRESHOLD,
                    repeatable: false,
                    reverse: false,
                }),
            });
        }

        sections.push(SectionSpec {
            kind: SectionKind::Contact,
            reveal: None,
        });

        Self { sections }
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Position of the section `anchor` scrolls to. `projects`, `experience`
    /// and `resume` resolve to the first section of their region.
    pub fn position_of(&self, anchor: Anchor) -> Option<usize> {
        match anchor {
            Anchor::Projects => self
                .sections
                .iter()
                .position(|s| matches!(s.kind, SectionKind::Project(_))),
            Anchor::Experience | Anchor::Resume => self
                .sections
                .iter()
                .position(|s| matches!(s.kind, SectionKind::Experience(_))),
            Anchor::Contact => self
                .sections
                .iter()
                .position(|s| s.kind == SectionKind::Contact),
            Anchor::Project(index) => self
                .sections
                .iter()
                .position(|s| s.kind == SectionKind::Project(index)),
        }
    }
}
