//! In-page navigation anchors
//!
//! A fixed identifier set used only for scroll-to targeting. There is no
//! routing; an anchor resolves to a scroll offset and nothing else.

use std::fmt;

/// Scroll-to target within the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The work-experience timeline
    Experience,
    /// Top of the project list
    Projects,
    /// The resume view (aliases the experience timeline)
    Resume,
    /// The contact form
    Contact,
    /// A single project section, by index in the content's project list
    Project(usize),
}

impl Anchor {
    /// Parse an anchor identifier as it appears in a fragment link
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "experience" => Some(Self::Experience),
            "projects" => Some(Self::Projects),
            "resume" => Some(Self::Resume),
            "contact" => Some(Self::Contact),
            _ => {
                let index = id.strip_prefix("project-")?;
                index.parse().ok().map(Self::Project)
            }
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Experience => f.write_str("experience"),
            Self::Projects => f.write_str("projects"),
            Self::Resume => f.write_str("resume"),
            Self::Contact => f.write_str("contact"),
            Self::Project(index) => write!(f, "project-{index}"),
        }
    }
}
