//! Folio Content
//!
//! Static site content and the section plan derived from it.
//!
//! Content is an ordered, externally supplied record set: a [`Profile`],
//! a [`Skill`] grid, [`Project`] sections and an [`Experience`] timeline.
//! Nothing here is computed and duplicates are preserved as given. The
//! [`SectionPlan`] turns counts and indices into per-section reveal
//! parameters; everything else about a record is presentation data.
//!
//! ```rust
//! use folio_content::{Portfolio, SectionPlan};
//!
//! let portfolio = Portfolio::sample();
//! let plan = SectionPlan::for_portfolio(&portfolio);
//! assert_eq!(plan.len(), portfolio.projects.len() + portfolio.experience.len() + 2);
//! ```

pub mod anchor;
pub mod model;
pub mod plan;

pub use anchor::Anchor;
pub use model::{ContentError, Experience, Portfolio, Profile, Project, Skill};
pub use plan::{
    RevealSpec, SectionKind, SectionPlan, SectionSpec, EXPERIENCE_THRESHOLD, PROJECT_THRESHOLD,
};
