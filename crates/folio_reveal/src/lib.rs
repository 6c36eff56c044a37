//! Folio Reveal System
//!
//! Scroll-driven reveal animation: elements register with a viewport
//! threshold, measurements of their visible fraction arrive through a
//! queue, and each element's reveal state drives spring-animated pose
//! targets.
//!
//! # Overview
//!
//! - [`RevealController`]: register/unregister elements, feed viewport
//!   measurements, advance animations per frame
//! - [`RevealPhase`]: the two-state lifecycle per element, with a
//!   monotonic lock for non-repeatable elements
//! - [`SectionActiveTracker`]: the single "which section is on screen"
//!   slot behind a navigation indicator
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Rect, Viewport};
//! use folio_reveal::{RevealController, RevealOptions};
//!
//! let mut controller = RevealController::new();
//! let viewport = Viewport::new(1280.0, 720.0);
//!
//! // A full-screen section, second screenful down, revealing at 40%.
//! let section = controller.register(
//!     Rect::new(0.0, 720.0, 1280.0, 720.0),
//!     RevealOptions::new(0.4),
//! );
//!
//! // Nothing is visible yet.
//! controller.measure(&viewport);
//! controller.process();
//! assert_eq!(controller.is_revealed(section), Some(false));
//!
//! // Scroll half the section into view and it reveals.
//! let mut viewport = viewport;
//! viewport.set_scroll_y(360.0);
//! controller.measure(&viewport);
//! controller.process();
//! assert_eq!(controller.is_revealed(section), Some(true));
//! ```

pub mod controller;
pub mod tracker;

pub use controller::{RevealController, RevealHandle, RevealOptions, RevealPhase};
pub use tracker::SectionActiveTracker;
