//! Folio Core Runtime
//!
//! Foundational primitives for the Folio page runtime:
//!
//! - **Page geometry**: rectangles and the scrolling viewport
//! - **Intersection observation**: visible-fraction measurements delivered
//!   through a queue, decoupled from the scroll/resize event that caused them
//!
//! # Example
//!
//! ```rust
//! use folio_core::{IntersectionObserver, Rect, Viewport};
//!
//! let mut observer = IntersectionObserver::new();
//! let hero = observer.observe(Rect::new(0.0, 0.0, 1280.0, 720.0));
//!
//! let viewport = Viewport::new(1280.0, 720.0);
//! observer.measure(&viewport);
//!
//! let m = observer.poll().expect("one measurement per watch");
//! assert_eq!(m.target, hero);
//! assert_eq!(m.fraction, 1.0);
//! ```

pub mod geometry;
pub mod observe;

pub use geometry::{Rect, Viewport};
pub use observe::{IntersectionObserver, Measurement, WatchId};
