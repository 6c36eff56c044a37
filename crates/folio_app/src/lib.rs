//! Folio Application Runtime
//!
//! Wires content, theme and scroll reveal into a single [`Page`] driven by
//! a cooperative event loop: the host queues [`PageEvent`]s, the page
//! applies them and advances its animations once per frame.
//!
//! # Example
//!
//! ```
//! use folio_app::prelude::*;
//!
//! let mut page = Page::new(Portfolio::sample());
//!
//! page.push(PageEvent::JumpTo(Anchor::Projects));
//! page.frame(1.0 / 60.0);
//!
//! assert_eq!(page.is_revealed(1), Some(true));
//! ```

mod error;
mod events;
mod headless;
mod page;

pub use error::{PageError, Result};
pub use events::PageEvent;
pub use headless::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
pub use page::{Page, PageConfig};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::error::{PageError, Result};
    pub use crate::events::PageEvent;
    pub use crate::headless::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
    pub use crate::page::{Page, PageConfig};

    // Content and theme types the page surface speaks
    pub use folio_content::{Anchor, Portfolio};
    pub use folio_motion::MotionPose;
    pub use folio_theme::{FileStore, MemoryStore, ThemeMode};
}
