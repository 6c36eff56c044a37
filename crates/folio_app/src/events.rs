//! Page events
//!
//! Everything the host environment can do to the page. Events queue on the
//! page and are applied at the start of the next frame, in arrival order.

use folio_content::Anchor;

/// One host interaction
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// The page scrolled to an absolute vertical offset
    Scrolled { top: f32 },
    /// The host window changed size
    Resized { width: f32, height: f32 },
    /// The user pressed the theme toggle
    ThemeToggled,
    /// The user followed an in-page navigation link
    JumpTo(Anchor),
}
