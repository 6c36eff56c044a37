//! Folio Theme System
//!
//! Light/dark mode with a persisted user preference and a document-root
//! class list for styling hooks.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Modes**: [`ThemeMode::Light`] and [`ThemeMode::Dark`]
//! - **Persistence**: a pluggable [`PreferenceStore`] under the `"theme"` key
//! - **Document classes**: a `light`/`dark` class kept on the document root
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{MemoryStore, ThemeMode, ThemePreference};
//!
//! let mut theme = ThemePreference::new(MemoryStore::new());
//!
//! // Resolve the saved choice at startup. Missing or unreadable
//! // storage falls back to light mode.
//! assert_eq!(theme.initialize(), ThemeMode::Light);
//!
//! // The toggle persists before it returns.
//! assert_eq!(theme.toggle(), ThemeMode::Dark);
//! assert!(theme.document().contains("dark"));
//! ```
//!
//! # Degraded storage
//!
//! Storage can be absent, denied or corrupted. Loading treats all of those
//! as "no saved preference" and resolves to light mode; persisting failures
//! are logged and swallowed so the in-session toggle keeps working.

pub mod document;
pub mod mode;
pub mod preference;
pub mod store;

// Re-export commonly used types
pub use document::DocumentClass;
pub use mode::ThemeMode;
pub use preference::{ThemePreference, STORAGE_KEY};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
