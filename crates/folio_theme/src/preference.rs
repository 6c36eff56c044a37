//! Persisted theme preference
//!
//! Ties the pieces together: a [`PreferenceStore`] holding the saved choice,
//! a [`DocumentClass`] reflecting it, and the current [`ThemeMode`]. Loading
//! never fails: a missing, unreadable or corrupted store resolves to light
//! mode and the session continues with persistence degraded.

use crate::document::DocumentClass;
use crate::mode::ThemeMode;
use crate::store::PreferenceStore;

/// Store key holding the saved mode
pub const STORAGE_KEY: &str = "theme";

/// The user's theme choice, persisted across sessions
pub struct ThemePreference {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
    document: DocumentClass,
}

impl ThemePreference {
    /// Wire up a preference over `store`. No storage access happens until
    /// [`initialize`](Self::initialize).
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self {
            mode: ThemeMode::default(),
            store: Box::new(store),
            document: DocumentClass::new(),
        }
    }

    /// Resolve the saved mode and reflect it on the document root. Exactly
    /// the stored string `"dark"` selects dark mode; absence, read failure
    /// or any other value selects light. The store is only written by
    /// [`toggle`](Self::toggle), never here.
    pub fn initialize(&mut self) -> ThemeMode {
        let mode = match self.store.get(STORAGE_KEY) {
            Ok(Some(value)) => match ThemeMode::from_storage_value(&value) {
                Some(mode) => mode,
                None => {
                    tracing::debug!("Ignoring unrecognized stored theme {:?}", value);
                    ThemeMode::Light
                }
            },
            Ok(None) => ThemeMode::Light,
            Err(err) => {
                tracing::warn!("Failed to read theme preference: {}", err);
                ThemeMode::Light
            }
        };

        self.mode = mode;
        self.document.apply_mode(mode);
        tracing::debug!("Theme initialized to {:?}", mode);
        mode
    }

    /// Flip the mode, update the document root and persist before returning.
    /// The opposite mode's class is removed before the new one is added.
    pub fn toggle(&mut self) -> ThemeMode {
        let mode = self.mode.toggled();
        self.mode = mode;
        self.document.apply_mode(mode);
        self.persist(mode);
        tracing::debug!("Theme toggled to {:?}", mode);
        mode
    }

    /// Write-through to the store. Failures leave the in-session mode intact.
    fn persist(&mut self, mode: ThemeMode) {
        if let Err(err) = self.store.set(STORAGE_KEY, mode.storage_value()) {
            tracing::warn!("Failed to persist theme preference: {}", err);
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Class list on the document root
    pub fn document(&self) -> &DocumentClass {
        &self.document
    }

    /// Mutable class list, for styling hooks beyond the mode classes
    pub fn document_mut(&mut self) -> &mut DocumentClass {
        &mut self.document
    }
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("mode", &self.mode)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}
