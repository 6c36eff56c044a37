//! Document root class list
//!
//! Styling hooks off a class set on the document root, the same way a
//! stylesheet keys dark-mode rules off a `dark` class on `<html>`. The set
//! holds arbitrary classes; theme application only ever touches the two
//! mode classes and leaves the rest alone.

use rustc_hash::FxHashSet;

use crate::mode::ThemeMode;

/// Class set on the document root element
#[derive(Clone, Debug, Default)]
pub struct DocumentClass {
    classes: FxHashSet<String>,
}

impl DocumentClass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add(&mut self, class: &str) -> bool {
        self.classes.insert(class.to_owned())
    }

    pub fn remove(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    /// Make the mode classes reflect `mode`. The opposite mode's class is
    /// removed before the new one is added, so the two never coexist.
    pub fn apply_mode(&mut self, mode: ThemeMode) {
        self.classes.remove(mode.toggled().class_name());
        self.classes.insert(mode.class_name().to_owned());
    }

    /// Mode currently reflected by the class set, if exactly decidable
    pub fn mode(&self) -> Option<ThemeMode> {
        let dark = self.contains(ThemeMode::Dark.class_name());
        let light = self.contains(ThemeMode::Light.class_name());
        match (dark, light) {
            (true, false) => Some(ThemeMode::Dark),
            (false, true) => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
