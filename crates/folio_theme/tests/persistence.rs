use folio_theme::{FileStore, MemoryStore, PreferenceStore, ThemeMode, ThemePreference, STORAGE_KEY};

#[test]
fn preference_survives_a_restart_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs");

    // First session: default light, user switches to dark.
    {
        let mut theme = ThemePreference::new(FileStore::new(&path));
        assert_eq!(theme.initialize(), ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
    }

    // Second session resolves the saved choice.
    {
        let mut theme = ThemePreference::new(FileStore::new(&path));
        assert_eq!(theme.initialize(), ThemeMode::Dark);
        assert!(theme.document().contains("dark"));
        assert!(!theme.document().contains("light"));
    }
}

#[test]
fn corrupted_file_resolves_to_light_without_rewriting_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs");
    std::fs::write(&path, "theme=solarized\n").unwrap();

    let mut theme = ThemePreference::new(FileStore::new(&path));
    assert_eq!(theme.initialize(), ThemeMode::Light);

    // Initialization only reads. The bad value sits until the next toggle.
    let store = FileStore::new(&path);
    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("solarized"));

    theme.toggle();
    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn mode_classes_never_coexist_across_many_toggles() {
    let mut theme = ThemePreference::new(MemoryStore::new());
    theme.initialize();

    for _ in 0..7 {
        theme.toggle();
        let doc = theme.document();
        assert!(doc.contains("dark") != doc.contains("light"));
        assert_eq!(doc.mode(), Some(theme.mode()));
    }
}

#[test]
fn denied_storage_degrades_to_session_only_toggling() {
    let mut theme = ThemePreference::new(MemoryStore::denied());

    assert_eq!(theme.initialize(), ThemeMode::Light);
    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(theme.toggle(), ThemeMode::Light);
    assert_eq!(theme.mode(), ThemeMode::Light);
}
