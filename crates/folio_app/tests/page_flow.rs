//! End-to-end page tests
//!
//! These tests verify that:
//! - The page restores and persists the theme across sessions through a
//!   real file store
//! - Scroll and navigation events drive section reveals through whole
//!   frames, with repeatable sections hiding again and reveal-once
//!   sections locking
//! - The section activity tracker and the headless runtime agree about
//!   which project the user is on
//! - Degraded hosts still end up with every section visible

use folio_app::prelude::*;

const DT: f32 = 1.0 / 60.0;

/// 1000x1000 viewport: each section occupies exactly one scroll page.
fn page() -> Page {
    page_with(PageConfig {
        width: 1000.0,
        height: 1000.0,
        ..Default::default()
    })
}

fn page_with(config: PageConfig) -> Page {
    Page::with_config(Portfolio::sample(), config)
}

fn frames(page: &mut Page, count: usize) {
    for _ in 0..count {
        page.frame(DT);
    }
}

#[test]
fn test_stored_dark_mode_applies_before_any_interaction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs");
    std::fs::write(&path, "theme=dark\n").unwrap();

    let page = Page::with_store(Portfolio::sample(), PageConfig::default(), FileStore::new(&path));

    assert_eq!(page.mode(), ThemeMode::Dark);
    assert!(page.document().contains("dark"));
    assert!(!page.document().contains("light"));
}

#[test]
fn test_theme_toggle_survives_a_page_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs");

    {
        let mut page =
            Page::with_store(Portfolio::sample(), PageConfig::default(), FileStore::new(&path));
        assert_eq!(page.mode(), ThemeMode::Light);

        page.push(PageEvent::ThemeToggled);
        page.frame(DT);
        assert_eq!(page.mode(), ThemeMode::Dark);
    }

    let reloaded =
        Page::with_store(Portfolio::sample(), PageConfig::default(), FileStore::new(&path));
    assert_eq!(reloaded.mode(), ThemeMode::Dark);
}

#[test]
fn test_toggling_twice_restores_the_original_state() {
    let mut page = page();
    assert_eq!(page.mode(), ThemeMode::Light);

    // Both presses queue on the same frame and apply in order.
    page.push(PageEvent::ThemeToggled);
    page.push(PageEvent::ThemeToggled);
    page.frame(DT);

    assert_eq!(page.mode(), ThemeMode::Light);
    assert!(page.document().contains("light"));
    assert!(!page.document().contains("dark"));
}

#[test]
fn test_denied_storage_still_yields_a_usable_page() {
    let mut page = Page::with_store(
        Portfolio::sample(),
        PageConfig::default(),
        MemoryStore::denied(),
    );
    assert_eq!(page.mode(), ThemeMode::Light);

    page.push(PageEvent::ThemeToggled);
    page.frame(DT);

    // Session-only, but the toggle still works.
    assert_eq!(page.mode(), ThemeMode::Dark);
    assert!(page.document().contains("dark"));
}

#[test]
fn test_jump_to_projects_reveals_in_a_single_frame() {
    let mut page = page();
    assert_eq!(page.is_revealed(1), Some(false));

    page.push(PageEvent::JumpTo(Anchor::Projects));
    page.frame(DT);

    assert_eq!(page.scroll_top(), 1000.0);
    assert_eq!(page.is_revealed(1), Some(true));
}

#[test]
fn test_projects_hide_again_but_experience_locks_revealed() {
    let mut page = page();

    page.push(PageEvent::JumpTo(Anchor::Projects));
    page.frame(DT);
    assert_eq!(page.is_revealed(1), Some(true));

    page.push(PageEvent::JumpTo(Anchor::Experience));
    page.frame(DT);
    assert_eq!(page.is_revealed(1), Some(false));
    assert_eq!(page.is_revealed(5), Some(true));

    page.push(PageEvent::Scrolled { top: 0.0 });
    page.frame(DT);
    assert_eq!(page.is_revealed(5), Some(true));
}

#[test]
fn test_revealed_project_settles_at_rest() {
    let mut page = page();

    page.push(PageEvent::JumpTo(Anchor::Project(0)));
    frames(&mut page, 130);

    assert!(!page.has_active_motion());
    let (text, image) = page.project_poses(0).unwrap();
    assert_eq!(text, MotionPose::REST);
    assert_eq!(image, MotionPose::REST);
}

#[test]
fn test_tracker_follows_scroll_with_later_section_winning_ties() {
    let mut page = page();

    page.frame(DT);
    assert_eq!(page.active_project(), None);

    page.push(PageEvent::JumpTo(Anchor::Project(2)));
    page.frame(DT);
    assert_eq!(page.active_project(), Some(2));

    // Halfway between projects 0 and 1 both sit at fraction 0.5.
    page.push(PageEvent::Scrolled { top: 1500.0 });
    page.frame(DT);
    assert_eq!(page.active_project(), Some(1));

    page.push(PageEvent::Scrolled { top: 0.0 });
    page.frame(DT);
    assert_eq!(page.active_project(), None);
}

#[test]
fn test_unsupported_host_reveals_every_section() {
    let mut page = page_with(PageConfig {
        width: 1000.0,
        height: 1000.0,
        intersection_supported: false,
    });
    assert!(!page.intersection_supported());

    page.frame(DT);

    for position in 1..=7 {
        assert_eq!(page.is_revealed(position), Some(true));
    }
}

#[test]
fn test_headless_scripted_session() {
    let mut page = page();
    let cfg = HeadlessRunConfig {
        width: 1000.0,
        height: 1000.0,
        max_frames: 180,
        tick_ms: 16,
    };

    HeadlessRuntime::run(cfg, &mut page, |ctx, _| match ctx.frame_index {
        0 => vec![PageEvent::JumpTo(Anchor::Projects)],
        90 => vec![PageEvent::JumpTo(Anchor::Contact)],
        _ => Vec::new(),
    })
    .unwrap();

    assert_eq!(page.scroll_top(), 8000.0);
    assert_eq!(page.is_revealed(1), Some(false));
    assert!(!page.has_active_motion());
}

#[test]
fn test_page_loads_content_from_a_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.toml");
    std::fs::write(
        &path,
        r#"
        [profile]
        name = "Ada"
        tagline = "Systems engineer"

        [[projects]]
        title = "Compiler"
        description = "A toy compiler"
        tech = ["rust"]
        code_link = "https://example.com/compiler"
        image_url = "compiler.png"
        "#,
    )
    .unwrap();

    let page = Page::load(&path, PageConfig::default()).unwrap();
    assert_eq!(page.portfolio().projects.len(), 1);
    assert_eq!(page.section_count(), 3);

    let missing = Page::load(dir.path().join("absent.toml"), PageConfig::default());
    assert!(matches!(missing, Err(PageError::Content(_))));
}
