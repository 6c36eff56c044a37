//! Scroll Session Demo
//!
//! Drives the sample portfolio through a scripted scroll session in the
//! headless runtime: jump to the project list, scroll between projects,
//! read the experience timeline, toggle the theme and land on the contact
//! form, logging reveal activity along the way.
//!
//! The theme preference persists to a file in the temp directory, so a
//! second run starts in the mode the first run toggled to.
//!
//! Run with: cargo run -p folio_app --example scroll_session

use folio_app::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let store_path = std::env::temp_dir().join("folio-theme-demo.txt");
    let mut page = Page::with_store(
        Portfolio::sample(),
        PageConfig::default(),
        FileStore::new(&store_path),
    );
    tracing::info!(
        mode = ?page.mode(),
        store = %store_path.display(),
        sections = page.section_count(),
        "session start"
    );

    let cfg = HeadlessRunConfig {
        max_frames: 240,
        ..Default::default()
    };

    let mut last_active = None;
    HeadlessRuntime::run(cfg, &mut page, |ctx, page| {
        if page.active_project() != last_active {
            last_active = page.active_project();
            tracing::info!(
                frame = ctx.frame_index,
                active = ?last_active,
                "navigation indicator moved"
            );
        }

        match ctx.frame_index {
            0 => vec![PageEvent::JumpTo(Anchor::Projects)],
            60 => vec![PageEvent::Scrolled { top: 1800.0 }],
            120 => vec![PageEvent::JumpTo(Anchor::Resume)],
            160 => vec![PageEvent::ThemeToggled],
            200 => vec![PageEvent::JumpTo(Anchor::Contact)],
            _ => Vec::new(),
        }
    })?;

    if let Some((text, image)) = page.project_poses(0) {
        tracing::info!(?text, ?image, "project 0 panel poses");
    }
    tracing::info!(
        mode = ?page.mode(),
        scroll = page.scroll_top(),
        settled = !page.has_active_motion(),
        "session end"
    );

    Ok(())
}
