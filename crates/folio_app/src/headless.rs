//! Headless frame loop for demos and tests.

use anyhow::{bail, Result};

use crate::events::PageEvent;
use crate::page::Page;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical viewport width used by the headless run.
    pub width: f32,
    /// Logical viewport height used by the headless run.
    pub height: f32,
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            max_frames: 1,
            tick_ms: 16,
        }
    }
}

impl HeadlessRunConfig {
    /// Frame step in seconds.
    pub fn tick_seconds(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}

/// Frame context passed to the per-frame script.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    pub width: f32,
    pub height: f32,
    pub elapsed_ms: u64,
}

/// Deterministic headless frame loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget against `page`. The run owns the viewport
    /// size; the page is resized to it before the first frame. `script`
    /// sees the page as of the previous frame and supplies the events to
    /// queue for the current one.
    pub fn run<F>(cfg: HeadlessRunConfig, page: &mut Page, mut script: F) -> Result<()>
    where
        F: FnMut(&HeadlessContext, &Page) -> Vec<PageEvent>,
    {
        if cfg.width <= 0.0 || cfg.height <= 0.0 {
            bail!("headless dimensions must be positive");
        }
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }

        page.push(PageEvent::Resized {
            width: cfg.width,
            height: cfg.height,
        });

        let dt = cfg.tick_seconds();
        for frame in 0..cfg.max_frames {
            let elapsed_ms = cfg.tick_ms.saturating_mul(u64::from(frame));
            let ctx = HeadlessContext {
                frame_index: frame,
                width: cfg.width,
                height: cfg.height,
                elapsed_ms,
            };
            for event in script(&ctx, page) {
                page.push(event);
            }
            page.frame(dt);
        }

        Ok(())
    }
}
