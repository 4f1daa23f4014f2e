//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_memory::term`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tui_memory::input::handle_event;
use tui_memory::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_memory::types::TICK_MS;
use tui_memory::{init_logging, App, ShellConfig};

/// Redraw interval for frames whose content did not change.
const STATIC_REFRESH_MS: u64 = 500;

fn main() -> Result<()> {
    let config = ShellConfig::from_env();
    init_logging(&config)?;
    log::info!(
        "starting: grid={} mode={} seed={:?}",
        config.round.grid.label(),
        config.round.mode.as_str(),
        config.round.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {e:#}");
    }
    result
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: &ShellConfig) -> Result<()> {
    let mut app = App::new(config.round.clone(), config.bell);
    if config.autostart {
        app.start(config.round.grid, config.round.mode)
            .with_context(|| format!("cannot start {}", config.round.grid.label()))?;
    }

    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let vp = viewport();

        // Render.
        if app.take_bells() > 0 {
            term.queue_bell();
        }
        let (fingerprint, animating) = app.frame_state(vp);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, animating) {
            app.render_into(vp, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
                throttle.invalidate();
            } else if let Some(cmd) = handle_event(&ev) {
                app.handle(cmd, vp);
            }
        }

        if app.should_quit() {
            log::info!("quit");
            return Ok(());
        }

        // Tick with the real elapsed time so the round clock stays accurate.
        let since = last_tick.elapsed();
        if since >= tick_duration {
            last_tick = Instant::now();
            app.tick(since.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
