//! Terminal chase game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_tag::term`.
//! Input is polled until the next `FRAME_MS` boundary; game time then catches
//! up to the measured wall clock, so slow frames never stretch the AI period.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_tag::core::RoundSnapshot;
use tui_tag::term::{pulse_on, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_tag::types::FRAME_MS;
use tui_tag::{AppConfig, Flow, Session};

/// Redraw unchanged frames at least this often.
const REFRESH_MS: u64 = 1_000;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut session = Session::from_config(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        eprintln!("[tui-tag] {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = RoundSnapshot::default();
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(FRAME_MS as u64);

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        let pulse = pulse_on(now_ms);
        session.snapshot_into(&mut snap);
        let fingerprint = snap.fingerprint() ^ (pulse && snap.playing()) as u64;
        if throttle.should_render(now_ms, fingerprint) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, pulse, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if session.handle_key(key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.advance_to(started.elapsed().as_millis() as u64);
        }
    }
}
