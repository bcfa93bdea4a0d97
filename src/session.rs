//! Session: the front-end's view of one game process.
//!
//! Glues key mapping, the engine and the journal together so the whole
//! key → engine → journal path runs (and is tested) without a terminal.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::config::AppConfig;
use crate::core::{GameEngine, RoundSnapshot};
use crate::input::{handle_key_event, is_game_key, should_abandon, should_quit};
use crate::journal::Journal;
use crate::types::GameAction;

/// Whether the main loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    engine: GameEngine,
    journal: Option<Journal>,
    /// Game time fed to the engine so far.
    clock_ms: u64,
}

impl Session {
    pub fn new(engine: GameEngine, journal: Option<Journal>) -> Self {
        Self {
            engine,
            journal,
            clock_ms: 0,
        }
    }

    /// Build from configuration, opening the journal if one is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let engine = GameEngine::with_config(config.seed, config.engine_config());
        let journal = match &config.log_path {
            Some(path) => Some(Journal::open(path)?),
            None => None,
        };
        Ok(Self::new(engine, journal))
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        self.engine.snapshot_into(out);
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot()
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn journal_enabled(&self) -> bool {
        self.journal.is_some()
    }

    /// Handle one terminal key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if !is_game_key(&key) {
            return Flow::Continue;
        }
        if should_quit(key) {
            return Flow::Quit;
        }
        if should_abandon(key) {
            self.engine.end_round();
        } else if let Some(action) = handle_key_event(key) {
            self.apply(action);
        }
        self.flush_events();
        Flow::Continue
    }

    pub fn apply(&mut self, action: GameAction) -> bool {
        let changed = self.engine.apply_action(action);
        self.flush_events();
        changed
    }

    /// Advance game time; returns the number of AI steps run.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms as u64);
        let steps = self.engine.advance(elapsed_ms);
        self.flush_events();
        steps
    }

    /// Bring game time up to `now_ms` on the caller's clock.
    ///
    /// Frames of uneven length add up exactly, so AI steps follow the
    /// wall clock rather than the frame count. A clock that went
    /// backwards is ignored.
    pub fn advance_to(&mut self, now_ms: u64) -> u32 {
        let mut steps = 0;
        while now_ms > self.clock_ms {
            let dt = (now_ms - self.clock_ms).min(u32::MAX as u64) as u32;
            steps += self.advance(dt);
        }
        steps
    }

    /// Drain engine events into the journal.
    ///
    /// A failing journal is dropped; the game keeps running without it.
    fn flush_events(&mut self) {
        let events = self.engine.take_events();
        let Some(journal) = self.journal.as_mut() else {
            return;
        };
        for ev in &events {
            if journal.record(self.clock_ms, ev).is_err() {
                self.journal = None;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mode, Position, Role};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::io::{self, Write};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failing_journal_is_dropped() {
        let mut session = Session::new(GameEngine::new(1), Some(Journal::new(BrokenPipe)));
        assert!(session.journal_enabled());
        session.handle_key(KeyEvent::from(KeyCode::Char('1')));
        assert!(!session.journal_enabled());
        assert_eq!(session.engine().round_id(), 1);
    }

    #[test]
    fn test_quit_and_abandon_keys() {
        let mut session = Session::new(GameEngine::new(1), None);
        session.engine.start_round_with(
            Role::Seeker,
            [Position::new(5, 5), Position::new(6, 6), Position::new(7, 7)],
        );
        assert_eq!(session.handle_key(KeyEvent::from(KeyCode::Esc)), Flow::Continue);
        assert_eq!(session.engine().mode(), Mode::Selecting);

        assert_eq!(
            session.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
        assert_eq!(session.handle_key(KeyEvent::from(KeyCode::Char('q'))), Flow::Quit);
    }

    #[test]
    fn test_advance_tracks_game_time() {
        let mut session = Session::new(GameEngine::new(1), None);
        session.advance(16);
        session.advance(16);
        assert_eq!(session.clock_ms(), 32);
    }

    #[test]
    fn test_advance_to_follows_wall_clock() {
        let mut session = Session::new(GameEngine::new(1), None);
        session.engine.start_round_with(
            Role::Seeker,
            [Position::new(9, 9), Position::new(9, 8), Position::new(8, 9)],
        );

        // Slow frames: 16ms of budget plus 2ms of render each.
        let mut now = 0u64;
        let mut steps = 0;
        while now + 18 <= 5_000 {
            now += 18;
            steps += session.advance_to(now);
        }
        steps += session.advance_to(5_000);
        assert_eq!(session.clock_ms(), 5_000);
        assert_eq!(steps, 10);
        assert_eq!(session.engine().ai_ticks(), 10);

        // Going backwards is a no-op.
        assert_eq!(session.advance_to(4_000), 0);
        assert_eq!(session.clock_ms(), 5_000);
    }
}
