//! Game engine module - owns the authoritative round state
//!
//! The engine applies human moves, advances the AI on a fixed cadence and
//! ends the round on contact. Every operation that moves an actor runs the
//! contact check before it returns, so callers never observe a Playing round
//! with two opposing actors on the same cell.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::actor::Actor;
use crate::clock::AiClock;
use crate::events::{EndCause, RoundEvent};
use crate::rng::SimpleRng;
use crate::snapshot::RoundSnapshot;
use crate::types::*;

/// Upper bound on undrained events; the oldest are dropped past this.
const EVENT_BACKLOG: usize = 256;

/// Engine tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board side length (clamped to at least 1)
    pub board_size: u8,
    /// AI movement period in milliseconds
    pub ai_tick_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            ai_tick_ms: AI_TICK_MS,
        }
    }
}

#[derive(Debug, Clone)]
struct PlayingRound {
    actors: ArrayVec<Actor, MAX_ACTORS>,
    clock: AiClock,
    ai_ticks: u32,
}

#[derive(Debug, Clone)]
enum Round {
    Selecting,
    Playing(PlayingRound),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    rng: SimpleRng,
    round: Round,
    /// Monotonic round id (increments on every start).
    round_id: u32,
    last_outcome: Option<RoundOutcome>,
    events: VecDeque<RoundEvent>,
}

impl GameEngine {
    /// Create an engine with default tunables and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, EngineConfig::default())
    }

    pub fn with_config(seed: u32, config: EngineConfig) -> Self {
        let config = EngineConfig {
            board_size: config.board_size.max(1),
            ..config
        };
        Self {
            config,
            rng: SimpleRng::new(seed),
            round: Round::Selecting,
            round_id: 0,
            last_outcome: None,
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn board_size(&self) -> u8 {
        self.config.board_size
    }

    pub fn mode(&self) -> Mode {
        match self.round {
            Round::Selecting => Mode::Selecting,
            Round::Playing(_) => Mode::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.round, Round::Playing(_))
    }

    /// Actors of the current round, human first. Empty while selecting.
    pub fn actors(&self) -> &[Actor] {
        match &self.round {
            Round::Selecting => &[],
            Round::Playing(p) => &p.actors,
        }
    }

    pub fn human(&self) -> Option<&Actor> {
        self.actors().first()
    }

    pub fn human_role(&self) -> Option<Role> {
        self.human().map(|a| a.role)
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    /// AI steps taken in the current round.
    pub fn ai_ticks(&self) -> u32 {
        match &self.round {
            Round::Selecting => 0,
            Round::Playing(p) => p.ai_ticks,
        }
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Milliseconds until the next AI step, or `None` while selecting.
    pub fn until_next_tick_ms(&self) -> Option<u32> {
        match &self.round {
            Round::Selecting => None,
            Round::Playing(p) => Some(p.clock.until_next_ms()),
        }
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.mode = self.mode();
        out.board_size = self.config.board_size;
        out.actors.clear();
        out.actors.extend(self.actors().iter().copied());
        out.human_role = self.human_role();
        out.round_id = self.round_id;
        out.ai_ticks = self.ai_ticks();
        out.last_outcome = self.last_outcome;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take all events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<RoundEvent> {
        Vec::from(std::mem::take(&mut self.events))
    }

    /// Start a round with random AI placement.
    ///
    /// Ignored (returns `false`) while a round is already being played.
    pub fn start_round(&mut self, human_is_seeker: bool) -> bool {
        if self.is_playing() {
            return false;
        }
        let size = self.config.board_size;
        let mut spawns = [Position::default(); AI_ACTOR_COUNT];
        for spawn in spawns.iter_mut() {
            *spawn = self.rng.next_position(size);
        }
        self.begin(Role::from_seeker_flag(human_is_seeker), spawns)
    }

    /// Start a round with explicit AI spawn cells (scripted rounds, replays).
    ///
    /// Cells outside the board are clamped onto it.
    pub fn start_round_with(
        &mut self,
        human_role: Role,
        ai_positions: [Position; AI_ACTOR_COUNT],
    ) -> bool {
        if self.is_playing() {
            return false;
        }
        self.begin(human_role, ai_positions)
    }

    fn begin(&mut self, human_role: Role, ai_positions: [Position; AI_ACTOR_COUNT]) -> bool {
        let size = self.config.board_size;
        let ai_role = human_role.opposite();

        let mut actors = ArrayVec::new();
        actors.push(Actor::human(human_role, size));
        for (i, pos) in ai_positions.into_iter().enumerate() {
            // Spawns may overlap each other or the human; no conflict resolution.
            let pos = pos.offset_clamped(0, 0, size);
            actors.push(Actor::new((i + 1) as u8, pos, ai_role));
        }

        self.round_id = self.round_id.wrapping_add(1);
        self.last_outcome = None;
        self.record(RoundEvent::RoundStarted {
            round_id: self.round_id,
            human_role,
            actors: actors.clone(),
        });
        self.round = Round::Playing(PlayingRound {
            actors,
            clock: AiClock::new(self.config.ai_tick_ms),
            ai_ticks: 0,
        });

        self.check_contact();
        true
    }

    /// Reset to role selection, dropping the round and its AI clock.
    ///
    /// No-op while already selecting. Returns whether a round was ended.
    pub fn end_round(&mut self) -> bool {
        self.close_round(EndCause::Abandoned)
    }

    fn close_round(&mut self, cause: EndCause) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.round = Round::Selecting;
        self.last_outcome = match cause {
            EndCause::Contact { outcome, .. } => Some(outcome),
            EndCause::Abandoned => None,
        };
        self.record(RoundEvent::RoundEnded {
            round_id: self.round_id,
            cause,
        });
        true
    }

    /// Move the human actor one cell. No-op unless playing.
    ///
    /// Returns whether the human actually moved (a wall absorbs the move).
    pub fn handle_direction_input(&mut self, direction: Direction) -> bool {
        let size = self.config.board_size;
        let Round::Playing(p) = &mut self.round else {
            return false;
        };

        let human = &mut p.actors[0];
        let from = human.position;
        human.step(direction, size);
        let to = human.position;
        if from == to {
            return false;
        }

        self.record(RoundEvent::HumanMoved {
            round_id: self.round_id,
            direction,
            from,
            to,
        });
        self.check_contact();
        true
    }

    /// One AI step. No-op unless playing.
    ///
    /// Every AI actor reacts to the human's position as of the start of the
    /// step; they never react to each other.
    pub fn tick(&mut self) -> bool {
        let size = self.config.board_size;
        let Round::Playing(p) = &mut self.round else {
            return false;
        };

        let target = p.actors[0].position;
        for ai in p.actors.iter_mut().skip(1) {
            ai.chase_step(target, size);
        }
        p.ai_ticks = p.ai_ticks.wrapping_add(1);

        let event = RoundEvent::AiStepped {
            round_id: self.round_id,
            tick: p.ai_ticks,
            actors: p.actors.clone(),
        };
        self.record(event);
        self.check_contact();
        true
    }

    /// Feed wall-clock time; runs one AI step per elapsed period.
    ///
    /// Stops as soon as the round ends. Returns the number of steps run.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        match &mut self.round {
            Round::Selecting => return 0,
            Round::Playing(p) => p.clock.feed(elapsed_ms),
        }

        let mut ran = 0;
        loop {
            let due = match &mut self.round {
                Round::Playing(p) => p.clock.take_due(),
                Round::Selecting => false,
            };
            if !due {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::StartAs(role) => self.start_round(role.is_seeker()),
            GameAction::Move(direction) => self.handle_direction_input(direction),
        }
    }

    /// End the round if any AI actor shares the human's cell.
    fn check_contact(&mut self) -> bool {
        let Round::Playing(p) = &self.round else {
            return false;
        };

        let human = p.actors[0];
        let Some(by) = p
            .actors
            .iter()
            .skip(1)
            .find(|a| a.position == human.position)
            .map(|a| a.id)
        else {
            return false;
        };

        self.close_round(EndCause::Contact {
            by,
            at: human.position,
            outcome: RoundOutcome::from_catch(human.role),
        })
    }

    fn record(&mut self, event: RoundEvent) {
        if self.events.len() >= EVENT_BACKLOG {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
