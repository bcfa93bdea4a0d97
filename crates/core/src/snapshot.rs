use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::actor::Actor;
use crate::types::{Mode, Position, Role, RoundOutcome, BOARD_SIZE, MAX_ACTORS};

/// Read-only copy of everything the view needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    pub mode: Mode,
    pub board_size: u8,
    /// Human first, then AI actors in id order. Empty while selecting.
    pub actors: ArrayVec<Actor, MAX_ACTORS>,
    pub human_role: Option<Role>,
    pub round_id: u32,
    pub ai_ticks: u32,
    pub last_outcome: Option<RoundOutcome>,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.mode = Mode::Selecting;
        self.board_size = BOARD_SIZE;
        self.actors.clear();
        self.human_role = None;
        self.round_id = 0;
        self.ai_ticks = 0;
        self.last_outcome = None;
    }

    pub fn playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    pub fn human(&self) -> Option<&Actor> {
        self.actors.first()
    }

    /// First actor occupying `pos`.
    ///
    /// The human is listed first, so it wins when several actors share a cell.
    pub fn actor_at(&self, pos: Position) -> Option<&Actor> {
        self.actors.iter().find(|a| a.position == pos)
    }

    /// Stable 64-bit digest of the snapshot, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            mode: Mode::Selecting,
            board_size: BOARD_SIZE,
            actors: ArrayVec::new(),
            human_role: None,
            round_id: 0,
            ai_ticks: 0,
            last_outcome: None,
        }
    }
}

struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
