//! Engine events, drained by observers such as the journal.

use arrayvec::ArrayVec;

use crate::actor::Actor;
use crate::types::{Direction, Position, Role, RoundOutcome, MAX_ACTORS};

/// Why a round left the Playing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// AI actor `by` shared a cell with the human at `at`.
    Contact {
        by: u8,
        at: Position,
        outcome: RoundOutcome,
    },
    /// The round was reset from outside the engine.
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    RoundStarted {
        round_id: u32,
        human_role: Role,
        actors: ArrayVec<Actor, MAX_ACTORS>,
    },
    HumanMoved {
        round_id: u32,
        direction: Direction,
        from: Position,
        to: Position,
    },
    /// Positions after one AI step.
    AiStepped {
        round_id: u32,
        tick: u32,
        actors: ArrayVec<Actor, MAX_ACTORS>,
    },
    RoundEnded {
        round_id: u32,
        cause: EndCause,
    },
}

impl RoundEvent {
    pub fn round_id(&self) -> u32 {
        match self {
            RoundEvent::RoundStarted { round_id, .. }
            | RoundEvent::HumanMoved { round_id, .. }
            | RoundEvent::AiStepped { round_id, .. }
            | RoundEvent::RoundEnded { round_id, .. } => *round_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RoundEvent::RoundStarted { .. } => "round_started",
            RoundEvent::HumanMoved { .. } => "human_moved",
            RoundEvent::AiStepped { .. } => "ai_stepped",
            RoundEvent::RoundEnded { .. } => "round_ended",
        }
    }
}
