//! Actors - the pieces moving on the board.

use crate::types::{Direction, Position, Role, HUMAN_ID};

/// A piece on the board, human- or AI-controlled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Actor {
    pub id: u8,
    pub position: Position,
    pub role: Role,
}

impl Actor {
    pub fn new(id: u8, position: Position, role: Role) -> Self {
        Self { id, position, role }
    }

    /// The human actor at its role-dependent starting corner
    ///
    /// Seekers start top-left, Runners bottom-right.
    pub fn human(role: Role, board_size: u8) -> Self {
        let far = board_size.saturating_sub(1);
        let position = match role {
            Role::Seeker => Position::new(0, 0),
            Role::Runner => Position::new(far, far),
        };
        Self::new(HUMAN_ID, position, role)
    }

    pub fn is_human(&self) -> bool {
        self.id == HUMAN_ID
    }

    /// Move one cell in `dir`, absorbing moves into a wall.
    pub fn step(&mut self, dir: Direction, board_size: u8) {
        let (dx, dy) = dir.delta();
        self.position = self.position.offset_clamped(dx, dy, board_size);
    }

    /// One greedy AI step relative to `target` (the human's position).
    ///
    /// Seekers close in on each axis, Runners back away. An aligned axis
    /// (`sign == 0`) does not move.
    pub fn chase_step(&mut self, target: Position, board_size: u8) {
        let dx = sign(target.x as i16 - self.position.x as i16);
        let dy = sign(target.y as i16 - self.position.y as i16);
        let (dx, dy) = match self.role {
            Role::Seeker => (dx, dy),
            Role::Runner => (-dx, -dy),
        };
        self.position = self.position.offset_clamped(dx, dy, board_size);
    }
}

fn sign(v: i16) -> i8 {
    v.signum() as i8
}
