//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the engine, the input mapping, the terminal view and the journal.
//!
//! # Board
//!
//! The board is a square grid, `BOARD_SIZE` cells on each side, indexed
//! `0..BOARD_SIZE` on both axes with `(0, 0)` in the top-left corner.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Fixed frame step of the terminal loop (~60 FPS) |
//! | `AI_TICK_MS` | 500 | Period of one AI movement step |
//! | `PULSE_MS` | 400 | Half-period of the human marker pulse |
//!
//! # Examples
//!
//! ```
//! use tui_tag_types::{Direction, GameAction, Role, BOARD_SIZE};
//!
//! assert_eq!(Role::Seeker.opposite(), Role::Runner);
//! assert_eq!(Direction::Up.delta(), (0, -1));
//!
//! let action = GameAction::from_str("ArrowLeft").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//!
//! assert_eq!(BOARD_SIZE, 10);
//! ```

/// Board side length in cells (10x10)
pub const BOARD_SIZE: u8 = 10;

/// Number of AI-controlled actors per round
pub const AI_ACTOR_COUNT: usize = 3;

/// Total actors per round (human + AI)
pub const MAX_ACTORS: usize = AI_ACTOR_COUNT + 1;

/// Id reserved for the human-controlled actor
pub const HUMAN_ID: u8 = 0;

/// Fixed frame step of the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// AI movement period (one step every 500ms)
pub const AI_TICK_MS: u32 = 500;

/// Half-period of the human marker pulse
pub const PULSE_MS: u32 = 400;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_shape_defaults() {
        assert_eq!(BOARD_SIZE, 10);
        assert_eq!(AI_ACTOR_COUNT, 3);
        assert_eq!(MAX_ACTORS, 4);
        assert_eq!(AI_TICK_MS, 500);
    }

    #[test]
    fn role_opposite_is_an_involution() {
        for role in [Role::Seeker, Role::Runner] {
            assert_ne!(role.opposite(), role);
            assert_eq!(role.opposite().opposite(), role);
        }
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", dir);
        }
    }

    #[test]
    fn outcome_follows_human_role() {
        assert_eq!(RoundOutcome::from_catch(Role::Seeker), RoundOutcome::HumanWon);
        assert_eq!(RoundOutcome::from_catch(Role::Runner), RoundOutcome::HumanLost);
    }
}

/// The two roles an actor can play
///
/// - **Seeker**: wins by occupying the same cell as a Runner
/// - **Runner**: must avoid occupying the same cell as a Seeker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Seeker,
    Runner,
}

impl Role {
    /// The role assigned to the other side of the round
    pub fn opposite(&self) -> Self {
        match self {
            Role::Seeker => Role::Runner,
            Role::Runner => Role::Seeker,
        }
    }

    pub fn from_seeker_flag(is_seeker: bool) -> Self {
        if is_seeker {
            Role::Seeker
        } else {
            Role::Runner
        }
    }

    pub fn is_seeker(&self) -> bool {
        matches!(self, Role::Seeker)
    }

    /// Parse role from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tag_types::Role;
    ///
    /// assert_eq!(Role::from_str("seeker"), Some(Role::Seeker));
    /// assert_eq!(Role::from_str("Runner"), Some(Role::Runner));
    /// assert_eq!(Role::from_str("it"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "seeker" => Some(Role::Seeker),
            "runner" => Some(Role::Runner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Seeker => "seeker",
            Role::Runner => "runner",
        }
    }
}

/// One of the four discrete movement directions
///
/// The y axis grows downwards, so `Up` decrements y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta `(dx, dy)` for this direction
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string
    ///
    /// Accepts plain names and DOM-style key names (case-insensitive):
    /// "up" | "arrowup", "down" | "arrowdown", "left" | "arrowleft",
    /// "right" | "arrowright"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "arrowup" => Some(Direction::Up),
            "down" | "arrowdown" => Some(Direction::Down),
            "left" | "arrowleft" => Some(Direction::Left),
            "right" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Engine mode
///
/// The only transitions are `Selecting -> Playing` (a role was chosen) and
/// `Playing -> Selecting` (collision or external reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Selecting,
    Playing,
}

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, clamping each axis independently to `[0, size-1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tag_types::Position;
    ///
    /// assert_eq!(Position::new(9, 0).offset_clamped(1, -1, 10), Position::new(9, 0));
    /// assert_eq!(Position::new(4, 4).offset_clamped(-1, 1, 10), Position::new(3, 5));
    /// ```
    pub fn offset_clamped(self, dx: i8, dy: i8, size: u8) -> Self {
        let max = size.saturating_sub(1) as i16;
        Self {
            x: (self.x as i16 + dx as i16).clamp(0, max) as u8,
            y: (self.y as i16 + dy as i16).clamp(0, max) as u8,
        }
    }

    pub fn in_bounds(&self, size: u8) -> bool {
        self.x < size && self.y < size
    }
}

/// Game actions that can be applied to the engine
///
/// Produced by the key mapping and consumed by `GameEngine::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a new round with the human playing the given role
    StartAs(Role),
    /// Move the human actor one cell
    Move(Direction),
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tag_types::{Direction, GameAction, Role};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("startSeeker"), Some(GameAction::StartAs(Role::Seeker)));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "startseeker" => Some(GameAction::StartAs(Role::Seeker)),
            "startrunner" => Some(GameAction::StartAs(Role::Runner)),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::StartAs(Role::Seeker) => "startSeeker",
            GameAction::StartAs(Role::Runner) => "startRunner",
            GameAction::Move(dir) => dir.as_str(),
        }
    }
}

/// How a round ended, from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The human was the Seeker and tagged a Runner
    HumanWon,
    /// The human was the Runner and got tagged
    HumanLost,
}

impl RoundOutcome {
    /// Outcome of a contact, given the human's role in that round
    pub fn from_catch(human_role: Role) -> Self {
        match human_role {
            Role::Seeker => RoundOutcome::HumanWon,
            Role::Runner => RoundOutcome::HumanLost,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundOutcome::HumanWon => "won",
            RoundOutcome::HumanLost => "lost",
        }
    }
}
