//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the chase game and the round state
//! machine. It has **no dependencies** on terminal, input or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same spawns
//! - **Testable**: every rule is covered without a UI harness
//! - **Portable**: runs in the terminal front-end, in tests and in benches
//!
//! # Module Structure
//!
//! - [`actor`]: actors and their single-cell movement rules
//! - [`clock`]: fixed-cadence clock for AI steps
//! - [`engine`]: the round state machine
//! - [`events`]: events emitted for observers (journal)
//! - [`rng`]: seeded spawn generation
//! - [`snapshot`]: read-only frame data for the view
//!
//! # Game Rules
//!
//! - The human picks a role. Seekers start at `(0, 0)`, Runners at the
//!   opposite corner.
//! - Three AI actors of the opposite role spawn on random cells.
//! - Every AI step, Seekers move one cell per axis towards the human and
//!   Runners one cell per axis away from it.
//! - Walls absorb movement.
//! - The round ends as soon as an AI actor shares the human's cell.
//!
//! # Example
//!
//! ```
//! use tui_tag_core::GameEngine;
//! use tui_tag_types::{Direction, GameAction, Mode, Position, Role};
//!
//! let mut engine = GameEngine::new(12345);
//! engine.start_round_with(
//!     Role::Runner,
//!     [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
//! );
//! assert_eq!(engine.mode(), Mode::Playing);
//!
//! engine.apply_action(GameAction::Move(Direction::Up));
//! assert_eq!(engine.human().unwrap().position, Position::new(9, 8));
//!
//! // One AI step every 500ms of game time.
//! assert_eq!(engine.advance(500), 1);
//! ```

pub mod actor;
pub mod clock;
pub mod engine;
pub mod events;
pub mod rng;
pub mod snapshot;

pub use tui_tag_types as types;

// Re-export commonly used types for convenience
pub use actor::Actor;
pub use clock::AiClock;
pub use engine::{EngineConfig, GameEngine};
pub use events::{EndCause, RoundEvent};
pub use rng::SimpleRng;
pub use snapshot::RoundSnapshot;
