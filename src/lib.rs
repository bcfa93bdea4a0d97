//! Terminal chase game (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tag::{core,input,term,types}` and
//! adds the process-level pieces: configuration, the event journal and the
//! session that ties key input, engine and journal together.

pub mod config;
pub mod journal;
pub mod session;

pub use tui_tag_core as core;
pub use tui_tag_input as input;
pub use tui_tag_term as term;
pub use tui_tag_types as types;

pub use config::AppConfig;
pub use journal::Journal;
pub use session::{Flow, Session};
