//! The render loop only redraws when the snapshot fingerprint moves.

use tui_tag::core::GameEngine;
use tui_tag::term::RenderThrottle;
use tui_tag::types::{Direction, Position, Role};

fn scripted() -> GameEngine {
    let mut engine = GameEngine::new(9);
    engine.start_round_with(
        Role::Runner,
        [Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)],
    );
    engine
}

#[test]
fn idle_menu_redraws_only_on_refresh() {
    let engine = GameEngine::new(9);
    let fp = engine.snapshot().fingerprint();
    let mut t = RenderThrottle::new(1_000);

    assert!(t.should_render(0, fp));
    assert!(!t.should_render(16, fp));
    assert!(!t.should_render(999, fp));
    assert!(t.should_render(1_000, fp));
    assert!(!t.should_render(1_016, fp));
}

#[test]
fn human_move_forces_redraw() {
    let mut engine = scripted();
    let mut t = RenderThrottle::new(1_000);
    assert!(t.should_render(0, engine.snapshot().fingerprint()));

    assert!(engine.handle_direction_input(Direction::Left));
    assert!(t.should_render(16, engine.snapshot().fingerprint()));
}

#[test]
fn wall_bump_does_not_redraw() {
    let mut engine = scripted();
    let mut t = RenderThrottle::new(1_000);
    assert!(t.should_render(0, engine.snapshot().fingerprint()));

    // Runner starts in the bottom-right corner.
    assert!(!engine.handle_direction_input(Direction::Right));
    assert!(!t.should_render(16, engine.snapshot().fingerprint()));
}

#[test]
fn ai_step_forces_redraw() {
    let mut engine = scripted();
    let mut t = RenderThrottle::new(1_000);
    assert!(t.should_render(0, engine.snapshot().fingerprint()));

    engine.tick();
    assert!(t.should_render(16, engine.snapshot().fingerprint()));
}
