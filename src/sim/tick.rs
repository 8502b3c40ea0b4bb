//! Fixed-rate simulation tick
//!
//! Advances the game by one step. The order below is load-bearing:
//! 1. apply the latest turn request, then commit it
//! 2. resolve entity contact for the cell the head is about to enter
//! 3. check that cell against the body
//! 4. reset on death, otherwise move

use super::entity::EntityKind;
use super::grid::Direction;
use super::state::GameState;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest turn request since the previous tick
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn turn(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
        }
    }

    /// Record a turn request; a later request replaces an earlier one
    pub fn request(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Take the request, leaving the buffer empty for the next tick
    pub fn take(&mut self) -> Self {
        Self {
            direction: self.direction.take(),
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Entity the snake ran into, if any
    pub contact: Option<EntityKind>,
    /// The snake ran into its own body
    pub self_collision: bool,
    /// The game was reset instead of moving
    pub reset: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    if let Some(direction) = input.direction {
        state.snake.set_pending_direction(direction);
    }
    state.snake.commit_direction();

    let target = state.snake.next_head(state.grid);

    // First match wins, in roster order
    if let Some(index) = state.entities.iter().position(|e| e.position == target) {
        let kind = state.entities[index].kind;
        state.entities[index].apply_effect(&mut state.snake);
        state.respawn_entity(index);
        outcome.contact = Some(kind);
        log::debug!(
            "Contact with {:?} at {} (target length {})",
            kind,
            target,
            state.snake.target_length
        );
    }

    if state.snake.collides_with_body(target) {
        state.snake.kill();
        outcome.self_collision = true;
        log::debug!("Self collision at {}", target);
    }

    if state.snake.is_dead() {
        state.reset();
        outcome.reset = true;
        return outcome;
    }

    state.snake.advance(state.grid);
    state.best_length = state.best_length.max(state.snake.len());

    outcome
}
