//! Game state: the snake, the entity roster and the board
//!
//! One `GameState` lives for the whole process. The driver owns it and lends
//! it to the tick function, the input handler and the renderer.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityKind};
use super::grid::Grid;
use super::snake::Snake;
use super::spawn::Occupied;
use crate::Cell;
use crate::palette::ColorTag;
use crate::settings::{Settings, SettingsError};

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Board geometry
    pub grid: Grid,
    /// The player's snake
    pub snake: Snake,
    /// Entities, in collision check order
    pub entities: Vec<Entity>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Number of resets since construction
    pub resets: u32,
    /// Longest body seen since construction
    pub best_length: usize,
    rng: Pcg32,
}

impl GameState {
    /// Validate `settings`, then create a new game state with the given seed
    pub fn try_new(settings: &Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::new(settings, seed))
    }

    /// Create a new game state with the given seed.
    ///
    /// `settings` must pass [`Settings::validate`]; a zero-sized board panics.
    /// Use [`GameState::try_new`] for settings from outside the program.
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let grid = settings.grid();
        let snake = Snake::new(grid);
        let entities = settings
            .entities
            .iter()
            .map(|&kind| Entity::new(kind, snake.head()))
            .collect();

        let mut state = Self {
            seed,
            grid,
            snake,
            entities,
            time_ticks: 0,
            resets: 0,
            best_length: 1,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.respawn_all();
        state
    }

    /// Cells covered by the snake or any entity, computed fresh
    pub fn occupied(&self) -> Occupied {
        self.snake
            .segments()
            .iter()
            .copied()
            .chain(self.entities.iter().map(Entity::position))
            .collect()
    }

    /// Return to the starting snake and re-place every entity.
    ///
    /// The snake goes first so entities never land under the fresh body.
    pub fn reset(&mut self) {
        self.snake.reset(self.grid);
        self.respawn_all();
        self.resets += 1;
        log::info!(
            "Game reset #{} after {} ticks (best length {})",
            self.resets,
            self.time_ticks,
            self.best_length
        );
    }

    /// Respawn the entity at `index` away from everything else
    pub fn respawn_entity(&mut self, index: usize) {
        let occupied = self.occupied();
        self.entities[index].respawn(&occupied, self.grid, &mut self.rng);
    }

    fn respawn_all(&mut self) {
        for index in 0..self.entities.len() {
            self.respawn_entity(index);
        }
    }

    /// First entity of the given kind
    pub fn entity(&self, kind: EntityKind) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind == kind)
    }

    pub fn entity_mut(&mut self, kind: EntityKind) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.kind == kind)
    }

    /// Cells to draw with their colour tags, back to front (head last)
    pub fn draw_list(&self) -> Vec<(Cell, ColorTag)> {
        let mut cells = Vec::with_capacity(self.entities.len() + self.snake.len());
        cells.extend(self.entities.iter().map(|e| (e.position, e.kind.color())));
        cells.extend(
            self.snake
                .body_without_head()
                .iter()
                .rev()
                .map(|&c| (c, ColorTag::SnakeBody)),
        );
        cells.push((self.snake.head(), ColorTag::SnakeHead));
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Settings::new(20, 24), 12345);
        assert_eq!(state.snake.segments(), &[Cell::new(10, 12)]);
        assert_eq!(state.entities.len(), 3);
        assert_eq!(state.resets, 0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_try_new_validates() {
        let err = GameState::try_new(&Settings::new(0, 0), 1).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "width", .. }));

        let state = GameState::try_new(&Settings::new(20, 24), 1).unwrap();
        assert_eq!(state.snake.head(), Cell::new(10, 12));
    }

    #[test]
    fn test_entities_spawn_apart() {
        for seed in 0..50 {
            let state = GameState::new(&Settings::new(4, 4), seed);
            let occupied = state.occupied();
            // Snake plus three distinct entity cells
            assert_eq!(occupied.len(), 4, "seed {seed}");
            for entity in &state.entities {
                assert_ne!(entity.position, state.snake.head());
                assert!(state.grid.contains(entity.position));
            }
        }
    }

    #[test]
    fn test_occupied_tracks_changes() {
        let mut state = GameState::new(&Settings::new(20, 24), 1);
        let far = Cell::new(0, 0);
        state.entity_mut(EntityKind::Food).unwrap().position = far;
        assert!(state.occupied().contains(&far));
    }

    #[test]
    fn test_reset_idempotent() {
        let mut state = GameState::new(&Settings::new(20, 24), 7);
        state.snake = Snake::from_segments(
            vec![Cell::new(3, 3), Cell::new(2, 3), Cell::new(1, 3)],
            crate::sim::Direction::Right,
        )
        .unwrap();

        state.reset();
        let first = state.snake.clone();
        state.reset();

        assert_eq!(state.snake, first);
        assert_eq!(first.segments(), &[Cell::new(10, 12)]);
        assert_eq!(first.target_length, 1);
        assert_eq!(state.resets, 2);
        for entity in &state.entities {
            assert_ne!(entity.position, first.head());
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let settings = Settings::default();
        let a = GameState::new(&settings, 99999);
        let b = GameState::new(&settings, 99999);
        assert_eq!(a.entities, b.entities);
    }

    #[test]
    fn test_draw_list_order() {
        let mut state = GameState::new(&Settings::new(20, 24), 3);
        state.snake =
            Snake::from_segments(vec![Cell::new(5, 5), Cell::new(4, 5)], crate::sim::Direction::Right)
                .unwrap();

        let cells = state.draw_list();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].1, ColorTag::Food);
        assert_eq!(cells[3], (Cell::new(4, 5), ColorTag::SnakeBody));
        assert_eq!(cells[4], (Cell::new(5, 5), ColorTag::SnakeHead));
    }
}
