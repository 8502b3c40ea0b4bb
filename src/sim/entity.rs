//! Board entities and their contact effects

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::snake::Snake;
use super::spawn::{self, Occupied};
use crate::Cell;
use crate::palette::ColorTag;

/// Entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Grows the snake by one segment
    Food,
    /// Shrinks the snake by one segment
    Hazard,
    /// Kills the snake outright
    Obstacle,
}

/// What contact does to the snake's target length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Grow(u32),
    Shrink(u32),
    Kill,
}

impl EntityKind {
    pub fn effect(&self) -> Effect {
        match self {
            EntityKind::Food => Effect::Grow(1),
            EntityKind::Hazard => Effect::Shrink(1),
            EntityKind::Obstacle => Effect::Kill,
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            EntityKind::Food => ColorTag::Food,
            EntityKind::Hazard => ColorTag::Hazard,
            EntityKind::Obstacle => ColorTag::Obstacle,
        }
    }
}

/// A positioned entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Cell,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Cell) -> Self {
        Self { kind, position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Apply this entity's effect to the snake's target length
    pub fn apply_effect(&self, snake: &mut Snake) {
        match self.kind.effect() {
            Effect::Grow(n) => snake.grow(n),
            Effect::Shrink(n) => snake.shrink(n),
            Effect::Kill => snake.kill(),
        }
    }

    /// Move to a random cell outside `occupied`
    pub fn respawn<R: Rng + ?Sized>(&mut self, occupied: &Occupied, grid: Grid, rng: &mut R) {
        self.position = spawn::pick(occupied, grid, rng);
        log::debug!("{:?} respawned at {}", self.kind, self.position);
    }
}
