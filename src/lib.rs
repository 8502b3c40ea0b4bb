//! Grid Snake - rules engine for a toroidal grid Snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, entities, spawning, tick)
//! - `settings`: Construction-time configuration
//! - `palette`: Colour tags handed to the rendering collaborator
//!
//! Rendering, input polling and the frame loop live outside this crate.

pub mod palette;
pub mod settings;
pub mod sim;

pub use palette::ColorTag;
pub use settings::{Settings, SettingsError};

use glam::IVec2;

/// A single board square, `(x, y)` in cell units
pub type Cell = IVec2;

/// Game configuration constants
pub mod consts {
    use crate::sim::EntityKind;

    /// Reference screen size in pixels
    pub const SCREEN_WIDTH: u32 = 640;
    pub const SCREEN_HEIGHT: u32 = 480;

    /// Side of one cell in pixels
    pub const CELL_SIZE: u32 = 20;

    /// Board dimensions in cells
    pub const GRID_WIDTH: u32 = SCREEN_WIDTH / CELL_SIZE;
    pub const GRID_HEIGHT: u32 = SCREEN_HEIGHT / CELL_SIZE;

    /// Simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 20;

    /// Length the snake starts with and returns to on reset
    pub const INITIAL_SNAKE_LENGTH: u32 = 1;

    /// Default roster, also the collision check order
    pub const DEFAULT_ENTITIES: [EntityKind; 3] =
        [EntityKind::Food, EntityKind::Hazard, EntityKind::Obstacle];
}
