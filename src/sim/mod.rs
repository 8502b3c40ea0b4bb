//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no clocks
//! - Seeded RNG only
//! - Stable iteration order (roster order for entities)
//! - No rendering or platform dependencies

pub mod entity;
pub mod grid;
pub mod snake;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entity::{Effect, Entity, EntityKind};
pub use grid::{Direction, Grid};
pub use snake::Snake;
pub use spawn::{Occupied, pick};
pub use state::GameState;
pub use tick::{TickInput, TickOutcome, tick};
