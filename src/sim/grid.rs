//! Toroidal board geometry
//!
//! The board wraps on both axes: leaving one edge re-enters the opposite one.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::Cell;

/// Direction of travel on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Unit step in cell units (y grows downward)
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Fixed-size board, dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid must have at least one cell");
        Self { width, height }
    }

    #[inline]
    fn size(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32)
    }

    /// Add `delta` to `cell` and wrap each axis back onto the board
    #[inline]
    pub fn wrap(&self, cell: Cell, delta: IVec2) -> Cell {
        (cell + delta).rem_euclid(self.size())
    }

    /// Cell one step from `cell` in `direction`
    #[inline]
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        self.wrap(cell, direction.delta())
    }

    /// Middle of the board (rounded toward the origin)
    pub fn center(&self) -> Cell {
        self.size() / 2
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Cell::new(x, y)))
    }
}
