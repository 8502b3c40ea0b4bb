//! The snake: body segments, heading and target length

use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid};
use crate::Cell;
use crate::consts::INITIAL_SNAKE_LENGTH;

/// The player's snake
///
/// Alive while `target_length >= 1`. A target length of zero marks it dead;
/// the controller resets the game in the same tick, so a dead snake is never
/// moved or drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Body segments, head at index 0 (never empty)
    segments: Vec<Cell>,
    /// Heading applied on the next move
    pub direction: Direction,
    /// Requested heading, committed once per tick
    pub pending_direction: Option<Direction>,
    /// Segment count the body converges to
    pub target_length: u32,
}

impl Snake {
    /// Canonical starting snake: one segment at the board center facing right
    pub fn new(grid: Grid) -> Self {
        Self {
            segments: vec![grid.center()],
            direction: Direction::Right,
            pending_direction: None,
            target_length: INITIAL_SNAKE_LENGTH,
        }
    }

    /// Build a snake from explicit segments (head first).
    /// Returns `None` for an empty body.
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        let target_length = segments.len() as u32;
        Some(Self {
            segments,
            direction,
            pending_direction: None,
            target_length,
        })
    }

    /// Return to the canonical starting state
    pub fn reset(&mut self, grid: Grid) {
        *self = Self::new(grid);
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    /// Segments behind the head
    pub fn body_without_head(&self) -> &[Cell] {
        &self.segments[1..]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_dead(&self) -> bool {
        self.target_length == 0
    }

    /// Cell the head enters on the next move
    pub fn next_head(&self, grid: Grid) -> Cell {
        grid.step(self.head(), self.direction)
    }

    /// Check if a cell is covered by the body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_without_head().contains(&cell)
    }

    /// Queue a turn for the next commit.
    ///
    /// A reversal of the current heading is dropped. The check is against
    /// `direction`, not the pending request, so two quick taps can't sneak a
    /// reversal in. Returns whether the request was kept.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Apply the pending turn, if any
    pub fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    pub fn grow(&mut self, n: u32) {
        self.target_length = self.target_length.saturating_add(n);
    }

    pub fn shrink(&mut self, n: u32) {
        self.target_length = self.target_length.saturating_sub(n);
    }

    pub fn kill(&mut self) {
        self.target_length = 0;
    }

    /// Step the head forward and trim the tail down to the target length.
    /// The head always survives trimming.
    pub fn advance(&mut self, grid: Grid) {
        let new_head = self.next_head(grid);
        self.segments.insert(0, new_head);

        self.segments.truncate((self.target_length as usize).max(1));
    }
}
