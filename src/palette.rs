//! Colour tags for the rendering collaborator
//!
//! The core never draws; it only labels cells. The renderer maps each tag to
//! a fill colour and outlines every filled cell with [`ColorTag::Border`].

use serde::{Deserialize, Serialize};

/// What a drawn cell represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    Background,
    Border,
    SnakeHead,
    SnakeBody,
    Food,
    Hazard,
    Obstacle,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Background => "background",
            ColorTag::Border => "border",
            ColorTag::SnakeHead => "snake_head",
            ColorTag::SnakeBody => "snake_body",
            ColorTag::Food => "food",
            ColorTag::Hazard => "hazard",
            ColorTag::Obstacle => "obstacle",
        }
    }

    /// Fill colour as `(r, g, b)`
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorTag::Background => (0, 0, 0),
            ColorTag::Border => (93, 216, 228),
            ColorTag::SnakeHead => (0, 160, 0),
            ColorTag::SnakeBody => (0, 255, 0),
            ColorTag::Food => (255, 0, 0),
            ColorTag::Hazard => (255, 200, 0),
            ColorTag::Obstacle => (128, 128, 128),
        }
    }
}
