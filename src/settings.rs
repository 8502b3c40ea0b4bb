//! Game configuration
//!
//! Supplied by the bootstrap code at construction time. Stored as JSON on
//! native builds; any missing field takes the reference default.

use std::error::Error;
use std::path::Path;
use std::time::Duration;
use std::{fmt, fs, io};

use serde::{Deserialize, Serialize};

use crate::Cell;
use crate::consts::*;
use crate::sim::{EntityKind, Grid};

/// Board and timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board width in cells
    pub width: u32,
    /// Board height in cells
    pub height: u32,
    /// Side of one cell in pixels (renderer only)
    pub cell_size: u32,
    /// Simulation rate
    pub ticks_per_second: u32,
    /// Entities on the board, in collision check order
    pub entities: Vec<EntityKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            entities: DEFAULT_ENTITIES.to_vec(),
        }
    }
}

impl Settings {
    /// Settings for a board of the given size, everything else default
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref()).map_err(SettingsError::Io)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(SettingsError::Parse)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 {
            return Err(SettingsError::invalid("width", "must be positive"));
        }
        if self.height == 0 {
            return Err(SettingsError::invalid("height", "must be positive"));
        }
        if self.cell_size == 0 {
            return Err(SettingsError::invalid("cell_size", "must be positive"));
        }
        if self.ticks_per_second == 0 {
            return Err(SettingsError::invalid(
                "ticks_per_second",
                "must be positive",
            ));
        }
        // The snake and every entity hold a cell each, and a consumed entity
        // still holds its old one while it picks a new cell.
        if self.entities.len() as u64 + 2 > self.grid().cell_count() {
            return Err(SettingsError::invalid(
                "entities",
                "board too small to place every entity beside the snake",
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    /// Screen size in pixels
    pub fn screen_size(&self) -> (u32, u32) {
        (self.width * self.cell_size, self.height * self.cell_size)
    }

    /// Top-left pixel of a cell
    pub fn cell_to_pixel(&self, cell: Cell) -> (i32, i32) {
        let size = self.cell_size as i32;
        (cell.x * size, cell.y * size)
    }

    /// Wall-clock time between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.ticks_per_second.max(1)))
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io(io::Error),
    /// The document is not valid settings JSON (or could not be written).
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl SettingsError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "malformed settings JSON: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, TickInput, tick};

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.width, 32);
        assert_eq!(settings.height, 24);
        assert_eq!(settings.cell_size, 20);
        assert_eq!(settings.ticks_per_second, 20);
        assert_eq!(settings.screen_size(), (640, 480));
        assert_eq!(settings.entities, DEFAULT_ENTITIES.to_vec());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "width": 20, "height": 24 }"#).unwrap();
        assert_eq!(settings.width, 20);
        assert_eq!(settings.height, 24);
        assert_eq!(settings.cell_size, CELL_SIZE);
        assert_eq!(settings.entities.len(), 3);
    }

    #[test]
    fn test_custom_roster() {
        let settings = Settings::from_json(r#"{ "entities": ["Food", "Food"] }"#).unwrap();
        assert_eq!(settings.entities, vec![EntityKind::Food, EntityKind::Food]);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = Settings::from_json(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "width", .. }));

        let err = Settings::from_json(r#"{ "ticks_per_second": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "ticks_per_second",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_overfull_board() {
        let err = Settings::from_json(r#"{ "width": 2, "height": 1, "entities": ["Food", "Hazard"] }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "entities", .. }));
    }

    #[test]
    fn test_roster_leaves_room_to_respawn() {
        let err = Settings::from_json(r#"{ "width": 3, "height": 1, "entities": ["Food", "Hazard"] }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "entities", .. }));

        let settings =
            Settings::from_json(r#"{ "width": 4, "height": 1, "entities": ["Food", "Hazard"] }"#)
                .unwrap();
        let mut state = GameState::new(&settings, 5);
        let ahead = state.snake.next_head(state.grid);
        if let Some(hazard) = state.entity_mut(EntityKind::Hazard) {
            hazard.position = ahead;
        }
        if let Some(food) = state.entity_mut(EntityKind::Food) {
            food.position = Cell::new(ahead.x + 1, 0).rem_euclid(Cell::new(4, 1));
        }

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.contact, Some(EntityKind::Hazard));
        assert!(outcome.reset);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("malformed settings JSON"));
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::new(20, 24);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/grid-snake/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_pixel_conversion() {
        let settings = Settings::default();
        assert_eq!(settings.cell_to_pixel(Cell::new(3, 2)), (60, 40));
        assert_eq!(settings.tick_interval(), Duration::from_millis(50));
    }
}
