use serde::{Deserialize, Serialize};

use blockfall_core::{Error, Result};
use blockfall_types::{Coordinate, Dimensions, SPAWN_COLUMN, SPAWN_ROW};

/// Per-session settings; every field falls back to the compile-time default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub dimensions: Dimensions,
    /// Anchor of every freshly spawned piece
    pub spawn: Coordinate,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            spawn: Coordinate::new(SPAWN_ROW, SPAWN_COLUMN),
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let Dimensions { rows, columns } = self.dimensions;
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimensions { rows, columns });
        }
        if self.spawn.column < 0 || self.spawn.column as usize >= columns {
            return Err(Error::SpawnOutsideBoard {
                column: self.spawn.column,
                columns,
            });
        }
        if self.spawn.row >= 0 && self.spawn.row as usize >= rows {
            return Err(Error::SpawnBelowBoard {
                row: self.spawn.row,
                rows,
            });
        }
        Ok(())
    }
}
