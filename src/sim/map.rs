//! Tile grid loaded from a text map
//!
//! A map is a rectangle of integer tile IDs. Everything except air and the
//! two lap markers blocks movement. All queries sample single points and clamp
//! them into the grid, so the map edges behave like an endless repeat of the
//! border tiles rather than like walls.

use std::fs;
use std::path::Path;

use glam::DVec2;

use crate::consts::TILE_SIZE;
use crate::error::{LoadError, MapFormatError};

/// Tile identifier as stored in map files
pub type TileId = u32;

/// Empty space
pub const AIR: TileId = 0;
/// Lap start marker (not solid)
pub const START: TileId = 78;
/// Lap finish marker (not solid)
pub const FINISH: TileId = 110;

/// Whether a tile blocks movement
#[inline]
pub fn is_solid_tile(tile: TileId) -> bool {
    !matches!(tile, AIR | START | FINISH)
}

/// Immutable grid of tiles, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<TileId>,
    width: usize,
    height: usize,
}

impl TileGrid {
    /// Parse a map from text
    ///
    /// Each non-blank line is one row of whitespace-separated tile IDs. All
    /// rows must have as many tiles as the first one.
    pub fn from_text(source: &str) -> Result<Self, MapFormatError> {
        let mut tiles = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let mut row_len = 0;
            for token in line.split_whitespace() {
                let tile = token
                    .parse::<TileId>()
                    .map_err(|_| MapFormatError::InvalidToken {
                        line: line_no,
                        token: token.to_string(),
                    })?;
                tiles.push(tile);
                row_len += 1;
            }

            if row_len == 0 {
                continue;
            }
            if height > 0 && row_len != width {
                return Err(MapFormatError::RowLength {
                    line: line_no,
                    expected: width,
                    found: row_len,
                });
            }
            width = row_len;
            height += 1;
        }

        if height == 0 {
            return Err(MapFormatError::Empty);
        }

        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Read and parse a map file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::from_text(&source).map_err(|source| LoadError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "Loaded map {} ({}x{} tiles)",
            path.display(),
            grid.width,
            grid.height
        );
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major tile IDs, for renderers
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// World-space extent of the grid
    pub fn pixel_size(&self) -> DVec2 {
        DVec2::new(
            self.width as f64 * TILE_SIZE.x,
            self.height as f64 * TILE_SIZE.y,
        )
    }

    fn tile_at_int(&self, x: i64, y: i64) -> TileId {
        // Integer division truncates toward zero; anything negative clamps to 0
        let nx = (x / TILE_SIZE.x as i64).clamp(0, self.width as i64 - 1) as usize;
        let ny = (y / TILE_SIZE.y as i64).clamp(0, self.height as i64 - 1) as usize;
        self.tiles[ny * self.width + nx]
    }

    /// Tile under a world position
    ///
    /// Coordinates are rounded to the nearest integer (ties to even) before
    /// the lookup.
    pub fn tile_at(&self, pos: DVec2) -> TileId {
        self.tile_at_int(pos.x.round_ties_even() as i64, pos.y.round_ties_even() as i64)
    }

    /// Whether the tile under a world position blocks movement
    pub fn is_solid(&self, pos: DVec2) -> bool {
        is_solid_tile(self.tile_at(pos))
    }

    /// Whether a box stands on solid ground
    ///
    /// Only the two bottom corners are sampled, one unit below the box.
    pub fn on_ground(&self, center: DVec2, size: DVec2) -> bool {
        let half = size * 0.5;
        self.is_solid(DVec2::new(center.x - half.x, center.y + half.y + 1.0))
            || self.is_solid(DVec2::new(center.x + half.x, center.y + half.y + 1.0))
    }

    /// Whether any corner of a box lies in a solid tile
    ///
    /// This samples the four corners only; thin features between corners go
    /// undetected and collision behavior depends on that.
    pub fn test_box(&self, center: DVec2, size: DVec2) -> bool {
        let half = size * 0.5;
        self.is_solid(DVec2::new(center.x - half.x, center.y - half.y))
            || self.is_solid(DVec2::new(center.x + half.x, center.y - half.y))
            || self.is_solid(DVec2::new(center.x - half.x, center.y + half.y))
            || self.is_solid(DVec2::new(center.x + half.x, center.y + half.y))
    }
}
