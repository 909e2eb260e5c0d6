//! Game state and core simulation types
//!
//! The tile grid is owned by the state for its whole lifetime and never
//! changes. Body and lap timer are mutated in place once per tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::camera::{Camera, CameraMode};
use super::lap::LapTimer;
use super::map::TileGrid;
use crate::consts::*;

/// The moving box, by its center
///
/// Its size is always [`PLAYER_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: SPAWN_POS,
            vel: DVec2::ZERO,
        }
    }
}

/// The player: a body plus its lap timer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub time: LapTimer,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the spawn point with a fresh lap (best time is kept)
    pub fn restart(&mut self) {
        self.body = Body::default();
        self.time.reset();
    }
}

/// Complete simulation state for one player on one map
#[derive(Debug, Clone)]
pub struct GameState {
    pub map: TileGrid,
    pub player: Player,
    pub camera: Camera,
    pub camera_mode: CameraMode,
    /// Last tick that was simulated (0 before the first one)
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(map: TileGrid) -> Self {
        Self {
            map,
            player: Player::new(),
            camera: Camera::new(),
            camera_mode: CameraMode::default(),
            time_ticks: 0,
        }
    }

    pub fn with_camera_mode(mut self, mode: CameraMode) -> Self {
        self.camera_mode = mode;
        self
    }

    /// Whether the player currently stands on solid ground
    pub fn on_ground(&self) -> bool {
        self.map.on_ground(self.player.body.pos, PLAYER_SIZE)
    }
}
