//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one call per tick
//! - No I/O except loading the map
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod lap;
pub mod map;
pub mod state;
pub mod tick;

pub use camera::{Camera, CameraMode};
pub use collision::{Collision, CollisionSet, MoveResult, move_box};
pub use lap::{LapEvent, LapTimer, format_time, format_time_exact};
pub use map::{AIR, FINISH, START, TileGrid, TileId, is_solid_tile};
pub use state::{Body, GameState, Player};
pub use tick::{TickInput, TickOutcome, logic, physics, tick};
