//! Tile Dash - the simulation core of a tile-based 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile grid, collision, kinematics, lap timing)
//! - `clock`: Wall-clock to fixed tick conversion
//! - `settings`: JSON configuration
//! - `records`: Persisted best lap times
//! - `persistence`: JSON file helpers
//! - `error`: Load errors

pub mod clock;
pub mod error;
pub mod persistence;
pub mod records;
pub mod settings;
pub mod sim;

pub use clock::TickClock;
pub use error::{LoadError, MapFormatError};
pub use records::LapRecords;
pub use settings::Settings;

/// Game configuration constants
///
/// These are gameplay tuning values. Recorded lap times depend on them, so
/// they must not drift.
pub mod consts {
    use glam::DVec2;

    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u64 = 50;

    /// Tile dimensions in world units
    pub const TILE_SIZE: DVec2 = DVec2::new(64.0, 64.0);
    /// Player box dimensions
    pub const PLAYER_SIZE: DVec2 = DVec2::new(64.0, 64.0);
    /// Visible area, used by the camera
    pub const WINDOW_SIZE: DVec2 = DVec2::new(1280.0, 720.0);

    /// Where the player appears on start and restart
    pub const SPAWN_POS: DVec2 = DVec2::new(170.0, 500.0);

    /// Downward acceleration per tick (world Y grows downward)
    pub const GRAVITY: f64 = 0.75;
    /// Vertical velocity set by a jump
    pub const JUMP_VELOCITY: f64 = -21.0;
    /// Horizontal speed cap
    pub const MAX_RUN_SPEED: f64 = 8.0;

    /// Velocity retention and input gain while standing on ground
    pub const GROUND_DAMPING: f64 = 0.5;
    pub const GROUND_ACCEL: f64 = 4.0;
    /// Velocity retention and input gain while airborne
    pub const AIR_DAMPING: f64 = 0.95;
    pub const AIR_ACCEL: f64 = 2.0;

    /// Camera slack either side of the window center
    pub const CAMERA_SLACK: f64 = 100.0;
    /// Catch-up factor for the smooth camera
    pub const CAMERA_SMOOTHING: f64 = 0.05;
}
