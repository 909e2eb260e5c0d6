//! Fixed timestep simulation tick
//!
//! One call advances the player by exactly one tick: kinematics, collision,
//! camera, then lap timing.

use super::collision::{CollisionSet, move_box};
use super::lap::LapEvent;
use super::lap::format_time_exact;
use super::map::TileGrid;
use super::state::{GameState, Player};
use crate::consts::*;

/// Logical actions held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Back to spawn, lap cleared
    pub restart: bool,
}

impl TickInput {
    /// Horizontal input in {-1, 0, 1}
    pub fn direction(&self) -> f64 {
        f64::from(u8::from(self.right)) - f64::from(u8::from(self.left))
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    pub collisions: CollisionSet,
    pub lap: Option<LapEvent>,
}

/// Integrate input and gravity, then move the player through the map
pub fn physics(player: &mut Player, input: &TickInput, map: &TileGrid) -> CollisionSet {
    if input.restart {
        log::debug!("Player restarted");
        player.restart();
    }

    let body = &mut player.body;
    let ground = map.on_ground(body.pos, PLAYER_SIZE);

    if input.jump && ground {
        body.vel.y = JUMP_VELOCITY;
    }

    let direction = input.direction();

    body.vel.y += GRAVITY;
    body.vel.x = if ground {
        GROUND_DAMPING * body.vel.x + GROUND_ACCEL * direction
    } else {
        AIR_DAMPING * body.vel.x + AIR_ACCEL * direction
    };
    body.vel.x = body.vel.x.max(-MAX_RUN_SPEED).min(MAX_RUN_SPEED);

    let result = move_box(body.pos, body.vel, PLAYER_SIZE, map);
    body.pos = result.pos;
    body.vel = result.vel;
    result.hits
}

/// Update lap timing from the tile under the player
pub fn logic(state: &mut GameState, tick: u64) -> Option<LapEvent> {
    let tile = state.map.tile_at(state.player.body.pos);
    let was_running = state.player.time.is_running();
    let event = state.player.time.update(tile, tick);

    match event {
        Some(LapEvent::Started { tick }) if !was_running => {
            log::debug!("Lap armed at tick {}", tick);
        }
        Some(LapEvent::Finished { ticks, new_best }) => {
            log::info!(
                "Lap finished in {}{}",
                format_time_exact(ticks),
                if new_best { " (new best)" } else { "" }
            );
        }
        _ => {}
    }

    event
}

/// Advance the game state by one fixed tick
///
/// `now` must be strictly greater than the previous call's.
pub fn tick(state: &mut GameState, input: &TickInput, now: u64) -> TickOutcome {
    debug_assert!(
        now > state.time_ticks || state.time_ticks == 0,
        "ticks must be processed in increasing order"
    );

    let collisions = physics(&mut state.player, input, &state.map);
    state
        .camera
        .follow(state.player.body.pos, state.camera_mode);
    let lap = logic(state, now);
    state.time_ticks = now;

    TickOutcome { collisions, lap }
}
