//! Tile Dash entry point
//!
//! Headless runner: loads settings and a map, then drives a scripted player
//! through the track at a simulated 60 frames per second and records lap
//! times.
//!
//! Usage: `tile-dash [MAP_PATH] [TICKS]`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use tile_dash::consts::TICKS_PER_SECOND;
use tile_dash::settings::SETTINGS_FILE;
use tile_dash::sim::{GameState, LapEvent, TickInput, TileGrid, format_time_exact, tick};
use tile_dash::{LapRecords, Settings, TickClock};

/// Simulated render rate of the headless loop
const FRAMES_PER_SECOND: u32 = 60;
/// Run length when no tick count is given (one minute)
const DEFAULT_TICKS: u64 = 60 * TICKS_PER_SECOND;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Tile Dash (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = Settings::load(SETTINGS_FILE)?;
    let map_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.map_path.clone());
    let total_ticks = match args.next() {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid tick count {arg:?}"))?,
        None => DEFAULT_TICKS,
    };

    let map = TileGrid::load(&map_path)?;
    let map_name = map_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());

    let mut records = LapRecords::load(&settings.records_path)?;
    let mut state = GameState::new(map).with_camera_mode(settings.camera);

    let laps = run(&mut state, total_ticks);

    for ticks in &laps {
        if let Some(rank) = records.add_time(&map_name, *ticks) {
            log::info!("Lap {} ranks #{} on {}", format_time_exact(*ticks), rank, map_name);
        }
    }
    if !laps.is_empty() {
        records.save(&settings.records_path)?;
    }

    println!("Simulated {} ticks on {}", state.time_ticks, map_path.display());
    println!("Laps completed: {}", laps.len());
    for line in settings.hud_lines(&state.player.time, state.time_ticks) {
        println!("{line}");
    }
    if let Some(best) = records.best(&map_name) {
        println!("Record: {}", format_time_exact(best));
    }

    Ok(())
}

/// Drive the scripted player for `total_ticks` ticks, returning finished laps
///
/// The script holds right, jumps whenever it stands on ground and respawns
/// after crossing the finish.
fn run(state: &mut GameState, total_ticks: u64) -> Vec<u64> {
    let mut clock = TickClock::new();
    let mut laps = Vec::new();
    let mut respawn = false;
    let mut frame: u32 = 0;

    while clock.last_tick() < total_ticks {
        frame += 1;
        let elapsed = Duration::from_secs(1) * frame / FRAMES_PER_SECOND;

        for now in clock.advance(elapsed) {
            if now > total_ticks {
                break;
            }
            let input = TickInput {
                right: true,
                jump: state.on_ground(),
                restart: std::mem::take(&mut respawn),
                ..Default::default()
            };
            let outcome = tick(state, &input, now);
            if let Some(LapEvent::Finished { ticks, .. }) = outcome.lap {
                laps.push(ticks);
                respawn = true;
            }
        }
    }

    laps
}
