//! Lap timing driven by the START and FINISH tiles

use serde::{Deserialize, Serialize};

use super::map::{FINISH, START, TileId};
use crate::consts::TICKS_PER_SECOND;

/// What a lap timer update changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapEvent {
    /// START touched; the lap (re)starts at this tick
    Started { tick: u64 },
    /// FINISH reached while a lap was running
    Finished { ticks: u64, new_best: bool },
}

/// Per-player lap state
///
/// `begin` is set while a lap is running, `finish` holds the duration of the
/// last completed lap and `best` the shortest one so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapTimer {
    pub begin: Option<u64>,
    pub finish: Option<u64>,
    pub best: Option<u64>,
}

impl LapTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.begin.is_some()
    }

    /// Clear the current lap, keeping the best time
    pub fn reset(&mut self) {
        self.begin = None;
        self.finish = None;
    }

    /// Apply the tile the player occupies at `tick`
    pub fn update(&mut self, tile: TileId, tick: u64) -> Option<LapEvent> {
        match tile {
            START => {
                self.begin = Some(tick);
                Some(LapEvent::Started { tick })
            }
            FINISH => {
                let begin = self.begin.take()?;
                let ticks = tick.saturating_sub(begin);
                self.finish = Some(ticks);
                let new_best = self.best.is_none_or(|best| ticks < best);
                if new_best {
                    self.best = Some(ticks);
                }
                Some(LapEvent::Finished { ticks, new_best })
            }
            _ => None,
        }
    }

    /// Running clock, or the last result once a lap is done
    pub fn timer_text(&self, now: u64) -> Option<String> {
        if let Some(begin) = self.begin {
            Some(format_time_exact(now.saturating_sub(begin)))
        } else {
            self.finish
                .map(|finish| format!("Finished in: {}", format_time_exact(finish)))
        }
    }

    pub fn best_text(&self) -> Option<String> {
        self.best
            .map(|best| format!("Best time: {}", format_time_exact(best)))
    }
}

/// Format ticks as `MM:SS`
pub fn format_time(ticks: u64) -> String {
    let secs = ticks / TICKS_PER_SECOND;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format ticks as `MM:SS:CC` (hundredths)
pub fn format_time_exact(ticks: u64) -> String {
    let cents = (ticks % TICKS_PER_SECOND) * (100 / TICKS_PER_SECOND);
    format!("{}:{:02}", format_time(ticks), cents)
}
