//! Wall-clock to tick conversion
//!
//! The simulation runs at a fixed 50 ticks per second. The driver asks the
//! clock which whole ticks have elapsed since the last frame and runs each of
//! them in order.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use crate::consts::TICKS_PER_SECOND;
use crate::sim::{GameState, TickInput, TickOutcome, tick};

/// Tracks the last processed tick
#[derive(Debug, Clone)]
pub struct TickClock {
    start: Instant,
    last_tick: u64,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_tick: 0,
        }
    }

    pub fn last_tick(&self) -> u64 {
        self.last_tick
    }

    /// Tick number reached after `elapsed` wall-clock time
    pub fn tick_at(elapsed: Duration) -> u64 {
        (elapsed.as_secs_f64() * TICKS_PER_SECOND as f64) as u64
    }

    /// Ticks to run given the time elapsed since the clock started
    ///
    /// Returns `last + 1 ..= new`, which is empty when no whole tick has
    /// passed. A clock never hands out the same tick twice.
    pub fn advance(&mut self, elapsed: Duration) -> RangeInclusive<u64> {
        let new_tick = Self::tick_at(elapsed).max(self.last_tick);
        let range = self.last_tick + 1..=new_tick;
        self.last_tick = new_tick;
        range
    }

    /// [`advance`](Self::advance) using real time since construction
    pub fn advance_now(&mut self) -> RangeInclusive<u64> {
        self.advance(self.start.elapsed())
    }

    /// Run every pending tick with the same input
    pub fn run_pending(
        &mut self,
        elapsed: Duration,
        state: &mut GameState,
        input: &TickInput,
    ) -> Vec<TickOutcome> {
        self.advance(elapsed)
            .map(|now| tick(state, input, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TileGrid;

    #[test]
    fn test_tick_at() {
        assert_eq!(TickClock::tick_at(Duration::ZERO), 0);
        assert_eq!(TickClock::tick_at(Duration::from_millis(19)), 0);
        assert_eq!(TickClock::tick_at(Duration::from_millis(20)), 1);
        assert_eq!(TickClock::tick_at(Duration::from_secs(2)), 100);
    }

    #[test]
    fn test_advance_covers_every_tick_once() {
        let mut clock = TickClock::new();
        let mut seen = Vec::new();
        for ms in [0, 5, 45, 45, 61, 200, 199, 1000] {
            seen.extend(clock.advance(Duration::from_millis(ms)));
        }
        assert_eq!(seen, (1..=50).collect::<Vec<_>>());
        assert_eq!(clock.last_tick(), 50);
    }

    #[test]
    fn test_advance_without_elapsed_tick_is_empty() {
        let mut clock = TickClock::new();
        assert!(clock.advance(Duration::from_millis(10)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(40)), 1..=2);
    }

    #[test]
    fn test_run_pending_ticks_state() {
        let mut state = GameState::new(TileGrid::from_text("0").unwrap());
        let mut clock = TickClock::new();
        let outcomes = clock.run_pending(Duration::from_millis(100), &mut state, &TickInput::default());
        assert_eq!(outcomes.len(), 5);
        assert_eq!(state.time_ticks, 5);
    }
}
