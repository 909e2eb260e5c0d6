//! Best lap leaderboard
//!
//! Persisted to a JSON file, tracks the 10 fastest laps per map.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::persistence::{read_json, write_json};

/// Maximum number of laps kept per map
pub const MAX_RECORDS_PER_MAP: usize = 10;

/// A single recorded lap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapRecordEntry {
    /// Map the lap was driven on
    pub map: String,
    /// Lap duration in ticks
    pub ticks: u64,
}

/// Lap leaderboard, sorted ascending by time within each map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapRecords {
    pub entries: Vec<LapRecordEntry>,
}

impl LapRecords {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Laps recorded for one map, fastest first
    pub fn for_map<'a>(&'a self, map: &'a str) -> impl Iterator<Item = &'a LapRecordEntry> + 'a {
        self.entries.iter().filter(move |e| e.map == map)
    }

    /// Fastest lap on a map
    pub fn best(&self, map: &str) -> Option<u64> {
        self.for_map(map).next().map(|e| e.ticks)
    }

    /// Check if a lap time makes the table for its map
    pub fn qualifies(&self, map: &str, ticks: u64) -> bool {
        self.for_map(map)
            .nth(MAX_RECORDS_PER_MAP - 1)
            .is_none_or(|slowest| ticks < slowest.ticks)
    }

    /// Rank a lap would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, map: &str, ticks: u64) -> Option<usize> {
        if !self.qualifies(map, ticks) {
            return None;
        }
        Some(self.for_map(map).filter(|e| e.ticks <= ticks).count() + 1)
    }

    /// Add a lap to the table (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_time(&mut self, map: &str, ticks: u64) -> Option<usize> {
        let rank = self.potential_rank(map, ticks)?;

        // Insert after every entry of this map that is not slower
        let pos = self
            .entries
            .iter()
            .position(|e| e.map == map && e.ticks > ticks)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            pos,
            LapRecordEntry {
                map: map.to_string(),
                ticks,
            },
        );

        // Trim this map's table to the max size
        let mut kept = 0;
        self.entries.retain(|e| {
            if e.map != map {
                return true;
            }
            kept += 1;
            kept <= MAX_RECORDS_PER_MAP
        });

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load records, starting fresh when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        match read_json::<LapRecords>(path)? {
            Some(records) => {
                log::info!("Loaded {} lap records", records.entries.len());
                Ok(records)
            }
            None => {
                log::info!("No lap records found, starting fresh");
                Ok(Self::new())
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        write_json(path.as_ref(), self)?;
        log::info!("Lap records saved ({} entries)", self.entries.len());
        Ok(())
    }
}
