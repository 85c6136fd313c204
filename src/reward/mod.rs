use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{
    Local,
    NaiveDate,
};
use futures::future::BoxFuture;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::TangoError;
use crate::persistence;

pub const REWARD_HISTORY_FILE: &str = "reward_history.json";

/// Parameters of the completion confetti burst. The renderer clears its
/// canvas once the duration has elapsed; there is no cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiConfig {
    pub duration: Duration,
    pub particle_count: usize,
    /// Horizontal scatter in degrees around straight up.
    pub spread: f32,
    pub palette: Vec<String>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            particle_count: 80,
            spread: 70.0,
            palette: ["#ff5d8f", "#ffd166", "#06d6a0", "#4cc9f0", "#b388eb"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// Seam to the animation renderer. `celebrate` resolves after the
/// configured duration has elapsed and the effect is done.
pub trait RewardAnimator: Send + Sync {
    fn celebrate<'a>(&'a self, config: &'a ConfettiConfig) -> BoxFuture<'a, ()>;
}

/// Sticker awards grouped by calendar day. One sticker per word per
/// day; re-recording the same word on the same day is a no-op.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RewardHistory {
    days: BTreeMap<NaiveDate, Vec<u32>>,
}

impl RewardHistory {
    /// Missing or corrupt history loads as empty, never fails.
    pub fn load() -> Self {
        persistence::load_json_or_default(REWARD_HISTORY_FILE)
    }

    pub fn save(&self) -> Result<(), TangoError> {
        persistence::save_json(self, REWARD_HISTORY_FILE)
    }

    pub fn record(&mut self, day: NaiveDate, sequence: u32) -> bool {
        let stickers = self.days.entry(day).or_default();
        if stickers.contains(&sequence) {
            false
        } else {
            stickers.push(sequence);
            true
        }
    }

    pub fn record_today(&mut self, sequence: u32) -> bool {
        self.record(Local::now().date_naive(), sequence)
    }

    pub fn stickers_on(&self, day: NaiveDate) -> &[u32] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<u32>)> {
        self.days.iter()
    }

    pub fn total_stickers(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}
