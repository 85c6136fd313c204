use std::time::Duration;

use rand::Rng;

use crate::core::TangoError;
use crate::persistence;

/// How long the gate button must be held before the answer counts.
pub const HOLD_DURATION: Duration = Duration::from_secs(3);

/// The parent-panel gate: hold a button for three seconds and answer a
/// small addition question. Both checks must pass. The UI supplies the
/// measured hold time and the typed answer; this type only owns the
/// question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateChallenge {
    left: u8,
    right: u8,
}

impl GateChallenge {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { left: rng.random_range(1..=4), right: rng.random_range(1..=5) }
    }

    pub fn prompt(&self) -> String {
        format!("{} + {} = ?", self.left, self.right)
    }

    pub fn unlock(&self, held_for: Duration, answer: i32) -> bool {
        held_for >= HOLD_DURATION && answer == i32::from(self.left) + i32::from(self.right)
    }
}

/// Wholesale reset from the parent panel: stickers, settings and the
/// reward history all go at once.
pub fn reset_all() -> Result<(), TangoError> {
    persistence::delete_data_file(persistence::STICKERS_FILE)?;
    persistence::delete_data_file(persistence::SETTINGS_FILE)?;
    persistence::delete_data_file(crate::reward::REWARD_HISTORY_FILE)?;
    Ok(())
}
