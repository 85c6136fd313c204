
use rand::seq::{
    IndexedRandom,
    SliceRandom,
};
use rand::Rng;

use crate::core::{
    QuizOption,
    VocabEntry,
};

/// A four-choice round needs the target plus three distractors.
pub const MIN_POOL: usize = 4;

const DISTRACTOR_COUNT: usize = 3;
const HISTORY_LIMIT: usize = 10;

/// Bounded memory of recently shown targets. Soft anti-repeat only: the
/// selector prefers unseen entries but never refuses to pick because of
/// the history.
#[derive(Debug, Default, Clone)]
pub struct RecentHistory {
    sequences: Vec<u32>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, sequence: u32) -> bool {
        self.sequences.contains(&sequence)
    }

    /// Front-push, de-duplicate, truncate to the most recent 10.
    pub fn record(&mut self, sequence: u32) {
        self.sequences.retain(|&s| s != sequence);
        self.sequences.insert(0, sequence);
        self.sequences.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.sequences.clear();
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Picks the next target uniformly from the pool entries not in the
/// history, falling back to the whole pool when everything has been
/// seen recently. Records the pick in the history.
///
/// The caller guarantees a non-empty pool; the session start gate
/// enforces this before any round exists.
pub fn select_next<'a, R: Rng + ?Sized>(
    pool: &'a [VocabEntry],
    history: &mut RecentHistory,
    rng: &mut R,
) -> &'a VocabEntry {
    let fresh: Vec<&VocabEntry> =
        pool.iter().filter(|e| !history.contains(e.sequence)).collect();

    let choice = if fresh.is_empty() {
        pool.choose(rng).expect("round selection requires a non-empty pool")
    } else {
        *fresh.choose(rng).expect("round selection requires a non-empty pool")
    };

    history.record(choice.sequence);
    choice
}

fn draw<'a, R: Rng + ?Sized>(
    candidates: &mut Vec<&'a VocabEntry>,
    rng: &mut R,
) -> &'a VocabEntry {
    let index = rng.random_range(0..candidates.len());
    candidates.swap_remove(index)
}

/// Builds the four answer options for `target`: the correct translation
/// plus three distractors drawn without replacement, preferring entries
/// with the target's part of speech before falling back to the rest of
/// the pool. The result is shuffled into presentation order.
///
/// With a pool of at least `MIN_POOL` entries (checked at session
/// start) this always yields exactly four distinct options.
pub fn build_options<R: Rng + ?Sized>(
    pool: &[VocabEntry],
    target: &VocabEntry,
    rng: &mut R,
) -> Vec<QuizOption> {
    let (mut same_pos, mut other_pos): (Vec<&VocabEntry>, Vec<&VocabEntry>) = pool
        .iter()
        .filter(|e| e.sequence != target.sequence)
        .partition(|e| e.part_of_speech == target.part_of_speech);

    let mut distractors: Vec<&VocabEntry> = Vec::with_capacity(DISTRACTOR_COUNT);
    while distractors.len() < DISTRACTOR_COUNT && !same_pos.is_empty() {
        distractors.push(draw(&mut same_pos, rng));
    }
    while distractors.len() < DISTRACTOR_COUNT && !other_pos.is_empty() {
        distractors.push(draw(&mut other_pos, rng));
    }

    let mut options: Vec<QuizOption> = Vec::with_capacity(1 + distractors.len());
    options.push(QuizOption {
        sequence: target.sequence,
        label: target.translation.clone(),
        is_correct: true,
    });
    for distractor in distractors {
        options.push(QuizOption {
            sequence: distractor.sequence,
            label: distractor.translation.clone(),
            is_correct: false,
        });
    }

    // rand's shuffle is an unbiased Fisher-Yates walk from the back.
    options.shuffle(rng);
    options
}
