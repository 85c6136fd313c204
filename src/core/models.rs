use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};

/// One word card. `sequence` is the externally supplied numeric identity
/// from the word list; it is unique after loading but may be sparse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub sequence: u32,
    pub word: String,        // Source-language word shown and pronounced
    pub translation: String, // Japanese gloss used as the answer label
    pub part_of_speech: String,
}

/// Aggregate over a loaded dataset, recomputed on every (re)load.
/// Drives the default values of the filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub min_sequence: u32,
    pub max_sequence: u32,
    pub parts_of_speech: BTreeSet<String>,
}

/// User-chosen restriction on the dataset. `None` fields mean "no
/// restriction"; an inverted sequence range is swapped, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub sequence_start: Option<u32>,
    pub sequence_end: Option<u32>,
    pub parts_of_speech: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn normalized(&self) -> Self {
        let mut criteria = self.clone();
        if let (Some(start), Some(end)) = (criteria.sequence_start, criteria.sequence_end) {
            if start > end {
                criteria.sequence_start = Some(end);
                criteria.sequence_end = Some(start);
            }
        }
        criteria
    }

    pub fn matches(&self, entry: &VocabEntry) -> bool {
        if let Some(start) = self.sequence_start {
            if entry.sequence < start {
                return false;
            }
        }
        if let Some(end) = self.sequence_end {
            if entry.sequence > end {
                return false;
            }
        }
        if let Some(parts) = &self.parts_of_speech {
            if !parts.contains(&entry.part_of_speech) {
                return false;
            }
        }
        true
    }
}

/// One of the four answer buttons of a round. Rebuilt every round,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub sequence: u32,
    pub label: String,
    pub is_correct: bool,
}
