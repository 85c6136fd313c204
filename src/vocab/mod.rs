pub mod reader;

pub use reader::ParseReport;

use crate::core::{
    DatasetSummary,
    FilterCriteria,
    TangoError,
    VocabEntry,
};

/// Owns the entries of one loaded word list. A re-load replaces the
/// whole dataset; nothing is merged across loads.
#[derive(Debug, Default, Clone)]
pub struct VocabStore {
    entries: Vec<VocabEntry>,
}

impl VocabStore {
    pub fn from_csv_str(text: &str) -> Result<(Self, ParseReport), TangoError> {
        let (entries, report) = reader::parse_entries(text)?;
        Ok((VocabStore { entries }, report))
    }

    pub fn from_csv_file(path: impl AsRef<std::path::Path>) -> Result<(Self, ParseReport), TangoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| TangoError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;
        Self::from_csv_str(&text)
    }

    /// Wholesale replacement. On a parse failure the previous dataset is
    /// kept untouched.
    pub fn reload_from_csv_str(&mut self, text: &str) -> Result<ParseReport, TangoError> {
        let (entries, report) = reader::parse_entries(text)?;
        self.entries = entries;
        Ok(report)
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `None` on an empty store; the filter inputs have nothing to
    /// default to without data.
    pub fn summary(&self) -> Option<DatasetSummary> {
        let first = self.entries.first()?;

        let mut min_sequence = first.sequence;
        let mut max_sequence = first.sequence;
        let mut parts_of_speech = std::collections::BTreeSet::new();

        for entry in &self.entries {
            min_sequence = min_sequence.min(entry.sequence);
            max_sequence = max_sequence.max(entry.sequence);
            parts_of_speech.insert(entry.part_of_speech.clone());
        }

        Some(DatasetSummary { min_sequence, max_sequence, parts_of_speech })
    }

    /// Snapshot of the entries matching the criteria. The session takes
    /// its own copy so a filter change mid-session cannot shift the pool
    /// under it.
    pub fn filtered_pool(&self, criteria: &FilterCriteria) -> Vec<VocabEntry> {
        let criteria = criteria.normalized();
        self.entries.iter().filter(|e| criteria.matches(e)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "seq,word,japanese,pos\n\
                          1,cat,ねこ,noun\n\
                          2,dog,いぬ,noun\n\
                          3,run,はしる,verb\n\
                          4,jump,とぶ,verb\n\
                          5,big,おおきい,adjective\n";

    #[test]
    fn summary_covers_range_and_parts() {
        let (store, _) = VocabStore::from_csv_str(SAMPLE).unwrap();
        let summary = store.summary().unwrap();

        assert_eq!(summary.min_sequence, 1);
        assert_eq!(summary.max_sequence, 5);
        assert_eq!(summary.parts_of_speech.len(), 3);
        assert!(summary.parts_of_speech.contains("adjective"));
    }

    #[test]
    fn empty_store_has_no_summary() {
        let store = VocabStore::default();
        assert!(store.summary().is_none());
    }

    #[test]
    fn filtered_pool_applies_range_and_pos() {
        let (store, _) = VocabStore::from_csv_str(SAMPLE).unwrap();

        let criteria = FilterCriteria {
            sequence_start: Some(2),
            sequence_end: Some(4),
            parts_of_speech: Some(["verb".to_string()].into_iter().collect()),
        };

        let pool = store.filtered_pool(&criteria);
        let sequences: Vec<u32> = pool.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![3, 4]);
    }

    #[test]
    fn reload_replaces_everything() {
        let (mut store, _) = VocabStore::from_csv_str(SAMPLE).unwrap();
        store.reload_from_csv_str("seq,word,japanese,pos\n9,sun,たいよう,noun\n").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].sequence, 9);
    }

    #[test]
    fn failed_reload_keeps_previous_dataset() {
        let (mut store, _) = VocabStore::from_csv_str(SAMPLE).unwrap();
        let result = store.reload_from_csv_str("word,japanese\ncat,ねこ\n");

        assert!(result.is_err());
        assert_eq!(store.len(), 5);
    }
}
