use std::collections::HashMap;

use csv::{
    ReaderBuilder,
    StringRecord,
};

use crate::core::{
    TangoError,
    VocabEntry,
};

/// Accepted header spellings for each logical column. Word lists in the
/// wild use the legacy English headers, the localized Japanese ones, or
/// a mix, so each column is matched case-insensitively against its
/// synonym list.
///
/// Precedence is deterministic: synonyms are tried in declaration order
/// and the first header cell that matches wins; if the same synonym
/// appears in two cells, the leftmost cell wins.
const HEADER_SYNONYMS: &[(&str, &[&str])] = &[
    ("sequence", &["sequence", "seq", "no", "id", "番号"]),
    ("word", &["word", "english", "英単語", "英語", "単語"]),
    ("translation", &["translation", "japanese", "meaning", "日本語", "意味", "訳"]),
    ("part_of_speech", &["pos", "part_of_speech", "part of speech", "品詞"]),
];

/// Outcome counters for one load. Skipped rows are recoverable by
/// design: a bad line in a hand-maintained CSV should never take the
/// whole list down.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub loaded: usize,
    pub skipped: usize,
    pub duplicates: usize,
}

struct ColumnMap {
    sequence: usize,
    word: usize,
    translation: usize,
    part_of_speech: usize,
}

fn find_column(headers: &StringRecord, synonyms: &[&str]) -> Option<usize> {
    for synonym in synonyms {
        let hit = headers.iter().position(|h| h.trim().eq_ignore_ascii_case(synonym));
        if hit.is_some() {
            return hit;
        }
    }
    None
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnMap, TangoError> {
    let mut resolved: HashMap<&str, usize> = HashMap::new();
    let mut missing: Vec<&str> = Vec::new();

    for (name, synonyms) in HEADER_SYNONYMS {
        match find_column(headers, synonyms) {
            Some(index) => {
                resolved.insert(name, index);
            }
            None => missing.push(name),
        }
    }

    if !missing.is_empty() {
        return Err(TangoError::MissingHeader(missing.join(", ")));
    }

    Ok(ColumnMap {
        sequence: resolved["sequence"],
        word: resolved["word"],
        translation: resolved["translation"],
        part_of_speech: resolved["part_of_speech"],
    })
}

fn parse_row(record: &StringRecord, columns: &ColumnMap) -> Option<VocabEntry> {
    let field = |index: usize| -> Option<String> {
        let value = record.get(index)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };

    let sequence = field(columns.sequence)?.parse::<u32>().ok()?;
    let word = field(columns.word)?;
    let translation = field(columns.translation)?;
    let part_of_speech = field(columns.part_of_speech)?;

    Some(VocabEntry { sequence, word, translation, part_of_speech })
}

/// Parses CSV text into entries. Rows that fail to yield all four
/// non-empty fields (sequence numeric) are skipped and counted.
/// Duplicate sequences are merged with the later row winning, keeping
/// the position of the first occurrence.
pub fn parse_entries(text: &str) -> Result<(Vec<VocabEntry>, ParseReport), TangoError> {
    let mut reader =
        ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut report = ParseReport::default();
    let mut entries: Vec<VocabEntry> = Vec::new();
    let mut index_by_sequence: HashMap<u32, usize> = HashMap::new();

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => {
                report.skipped += 1;
                continue;
            }
        };

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        match parse_row(&record, &columns) {
            Some(entry) => match index_by_sequence.get(&entry.sequence) {
                Some(&slot) => {
                    entries[slot] = entry;
                    report.duplicates += 1;
                }
                None => {
                    index_by_sequence.insert(entry.sequence, entries.len());
                    entries.push(entry);
                }
            },
            None => report.skipped += 1,
        }
    }

    report.loaded = entries.len();
    if report.skipped > 0 || report.duplicates > 0 {
        log::debug!(
            "word list parsed: {} loaded, {} skipped, {} duplicates merged",
            report.loaded,
            report.skipped,
            report.duplicates
        );
    }

    Ok((entries, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_headers() {
        let csv = "sequence,word,japanese,pos\n1,cat,ねこ,noun\n2,run,はしる,verb\n";
        let (entries, report) = parse_entries(csv).unwrap();

        assert_eq!(report, ParseReport { loaded: 2, skipped: 0, duplicates: 0 });
        assert_eq!(entries[0].word, "cat");
        assert_eq!(entries[0].translation, "ねこ");
        assert_eq!(entries[1].part_of_speech, "verb");
    }

    #[test]
    fn parses_japanese_headers_in_any_order() {
        let csv = "品詞,日本語,英語,番号\nnoun,いぬ,dog,7\n";
        let (entries, _) = parse_entries(csv).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sequence, 7);
        assert_eq!(entries[0].word, "dog");
        assert_eq!(entries[0].translation, "いぬ");
        assert_eq!(entries[0].part_of_speech, "noun");
    }

    #[test]
    fn header_matching_ignores_case() {
        let csv = "Sequence,Word,Japanese,POS\n1,cat,ねこ,noun\n";
        let (entries, _) = parse_entries(csv).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_columns_name_every_missing_one() {
        let csv = "word,japanese\ncat,ねこ\n";
        let err = parse_entries(csv).unwrap_err();

        match err {
            TangoError::MissingHeader(missing) => {
                assert_eq!(missing, "sequence, part_of_speech");
            }
            other => panic!("expected MissingHeader, got {other:?}"),
        }
    }

    #[test]
    fn bad_rows_are_skipped_and_counted() {
        let csv = "seq,word,japanese,pos\n\
                   1,cat,ねこ,noun\n\
                   x,dog,いぬ,noun\n\
                   3,,はしる,verb\n\
                   4,jump,とぶ,verb\n";
        let (entries, report) = parse_entries(csv).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(entries[1].word, "jump");
    }

    #[test]
    fn later_duplicate_wins() {
        let csv = "seq,word,japanese,pos\n1,cat,ねこ,noun\n2,dog,いぬ,noun\n1,cat,ネコ,noun\n";
        let (entries, report) = parse_entries(csv).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(report.duplicates, 1);
        // The merged row keeps its original position but the later value.
        assert_eq!(entries[0].translation, "ネコ");
        assert_eq!(entries[1].word, "dog");
    }

    #[test]
    fn quoted_fields_with_commas_parse() {
        let csv = "seq,word,japanese,pos\n1,\"all, in all\",けっきょく,adverb\n";
        let (entries, _) = parse_entries(csv).unwrap();
        assert_eq!(entries[0].word, "all, in all");
    }
}
