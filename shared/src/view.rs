//! Derivation of the visible record list from search and sort inputs.

use crate::ema::EmaRecord;

/// Sort modes offered by the console toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmaSort {
    /// Creation time descending, the default.
    #[default]
    Newest,
    /// Creation time ascending.
    Oldest,
    /// Like count descending.
    Likes,
}

impl EmaSort {
    /// Stable identifier used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Likes => "likes",
        }
    }

    /// Parse a `<select>` value; anything unknown falls back to the default.
    pub fn parse(value: &str) -> Self {
        match value {
            "oldest" => Self::Oldest,
            "likes" => Self::Likes,
            _ => Self::Newest,
        }
    }
}

/// Filter `records` by a case-insensitive substring search over wish,
/// submitter name, and character name, then order by `sort`.
///
/// A blank search term passes every record; missing fields never match and
/// never error. Sorting is stable, so ties keep their fetched order, and
/// records with an unset creation time sort as the oldest possible value
/// in both time modes.
pub fn filter_and_sort(records: &[EmaRecord], search_term: &str, sort: EmaSort) -> Vec<EmaRecord> {
    let term = search_term.trim().to_lowercase();
    let mut view: Vec<EmaRecord> = records
        .iter()
        .filter(|record| matches_term(record, &term))
        .cloned()
        .collect();

    match sort {
        EmaSort::Newest => view.sort_by(|a, b| b.created_at_ms.cmp(&a.created_at_ms)),
        EmaSort::Oldest => view.sort_by(|a, b| a.created_at_ms.cmp(&b.created_at_ms)),
        EmaSort::Likes => view.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }

    view
}

fn matches_term(record: &EmaRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.wish.to_lowercase().contains(term)
        || record.name.to_lowercase().contains(term)
        || record
            .character
            .as_ref()
            .map(|character| character.name.to_lowercase().contains(term))
            .unwrap_or(false)
}

/// Parse a likes input into a count. Empty or non-numeric input is `0`,
/// never an error; drafts hold the raw string until save.
pub fn parse_likes(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Header statistics, always computed over the unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    /// Total number of records on the board.
    pub total: usize,
    /// Sum of like counts across all records.
    pub total_likes: u64,
    /// Number of records carrying a character reference.
    pub with_character: usize,
}

impl BoardStats {
    /// Collect statistics from the full fetched list.
    pub fn collect(records: &[EmaRecord]) -> Self {
        Self {
            total: records.len(),
            total_likes: records
                .iter()
                .map(|record| u64::from(record.likes))
                .sum(),
            with_character: records
                .iter()
                .filter(|record| record.character.is_some())
                .count(),
        }
    }
}

/// The single open edit session. At most one exists at a time; opening an
/// edit for another record replaces the previous draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmaDraft {
    /// Identifier of the record under edit.
    pub id: String,
    /// Draft wish text.
    pub wish: String,
    /// Draft submitter name.
    pub name: String,
    /// Draft like count, kept as the raw input string until save.
    pub likes: String,
}

impl EmaDraft {
    /// Seed a draft from the record's current values.
    pub fn seeded_from(record: &EmaRecord) -> Self {
        Self {
            id: record.id.clone(),
            wish: record.wish.clone(),
            name: record.name.clone(),
            likes: record.likes.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_and_sort, parse_likes, BoardStats, EmaDraft, EmaSort};
    use crate::ema::{CharacterRef, EmaRecord};

    fn record(id: &str, wish: &str, name: &str, likes: u32, created_at_ms: i64) -> EmaRecord {
        EmaRecord {
            id: id.to_string(),
            wish: wish.to_string(),
            name: name.to_string(),
            likes,
            created_at_ms,
            character: None,
        }
    }

    fn board() -> Vec<EmaRecord> {
        vec![
            record("a", "Pass the entrance exam", "Hana", 5, 300),
            record("b", "World peace", "Ren", 9, 100),
            EmaRecord {
                character: Some(CharacterRef {
                    name: "Okitsune".to_string(),
                }),
                ..record("c", "Good health", "", 2, 200)
            },
            record("d", "", "", 0, 0),
        ]
    }

    #[test]
    fn blank_search_passes_everything() {
        assert_eq!(filter_and_sort(&board(), "", EmaSort::Newest).len(), 4);
        assert_eq!(filter_and_sort(&board(), "   ", EmaSort::Newest).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let by_wish = filter_and_sort(&board(), "ENTRANCE", EmaSort::Newest);
        assert_eq!(by_wish.len(), 1);
        assert_eq!(by_wish[0].id, "a");

        let by_name = filter_and_sort(&board(), "ren", EmaSort::Newest);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "b");

        let by_character = filter_and_sort(&board(), "okitsune", EmaSort::Newest);
        assert_eq!(by_character.len(), 1);
        assert_eq!(by_character[0].id, "c");
    }

    #[test]
    fn records_without_matching_fields_are_simply_absent() {
        let view = filter_and_sort(&board(), "nothing-matches-this", EmaSort::Newest);
        assert!(view.is_empty());
    }

    #[test]
    fn likes_sort_is_descending() {
        let store = vec![record("a", "", "", 5, 1), record("b", "", "", 9, 2)];
        let view = filter_and_sort(&store, "", EmaSort::Likes);
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn likes_ties_keep_fetched_order() {
        let store = vec![
            record("first", "", "", 4, 3),
            record("second", "", "", 4, 1),
            record("third", "", "", 4, 2),
        ];
        let view = filter_and_sort(&store, "", EmaSort::Likes);
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn time_sorts_place_unset_creation_time_oldest() {
        let newest = filter_and_sort(&board(), "", EmaSort::Newest);
        assert_eq!(newest.last().map(|r| r.id.as_str()), Some("d"));

        let oldest = filter_and_sort(&board(), "", EmaSort::Oldest);
        assert_eq!(oldest.first().map(|r| r.id.as_str()), Some("d"));
        assert_eq!(oldest.last().map(|r| r.id.as_str()), Some("a"));
    }

    #[test]
    fn likes_input_normalizes_to_zero() {
        assert_eq!(parse_likes("abc"), 0);
        assert_eq!(parse_likes(""), 0);
        assert_eq!(parse_likes("-3"), 0);
        assert_eq!(parse_likes(" 12 "), 12);
    }

    #[test]
    fn stats_come_from_the_unfiltered_list() {
        let stats = BoardStats::collect(&board());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.total_likes, 16);
        assert_eq!(stats.with_character, 1);
    }

    #[test]
    fn draft_seeds_from_record_values() {
        let draft = EmaDraft::seeded_from(&record("a", "wish", "name", 7, 0));
        assert_eq!(draft.id, "a");
        assert_eq!(draft.wish, "wish");
        assert_eq!(draft.name, "name");
        assert_eq!(draft.likes, "7");
    }

    #[test]
    fn sort_mode_round_trips_through_select_values() {
        for sort in [EmaSort::Newest, EmaSort::Oldest, EmaSort::Likes] {
            assert_eq!(EmaSort::parse(sort.as_str()), sort);
        }
        assert_eq!(EmaSort::parse("garbage"), EmaSort::Newest);
    }
}
