use std::collections::HashSet;

use crate::PageEntry;

/// Keeps the first entry for each distinct location, preserving discovery order.
#[must_use]
pub fn dedup_by_location(entries: Vec<PageEntry>) -> Vec<PageEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.location.clone()))
        .collect()
}

/// Orders entries by descending priority. The sort is stable, so entries of equal
/// priority keep their relative order.
pub fn sort_by_priority(entries: &mut [PageEntry]) {
    entries.sort_by(|left, right| right.priority.cmp(&left.priority));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeFrequency, Priority};
    use spectral::prelude::*;

    fn entry(location: &str, tenths: u8, title: &str) -> PageEntry {
        PageEntry {
            location: location.to_string(),
            last_modified: "2024-01-01T00:00:00+00:00".to_string(),
            change_frequency: ChangeFrequency::Monthly,
            priority: Priority::from_tenths(tenths).expect("Invalid priority"),
            title: title.to_string(),
        }
    }

    fn locations(entries: &[PageEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.location.as_str()).collect()
    }

    #[test]
    fn first_occurrence_wins() {
        let unique = dedup_by_location(vec![
            entry("a", 7, "first"),
            entry("b", 9, "b"),
            entry("a", 9, "second"),
        ]);

        assert_that(&locations(&unique)).is_equal_to(vec!["a", "b"]);
        assert_that(&unique.first().map(|e| e.title.as_str())).is_equal_to(Some("first"));
    }

    #[test]
    fn dedup_is_idempotent() {
        let once = dedup_by_location(vec![entry("a", 7, ""), entry("a", 7, ""), entry("b", 8, "")]);
        let twice = dedup_by_location(once.clone());

        assert_that(&twice).is_equal_to(once);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut entries = vec![
            entry("low", 6, ""),
            entry("first-seven", 7, ""),
            entry("root", 10, ""),
            entry("second-seven", 7, ""),
            entry("nine", 9, ""),
            entry("third-seven", 7, ""),
        ];
        sort_by_priority(&mut entries);

        assert_that(&locations(&entries)).is_equal_to(vec![
            "root",
            "nine",
            "first-seven",
            "second-seven",
            "third-seven",
            "low",
        ]);
    }
}
