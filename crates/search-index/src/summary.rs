// search-index/src/summary.rs
//! 索引统计，用于检查生成结果

use std::collections::BTreeMap;

use crate::models::{EntryType, SearchEntry};

#[derive(Debug, Default, PartialEq)]
pub struct IndexSummary {
    pub total: usize,
    pub by_type: BTreeMap<EntryType, usize>,
    /// Ids that appear more than once, with their counts.
    pub duplicate_ids: Vec<(String, usize)>,
}

impl IndexSummary {
    pub fn from_entries(entries: &[SearchEntry]) -> Self {
        let mut by_type = BTreeMap::new();
        let mut ids: BTreeMap<&str, usize> = BTreeMap::new();

        for entry in entries {
            *by_type.entry(entry.kind).or_insert(0) += 1;
            *ids.entry(entry.id.as_str()).or_insert(0) += 1;
        }

        let duplicate_ids = ids
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, count)| (id.to_string(), count))
            .collect();

        Self {
            total: entries.len(),
            by_type,
            duplicate_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, kind: EntryType) -> SearchEntry {
        SearchEntry {
            id: id.into(),
            title: "t".into(),
            description: "d".into(),
            url: "/".into(),
            kind,
            tags: vec![],
            score: 1.0,
        }
    }

    #[test]
    fn test_counts_and_duplicates() {
        let entries = vec![
            entry("content", EntryType::Service),
            entry("content", EntryType::Service),
            entry("general-0", EntryType::Faq),
            entry("team", EntryType::About),
        ];
        let summary = IndexSummary::from_entries(&entries);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.by_type.get(&EntryType::Service), Some(&2));
        assert_eq!(summary.by_type.get(&EntryType::Faq), Some(&1));
        assert_eq!(summary.by_type.get(&EntryType::Page), None);
        assert_eq!(summary.duplicate_ids, vec![("content".to_string(), 2)]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(IndexSummary::from_entries(&[]), IndexSummary::default());
    }
}
