// search-index/src/models.rs
//! 数据模型定义

use std::fmt;

use literal::Literal;
use serde::{Deserialize, Serialize};

/// Score of a whole page or content record.
pub const PRIMARY_SCORE: f64 = 1.0;
/// Score of a single FAQ question/answer pair.
pub const FAQ_ITEM_SCORE: f64 = 0.8;

/// 搜索条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Page,
    Service,
    Blog,
    Faq,
    About,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Page => "page",
            EntryType::Service => "service",
            EntryType::Blog => "blog",
            EntryType::Faq => "faq",
            EntryType::About => "about",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// 索引文件中的一条记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub tags: Vec<String>,
    pub score: f64,
}

/// FAQ 问答对
#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    /// Position in the source `items` array, including skipped elements.
    pub index: usize,
    pub question: String,
    pub answer: String,
}

/// 从内容模块中提取出的一个导出对象
///
/// `title` and `description` are only set when both are non-empty strings,
/// so a record with `items` alone is still useful.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub items: Vec<FaqItem>,
}

impl ContentRecord {
    /// Returns `None` when the literal is not an object.
    pub fn from_literal(value: &Literal) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        let (title, description) = match (
            value.non_empty_str("title"),
            value.non_empty_str("description"),
        ) {
            (Some(t), Some(d)) => (Some(t.to_string()), Some(d.to_string())),
            _ => (None, None),
        };

        let tags = value.get("tags").and_then(Literal::as_array).map(|tags| {
            tags.iter()
                .filter_map(Literal::as_str)
                .map(str::to_string)
                .collect()
        });

        let items = value
            .get("items")
            .and_then(Literal::as_array)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        Some(FaqItem {
                            index,
                            question: item.non_empty_str("question")?.to_string(),
                            answer: item.non_empty_str("answer")?.to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            title,
            description,
            tags,
            items,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use literal::parse_literal;

    fn record(source: &str) -> ContentRecord {
        ContentRecord::from_literal(&parse_literal(source).unwrap()).unwrap()
    }

    #[test]
    fn test_title_and_description() {
        let r =
            record("{ title: 'Cloud', description: 'Managed cloud', tags: ['cloud', 3, 'aws'] }");
        assert_eq!(r.title.as_deref(), Some("Cloud"));
        assert_eq!(r.description.as_deref(), Some("Managed cloud"));
        assert_eq!(r.tags, Some(vec!["cloud".to_string(), "aws".to_string()]));
        assert!(r.items.is_empty());
    }

    #[test]
    fn test_title_without_description() {
        let r = record("{ title: 'Only title' }");
        assert_eq!(r.title, None);
        assert_eq!(r.description, None);
        assert!(r.is_empty());
    }

    #[test]
    fn test_items_keep_source_positions() {
        let r = record(
            "{ items: [ { question: 'Q0', answer: 'A0' }, { question: '', answer: 'A1' }, \
             { question: 'Q2', answer: 'A2' } ] }",
        );
        assert_eq!(r.title, None);
        assert_eq!(r.items.len(), 2);
        assert_eq!(r.items[0].index, 0);
        assert_eq!(r.items[1].index, 2);
        assert_eq!(r.items[1].question, "Q2");
    }

    #[test]
    fn test_non_array_tags_ignored() {
        let r = record("{ title: 'T', description: 'D', tags: 'cloud' }");
        assert_eq!(r.tags, None);
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(ContentRecord::from_literal(&Literal::Array(vec![])), None);
    }

    #[test]
    fn test_entry_serialization_shape() {
        let entry = SearchEntry {
            id: "cloud".into(),
            title: "Cloud".into(),
            description: "Managed cloud".into(),
            url: "/services/cloud".into(),
            kind: EntryType::Service,
            tags: vec!["cloud".into()],
            score: PRIMARY_SCORE,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "service");
        assert_eq!(json["score"], 1.0);
        assert!(json.get("kind").is_none());
    }
}
