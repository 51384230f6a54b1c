// search-index/src/extract.rs
//! 内容提取模块
//!
//! 单个导出对象解析失败只会跳过该对象，不会影响同一文件或其他文件。

use std::fs;
use std::path::{Path, PathBuf};

use literal::exported_objects;

use crate::config::RouteConfig;
use crate::models::{ContentRecord, EntryType, FAQ_ITEM_SCORE, PRIMARY_SCORE, SearchEntry};
use crate::routes::{Route, base_name, classify, section_id};

/// 一个待处理的内容文件
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFile {
    pub path: PathBuf,
    pub relative: PathBuf,
    /// File base name without extension.
    pub id: String,
    pub route: Route,
}

impl ContentFile {
    pub fn new(content_root: &Path, path: PathBuf, routes: &RouteConfig) -> Self {
        let relative = path
            .strip_prefix(content_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        let route = classify(&relative, routes);
        Self {
            id: base_name(&path),
            path,
            relative,
            route,
        }
    }
}

/// 被跳过的导出对象
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub path: PathBuf,
    /// `None` when the whole file could not be read or decoded.
    pub export: Option<String>,
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct FileExtraction {
    pub entries: Vec<SearchEntry>,
    pub skipped: Vec<SkippedRecord>,
}

/// Read a content file and turn its exported objects into search entries.
///
/// A file that cannot be read or decoded is reported as a skipped record so
/// the rest of the batch still builds.
pub fn extract_file(file: &ContentFile) -> FileExtraction {
    let bytes = match fs::read(&file.path) {
        Ok(bytes) => bytes,
        Err(e) => return skip_file(file, format!("file could not be read: {e}")),
    };

    match String::from_utf8(bytes) {
        Ok(source) => extract_entries(file, &source),
        Err(e) => skip_file(file, format!("file is not valid UTF-8: {e}")),
    }
}

fn skip_file(file: &ContentFile, reason: String) -> FileExtraction {
    let skipped = SkippedRecord {
        path: file.path.clone(),
        export: None,
        line: 0,
        reason,
    };
    tracing::warn!(path = ?skipped.path, reason = %skipped.reason, "跳过内容文件");
    FileExtraction {
        entries: Vec::new(),
        skipped: vec![skipped],
    }
}

pub fn extract_entries(file: &ContentFile, source: &str) -> FileExtraction {
    let mut extraction = FileExtraction::default();

    for export in exported_objects(source) {
        match export.value {
            Ok(value) => {
                let Some(record) = ContentRecord::from_literal(&value) else {
                    continue;
                };
                if record.is_empty() {
                    tracing::debug!(
                        path = ?file.path,
                        export = %export.name,
                        "导出对象不含可索引字段"
                    );
                    continue;
                }
                extraction.entries.extend(entries_for_record(file, &record));
            }
            Err(e) => {
                tracing::warn!(
                    path = ?file.path,
                    export = %export.name,
                    line = export.line,
                    reason = %e,
                    "跳过无法解析的导出对象"
                );
                extraction.skipped.push(SkippedRecord {
                    path: file.path.clone(),
                    export: Some(export.name),
                    line: export.line,
                    reason: e.to_string(),
                });
            }
        }
    }

    extraction
}

/// One primary entry when the record has a title and description, plus one
/// entry per FAQ item.
pub fn entries_for_record(file: &ContentFile, record: &ContentRecord) -> Vec<SearchEntry> {
    let mut entries = Vec::with_capacity(1 + record.items.len());

    if let (Some(title), Some(description)) = (&record.title, &record.description) {
        entries.push(SearchEntry {
            id: file.id.clone(),
            title: title.clone(),
            description: description.clone(),
            url: file.route.url.clone(),
            kind: file.route.family.entry_type(),
            tags: record
                .tags
                .clone()
                .unwrap_or_else(|| file.route.family.default_tags()),
            score: PRIMARY_SCORE,
        });
    }

    let section = section_id(&file.id);
    for item in &record.items {
        entries.push(SearchEntry {
            id: format!("{section}-{}", item.index),
            title: item.question.clone(),
            description: item.answer.clone(),
            url: format!("{}#{section}", file.route.url),
            kind: EntryType::Faq,
            tags: vec!["faq".to_string(), "question".to_string(), "answer".to_string()],
            score: FAQ_ITEM_SCORE,
        });
    }

    entries
}
