// search-index/src/lib.rs
//! 站内搜索索引构建库
//!
//! 扫描内容模块目录，解析其中导出的对象字面量，生成供前端使用的
//! 静态 JSON 搜索索引：
//! - 按目录判断内容类别和 URL
//! - 单个对象解析失败只记录警告，不影响整体构建
//! - 输出按 id 排序，重复构建结果一致

pub mod config;
pub mod error;
pub mod extract;
pub mod indexer;
pub mod models;
pub mod routes;
pub mod summary;

// 重导出核心类型
pub use config::{IndexerConfig, RouteConfig, WalkerConfig};
pub use error::{IndexError, Result};
pub use extract::{
    ContentFile, FileExtraction, SkippedRecord, entries_for_record, extract_entries, extract_file,
};
pub use indexer::{BuildReport, IndexBuilder, collect_content_files, load_index, write_index};
pub use models::{ContentRecord, EntryType, FAQ_ITEM_SCORE, FaqItem, PRIMARY_SCORE, SearchEntry};
pub use routes::{ContentFamily, Route, classify, section_id, service_slug};
pub use summary::IndexSummary;
