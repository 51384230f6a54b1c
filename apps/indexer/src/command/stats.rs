//! 索引统计命令

use super::Command;
use crate::error::{Result, WrapErr};
use search_index::{IndexSummary, load_index};
use std::path::PathBuf;

pub struct StatsCommand {
    output: PathBuf,
}

impl StatsCommand {
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }
}

#[async_trait::async_trait]
impl Command for StatsCommand {
    async fn execute(&self) -> Result<()> {
        let entries = load_index(&self.output)
            .wrap_err_with(|| format!("Read search index {:?} error", self.output))?;
        let summary = IndexSummary::from_entries(&entries);

        println!("\n📊 {}", self.output.display());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for (kind, count) in &summary.by_type {
            println!("  {:<10} {}", kind, count);
        }
        println!("  {:<10} {}", "total", summary.total);

        if !summary.duplicate_ids.is_empty() {
            println!("\n⚠️  Duplicate ids:");
            for (id, count) in &summary.duplicate_ids {
                println!("  {} ×{}", id, count);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_index::{EntryType, SearchEntry, write_index};

    fn entry(id: &str, kind: EntryType) -> SearchEntry {
        SearchEntry {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            url: "/".to_string(),
            kind,
            tags: Vec::new(),
            score: 1.0,
        }
    }

    #[tokio::test]
    async fn test_stats_reads_index() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("search-index.json");
        write_index(
            &output,
            &[entry("a", EntryType::Page), entry("a", EntryType::Faq)],
        )
        .unwrap();

        StatsCommand::new(output).execute().await.unwrap();
    }

    #[tokio::test]
    async fn test_stats_missing_index_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = StatsCommand::new(dir.path().join("search-index.json"));
        assert!(cmd.execute().await.is_err());
    }
}
