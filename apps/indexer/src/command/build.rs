//! 构建搜索索引命令

use super::Command;
use crate::error::{Result, WrapErr};
use search_index::{BuildReport, IndexBuilder, IndexerConfig};

pub struct BuildCommand {
    config: IndexerConfig,
}

impl BuildCommand {
    pub fn new(config: IndexerConfig) -> Self {
        Self { config }
    }

    /// Run the blocking build pass off the async runtime.
    pub async fn run(&self) -> Result<BuildReport> {
        let builder = IndexBuilder::new(self.config.clone());
        let report = tokio::task::spawn_blocking(move || builder.build())
            .await
            .wrap_err("Index build task panicked")?
            .wrap_err("Build search index error")?;
        Ok(report)
    }
}

#[async_trait::async_trait]
impl Command for BuildCommand {
    async fn execute(&self) -> Result<()> {
        tracing::debug!(
            content_root = ?self.config.content_root,
            output = ?self.config.output,
            "Building search index"
        );

        let report = self.run().await?;

        if !report.skipped.is_empty() {
            eprintln!(
                "⚠️  {} record(s) could not be parsed and were skipped (see warnings above)",
                report.skipped.len()
            );
        }
        println!(
            "✅ Search index built with {} entries from {} files -> {}",
            report.entries,
            report.files_scanned,
            report.output.display()
        );

        Ok(())
    }
}
