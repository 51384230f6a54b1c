//! 删除生成的索引文件

use super::Command;
use crate::error::{Result, WrapErr};
use std::fs;
use std::path::PathBuf;

pub struct CleanCommand {
    output: PathBuf,
}

impl CleanCommand {
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if bytes >= MB {
            format!("{:.2} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.2} KB", bytes as f64 / KB as f64)
        } else {
            format!("{} bytes", bytes)
        }
    }
}

#[async_trait::async_trait]
impl Command for CleanCommand {
    async fn execute(&self) -> Result<()> {
        let metadata = match fs::metadata(&self.output) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("⏭️  {} does not exist, nothing to remove", self.output.display());
                return Ok(());
            }
            Err(e) => return Err(e).wrap_err_with(|| format!("Inspect {:?} error", self.output)),
        };

        fs::remove_file(&self.output)
            .wrap_err_with(|| format!("Remove {:?} error", self.output))?;
        println!(
            "🗑️  Removed {} ({})",
            self.output.display(),
            Self::format_size(metadata.len())
        );

        Ok(())
    }
}
