// search-index/src/indexer.rs
//! 索引模块 - 扫描内容目录并生成搜索索引

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{IndexerConfig, WalkerConfig};
use crate::error::{IndexError, Result};
use crate::extract::{ContentFile, SkippedRecord, extract_file};
use crate::models::SearchEntry;

/// 一次构建的结果
#[derive(Debug)]
pub struct BuildReport {
    pub output: PathBuf,
    pub files_scanned: usize,
    pub entries: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// 索引构建器
pub struct IndexBuilder {
    config: IndexerConfig,
}

impl IndexBuilder {
    pub fn new(config: IndexerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Scan, extract and write the index in one pass.
    pub fn build(&self) -> Result<BuildReport> {
        let (entries, files_scanned, skipped) = self.collect_entries()?;
        write_index(&self.config.output, &entries)?;

        tracing::info!(
            "索引构建完成: {} 个文件, {} 条记录, 跳过 {} 个对象",
            files_scanned,
            entries.len(),
            skipped.len()
        );

        Ok(BuildReport {
            output: self.config.output.clone(),
            files_scanned,
            entries: entries.len(),
            skipped,
        })
    }

    /// Extract all entries without writing anything. Entries are sorted by
    /// `id`, then `url`; ties keep file order.
    pub fn collect_entries(&self) -> Result<(Vec<SearchEntry>, usize, Vec<SkippedRecord>)> {
        let root = &self.config.content_root;
        let files = collect_content_files(root, &self.config.walker)?;
        tracing::info!("正在扫描内容文件... (共 {} 个)", files.len());

        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        for path in &files {
            let file = ContentFile::new(root, path.clone(), &self.config.routes);
            tracing::debug!(path = ?file.relative, url = %file.route.url, "正在解析内容文件");

            let extraction = extract_file(&file);
            entries.extend(extraction.entries);
            skipped.extend(extraction.skipped);
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.url.cmp(&b.url)));
        Ok((entries, files.len(), skipped))
    }
}

/// List content files under `root` in sorted path order.
pub fn collect_content_files(root: &Path, walker: &WalkerConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IndexError::MissingContentRoot {
            path: root.to_path_buf(),
        });
    }

    let mut files = if walker.use_ignore_walker {
        walk_with_ignore(root, walker)?
    } else {
        walk_with_walkdir(root, walker)?
    };
    files.sort();
    Ok(files)
}

fn walk_with_ignore(root: &Path, walker: &WalkerConfig) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(walker.skip_hidden)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(true)
        .follow_links(walker.follow_symlinks);

    if walker.max_depth > 0 {
        builder.max_depth(Some(walker.max_depth));
    }

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = result.map_err(|e| IndexError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if entry.file_type().is_some_and(|t| t.is_file()) && walker.accepts(path) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn walk_with_walkdir(root: &Path, walker: &WalkerConfig) -> Result<Vec<PathBuf>> {
    let mut walk = WalkDir::new(root).follow_links(walker.follow_symlinks);
    if walker.max_depth > 0 {
        walk = walk.max_depth(walker.max_depth);
    }

    let skip_hidden = walker.skip_hidden;
    let mut files = Vec::new();
    for result in walk
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(skip_hidden && is_hidden(e.file_name())))
    {
        let entry = result.map_err(|e| IndexError::Walk {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_file() && walker.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Write the index as pretty JSON. The data goes to a sibling temporary file
/// first and is renamed over `output`, so readers never see a partial file.
pub fn write_index(output: &Path, entries: &[SearchEntry]) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|source| IndexError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let json = serde_json::to_string_pretty(entries)?;

    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "search-index.json".to_string());
    let tmp_path = dir.join(format!(".{file_name}.tmp"));

    let replaced = fs::File::create(&tmp_path).and_then(|mut tmp| {
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.sync_all()?;
        drop(tmp);
        fs::rename(&tmp_path, output)
    });

    if let Err(source) = replaced {
        // 失败时不留下临时文件
        let _ = fs::remove_file(&tmp_path);
        return Err(IndexError::Write {
            path: output.to_path_buf(),
            source,
        });
    }

    tracing::debug!("已写入索引文件: {:?}", output);
    Ok(())
}

/// 读取已生成的索引文件
pub fn load_index(path: &Path) -> Result<Vec<SearchEntry>> {
    let content = fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| IndexError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
