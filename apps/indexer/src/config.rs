use crate::cli::{BuildArgs, OutputArgs};
use crate::error::{Result, WrapErr};
use search_index::IndexerConfig;
use std::path::Path;

/// Load the configuration file, falling back to defaults when it is absent.
pub fn load(path: &Path) -> Result<IndexerConfig> {
    IndexerConfig::load_or_default(path)
        .wrap_err_with(|| format!("Load configuration {:?} error", path))
}

/// Command-line flags take precedence over the configuration file.
pub fn apply_build_args(mut cfg: IndexerConfig, args: &BuildArgs) -> IndexerConfig {
    if let Some(root) = &args.content_root {
        cfg.content_root = root.clone();
    }
    apply_output_args(cfg, &args.output)
}

pub fn apply_output_args(mut cfg: IndexerConfig, args: &OutputArgs) -> IndexerConfig {
    if let Some(output) = &args.output {
        cfg.output = output.clone();
    }
    cfg
}
