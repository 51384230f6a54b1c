// search-index/src/error.rs
//! 构建错误：只有基础设施层面的失败才会中止整个构建

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("content root {path:?} does not exist or is not a directory")]
    MissingContentRoot { path: PathBuf },

    #[error("failed to walk {path:?}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid search index {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize search index")]
    Encode(#[from] serde_json::Error),

    #[error(
        "invalid configuration{}: {message}",
        .path.as_ref().map(|p| format!(" in {p:?}")).unwrap_or_default()
    )]
    Config {
        path: Option<PathBuf>,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, IndexError>;
