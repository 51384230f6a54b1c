// search-index/src/config.rs
//! 配置模块

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// 索引构建配置
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct IndexerConfig {
    /// 内容模块根目录
    pub content_root: PathBuf,
    /// 输出的 JSON 索引文件
    pub output: PathBuf,
    pub walker: WalkerConfig,
    pub routes: RouteConfig,
}

/// Walker 配置
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct WalkerConfig {
    /// 使用 ignore 的遍历器（遵守 .ignore 规则），否则使用 walkdir
    pub use_ignore_walker: bool,
    pub skip_hidden: bool,
    pub follow_symlinks: bool,
    /// 0 表示不限制
    pub max_depth: usize,
    pub extensions: Vec<String>,
}

/// URL 路由配置
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RouteConfig {
    pub faq_url: String,
    pub home_url: String,
    /// 服务目录名 -> URL slug，优先于内置表
    pub services: BTreeMap<String, String>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("src/content"),
            output: PathBuf::from("public/search-index.json"),
            walker: WalkerConfig::default(),
            routes: RouteConfig::default(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            use_ignore_walker: false,
            skip_hidden: true,
            follow_symlinks: false,
            max_depth: 0,
            extensions: vec!["ts".to_string(), "js".to_string()],
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            faq_url: "/insites/faq".to_string(),
            home_url: "/".to_string(),
            services: BTreeMap::new(),
        }
    }
}

impl WalkerConfig {
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(&ext))
            })
    }
}

impl IndexerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, IndexError> {
        toml::from_str(content).map_err(|e| IndexError::Config {
            path: None,
            message: e.to_string(),
        })
    }

    /// 从 TOML 文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| IndexError::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// 文件不存在时使用默认值，其余错误照常返回
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("配置文件 {:?} 不存在，使用默认配置", path);
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(IndexerConfig::from_toml_str("").unwrap(), IndexerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let cfg = IndexerConfig::from_toml_str(
            r#"
content-root = "content"

[walker]
extensions = ["ts", "tsx"]

[routes.services]
"data-and-analytics" = "analytics"
"#,
        )
        .unwrap();
        assert_eq!(cfg.content_root, PathBuf::from("content"));
        assert_eq!(cfg.output, PathBuf::from("public/search-index.json"));
        assert_eq!(cfg.walker.extensions, vec!["ts", "tsx"]);
        assert!(cfg.walker.skip_hidden);
        assert_eq!(cfg.routes.faq_url, "/insites/faq");
        assert_eq!(
            cfg.routes.services.get("data-and-analytics").map(String::as_str),
            Some("analytics")
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = IndexerConfig::from_toml_str("contnet-root = 'x'").unwrap_err();
        assert!(matches!(err, IndexError::Config { path: None, .. }));
    }

    #[test]
    fn test_extension_filter() {
        let walker = WalkerConfig::default();
        assert!(walker.accepts(Path::new("a/b/content.ts")));
        assert!(walker.accepts(Path::new("a/b/content.JS")));
        assert!(!walker.accepts(Path::new("a/b/README.md")));
        assert!(!walker.accepts(Path::new("a/b/Makefile")));
    }
}
