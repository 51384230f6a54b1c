// search-index/src/routes.rs
//! 内容分类与 URL 路由
//!
//! 根据文件相对于内容根目录的路径，决定内容类别和规范 URL。

use std::path::{Component, Path};

use crate::config::RouteConfig;
use crate::models::EntryType;

pub const SERVICE_PAGES_DIR: &str = "service-pages";
pub const ABOUT_PAGES_DIR: &str = "about-pages";
pub const FAQ_PAGE_DIR: &str = "faq-page";

/// Known service directories and their URL slugs.
///
/// Every entry must agree with [`service_slug_rule`]; the table exists so that
/// new services can be pinned to a slug explicitly.
pub const SERVICE_ROUTES: &[(&str, &str)] = &[
    ("ai-and-automation-solutions", "ai-automation"),
    ("cloud-solutions", "cloud"),
    ("custom-software-development", "custom-software-dev"),
    ("data-and-analytics-solutions", "data-analytics"),
    ("web-and-app-development", "web-app-dev"),
];

/// 内容类别
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFamily {
    Service { key: String },
    About { key: String },
    Faq,
    Page,
}

impl ContentFamily {
    pub fn entry_type(&self) -> EntryType {
        match self {
            ContentFamily::Service { .. } => EntryType::Service,
            ContentFamily::About { .. } => EntryType::About,
            ContentFamily::Faq => EntryType::Faq,
            ContentFamily::Page => EntryType::Page,
        }
    }

    /// Tags used when a record carries none of its own.
    pub fn default_tags(&self) -> Vec<String> {
        let family = self.entry_type().as_str().to_string();
        match self {
            ContentFamily::Service { key } => vec![key.clone(), family],
            _ => vec![family],
        }
    }
}

/// 文件的路由信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub family: ContentFamily,
    pub url: String,
}

/// Canonical slug for a service directory: `-and-` becomes `-`, a trailing
/// `-solutions` is dropped and `-development` is shortened to `-dev`.
pub fn service_slug_rule(key: &str) -> String {
    let slug = key.replace("-and-", "-");
    let slug = slug.strip_suffix("-solutions").unwrap_or(&slug);
    slug.replace("-development", "-dev")
}

/// Resolve the URL slug of a service: configured override, then the
/// built-in table, then the rule.
pub fn service_slug(key: &str, routes: &RouteConfig) -> String {
    if let Some(slug) = routes.services.get(key) {
        return slug.clone();
    }
    SERVICE_ROUTES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, slug)| slug.to_string())
        .unwrap_or_else(|| service_slug_rule(key))
}

pub fn about_slug(key: &str) -> &str {
    key.strip_suffix("-page").unwrap_or(key)
}

/// Classify a file by its path relative to the content root.
pub fn classify(relative: &Path, routes: &RouteConfig) -> Route {
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let top = segments.first().map(String::as_str).unwrap_or_default();
    let key = segment_key(&segments);

    match top {
        SERVICE_PAGES_DIR if !key.is_empty() => {
            let url = format!("/services/{}", service_slug(&key, routes));
            Route {
                family: ContentFamily::Service { key },
                url,
            }
        }
        ABOUT_PAGES_DIR if !key.is_empty() => Route {
            url: format!("/about/{}", about_slug(&key)),
            family: ContentFamily::About { key },
        },
        FAQ_PAGE_DIR => Route {
            family: ContentFamily::Faq,
            url: routes.faq_url.clone(),
        },
        _ => Route {
            family: ContentFamily::Page,
            url: routes.home_url.clone(),
        },
    }
}

/// Second path segment. When it is the file itself its extension is dropped.
fn segment_key(segments: &[String]) -> String {
    match segments {
        [_, file] => Path::new(file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        [_, dir, ..] => dir.clone(),
        _ => String::new(),
    }
}

/// Base name of a content file without its extension.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Fragment id for FAQ entries: the base name without trailing
/// `-content` / `-faq` suffixes.
pub fn section_id(base_name: &str) -> &str {
    let mut id = base_name;
    loop {
        if let Some(stripped) = id.strip_suffix("-content") {
            id = stripped;
        } else if let Some(stripped) = id.strip_suffix("-faq") {
            id = stripped;
        } else {
            return id;
        }
    }
}
