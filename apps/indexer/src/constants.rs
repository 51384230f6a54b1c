pub const NAME: &str = "build-search-index";
pub const CONFIG_FILE_NAME: &str = "search-index.toml";
