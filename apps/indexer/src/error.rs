//! CLI 层统一使用 color-eyre 报告错误；库层错误通过 `?` 自动转换

pub type Result<T> = color_eyre::Result<T>;

pub use color_eyre::eyre::WrapErr;
