#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod articles;
pub mod assets;
pub mod content;
pub mod errors;
pub mod logging;

mod options;

// Exports for end-users
pub use articles::{Article, ArticleDate, ArticleFrontmatter, load_articles};
pub use content::{ContentData, ContentLoader, Untyped};
pub use errors::QuireError;
pub use options::{LoaderOptions, TailwindOptions};

use std::env;

/// Returns whether Quire is running in development mode.
///
/// Set `QUIRE_DEV=true` at compile time or at runtime to enable it. Development mode currently only disables CSS minification.
pub fn is_dev() -> bool {
    if option_env!("QUIRE_DEV") == Some("true") {
        return true;
    }

    env::var("QUIRE_DEV").map(|v| v == "true").unwrap_or(false)
}

/// The version of Quire being used.
///
/// ## Example
/// ```rs
/// use quire::GENERATOR;
///
/// format!("<meta name=\"generator\" content=\"{}\">", GENERATOR);
/// ```
pub const GENERATOR: &str = concat!("Quire v", env!("CARGO_PKG_VERSION"));
