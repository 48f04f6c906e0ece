use std::path::PathBuf;

use crate::is_dev;

/// Where content lives and how its URLs are built. Passed to [`ContentLoader::load()`](crate::ContentLoader::load).
///
/// ## Examples
/// Default values:
/// ```rust
/// use quire::LoaderOptions;
///
/// let options = LoaderOptions::default();
/// assert_eq!(options.src_dir, std::path::PathBuf::from("docs"));
/// assert_eq!(options.base, "/");
/// ```
/// Custom values:
/// ```rust
/// use quire::LoaderOptions;
///
/// let options = LoaderOptions {
///   src_dir: "content".into(),
///   base: "/blog/".into(),
///   clean_urls: true,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Directory content patterns are resolved against. URLs are computed relative to it.
    pub src_dir: PathBuf,

    /// Public path the site is served under, e.g. `/` or `/blog/`.
    pub base: String,

    /// Whether URLs drop the `.html` suffix.
    pub clean_urls: bool,
}

impl LoaderOptions {
    /// Returns `base` with exactly one leading and one trailing slash.
    pub fn normalized_base(&self) -> String {
        let trimmed = self.base.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        }
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            src_dir: "docs".into(),
            base: "/".into(),
            clean_urls: false,
        }
    }
}

/// Build-time Tailwind configuration: which files are scanned for utility classes and which plugins are enabled.
#[derive(Debug, Clone)]
pub struct TailwindOptions {
    /// Path to [the TailwindCSS CLI binary](https://tailwindcss.com/docs/installation/tailwind-cli). By default `tailwindcss`, which assumes it is in your `PATH`.
    ///
    /// This is commonly set to `./node_modules/.bin/tailwindcss` or similar, in order to use a locally installed version.
    pub binary_path: PathBuf,

    /// Globs, relative to the project root, of the files Tailwind scans for class names.
    pub content: Vec<String>,

    /// Tailwind plugins to enable, by package name.
    pub plugins: Vec<String>,

    /// Defaults to `true` outside of development mode.
    pub minify: bool,
}

impl Default for TailwindOptions {
    fn default() -> Self {
        Self {
            binary_path: "tailwindcss".into(),
            content: vec!["./docs/.vitepress/theme/**/*.vue".to_string()],
            plugins: vec!["@tailwindcss/typography".to_string()],
            minify: !is_dev(),
        }
    }
}
