//! Core functions and structs to load the content of your website.
//!
//! A [`ContentLoader`] globs Markdown files under a source directory, parses their frontmatter, assigns each of them a URL and, optionally, extracts an excerpt. The resulting [`ContentData`] can then be handed to a transform, such as [`crate::articles::summarize`], to build the data listing pages need.
use std::path::{Component, Path, PathBuf};

use glob::glob as glob_fs;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

pub mod markdown;

use crate::errors::ContentError;
use crate::options::LoaderOptions;
pub use markdown::{MarkdownDocument, render_markdown};

/// Represents untyped frontmatter.
pub type Untyped = FxHashMap<String, serde_yaml::Value>;

/// A single loaded document, before any transform is applied.
///
/// `T` is the type the frontmatter is deserialized into. Use [`Untyped`] to keep every field as a raw YAML value.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentData<T = Untyped> {
    /// URL of the page generated for this document, including the configured base.
    pub url: String,
    pub frontmatter: T,
    /// Rendered HTML of the content before the first `---` line, if any.
    pub excerpt: Option<String>,
    /// Raw file contents. Only set when [`ContentLoader::include_src`] is enabled.
    pub src: Option<String>,
    /// Rendered HTML of the whole body. Only set when [`ContentLoader::render`] is enabled.
    pub html: Option<String>,
    pub file_path: PathBuf,
}

/// Loads every Markdown file matching a glob pattern.
///
/// ## Example
/// ```rs
/// use quire::{ContentLoader, LoaderOptions, Untyped};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let documents = ContentLoader::new("articles/*.md")
///     .excerpt(true)
///     .load::<Untyped>(&LoaderOptions::default())?;
///
///   for document in documents {
///     println!("{} {:?}", document.url, document.frontmatter.get("title"));
///   }
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ContentLoader {
    pattern: String,
    excerpt: bool,
    include_src: bool,
    render: bool,
}

impl ContentLoader {
    /// `pattern` is resolved relative to [`LoaderOptions::src_dir`].
    pub fn new<P>(pattern: P) -> Self
    where
        P: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            excerpt: false,
            include_src: false,
            render: false,
        }
    }

    pub fn excerpt(mut self, excerpt: bool) -> Self {
        self.excerpt = excerpt;
        self
    }

    pub fn include_src(mut self, include_src: bool) -> Self {
        self.include_src = include_src;
        self
    }

    pub fn render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Glob for Markdown files and return one [`ContentData`] per file, in path order.
    pub fn load<T>(&self, options: &LoaderOptions) -> Result<Vec<ContentData<T>>, ContentError>
    where
        T: DeserializeOwned,
    {
        let full_pattern = options.src_dir.join(&self.pattern);
        let full_pattern = full_pattern.to_string_lossy();

        let paths = glob_fs(&full_pattern).map_err(|source| ContentError::InvalidPattern {
            pattern: full_pattern.to_string(),
            source,
        })?;

        let mut documents = vec![];

        for path in paths {
            let path = path.map_err(ContentError::GlobFailed)?;

            if path.is_dir() {
                continue;
            }

            if path.extension().is_none_or(|extension| extension != "md") {
                warn!("Skipping {}: only Markdown files are supported", path.display());
                continue;
            }

            documents.push(self.load_file(&path, options)?);
        }

        info!(
            "Loaded {} document(s) matching {}",
            documents.len(),
            self.pattern
        );

        Ok(documents)
    }

    /// Same as [`ContentLoader::load`], then hands the documents to `transform`.
    pub fn load_with<T, R, F>(&self, options: &LoaderOptions, transform: F) -> Result<R, ContentError>
    where
        T: DeserializeOwned,
        F: FnOnce(Vec<ContentData<T>>) -> Result<R, ContentError>,
    {
        transform(self.load(options)?)
    }

    fn load_file<T>(&self, path: &Path, options: &LoaderOptions) -> Result<ContentData<T>, ContentError>
    where
        T: DeserializeOwned,
    {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let url = page_url(&relative_to_src_dir(path, options)?, options);
        debug!("Loading {} as {}", path.display(), url);

        let document = MarkdownDocument::parse(&source);
        let frontmatter = document
            .frontmatter::<T>()
            .map_err(|source| ContentError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(ContentData {
            url,
            frontmatter,
            excerpt: if self.excerpt {
                document.excerpt()
            } else {
                None
            },
            html: self.render.then(|| render_markdown(document.body())),
            src: self.include_src.then(|| source.clone()),
            file_path: path.to_path_buf(),
        })
    }
}

/// Path of `path` relative to the source directory.
///
/// glob leaves `.` components out of the paths it yields, so both sides are compared without them.
fn relative_to_src_dir(path: &Path, options: &LoaderOptions) -> Result<PathBuf, ContentError> {
    let path = without_cur_dir(path);
    let src_dir = without_cur_dir(&options.src_dir);

    path.strip_prefix(&src_dir)
        .map(Path::to_path_buf)
        .map_err(|_| ContentError::OutsideSourceDir {
            path: path.clone(),
            src_dir,
        })
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Computes the public URL of a page from its path relative to the source directory.
///
/// `articles/foo.md` becomes `/articles/foo.html` (or `/articles/foo` with clean URLs), and `articles/index.md` becomes `/articles/`.
pub fn page_url(relative: &Path, options: &LoaderOptions) -> String {
    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let mut url = options.normalized_base();

    if let Some((file_name, parents)) = segments.split_last() {
        for parent in parents {
            url.push_str(parent);
            url.push('/');
        }

        let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
        if stem != "index" {
            url.push_str(stem);
            if !options.clean_urls {
                url.push_str(".html");
            }
        }
    }

    url
}
