//! Error types for Quire.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust's uses the Debug trait to show errors when they're returned from main
                    // But, thiserror uses the Display trait to show errors. This redirects Debug to Display, essentially.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum ContentError {
    #[error("Invalid content pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("Failed to access content file while globbing")]
    GlobFailed(#[source] glob::GlobError),
    #[error("Failed to read content file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{path} is not inside the source directory {src_dir}")]
    OutsideSourceDir { path: PathBuf, src_dir: PathBuf },
    #[error("`{url}` has a date that could not be parsed: `{value}`")]
    InvalidDate { url: String, value: String },
}

#[derive(Error)]
pub enum StyleError {
    #[error("Failed to start Tailwind process `{binary}`")]
    SpawnFailed {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to communicate with the Tailwind process")]
    Io(#[from] std::io::Error),
    #[error("Tailwind process failed: {stderr}")]
    ProcessFailed { stderr: String },
    #[error("Invalid Tailwind content glob `{pattern}`")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

#[derive(Error, Debug)]
pub enum QuireError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(ContentError, StyleError);
