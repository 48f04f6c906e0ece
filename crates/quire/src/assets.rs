//! Build-time stylesheet generation.
//!
//! The site's styles are produced by [the Tailwind CSS CLI](https://tailwindcss.com/docs/installation/tailwind-cli). Quire only declares what Tailwind should scan and which plugins it should load, see [`TailwindOptions`](crate::TailwindOptions).
pub mod tailwind;

pub use tailwind::{TailwindProcessor, input_css, scanned_files};
