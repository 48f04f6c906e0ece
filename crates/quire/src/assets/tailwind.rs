use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
    time::Instant,
};

use glob::glob as glob_fs;
use log::{debug, info};

use crate::errors::StyleError;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};
use crate::options::TailwindOptions;

/// Renders the Tailwind input stylesheet declaring the configured sources and plugins.
///
/// ## Example
/// ```rs
/// use quire::{TailwindOptions, assets::input_css};
///
/// let css = input_css(&TailwindOptions::default());
/// assert!(css.contains("@plugin \"@tailwindcss/typography\";"));
/// ```
pub fn input_css(options: &TailwindOptions) -> String {
    let mut css = String::from("@import \"tailwindcss\";\n");

    for source in &options.content {
        css.push_str(&format!("@source \"{}\";\n", escape_css_string(source)));
    }

    for plugin in &options.plugins {
        css.push_str(&format!("@plugin \"{}\";\n", escape_css_string(plugin)));
    }

    css
}

fn escape_css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Resolves the content globs against `root` and returns every file Tailwind will scan, sorted and deduplicated.
pub fn scanned_files(options: &TailwindOptions, root: &Path) -> Result<Vec<PathBuf>, StyleError> {
    let mut files = vec![];

    for pattern in &options.content {
        let full_pattern = root.join(pattern.trim_start_matches("./"));
        let full_pattern = full_pattern.to_string_lossy();

        let paths = glob_fs(&full_pattern).map_err(|source| StyleError::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;

        // Unreadable entries are skipped, Tailwind would not see them either.
        files.extend(paths.filter_map(Result::ok).filter(|path| path.is_file()));
    }

    files.sort();
    files.dedup();

    Ok(files)
}

/// Pipes CSS through the Tailwind CSS CLI.
#[derive(Debug)]
pub struct TailwindProcessor {
    tailwind_path: PathBuf,
    minify: bool,
    working_dir: Option<PathBuf>,
}

impl TailwindProcessor {
    pub fn new(options: &TailwindOptions) -> Self {
        Self {
            tailwind_path: options.binary_path.clone(),
            minify: options.minify,
            working_dir: None,
        }
    }

    /// Runs Tailwind from `dir`, which `@source` globs are resolved against.
    pub fn in_dir<P>(mut self, dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.working_dir = Some(dir.into());
        self
    }

    /// Runs `tailwindcss --input - --output -` over `input_css` and returns the generated stylesheet.
    pub fn process_css(&self, input_css: &str) -> Result<String, StyleError> {
        let start = Instant::now();
        debug!(
            "Processing {} bytes of CSS with {}",
            input_css.len(),
            self.tailwind_path.display()
        );

        let mut child = self.spawn()?;

        {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "Failed to get stdin handle")
            })?;
            stdin.write_all(input_css.as_bytes())?;
            // stdin gets dropped here, closing it
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StyleError::ProcessFailed {
                stderr: stderr.trim().to_string(),
            });
        }

        let result = String::from_utf8_lossy(&output.stdout).trim().to_string();
        info!(
            "Tailwind generated {} bytes of CSS {}",
            result.len(),
            format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
        );

        Ok(result)
    }

    fn spawn(&self) -> Result<Child, StyleError> {
        let mut command = Command::new(&self.tailwind_path);
        command
            .args(["--input", "-", "--output", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if self.minify {
            command.arg("--minify");
        }

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let child = command.spawn().map_err(|source| StyleError::SpawnFailed {
            binary: self.tailwind_path.clone(),
            source,
        })?;

        debug!("Tailwind process spawned with PID: {:?}", child.id());
        Ok(child)
    }
}
