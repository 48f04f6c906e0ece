use std::{path::PathBuf, time::Instant};

use clap::Args;
use log::info;
use quire::{
    QuireError, TailwindOptions,
    assets::{TailwindProcessor, input_css, scanned_files},
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
};

use crate::write_output;

#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Project root content globs are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Path to the Tailwind CSS CLI binary
    #[arg(long, default_value = "tailwindcss")]
    tailwind: PathBuf,

    /// Glob of files to scan for class names, can be repeated. Replaces the defaults.
    #[arg(long = "content")]
    content: Vec<String>,

    /// Tailwind plugin to enable, can be repeated. Replaces the defaults.
    #[arg(long = "plugin")]
    plugins: Vec<String>,

    /// Only print the generated Tailwind input, without running Tailwind
    #[arg(long)]
    input_only: bool,

    /// Do not minify the output
    #[arg(long)]
    no_minify: bool,

    /// Write the CSS to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl StylesArgs {
    fn tailwind_options(&self) -> TailwindOptions {
        let defaults = TailwindOptions::default();

        TailwindOptions {
            binary_path: self.tailwind.clone(),
            content: if self.content.is_empty() {
                defaults.content
            } else {
                self.content.clone()
            },
            plugins: if self.plugins.is_empty() {
                defaults.plugins
            } else {
                self.plugins.clone()
            },
            minify: defaults.minify && !self.no_minify,
        }
    }
}

pub fn run(args: &StylesArgs) -> Result<(), QuireError> {
    let start = Instant::now();
    print_title("generating styles");

    let options = args.tailwind_options();

    let files = scanned_files(&options, &args.root)?;
    info!("Tailwind will scan {} file(s)", files.len());

    let input = input_css(&options);
    let css = if args.input_only {
        input.trim_end().to_string()
    } else {
        TailwindProcessor::new(&options)
            .in_dir(&args.root)
            .process_css(&input)?
    };

    write_output(args.out.as_deref(), &css)?;

    info!(
        "Styles generated {}",
        format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
    );

    Ok(())
}
