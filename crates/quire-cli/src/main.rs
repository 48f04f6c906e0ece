mod data;
mod styles;

use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use quire::logging::init_logging;

#[derive(Parser)]
#[command(name = "quire", version, about = "Generate the data and styles of a quire site", long_about = None)]
struct Cli {
    /// Silence log output. Errors are still printed.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the site's articles as JSON, most recent first
    Data(data::DataArgs),
    /// Generate the site's stylesheet with Tailwind CSS
    Styles(styles::StylesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();
    if cli.quiet {
        log::set_max_level(LevelFilter::Off);
    }

    let result = match &cli.command {
        Commands::Data(args) => data::run(args),
        Commands::Styles(args) => styles::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// Writes `contents` to `out`, or to stdout when no path is given.
pub(crate) fn write_output(out: Option<&Path>, contents: &str) -> io::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{}\n", contents))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", contents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quiet_is_global() {
        let cli = Cli::try_parse_from(["quire", "data", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Data(_)));
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/articles.json");

        write_output(Some(&path), "[]").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "[]\n");
    }
}
