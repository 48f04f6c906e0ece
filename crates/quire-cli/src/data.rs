use std::{path::PathBuf, time::Instant};

use clap::Args;
use log::info;
use quire::{
    ContentLoader, LoaderOptions, QuireError,
    articles::{ARTICLES_PATTERN, summarize},
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
};

use crate::write_output;

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory articles are loaded from
    #[arg(long, default_value = "docs")]
    src_dir: PathBuf,

    /// Glob matching the articles, relative to the source directory
    #[arg(long, default_value = ARTICLES_PATTERN)]
    pattern: String,

    /// Public path the site is served under
    #[arg(long, default_value = "/")]
    base: String,

    /// Drop the `.html` suffix from URLs
    #[arg(long)]
    clean_urls: bool,

    /// Do not extract excerpts
    #[arg(long)]
    no_excerpt: bool,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub fn run(args: &DataArgs) -> Result<(), QuireError> {
    let start = Instant::now();
    print_title("loading articles");

    let options = LoaderOptions {
        src_dir: args.src_dir.clone(),
        base: args.base.clone(),
        clean_urls: args.clean_urls,
    };

    let articles = ContentLoader::new(&args.pattern)
        .excerpt(!args.no_excerpt)
        .load_with(&options, summarize)?;

    let json = serde_json::to_string_pretty(&articles).map_err(std::io::Error::from)?;
    write_output(args.out.as_deref(), &json)?;

    info!(
        "{} article(s) written {}",
        articles.len(),
        format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(src_dir: PathBuf, out: PathBuf) -> DataArgs {
        DataArgs {
            src_dir,
            pattern: ARTICLES_PATTERN.to_string(),
            base: "/".to_string(),
            clean_urls: false,
            no_excerpt: false,
            out: Some(out),
        }
    }

    #[test]
    fn test_writes_sorted_articles() {
        let dir = tempfile::tempdir().unwrap();
        let articles_dir = dir.path().join("docs/articles");
        fs::create_dir_all(&articles_dir).unwrap();
        fs::write(
            articles_dir.join("2010-01-22-applying-cqrs.md"),
            "---\ntitle: Applying CQRS\ndate: 2010-01-22\n---\n\nIntro.\n\n---\n\nMore.\n",
        )
        .unwrap();
        fs::write(
            articles_dir.join("2010-11-04-bite-size-chunks.md"),
            "---\ntitle: Bite-Size Chunks\ndate: 2010-11-04\n---\n\nNo excerpt here.\n",
        )
        .unwrap();

        let out = dir.path().join("dist/articles.json");
        run(&args(dir.path().join("docs"), out.clone())).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "title": "Bite-Size Chunks",
                    "url": "/articles/2010-11-04-bite-size-chunks.html",
                    "date": { "time": 1288872000000i64, "string": "November 4, 2010" }
                },
                {
                    "title": "Applying CQRS",
                    "url": "/articles/2010-01-22-applying-cqrs.html",
                    "date": { "time": 1264161600000i64, "string": "January 22, 2010" },
                    "excerpt": "<p>Intro.</p>\n"
                }
            ])
        );
    }

    #[test]
    fn test_invalid_date_fails() {
        let dir = tempfile::tempdir().unwrap();
        let articles_dir = dir.path().join("docs/articles");
        fs::create_dir_all(&articles_dir).unwrap();
        fs::write(
            articles_dir.join("oops.md"),
            "---\ntitle: Oops\ndate: sometime\n---\n",
        )
        .unwrap();

        let out = dir.path().join("articles.json");
        let err = run(&args(dir.path().join("docs"), out.clone())).unwrap_err();

        assert!(err.to_string().contains("sometime"));
        assert!(!out.exists());
    }
}
