//! Terminal logging for Quire builds.
use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::info;
use std::io::Write;
use std::time::Duration;

pub struct FormatElapsedTimeOptions<'a> {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
    pub(crate) additional_fn: Option<&'a (dyn Fn(ColoredString) -> ColoredString + Sync)>,
}

impl Default for FormatElapsedTimeOptions<'_> {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
            additional_fn: None,
        }
    }
}

impl<'a> FormatElapsedTimeOptions<'a> {
    /// Wraps the formatted duration, e.g. to dim it.
    pub fn with_additional_fn(
        mut self,
        additional_fn: &'a (dyn Fn(ColoredString) -> ColoredString + Sync),
    ) -> Self {
        self.additional_fn = Some(additional_fn);
        self
    }
}

/// Installs the `env_logger` backend. Defaults to the `info` level, `RUST_LOG` overrides it.
///
/// Output is silenced when the process was started with `--quiet`.
pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(logging_env)
        .format(|buf, record| {
            if std::env::args().any(|arg| arg == "--quiet") {
                return Ok(());
            }

            if record.target() == "SKIP_FORMAT" {
                return writeln!(buf, "{}", record.args());
            }

            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                short_target(record.target()).bold().bright_yellow(),
                record.args()
            )
        })
        .init();
}

// `quire::content` logs as `content`, `quire_cli` as `quire_cli`.
fn short_target(target: &str) -> String {
    target
        .rsplit("::")
        .next()
        .unwrap_or(target)
        .to_ascii_lowercase()
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    let result = match elapsed.as_secs() {
        secs if secs >= 60 => format!("{}m", secs / 60).red(),
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
        _ => match elapsed.as_millis() {
            millis
                if options
                    .millis_red_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).red()
            }
            millis
                if options
                    .millis_yellow_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    };

    if let Some(additional_fn) = &options.additional_fn {
        additional_fn(result)
    } else {
        result
    }
}

pub fn print_title(title: &str) {
    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "SKIP_FORMAT", "{}", format!(" {} ", title).on_green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_time_units() {
        let options = FormatElapsedTimeOptions::default();

        assert_eq!(
            &*format_elapsed_time(Duration::from_micros(250), &options),
            "250μs"
        );
        assert_eq!(
            &*format_elapsed_time(Duration::from_millis(42), &options),
            "42ms"
        );
        assert_eq!(
            &*format_elapsed_time(Duration::from_secs(1), &options),
            "1s"
        );
        assert_eq!(
            &*format_elapsed_time(Duration::from_secs(180), &options),
            "3m"
        );
    }

    #[test]
    fn test_format_elapsed_time_thresholds() {
        let options = FormatElapsedTimeOptions::default();

        assert_eq!(
            format_elapsed_time(Duration::from_millis(20), &options),
            "20ms".normal()
        );
        assert_eq!(
            format_elapsed_time(Duration::from_millis(200), &options),
            "200ms".yellow()
        );
        assert_eq!(
            format_elapsed_time(Duration::from_millis(700), &options),
            "700ms".red()
        );
    }

    #[test]
    fn test_format_elapsed_time_seconds_below_a_minute() {
        let options = FormatElapsedTimeOptions::default();

        assert_eq!(
            format_elapsed_time(Duration::from_secs(2), &options),
            "2s".yellow()
        );
        assert_eq!(
            format_elapsed_time(Duration::from_secs(3), &options),
            "3s".red()
        );
        assert_eq!(
            format_elapsed_time(Duration::from_secs(59), &options),
            "59s".red()
        );
        assert_eq!(
            format_elapsed_time(Duration::from_secs(60), &options),
            "1m".red()
        );
        assert_eq!(
            format_elapsed_time(Duration::from_secs(90), &options),
            "1m".red()
        );
    }

    #[test]
    fn test_additional_fn_is_applied() {
        let dim = |s: ColoredString| s.dimmed();
        let options = FormatElapsedTimeOptions::default().with_additional_fn(&dim);

        assert_eq!(
            format_elapsed_time(Duration::from_millis(5), &options),
            "5ms".normal().dimmed()
        );
    }

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("quire::content"), "content");
        assert_eq!(short_target("quire_cli"), "quire_cli");
    }
}
