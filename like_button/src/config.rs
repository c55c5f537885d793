// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use like_redux::{DEFAULT_MAX_HISTORY_SIZE, StoreConfig};

use crate::{DEFAULT_LOG_FILE_NAME, DisplayPreference, TracingConfig, TracingScope};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "like_button")]
#[command(about = "👍 Click the Fakebook like button and print the resulting state")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    #[arg(
        long,
        short = 'c',
        default_value_t = 1,
        help = "Number of times to click the like button."
    )]
    pub clicks: usize,

    #[arg(
        long,
        short = 'd',
        help = "Make Fakebook decline every like request."
    )]
    pub fakebook_declines: bool,

    #[arg(
        long,
        short = 'm',
        default_value_t = DEFAULT_MAX_HISTORY_SIZE,
        help = "Number of distinct states to keep in the store's history. 0 disables history."
    )]
    pub max_history: usize,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        help = "Also display log output on stdout or stderr. Stdout output is interleaved with the final state."
    )]
    pub log_display: Option<DisplayPreference>,

    #[arg(
        global = true,
        long,
        default_value_t = tracing::Level::DEBUG,
        help = "Log level: trace, debug, info, warn, or error."
    )]
    pub log_level: tracing::Level,
}

impl CLIArg {
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            max_history_size: self.max_history,
        }
    }

    /// - `--enable-logging` writes to `log.txt`.
    /// - `--log-display` writes to stdout or stderr.
    /// - Both together write to both.
    /// - Neither: [`None`].
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        let GlobalOption {
            enable_logging,
            log_display,
            log_level,
        } = self.global_options;
        let log_file_path = || Some(DEFAULT_LOG_FILE_NAME.to_string());
        let config = match (enable_logging, log_display) {
            (true, Some(display)) => {
                TracingConfig::new_file_and_display(log_file_path(), display)
            }
            (true, None) => TracingConfig::new_file(log_file_path()),
            (false, Some(display)) => TracingConfig::new_display(display),
            (false, None) => return None,
        };
        Some(config.with_level(log_level).with_scope(TracingScope::Global))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::WriterConfig;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::parse_from(["like_button"]);
        assert_eq!(cli_arg.clicks, 1);
        assert!(!cli_arg.fakebook_declines);
        assert_eq!(cli_arg.store_config(), StoreConfig::default());
        assert!(cli_arg.tracing_config().is_none());
    }

    #[test]
    fn test_all_options() {
        let cli_arg = CLIArg::parse_from([
            "like_button",
            "--clicks",
            "3",
            "--fakebook-declines",
            "--max-history",
            "0",
            "--enable-logging",
            "--log-level",
            "warn",
        ]);
        assert_eq!(cli_arg.clicks, 3);
        assert!(cli_arg.fakebook_declines);
        assert_eq!(cli_arg.store_config().max_history_size, 0);

        let tracing_config = cli_arg.tracing_config().unwrap();
        assert_eq!(tracing_config.level, tracing::Level::WARN);
        assert_eq!(
            tracing_config.writer_config,
            WriterConfig::File("log.txt".to_string())
        );
    }

    #[test_case(&[], None ; "no logging")]
    #[test_case(&["--enable-logging"], Some(WriterConfig::File("log.txt".to_string())) ; "file only")]
    #[test_case(&["--log-display", "stderr"], Some(WriterConfig::Display(DisplayPreference::Stderr)) ; "display only")]
    #[test_case(
        &["-l", "--log-display", "stdout"],
        Some(WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "log.txt".to_string()))
        ; "file and display"
    )]
    fn test_writer_config_follows_log_options(
        options: &[&str],
        expected: Option<WriterConfig>,
    ) {
        let cli_arg =
            CLIArg::parse_from(std::iter::once("like_button").chain(options.iter().copied()));
        assert_eq!(
            cli_arg.tracing_config().map(|it| it.writer_config),
            expected
        );
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let result =
            CLIArg::try_parse_from(["like_button", "--log-level", "chatty"]);
        assert!(result.is_err());
    }
}
