use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};

use crate::errors::AppError;

/// Filter job listings by ATS score and record applications.
///
/// Every flag can also be set through the environment (or a `.env` file).
#[derive(Debug, Parser)]
#[command(name = "autoapply", version)]
pub struct Cli {
    /// Path to the jobs JSON file
    #[arg(long, env = "AUTOAPPLY_JOBS_FILE")]
    pub jobs_file: PathBuf,

    /// Path to the resume text file
    #[arg(long, env = "AUTOAPPLY_RESUME")]
    pub resume: PathBuf,

    /// Minimum ATS score to apply
    #[arg(long, env = "AUTOAPPLY_THRESHOLD", default_value_t = 80.0, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Minutes between scans
    #[arg(
        long,
        env = "AUTOAPPLY_INTERVAL_MINUTES",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_minutes: u64,

    /// Run once instead of scheduling
    #[arg(long, env = "AUTOAPPLY_ONCE")]
    pub once: bool,

    /// Log file for applications
    #[arg(long, env = "AUTOAPPLY_LOG", default_value = "applications.log")]
    pub log: PathBuf,

    /// Stop continuous mode after this many passes
    #[arg(
        long,
        env = "AUTOAPPLY_MAX_PASSES",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_passes: Option<u64>,

    /// Diagnostic output format
    #[arg(long, env = "AUTOAPPLY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Full)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Full,
    Compact,
}

/// Process-wide diagnostics settings, handed to the subscriber at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, from `RUST_LOG` (default `autoapply=info`).
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Once,
    Continuous { interval: Duration },
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_file: PathBuf,
    pub resume_file: PathBuf,
    pub threshold: f64,
    pub log_path: PathBuf,
    pub mode: RunMode,
    pub max_passes: Option<u64>,
    pub log: LogConfig,
}

impl Config {
    /// Loads `.env` if present, then parses the command line.
    /// Usage errors exit the process through clap.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let rust_log = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));
        Self::from_cli(Cli::parse(), rust_log)
    }

    /// Parses `args` alone. `AUTOAPPLY_*` variables are not consulted.
    pub fn try_from_args<I, T>(args: I, rust_log: impl Into<String>) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let invalid = |e: clap::Error| AppError::InvalidConfig(e.to_string());
        let matches = Cli::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(args)
            .map_err(invalid)?;
        let cli = Cli::from_arg_matches(&matches).map_err(invalid)?;
        Self::from_cli(cli, rust_log.into())
    }

    fn from_cli(cli: Cli, rust_log: String) -> Result<Self, AppError> {
        if !cli.threshold.is_finite() {
            return Err(AppError::InvalidConfig(format!(
                "threshold must be a finite number, got {}",
                cli.threshold
            )));
        }

        let mode = if cli.once {
            RunMode::Once
        } else {
            RunMode::Continuous {
                interval: Duration::from_secs(cli.interval_minutes.saturating_mul(60)),
            }
        };

        Ok(Config {
            jobs_file: cli.jobs_file,
            resume_file: cli.resume,
            threshold: cli.threshold,
            log_path: cli.log,
            mode,
            max_passes: cli.max_passes,
            log: LogConfig {
                filter: rust_log,
                format: cli.log_format,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Config, AppError> {
        let mut args = vec!["autoapply", "--jobs-file", "jobs.json", "--resume", "resume.txt"];
        args.extend_from_slice(extra);
        Config::try_from_args(args, "info")
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.jobs_file, PathBuf::from("jobs.json"));
        assert_eq!(config.resume_file, PathBuf::from("resume.txt"));
        assert_eq!(config.threshold, 80.0);
        assert_eq!(config.log_path, PathBuf::from("applications.log"));
        assert_eq!(
            config.mode,
            RunMode::Continuous {
                interval: Duration::from_secs(3600)
            }
        );
        assert_eq!(config.max_passes, None);
        assert_eq!(
            config.log,
            LogConfig {
                filter: "info".to_string(),
                format: LogFormat::Full
            }
        );
    }

    #[test]
    fn test_args_ignore_environment() {
        std::env::set_var("AUTOAPPLY_LOG_FORMAT", "compact");
        std::env::set_var("AUTOAPPLY_INTERVAL_MINUTES", "5");
        let config = parse(&[]);
        std::env::remove_var("AUTOAPPLY_LOG_FORMAT");
        std::env::remove_var("AUTOAPPLY_INTERVAL_MINUTES");

        let config = config.unwrap();
        assert_eq!(config.log.format, LogFormat::Full);
        assert_eq!(
            config.mode,
            RunMode::Continuous {
                interval: Duration::from_secs(3600)
            }
        );
    }

    #[test]
    fn test_once_flag_selects_single_shot() {
        assert_eq!(parse(&["--once"]).unwrap().mode, RunMode::Once);
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "--threshold",
            "55.5",
            "--interval-minutes",
            "5",
            "--log",
            "out/applied.log",
            "--max-passes",
            "3",
            "--log-format",
            "compact",
        ])
        .unwrap();
        assert_eq!(config.threshold, 55.5);
        assert_eq!(
            config.mode,
            RunMode::Continuous {
                interval: Duration::from_secs(300)
            }
        );
        assert_eq!(config.log_path, PathBuf::from("out/applied.log"));
        assert_eq!(config.max_passes, Some(3));
        assert_eq!(config.log.format, LogFormat::Compact);
    }

    #[test]
    fn test_negative_threshold_is_accepted() {
        assert_eq!(parse(&["--threshold", "-10"]).unwrap().threshold, -10.0);
    }

    #[test]
    fn test_required_paths() {
        let err = Config::try_from_args(["autoapply", "--resume", "r.txt"], "info").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
        assert!(err.to_string().contains("--jobs-file"), "{err}");
    }

    #[test]
    fn test_non_numeric_threshold_rejected() {
        assert!(matches!(
            parse(&["--threshold", "high"]),
            Err(AppError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let err = parse(&["--threshold", "NaN"]).unwrap_err();
        assert!(err.to_string().contains("finite"), "{err}");
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(parse(&["--interval-minutes", "0"]).is_err());
        assert!(parse(&["--interval-minutes", "-1"]).is_err());
    }

    #[test]
    fn test_zero_max_passes_rejected() {
        assert!(parse(&["--max-passes", "0"]).is_err());
    }
}
