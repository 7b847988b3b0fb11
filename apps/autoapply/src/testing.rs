//! Shared test fixtures: a temp directory holding a resume, a jobs file and the log.

use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::{Config, LogConfig, LogFormat, RunMode};

pub struct Fixture {
    // Held so the directory outlives the test.
    _dir: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn new(resume: &str, jobs: &serde_json::Value, threshold: f64) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let resume_file = dir.path().join("resume.txt");
        let jobs_file = dir.path().join("jobs.json");
        std::fs::write(&resume_file, resume).unwrap();
        std::fs::write(&jobs_file, jobs.to_string()).unwrap();

        let config = Config {
            jobs_file,
            resume_file,
            threshold,
            log_path: dir.path().join("applications.log"),
            mode: RunMode::Once,
            max_passes: None,
            log: LogConfig {
                filter: "debug".to_string(),
                format: LogFormat::Compact,
            },
        };
        Self { _dir: dir, config }
    }

    pub fn log_path(&self) -> PathBuf {
        self.config.log_path.clone()
    }

    pub fn log_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.config.log_path)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
