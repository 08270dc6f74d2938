//! Test environment for isolated pantry runs.
//!
//! Every `TestEnv` gets its own working directory and home directory, so
//! neither `./pantry.toml` nor the user config of the machine running the
//! tests can leak in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a pantry CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every non-empty stdout line as a JSON event.
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not a JSON line ({}): {}", e, l))
            })
            .collect()
    }
}

pub struct TestEnv {
    /// Working directory for every command
    pub root: TempDir,
    /// Stand-in for HOME (and the platform config dir under it)
    pub home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            home: TempDir::new().expect("Failed to create temp home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pantry")),
        }
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
        full
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run `pantry` from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .with_test_home(self.home.path())
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .env_remove("PANTRY_LOG")
            .env_remove("PANTRY_FILE")
            .env_remove("PANTRY_PRIORITY_ORDER")
            .env_remove("PANTRY_VERBOSITY")
            .env_remove("PANTRY_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute pantry");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Point every home-derived directory at `home`.
pub trait TestHomeExt {
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APPDATA", home.join("AppData"))
    }
}
