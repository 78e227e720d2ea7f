//! Isolated test environment for driving the holigen binary.
//!
//! `TestEnv` owns a temporary project directory and a temporary home so a
//! developer's own `holigen` configuration never leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Country registry used by most scenarios
pub const REGISTRY: &str = "ISO 3166-1 A2,Name\nAA,Landia\nBB,Seaville\nXX,Nowhere\n";

/// Fragment with an empty aggregate entry
pub const FRAGMENT: &str = "[package]\nname = \"holidays\"\n\n[features]\nall-countries = []\n";

/// Result of running a holigen command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parsed JSON event lines from stdout
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad event {l}: {e}")))
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_holigen")),
        }
    }

    /// Project with a registry, a fragment and tables for AA and BB (XX has none)
    pub fn example() -> Self {
        let env = Self::new();
        env.write_project_file("countries.csv", REGISTRY);
        env.write_project_file("Cargo.toml", FRAGMENT);
        env.write_project_file("sources/AA.csv", "date,name\n2024-01-01,New Year\n");
        env.write_project_file(
            "sources/BB.csv",
            "date,name\n2024-07-04,Founding Day\n2024-01-01,New Year\n",
        );
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run holigen from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run holigen from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("APPDATA", self.home_dir.path())
            .env_remove("RUST_LOG")
            .env_remove("HOLIGEN_FLOOR_YEAR")
            .env_remove("HOLIGEN_YEARS_AHEAD")
            .env_remove("HOLIGEN_ANCHOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute holigen");
        Self::to_result(output)
    }

    fn to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        Path::new(&self.project_path(relative_path)).exists()
    }
}
