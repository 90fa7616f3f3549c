//! CLI command execution helpers
//!
//! This module provides a wrapper around the `holo` binary that captures
//! output and provides convenient assertion methods. Every command runs
//! against an isolated data/config directory so tests never touch the
//! user's real profile.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// CLI command builder
pub struct HoloCommand {
    binary_path: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    stdin_data: Option<String>,
}

impl HoloCommand {
    /// Create a command whose data and config live under `profile_dir`.
    pub fn new(profile_dir: impl AsRef<Path>) -> Self {
        let profile = profile_dir.as_ref();
        let mut env = HashMap::new();
        env.insert(
            "HOLO_DATA_DIR".to_string(),
            profile.join("data").to_string_lossy().to_string(),
        );
        env.insert(
            "HOLO_CONFIG_DIR".to_string(),
            profile.join("config").to_string_lossy().to_string(),
        );

        Self {
            binary_path: find_holo_binary(),
            args: Vec::new(),
            env,
            stdin_data: None,
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Provide stdin data
    pub fn stdin(&mut self, data: &str) -> &mut Self {
        self.stdin_data = Some(data.to_string());
        self
    }

    /// Execute the command and capture its output
    pub fn execute(&self) -> Result<CommandResult> {
        let mut command = Command::new(&self.binary_path);
        command.args(&self.args).envs(&self.env);

        let output = if let Some(stdin_str) = &self.stdin_data {
            let mut child = command
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .context("Failed to spawn command")?;

            if let Some(mut stdin) = child.stdin.take() {
                use std::io::Write;
                stdin.write_all(stdin_str.as_bytes())?;
            }

            child
                .wait_with_output()
                .context("Failed to wait for command")?
        } else {
            // Close stdin so interactive prompts cannot hang the test.
            command
                .stdin(Stdio::null())
                .output()
                .context("Failed to execute command")?
        };

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }
}

/// Command execution result
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    /// Check if command succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Check if stdout contains text
    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    /// Check if stderr contains text
    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }
}

/// Find the holo binary in the target directory
fn find_holo_binary() -> PathBuf {
    // Locate the binary relative to the test binary (target/debug/deps/...)
    let mut path = std::env::current_exe().expect("Failed to get current exe path");

    path.pop(); // Remove test binary name
    path.pop(); // Remove deps/

    let debug_bin = path.join("holo");
    if debug_bin.exists() {
        return debug_bin;
    }

    path.pop(); // Remove debug/
    let release_bin = path.join("release").join("holo");
    if release_bin.exists() {
        return release_bin;
    }

    path.join("debug").join("holo")
}
