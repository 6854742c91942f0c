//! Runs the compiled `pnghash` binary and captures its output.

use std::path::Path;
use std::process::Command;

/// Captured result of one `pnghash` invocation
pub struct TestRun {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestRun {
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}): {}", e, self.stdout);
        })
    }
}

/// Run `pnghash` with `args`, isolated from the caller's environment.
pub fn run_pnghash<I, S>(args: I) -> TestRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    run_pnghash_with_config(args, None)
}

/// Run `pnghash` with `PNGHASH_CONFIG` pointing at `config`.
pub fn run_pnghash_with_config<I, S>(args: I, config: Option<&Path>) -> TestRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut command = Command::new(env!("CARGO_BIN_EXE_pnghash"));
    command.args(args).env_remove("RUST_LOG");
    match config {
        Some(path) => command.env("PNGHASH_CONFIG", path),
        None => command.env_remove("PNGHASH_CONFIG"),
    };

    let output = command.output().expect("failed to run pnghash binary");
    TestRun {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
