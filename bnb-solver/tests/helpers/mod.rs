//! Runs the solver binary for the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use regex::Regex;
use wait_timeout::ChildExt;

/// The output of a run of the solver.
#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
}

impl SolverOutput {
    /// The value of the first line of the form `<tag> <value>`.
    pub(crate) fn line(&self, tag: &str) -> Option<String> {
        let pattern = Regex::new(&format!(r"(?m)^{tag} (.*)$")).expect("valid regex");
        pattern
            .captures(&self.stdout)
            .map(|captures| captures[1].to_owned())
    }

    pub(crate) fn objective(&self) -> Option<f64> {
        self.line("o").and_then(|value| value.parse().ok())
    }
}

pub(crate) fn instance(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(name)
}

/// Runs the solver on `instance_path` and collects its standard output; `prefix` distinguishes
/// the log files of tests which solve the same instance.
pub(crate) fn run_solver(
    instance_path: impl AsRef<Path>,
    prefix: &str,
    args: impl IntoIterator<Item = &'static str>,
) -> SolverOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path.as_ref();
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_bnb-solver"));
    let log_file_path = instance_path.with_extension(format!("{prefix}.log"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }
    let _ = command.arg(instance_path);

    let log_file = File::create(&log_file_path).expect("cannot create log file");
    let _ = command
        .stdout(Stdio::from(log_file))
        .stderr(Stdio::null());

    let mut child = command.spawn().expect("failed to run solver");
    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error solving instance {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("cannot read log file");
    std::fs::remove_file(&log_file_path).expect("cannot remove log file");

    SolverOutput { status, stdout }
}
