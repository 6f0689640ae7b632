//! Shell-command backed projects.

use crate::stages::ports::{Project, SUCCESS};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Outcome reported when a command exits non-zero or cannot be spawned.
pub const FAILURE: &str = "failure";

/// A [`Project`] whose test and deploy actions are shell commands.
///
/// A command that exits with status 0 reports [`SUCCESS`]; any other exit
/// status, or a failure to spawn, reports [`FAILURE`]. A project without a
/// test command declares no tests.
#[derive(Debug, Clone)]
pub struct CommandProject {
    test_command: Option<String>,
    deploy_command: String,
    working_dir: Option<PathBuf>,
}

impl CommandProject {
    /// Creates a project that only knows how to deploy.
    pub fn new(deploy_command: impl Into<String>) -> Self {
        Self {
            test_command: None,
            deploy_command: deploy_command.into(),
            working_dir: None,
        }
    }

    /// Sets the test command.
    #[must_use]
    pub fn with_test_command(mut self, command: impl Into<String>) -> Self {
        self.test_command = Some(command.into());
        self
    }

    /// Runs both commands from the given directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Returns the working directory, if one was set.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    fn execute(&self, command: &str) -> String {
        let mut cmd = shell(command);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        match cmd.output() {
            Ok(out) if out.status.success() => SUCCESS.to_string(),
            Ok(out) => {
                debug!(
                    command,
                    exit_code = out.status.code().unwrap_or(-1),
                    stderr = %String::from_utf8_lossy(&out.stderr).trim_end(),
                    "Command exited unsuccessfully"
                );
                FAILURE.to_string()
            }
            Err(err) => {
                warn!(command, error = %err, "Failed to spawn command");
                FAILURE.to_string()
            }
        }
    }
}

impl Project for CommandProject {
    fn has_tests(&self) -> bool {
        self.test_command.is_some()
    }

    fn run_tests(&self) -> String {
        self.test_command
            .as_deref()
            .map_or_else(|| FAILURE.to_string(), |command| self.execute(command))
    }

    fn deploy(&self) -> String {
        self.execute(&self.deploy_command)
    }
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_project_without_test_command_has_no_tests() {
        let project = CommandProject::new("true");
        assert!(!project.has_tests());
        assert_eq!(project.run_tests(), FAILURE);
    }

    #[test]
    fn test_exit_status_maps_to_outcome() {
        let project = CommandProject::new("exit 3").with_test_command("true");
        assert!(project.has_tests());
        assert_eq!(project.run_tests(), SUCCESS);
        assert_eq!(project.deploy(), FAILURE);
    }

    #[test]
    fn test_commands_run_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "x").unwrap();

        let project = CommandProject::new("test -f marker").in_dir(dir.path());
        assert_eq!(project.working_dir(), Some(dir.path()));
        assert_eq!(project.deploy(), SUCCESS);

        let empty = tempfile::tempdir().unwrap();
        let elsewhere = CommandProject::new("test -f marker").in_dir(empty.path());
        assert_eq!(elsewhere.deploy(), FAILURE);
    }

    #[test]
    fn test_missing_working_dir_is_a_failure() {
        let project = CommandProject::new("true").in_dir("/definitely/not/a/dir");
        assert_eq!(project.deploy(), FAILURE);
    }
}
