use std::{fmt, io, path::{Path, PathBuf}, process};
use serde::Serialize;

use crate::logger;

/// The OS shell which command strings are handed to, along with the flag
/// which tells it to run a single command string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Shell {
  pub program: String,
  pub command_flag: String
}

impl Shell {
  pub fn new(program: impl Into<String>, command_flag: impl Into<String>) -> Self {
    return Self {
      program: program.into(),
      command_flag: command_flag.into()
    }
  }

  pub fn platform_default() -> Self {
    return if cfg!(windows)
      { Shell::new("cmd", "/C") }
      else { Shell::new("sh", "-c") }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
  command_line: String,
  working_dir: PathBuf
}

impl ShellCommand {
  pub fn new(
    command_line: impl Into<String>,
    working_dir: impl AsRef<Path>
  ) -> Self {
    return Self {
      command_line: command_line.into(),
      working_dir: working_dir.as_ref().to_path_buf()
    }
  }

  pub fn command_line(&self) -> &str {
    &self.command_line
  }

  pub fn working_dir(&self) -> &Path {
    &self.working_dir
  }
}

#[derive(Debug)]
pub enum CommandFailure {
  NonZeroExit {
    command: String,
    // None when the process was terminated by a signal.
    status: Option<i32>
  },
  LaunchFailure {
    command: String,
    source: io::Error
  }
}

impl fmt::Display for CommandFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NonZeroExit { command, status: Some(code) } => write!(f,
        "Command '{}' exited with status {}",
        command,
        code
      ),
      Self::NonZeroExit { command, status: None } => write!(f,
        "Command '{}' was terminated by a signal before it could exit",
        command
      ),
      Self::LaunchFailure { command, source } => write!(f,
        "Unable to launch command '{}': {}",
        command,
        source
      )
    }
  }
}

impl std::error::Error for CommandFailure {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::LaunchFailure { source, .. } => Some(source),
      Self::NonZeroExit { .. } => None
    }
  }
}

pub trait CommandRunner {
  /// Runs the command to completion. A zero exit status is the only success.
  fn run(&mut self, command: &ShellCommand) -> Result<(), CommandFailure>;
}

/// Runs commands through the OS shell, blocking until each one exits.
/// The child inherits stdout and stderr so tool output is shown as it happens.
pub struct ShellRunner {
  shell: Shell
}

impl ShellRunner {
  pub fn new(shell: Shell) -> Self {
    Self { shell }
  }
}

impl CommandRunner for ShellRunner {
  fn run(&mut self, command: &ShellCommand) -> Result<(), CommandFailure> {
    let mut process = process::Command::new(&self.shell.program);
    process.current_dir(command.working_dir());
    push_command_line(&mut process, &self.shell.command_flag, command.command_line());

    return match process.status() {
      Err(launch_error) => Err(CommandFailure::LaunchFailure {
        command: command.command_line().to_string(),
        source: launch_error
      }),
      Ok(exit_status) if exit_status.success() => Ok(()),
      Ok(exit_status) => Err(CommandFailure::NonZeroExit {
        command: command.command_line().to_string(),
        status: exit_status.code()
      })
    }
  }
}

#[cfg(windows)]
fn push_command_line(process: &mut process::Command, command_flag: &str, command_line: &str) {
  use std::os::windows::process::CommandExt;

  // cmd.exe does its own parsing, so the line must reach it without
  // the extra quoting std applies to regular arguments.
  if is_cmd_run_flag(command_flag) {
    process.raw_arg(cmd_wrapped_line(command_flag, command_line));
  }
  else {
    process.arg(command_flag);
    process.raw_arg(command_line);
  }
}

#[cfg(any(windows, test))]
fn is_cmd_run_flag(command_flag: &str) -> bool {
  return command_flag.eq_ignore_ascii_case("/C")
    || command_flag.eq_ignore_ascii_case("/K");
}

/// With `/S`, cmd.exe removes only the outer pair of quotes and leaves every
/// quote inside the command line alone.
#[cfg(any(windows, test))]
fn cmd_wrapped_line(command_flag: &str, command_line: &str) -> String {
  return format!("/S {} \"{}\"", command_flag, command_line);
}

#[cfg(not(windows))]
fn push_command_line(process: &mut process::Command, command_flag: &str, command_line: &str) {
  process.args([command_flag, command_line]);
}

/// Prints each command instead of running it.
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
  fn run(&mut self, command: &ShellCommand) -> Result<(), CommandFailure> {
    logger::info(format!(
      "Would run in '{}': {}",
      command.working_dir().display(),
      command.command_line()
    ));
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_command(command_line: &str) -> ShellCommand {
    ShellCommand::new(command_line, std::env::temp_dir())
  }

  #[cfg(unix)]
  #[test]
  fn zero_exit_is_not_a_failure() {
    let mut runner = ShellRunner::new(Shell::platform_default());
    assert!(runner.run(&scratch_command("exit 0")).is_ok());
  }

  #[cfg(unix)]
  #[test]
  fn nonzero_exit_reports_command_and_status() {
    let mut runner = ShellRunner::new(Shell::platform_default());
    let failure = runner.run(&scratch_command("exit 7"))
      .expect_err("exit 7 should be reported as a failure");

    assert!(matches!(failure, CommandFailure::NonZeroExit { status: Some(7), .. }));

    let message: String = failure.to_string();
    assert!(message.contains("'exit 7'"), "message was: {}", message);
    assert!(message.contains('7'));
  }

  #[test]
  fn cmd_lines_are_wrapped_in_outer_quotes() {
    assert!(is_cmd_run_flag("/C"));
    assert!(is_cmd_run_flag("/c"));
    assert!(!is_cmd_run_flag("-Command"));

    assert_eq!(
      cmd_wrapped_line("/C", "\"Tools\\Premake\\premake5.exe\" --scripts=\"Premake5.lua\" \"vs2022\""),
      "/S /C \"\"Tools\\Premake\\premake5.exe\" --scripts=\"Premake5.lua\" \"vs2022\"\""
    );
  }

  #[cfg(windows)]
  #[test]
  fn cmd_zero_exit_is_not_a_failure() {
    let mut runner = ShellRunner::new(Shell::platform_default());
    assert!(runner.run(&scratch_command("exit 0")).is_ok());
  }

  #[cfg(windows)]
  #[test]
  fn cmd_nonzero_exit_reports_command_and_status() {
    let mut runner = ShellRunner::new(Shell::platform_default());
    let failure = runner.run(&scratch_command("exit 7"))
      .expect_err("exit 7 should be reported as a failure");

    assert!(matches!(failure, CommandFailure::NonZeroExit { status: Some(7), .. }));
    assert!(failure.to_string().contains("'exit 7'"));
  }

  #[cfg(windows)]
  #[test]
  fn cmd_runs_quoted_program_paths() {
    let root = tempfile::tempdir().unwrap();
    let tool_dir = root.path().join("Tools").join("Pre make");
    std::fs::create_dir_all(&tool_dir).unwrap();
    std::fs::write(tool_dir.join("tool.bat"), "@exit /b 4\r\n").unwrap();

    let mut runner = ShellRunner::new(Shell::platform_default());
    let command = ShellCommand::new(
      "\"Tools\\Pre make\\tool.bat\" --scripts=\"Premake5.lua\" \"vs2022\"",
      root.path()
    );

    // Status 4 can only come from the batch file itself. An unresolved
    // program would make cmd exit with 1.
    assert!(matches!(
      runner.run(&command),
      Err(CommandFailure::NonZeroExit { status: Some(4), .. })
    ));
  }

  #[test]
  fn missing_shell_is_a_launch_failure() {
    let mut runner = ShellRunner::new(Shell::new("definitely-not-a-shell-3f9a1c", "-c"));
    let failure = runner.run(&scratch_command("cmake --version"))
      .expect_err("a missing shell cannot launch anything");

    let os_error_text: String = match &failure {
      CommandFailure::LaunchFailure { source, .. } => source.to_string(),
      other => panic!("Expected a launch failure, got: {:?}", other)
    };

    let message: String = failure.to_string();
    assert!(message.contains("cmake --version"));
    assert!(message.contains(&os_error_text));
  }

  #[test]
  fn missing_working_dir_is_a_launch_failure() {
    let mut runner = ShellRunner::new(Shell::platform_default());
    let command = ShellCommand::new("exit 0", "/this/path/should/not/exist/anywhere");

    assert!(matches!(
      runner.run(&command),
      Err(CommandFailure::LaunchFailure { .. })
    ));
  }

  #[test]
  fn dry_run_never_fails() {
    let mut runner = DryRunRunner;
    assert!(runner.run(&scratch_command("exit 1")).is_ok());
  }
}
