mod settings;

pub use settings::*;

use std::{fmt, fs, io, path::PathBuf};
use enum_iterator::Sequence;

use crate::{
  command_executor::{CommandFailure, CommandRunner, ShellCommand},
  common::{quoted, quoted_path},
  logger
};

/// Steps run in declaration order. Every step always runs, regardless of
/// how the one before it went.
#[derive(Sequence, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconfigureStep {
  Dependency,
  Project
}

impl PreconfigureStep {
  pub fn description(&self) -> &'static str {
    match self {
      Self::Dependency => "dependency preconfigure (CMake, assimp)",
      Self::Project => "project preconfigure (Premake)"
    }
  }
}

#[derive(Debug)]
pub struct DirectoryCreationFailure {
  pub path: PathBuf,
  pub source: io::Error
}

impl fmt::Display for DirectoryCreationFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f,
      "Failed to create directory '{}': {}",
      self.path.display(),
      self.source
    )
  }
}

impl std::error::Error for DirectoryCreationFailure {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.source)
  }
}

#[derive(Debug)]
pub enum BuildDirOutcome {
  AlreadyExists,
  Created,
  SkippedForDryRun,
  CreationFailed(DirectoryCreationFailure)
}

#[derive(Debug)]
pub struct StepReport {
  pub step: PreconfigureStep,
  pub command_line: String,
  pub build_dir: Option<BuildDirOutcome>,
  pub command_failure: Option<CommandFailure>
}

impl StepReport {
  pub fn succeeded(&self) -> bool {
    let dir_failed: bool = matches!(self.build_dir, Some(BuildDirOutcome::CreationFailed(_)));
    return !dir_failed && self.command_failure.is_none();
  }
}

pub fn dependency_command(settings: &PreconfigureSettings) -> ShellCommand {
  let command_line: String = format!(
    "{} -S {} -B {} -G {} -A {}",
    quoted_path(&settings.cmake_program),
    quoted_path(&settings.dependency_source_dir),
    quoted_path(&settings.dependency_build_dir),
    quoted(&settings.cmake_generator),
    quoted(&settings.cmake_arch)
  );

  return ShellCommand::new(command_line, &settings.project_root);
}

pub fn project_command(settings: &PreconfigureSettings) -> ShellCommand {
  let command_line: String = format!(
    "{} --scripts={} {}",
    quoted_path(&settings.premake_binary),
    quoted_path(&settings.premake_script),
    quoted(&settings.premake_action)
  );

  return ShellCommand::new(command_line, &settings.project_root);
}

/// Single-level creation only. A missing parent directory is reported as a
/// failure instead of being created.
pub fn ensure_dependency_build_dir(settings: &PreconfigureSettings) -> BuildDirOutcome {
  let build_dir: PathBuf = settings.resolved_dependency_build_dir();

  if build_dir.is_dir() {
    return BuildDirOutcome::AlreadyExists;
  }
  else if settings.dry_run {
    return BuildDirOutcome::SkippedForDryRun;
  }

  return match fs::create_dir(&build_dir) {
    Ok(_) => BuildDirOutcome::Created,
    Err(source) => BuildDirOutcome::CreationFailed(DirectoryCreationFailure {
      path: build_dir,
      source
    })
  }
}

pub fn run_dependency_preconfigure(
  settings: &PreconfigureSettings,
  runner: &mut dyn CommandRunner
) -> StepReport {
  let build_dir_outcome: BuildDirOutcome = ensure_dependency_build_dir(settings);

  match &build_dir_outcome {
    BuildDirOutcome::Created => logger::info(format!(
      "Created {}",
      settings.resolved_dependency_build_dir().display()
    )),
    BuildDirOutcome::SkippedForDryRun => logger::info(format!(
      "Would create {}",
      settings.resolved_dependency_build_dir().display()
    )),
    BuildDirOutcome::CreationFailed(failure) => logger::error(failure.to_string()),
    BuildDirOutcome::AlreadyExists => ()
  }

  // The generator still runs after a failed directory creation. CMake reports
  // its own error if it really needed the directory.
  let command: ShellCommand = dependency_command(settings);

  return StepReport {
    step: PreconfigureStep::Dependency,
    command_line: command.command_line().to_string(),
    build_dir: Some(build_dir_outcome),
    command_failure: runner.run(&command).err()
  }
}

pub fn run_project_preconfigure(
  settings: &PreconfigureSettings,
  runner: &mut dyn CommandRunner
) -> StepReport {
  let command: ShellCommand = project_command(settings);

  return StepReport {
    step: PreconfigureStep::Project,
    command_line: command.command_line().to_string(),
    build_dir: None,
    command_failure: runner.run(&command).err()
  }
}

pub fn run_step(
  step: PreconfigureStep,
  settings: &PreconfigureSettings,
  runner: &mut dyn CommandRunner
) -> StepReport {
  logger::info(format!("Running {}", step.description()));

  let report: StepReport = match step {
    PreconfigureStep::Dependency => run_dependency_preconfigure(settings, runner),
    PreconfigureStep::Project => run_project_preconfigure(settings, runner)
  };

  if let Some(failure) = &report.command_failure {
    logger::error(failure.to_string());
  }

  return report;
}

pub fn run_all_steps(
  settings: &PreconfigureSettings,
  runner: &mut dyn CommandRunner
) -> Vec<StepReport> {
  return enum_iterator::all::<PreconfigureStep>()
    .map(|step| run_step(step, settings, &mut *runner))
    .collect();
}

pub fn print_summary(reports: &[StepReport]) {
  for report in reports {
    if report.succeeded() {
      logger::success(report.step.description());
    }
    else {
      logger::failed(report.step.description());
    }
  }
}

/// Failures only change the exit code when `strict_exit` is set. Otherwise
/// the run is always reported as successful.
pub fn final_exit_code(reports: &[StepReport], strict_exit: bool) -> i32 {
  let any_failed: bool = reports.iter().any(|report| !report.succeeded());

  return if strict_exit && any_failed
    { 1 }
    else { 0 }
}
