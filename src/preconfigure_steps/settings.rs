use std::path::{Path, PathBuf};
use serde::Serialize;

use crate::command_executor::Shell;

pub const DEFAULT_DEPENDENCY_SOURCE_DIR: &'static str = "Submodules/assimp";
pub const DEFAULT_DEPENDENCY_BUILD_DIR: &'static str = "Submodules/assimp/build";
pub const DEFAULT_CMAKE_PROGRAM: &'static str = "cmake";
pub const DEFAULT_CMAKE_GENERATOR: &'static str = "Visual Studio 17 2022";
pub const DEFAULT_CMAKE_ARCH: &'static str = "x64";
pub const DEFAULT_PREMAKE_BINARY: &'static str = "Tools/Premake/premake-5.0.0-beta2/premake5.exe";
pub const DEFAULT_PREMAKE_SCRIPT: &'static str = "Premake5.lua";
pub const DEFAULT_PREMAKE_ACTION: &'static str = "vs2022";

/// Everything both steps need to build their command lines.
/// All relative paths are resolved against `project_root`.
#[derive(Serialize, Debug, Clone)]
pub struct PreconfigureSettings {
  pub project_root: PathBuf,
  pub dependency_source_dir: PathBuf,
  pub dependency_build_dir: PathBuf,
  pub cmake_program: String,
  pub cmake_generator: String,
  pub cmake_arch: String,
  pub premake_binary: PathBuf,
  pub premake_script: String,
  pub premake_action: String,
  pub shell: Shell,
  pub dry_run: bool
}

impl PreconfigureSettings {
  pub fn with_project_root(project_root: impl AsRef<Path>) -> Self {
    return Self {
      project_root: project_root.as_ref().to_path_buf(),
      ..Self::default()
    }
  }

  pub fn resolved(&self, relative_path: impl AsRef<Path>) -> PathBuf {
    self.project_root.join(relative_path)
  }

  pub fn resolved_dependency_build_dir(&self) -> PathBuf {
    self.resolved(&self.dependency_build_dir)
  }
}

impl Default for PreconfigureSettings {
  fn default() -> Self {
    return Self {
      project_root: PathBuf::from("."),
      dependency_source_dir: PathBuf::from(DEFAULT_DEPENDENCY_SOURCE_DIR),
      dependency_build_dir: PathBuf::from(DEFAULT_DEPENDENCY_BUILD_DIR),
      cmake_program: DEFAULT_CMAKE_PROGRAM.to_string(),
      cmake_generator: DEFAULT_CMAKE_GENERATOR.to_string(),
      cmake_arch: DEFAULT_CMAKE_ARCH.to_string(),
      premake_binary: PathBuf::from(DEFAULT_PREMAKE_BINARY),
      premake_script: DEFAULT_PREMAKE_SCRIPT.to_string(),
      premake_action: DEFAULT_PREMAKE_ACTION.to_string(),
      shell: Shell::platform_default(),
      dry_run: false
    }
  }
}

pub fn settings_as_yaml(settings: &PreconfigureSettings) -> Result<String, String> {
  serde_yaml::to_string(settings)
    .map_err(|err| format!(
      "Failed to serialize preconfigure settings. More details: {}",
      err.to_string()
    ))
}
