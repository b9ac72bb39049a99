use std::path::PathBuf;
use clap::Parser;

const SKY: &'static str = "Skylar Cupit";

/// Configure the assimp submodule with CMake, then generate the engine's
/// Visual Studio solution with Premake.
///
/// Running with no arguments performs both steps using the defaults.
#[derive(Parser)]
#[command(version, author = SKY)]
pub struct Opts {
  /// Engine repository root. All relative paths are resolved against it.
  #[arg(default_value = ".")]
  pub project_root: PathBuf,

  /// CMake program used for the dependency step
  #[arg(long)]
  pub cmake: Option<String>,

  /// CMake generator name
  #[arg(long)]
  pub generator: Option<String>,

  /// CMake target architecture
  #[arg(long)]
  pub arch: Option<String>,

  /// Premake binary, relative to the project root
  #[arg(long)]
  pub premake: Option<PathBuf>,

  /// Build script given to Premake through --scripts=
  #[arg(long)]
  pub premake_script: Option<String>,

  /// Premake action (target toolset)
  #[arg(long)]
  pub premake_action: Option<String>,

  /// Shell used to run each command line
  #[arg(long)]
  pub shell: Option<String>,

  /// Flag which makes the shell run a single command string
  #[arg(long, requires = "shell", allow_hyphen_values = true)]
  pub shell_flag: Option<String>,

  /// Print the commands without running them or creating directories.
  #[arg(long)]
  pub dry_run: bool,

  /// Print the resolved settings as YAML and exit.
  #[arg(long)]
  pub show_settings: bool,

  /// Exit with status 1 when any step fails. By default the exit status is always 0.
  #[arg(long)]
  pub strict_exit: bool
}
