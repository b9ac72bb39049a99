use crate::{command_executor::Shell, preconfigure_steps::PreconfigureSettings};

use self::clap_cli_config::Opts;
pub mod clap_cli_config;

pub enum CLIAction {
  ShowSettings,
  RunSteps {
    strict_exit: bool
  }
}

pub struct CLIRunInfo {
  pub action: CLIAction,
  pub settings: PreconfigureSettings
}

impl From<Opts> for CLIRunInfo {
  fn from(opts: Opts) -> Self {
    let mut settings = PreconfigureSettings::with_project_root(&opts.project_root);

    if let Some(cmake) = opts.cmake { settings.cmake_program = cmake; }
    if let Some(generator) = opts.generator { settings.cmake_generator = generator; }
    if let Some(arch) = opts.arch { settings.cmake_arch = arch; }
    if let Some(premake) = opts.premake { settings.premake_binary = premake; }
    if let Some(script) = opts.premake_script { settings.premake_script = script; }
    if let Some(action) = opts.premake_action { settings.premake_action = action; }

    if let Some(shell_program) = opts.shell {
      let command_flag: String = opts.shell_flag
        .unwrap_or_else(|| Shell::platform_default().command_flag);

      settings.shell = Shell::new(shell_program, command_flag);
    }

    settings.dry_run = opts.dry_run;

    let action: CLIAction = if opts.show_settings
      { CLIAction::ShowSettings }
      else { CLIAction::RunSteps { strict_exit: opts.strict_exit } };

    return CLIRunInfo {
      action,
      settings
    }
  }
}
