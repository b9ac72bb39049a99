mod cli_config;
mod command_executor;
mod common;
mod logger;
mod preconfigure_steps;

use std::process::exit;
use clap::Parser;

use cli_config::{clap_cli_config::Opts, CLIAction, CLIRunInfo};
use command_executor::{CommandRunner, DryRunRunner, ShellRunner};
use preconfigure_steps::{final_exit_code, print_summary, run_all_steps, settings_as_yaml, StepReport};

fn main() {
  let CLIRunInfo { action, settings } = CLIRunInfo::from(Opts::parse());

  match action {
    CLIAction::ShowSettings => match settings_as_yaml(&settings) {
      Ok(yaml) => print!("{}", yaml),
      Err(err_message) => logger::exit_error_log(err_message)
    },
    CLIAction::RunSteps { strict_exit } => {
      if !settings.project_root.is_dir() {
        logger::warn(format!(
          "Project root '{}' is not a directory. Both steps will likely fail.",
          settings.project_root.display()
        ));
      }

      let mut runner: Box<dyn CommandRunner> = if settings.dry_run
        { Box::new(DryRunRunner) }
        else { Box::new(ShellRunner::new(settings.shell.clone())) };

      let reports: Vec<StepReport> = run_all_steps(&settings, runner.as_mut());
      print_summary(&reports);

      exit(final_exit_code(&reports, strict_exit));
    }
  }
}
