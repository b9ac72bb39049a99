use std::process::exit;
use colored::Colorize;

pub fn info(message: impl AsRef<str>) {
  println!(
    "{}: {}",
    "Info".cyan(),
    message.as_ref()
  );
}

pub fn success(message: impl AsRef<str>) {
  println!(
    "{}: {}",
    "Done".green(),
    message.as_ref()
  );
}

pub fn warn(message: impl AsRef<str>) {
  println!(
    "{}: {}",
    "Warning".yellow(),
    message.as_ref()
  );
}

// Step failures go to stdout, not stderr.
pub fn error(message: impl AsRef<str>) {
  println!(
    "{}: {}",
    "Error".red(),
    message.as_ref()
  );
}

pub fn failed(message: impl AsRef<str>) {
  println!(
    "{}: {}",
    "Failed".red(),
    message.as_ref()
  );
}

pub fn exit_error_log(error_message: impl AsRef<str>) -> ! {
  eprintln!("{}", error_message.as_ref());
  exit(1);
}
