use std::path::Path;

pub fn quoted(item: impl AsRef<str>) -> String {
  return format!("\"{}\"", item.as_ref());
}

pub fn with_separator(file_path: impl AsRef<Path>, separator: char) -> String {
  return file_path.as_ref()
    .to_string_lossy()
    .replace(|c: char| c == '/' || c == '\\', &separator.to_string());
}

// cmd.exe reads '/' as the start of a switch, so paths given to it must use
// backslashes. Everywhere else forward slashes work.
pub fn native_separated(file_path: impl AsRef<Path>) -> String {
  let separator: char = if cfg!(windows)
    { '\\' }
    else { '/' };

  return with_separator(file_path, separator);
}

pub fn quoted_path(file_path: impl AsRef<Path>) -> String {
  quoted(native_separated(file_path))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn separators_are_normalized() {
    assert_eq!(with_separator("Submodules\\assimp/build", '/'), "Submodules/assimp/build");
    assert_eq!(with_separator("Tools/Premake/premake5.exe", '\\'), "Tools\\Premake\\premake5.exe");
  }

  #[cfg(windows)]
  #[test]
  fn paths_are_quoted_with_backslashes_on_windows() {
    assert_eq!(quoted_path("Submodules/assimp/build"), "\"Submodules\\assimp\\build\"");
  }

  #[cfg(not(windows))]
  #[test]
  fn paths_are_quoted_with_forward_slashes() {
    assert_eq!(quoted_path("Submodules\\assimp\\build"), "\"Submodules/assimp/build\"");
    assert_eq!(quoted_path("Submodules/assimp"), "\"Submodules/assimp\"");
  }
}
