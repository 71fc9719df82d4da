//! File-backed puzzle input

use aoc_harness::{DataError, InputKind, InputProvider};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Puzzle inputs stored under a data directory
///
/// Directory structure: `{root}/{year}/{name}.txt` for real input and
/// `{root}/{year}/{name}Example.txt` for example input.
pub struct InputDirectory {
    root: PathBuf,
}

impl InputDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the file path for a solver's input
    pub fn input_path(&self, year: u16, name: &str, kind: InputKind) -> PathBuf {
        let suffix = if kind.is_example() { "Example" } else { "" };
        self.root
            .join(year.to_string())
            .join(format!("{name}{suffix}.txt"))
    }
}

impl InputProvider for InputDirectory {
    fn load(&self, year: u16, name: &str, kind: InputKind) -> Result<Vec<String>, DataError> {
        let path = self.input_path(year, name, kind);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content.lines().map(String::from).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DataError::NotFound { path }),
            Err(source) => Err(DataError::Unreadable { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let input = InputDirectory::new(PathBuf::from("data"));

        assert_eq!(
            input.input_path(2018, "Day01", InputKind::Real),
            PathBuf::from("data/2018/Day01.txt")
        );
        assert_eq!(
            input.input_path(2023, "Day25", InputKind::Example),
            PathBuf::from("data/2023/Day25Example.txt")
        );
    }

    #[test]
    fn test_load_lines() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2018")).unwrap();
        fs::write(temp.path().join("2018/Day01.txt"), "+1\n-2\r\n+3\n").unwrap();

        let input = InputDirectory::new(temp.path().to_path_buf());
        let lines = input.load(2018, "Day01", InputKind::Real).unwrap();
        assert_eq!(lines, vec!["+1", "-2", "+3"]);
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let input = InputDirectory::new(temp.path().to_path_buf());

        match input.load(2018, "Day01", InputKind::Example) {
            Err(DataError::NotFound { path }) => assert!(path.ends_with("2018/Day01Example.txt")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_unreadable() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2018/Day01.txt")).unwrap();

        let input = InputDirectory::new(temp.path().to_path_buf());
        assert!(matches!(
            input.load(2018, "Day01", InputKind::Real),
            Err(DataError::Unreadable { .. })
        ));
    }
}
