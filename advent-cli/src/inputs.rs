//! Local store for puzzle input files

use std::fs;
use std::io;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Layout: `{base_dir}/{year}_day{day:02}.txt`, with `_test` appended before
/// the extension when the store serves sample inputs.
pub struct InputStore {
    base_dir: PathBuf,
    test: bool,
}

impl InputStore {
    /// Create a store rooted at `base_dir`; `test` selects the sample files
    pub fn new(base_dir: PathBuf, test: bool) -> Self {
        Self { base_dir, test }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        let suffix = if self.test { "_test" } else { "" };
        self.base_dir
            .join(format!("{}_day{:02}{}.txt", year, day, suffix))
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input file
    pub fn read(&self, year: u16, day: u8) -> io::Result<String> {
        fs::read_to_string(self.input_path(year, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), false);

        let path = store.input_path(2025, 1);
        assert!(path.to_string_lossy().ends_with("2025_day01.txt"));

        let path = store.input_path(2025, 25);
        assert!(path.to_string_lossy().ends_with("2025_day25.txt"));
    }

    #[test]
    fn test_sample_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), true);

        let path = store.input_path(2025, 4);
        assert!(path.to_string_lossy().ends_with("2025_day04_test.txt"));
    }

    #[test]
    fn test_read_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), false);

        // Initially absent
        assert!(!store.contains(2025, 1));
        assert!(store.read(2025, 1).is_err());

        // Write the file where the store expects it
        let input = "R60\nL70\n";
        std::fs::write(store.input_path(2025, 1), input).unwrap();

        assert!(store.contains(2025, 1));
        assert_eq!(store.read(2025, 1).unwrap(), input);
    }

    #[test]
    fn test_real_and_sample_files_are_distinct() {
        let temp = TempDir::new().unwrap();
        let real = InputStore::new(temp.path().to_path_buf(), false);
        let sample = InputStore::new(temp.path().to_path_buf(), true);

        std::fs::write(real.input_path(2025, 1), "real").unwrap();
        assert!(real.contains(2025, 1));
        assert!(!sample.contains(2025, 1));
    }
}
