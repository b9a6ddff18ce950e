//! Golden file comparison for generated source text.
//!
//! Generated C++ must stay byte-stable, so tests compare whole artifacts
//! against checked-in expected files. On mismatch the failure shows a
//! line-level diff. When an output change is intentional, regenerate the
//! expected files with:
//!
//! ```bash
//! CONVGEN_UPDATE_GOLDEN=1 cargo test
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One golden file comparison.
///
/// The expected file lives at `{golden_dir}/{name}.{extension}` under the
/// workspace `tests/golden/` directory. Setting `CONVGEN_UPDATE_GOLDEN=1`
/// rewrites the expected file instead of comparing.
pub struct GoldenTest {
    name: String,
    golden_dir: PathBuf,
    update_mode: bool,
}

impl GoldenTest {
    /// Create a golden test rooted at the workspace `tests/golden/`
    /// directory.
    pub fn new(name: &str) -> Self {
        let golden_dir = workspace_root().join("tests").join("golden");
        Self::with_golden_dir(name, golden_dir)
    }

    /// Create a golden test against an explicit directory.
    pub fn with_golden_dir(name: &str, golden_dir: impl Into<PathBuf>) -> Self {
        let update_mode = env::var("CONVGEN_UPDATE_GOLDEN")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            name: name.to_string(),
            golden_dir: golden_dir.into(),
            update_mode,
        }
    }

    /// Compare `actual` against the stored expected file, or rewrite the
    /// expected file in update mode.
    ///
    /// # Panics
    ///
    /// Panics on mismatch, on a missing expected file, or when the expected
    /// file cannot be written in update mode.
    pub fn assert_eq(&self, extension: &str, actual: &str) {
        let path = self.golden_path(extension);

        if self.update_mode {
            self.update_golden(&path, actual);
        } else {
            self.compare_golden(&path, actual);
        }
    }

    fn golden_path(&self, extension: &str) -> PathBuf {
        self.golden_dir.join(format!("{}.{}", self.name, extension))
    }

    fn update_golden(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("failed to create golden directory {:?}: {}", parent, e)
            });
        }
        fs::write(path, content)
            .unwrap_or_else(|e| panic!("failed to write golden file {:?}: {}", path, e));
    }

    fn compare_golden(&self, path: &Path, actual: &str) {
        let expected = fs::read_to_string(path).unwrap_or_else(|e| {
            panic!(
                "failed to read golden file {:?}: {}\n\
                 \n\
                 Hint: if this is a new test, create the golden file with\n\
                 CONVGEN_UPDATE_GOLDEN=1 cargo test {}",
                path, e, self.name
            )
        });

        if expected != actual {
            panic!(
                "golden file mismatch for '{}'\n\
                 Golden file: {}\n\
                 \n\
                 {}\n\
                 To update the golden file if this change is intentional:\n\
                 CONVGEN_UPDATE_GOLDEN=1 cargo test {}",
                self.name,
                path.display(),
                line_diff(&expected, actual),
                self.name
            );
        }
    }
}

/// Walk up from the crate manifest to the directory whose Cargo.toml
/// declares the workspace.
fn workspace_root() -> PathBuf {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    let mut current = PathBuf::from(&manifest_dir);

    loop {
        let cargo_toml = current.join("Cargo.toml");
        if cargo_toml.exists() {
            if let Ok(contents) = fs::read_to_string(&cargo_toml) {
                if contents.contains("[workspace]") {
                    return current;
                }
            }
        }
        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            panic!("could not find workspace root (started from {})", manifest_dir);
        }
    }
}

/// Render the first mismatching lines of two texts.
fn line_diff(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut diff = String::from("Differences:\n");
    let max_lines = expected_lines.len().max(actual_lines.len());
    let mut diff_count = 0;

    for i in 0..max_lines {
        let exp = expected_lines.get(i).copied().unwrap_or("");
        let act = actual_lines.get(i).copied().unwrap_or("");
        if exp != act {
            diff_count += 1;
            if diff_count <= 10 {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  Expected: {}\n", exp));
                diff.push_str(&format!("  Actual:   {}\n", act));
            }
        }
    }
    if diff_count > 10 {
        diff.push_str(&format!("... and {} more differences\n", diff_count - 10));
    }
    diff.push_str(&format!(
        "Total lines: expected={}, actual={}, different={}\n",
        expected_lines.len(),
        actual_lines.len(),
        diff_count
    ));
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_path_includes_name_and_extension() {
        let test = GoldenTest::with_golden_dir("sample_output", "/tmp/golden");
        let path = test.golden_path("cpp");
        assert!(path.to_string_lossy().ends_with("golden/sample_output.cpp"));
    }

    #[test]
    fn test_line_diff_reports_mismatching_lines() {
        let diff = line_diff("a\nb\nc\n", "a\nX\nc\n");
        assert!(diff.contains("Line 2:"));
        assert!(diff.contains("Expected: b"));
        assert!(diff.contains("Actual:   X"));
        assert!(diff.contains("different=1"));
    }

    #[test]
    fn test_line_diff_handles_length_mismatch() {
        let diff = line_diff("a\n", "a\nb\nc\n");
        assert!(diff.contains("expected=1, actual=3"));
        assert!(diff.contains("different=2"));
    }
}
