use crate::error::{PubverError, Result};
use crate::pubspec::{BuildNumber, PubspecVersion, VersionLine};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a single version bump
#[derive(Debug, Clone, Serialize)]
pub struct BumpResult {
    pub file: String,
    pub previous_version: String,
    pub new_version: String,
    pub build_number: u64,
    #[serde(skip)]
    pub previous_build: BuildNumber,
}

pub struct PubspecEditor {
    pubspec_path: PathBuf,
    file_name: String,
}

impl PubspecEditor {
    pub fn new<P: AsRef<Path>>(pubspec_path: P, file_name: &str) -> Self {
        Self {
            pubspec_path: pubspec_path.as_ref().to_path_buf(),
            file_name: file_name.to_string(),
        }
    }

    /// Sets the version to `<base>+<previous build + 1>` and writes the file back.
    pub fn bump(&self, base: &str) -> Result<BumpResult> {
        let content = self.load_document()?;
        let version_line = VersionLine::new()?;

        let current = version_line
            .current_value(&content)
            .map(PubspecVersion::parse)
            .ok_or_else(|| PubverError::Format(self.file_name.clone()))?;

        if current.build == BuildNumber::OutOfRange {
            return Err(PubverError::BuildNumberOutOfRange(current.original));
        }

        let build_number = current.next_build_number();
        let new_version = current.bump(base);
        let updated = version_line.replace(&content, &new_version);

        self.write_document(&updated)?;

        Ok(BumpResult {
            file: self.file_name.clone(),
            previous_version: current.original,
            new_version,
            build_number,
            previous_build: current.build,
        })
    }

    fn load_document(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.pubspec_path)?)
    }

    fn write_document(&self, content: &str) -> Result<()> {
        fs::write(&self.pubspec_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    const PUBSPEC: &str = r#"name: demo_app
description: "A new Flutter project."
publish_to: 'none'
version: 1.0.0+7

environment:
  sdk: ^3.5.0

dependencies:
  flutter:
    sdk: flutter
  cupertino_icons: ^1.0.8
"#;

    fn project_with(content: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pubspec.yaml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn bumps_version_and_build_number() {
        let (_dir, path) = project_with(PUBSPEC);
        let result = PubspecEditor::new(&path, "pubspec.yaml")
            .bump("1.2.0")
            .unwrap();

        assert_eq!(result.previous_version, "1.0.0+7");
        assert_eq!(result.new_version, "1.2.0+8");
        assert_eq!(result.build_number, 8);
        assert_eq!(result.previous_build, BuildNumber::Parsed(7));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            PUBSPEC.replace("version: 1.0.0+7", "version: 1.2.0+8")
        );
    }

    #[test]
    fn missing_build_number_starts_at_two() {
        let (_dir, path) = project_with("name: demo\nversion: 1.0.0\n");
        let result = PubspecEditor::new(&path, "pubspec.yaml")
            .bump("1.0.1")
            .unwrap();
        assert_eq!(result.new_version, "1.0.1+2");
        assert_eq!(result.previous_build, BuildNumber::Missing);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "name: demo\nversion: 1.0.1+2\n"
        );
    }

    #[test]
    fn non_numeric_build_number_starts_at_two() {
        let (_dir, path) = project_with("version: 1.0.0+abc\n");
        let result = PubspecEditor::new(&path, "pubspec.yaml")
            .bump("1.0.0")
            .unwrap();
        assert_eq!(result.new_version, "1.0.0+2");
        assert_eq!(result.previous_build, BuildNumber::Invalid);
    }

    #[test]
    fn repeated_bumps_keep_counting() {
        let (_dir, path) = project_with(PUBSPEC);
        let editor = PubspecEditor::new(&path, "pubspec.yaml");

        let first = editor.bump("1.2.0").unwrap();
        let second = editor.bump("1.2.0").unwrap();

        assert_eq!(first.new_version, "1.2.0+8");
        assert_eq!(second.previous_version, "1.2.0+8");
        assert_eq!(second.new_version, "1.2.0+9");
    }

    #[test]
    fn result_reports_previous_and_next_build() {
        let (_dir, path) = project_with("version: 3.1.0+99\n");
        let result = PubspecEditor::new(&path, "pubspec.yaml")
            .bump("3.2.0")
            .unwrap();
        assert_eq!(result.previous_version, "3.1.0+99");
        assert_eq!(result.build_number, 100);
        assert_eq!(result.previous_build, BuildNumber::Parsed(99));
    }

    #[test]
    fn oversized_build_number_fails_without_writing() {
        let content = "version: 1.0.0+18446744073709551615\n";
        let (_dir, path) = project_with(content);

        let err = PubspecEditor::new(&path, "pubspec.yaml")
            .bump("1.0.1")
            .unwrap_err();

        assert!(matches!(err, PubverError::BuildNumberOutOfRange(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn missing_version_field_leaves_file_untouched() {
        let content = "name: demo\ndescription: no version here\n";
        let (_dir, path) = project_with(content);

        let err = PubspecEditor::new(&path, "pubspec.yaml")
            .bump("1.0.0")
            .unwrap_err();

        assert!(matches!(err, PubverError::Format(_)));
        assert_eq!(err.to_string(), "Version field not found in pubspec.yaml");
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pubspec.yaml");
        fs::write(&path, [0x76, 0x65, 0xff, 0xfe]).unwrap();

        let err = PubspecEditor::new(&path, "pubspec.yaml")
            .bump("1.0.0")
            .unwrap_err();
        assert!(matches!(err, PubverError::Io(_)));
    }
}
