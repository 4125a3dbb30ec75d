use crate::error::{PubverError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_PUBSPEC_FILE: &str = "pubspec.yaml";

/// ProjectScannerAgent locates the version file inside a project directory
pub struct ProjectScannerAgent {
    project_path: PathBuf,
    file_name: String,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P, file_name: &str) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
            file_name: file_name.to_string(),
        }
    }

    /// Resolves the version file, failing when it does not exist
    pub fn locate(&self) -> Result<ProjectInfo> {
        let pubspec_path = self.project_path.join(&self.file_name);

        if !pubspec_path.is_file() {
            return Err(PubverError::FileNotFound(self.file_name.clone()));
        }

        Ok(ProjectInfo {
            pubspec_path,
            file_name: self.file_name.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub pubspec_path: PathBuf,
    pub file_name: String,
}
