use crate::agents::{BumpResult, ProjectScannerAgent, PubspecEditor};
use crate::error::{PubverError, Result};
use crate::pubspec::BuildNumber;
use colored::Colorize;
use std::path::Path;

pub const VERBOSE_ENV: &str = "PUBVER_VERBOSE";

fn is_verbose() -> bool {
    std::env::var(VERBOSE_ENV).is_ok()
}

/// Validates the requested base version before any file is touched
pub fn require_version(new_version: Option<&str>) -> Result<&str> {
    let version = new_version
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(PubverError::MissingArgument)?;

    if version.contains(['\n', '\r']) {
        return Err(PubverError::InvalidVersion(version.to_string()));
    }

    Ok(version)
}

/// Execute the bump workflow against `<project_path>/<file_name>`
pub fn execute_bump<P: AsRef<Path>>(
    project_path: P,
    file_name: &str,
    new_version: &str,
    json: bool,
) -> Result<BumpResult> {
    let project_path = project_path.as_ref();

    if !json {
        println!("\n{}", format!("1. Locating {}...", file_name).yellow());
    }
    let scanner = ProjectScannerAgent::new(project_path, file_name);
    let project_info = scanner.locate()?;

    if is_verbose() {
        eprintln!(
            "   Using version file {}",
            project_info.pubspec_path.display().to_string().dimmed()
        );
    }

    if !json {
        println!("{}", format!("✓ Found {}", project_info.file_name).green());
        println!("\n{}", "2. Updating version line...".yellow());
    }
    let editor = PubspecEditor::new(&project_info.pubspec_path, &project_info.file_name);
    let result = editor.bump(new_version)?;

    if is_verbose() {
        print_build_warning(&result);
    }

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!(
            "{}",
            format!(
                "✓ Updated {}: {} → {}",
                result.file, result.previous_version, result.new_version
            )
            .green()
        );
    }

    Ok(result)
}

fn print_build_warning(result: &BumpResult) {
    if result.previous_build == BuildNumber::Invalid {
        eprintln!(
            "{}",
            format!(
                "⚠ Build number in '{}' is not a positive integer, counting from 1",
                result.previous_version
            )
            .yellow()
        );
    }
}
