pub mod project_scanner;
pub mod pubspec_editor;

pub use project_scanner::{DEFAULT_PUBSPEC_FILE, ProjectScannerAgent};
pub use pubspec_editor::{BumpResult, PubspecEditor};
