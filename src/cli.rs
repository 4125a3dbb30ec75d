use crate::agents::DEFAULT_PUBSPEC_FILE;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pubver",
    about = "Bump the version and build number of a Flutter pubspec.yaml",
    version
)]
pub struct Cli {
    /// New base version, e.g. "1.2.3" (the build number is incremented automatically)
    #[arg(value_name = "VERSION")]
    pub new_version: Option<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Name of the version file inside the project directory
    #[arg(short, long, default_value = DEFAULT_PUBSPEC_FILE)]
    pub file: String,

    /// Print the result as JSON instead of human-readable lines
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
