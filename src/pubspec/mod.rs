pub mod version;
pub mod version_line;

pub use version::{BuildNumber, PubspecVersion};
pub use version_line::VersionLine;
