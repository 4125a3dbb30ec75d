/// Build number used when the current version carries no usable `+N` suffix.
pub const DEFAULT_BUILD_NUMBER: u64 = 1;

/// Version value as written on the `version:` line of a pubspec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubspecVersion {
    pub original: String,
    pub build: BuildNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildNumber {
    /// `+N` suffix holding a positive integer
    Parsed(u64),
    /// No `+` in the version at all
    Missing,
    /// A `+` suffix that does not start with a positive integer
    Invalid,
    /// A numeric suffix too large to increment
    OutOfRange,
}

impl BuildNumber {
    /// Numeric value, falling back to [`DEFAULT_BUILD_NUMBER`].
    pub fn value(self) -> u64 {
        match self {
            BuildNumber::Parsed(n) => n,
            BuildNumber::Missing | BuildNumber::Invalid | BuildNumber::OutOfRange => {
                DEFAULT_BUILD_NUMBER
            }
        }
    }
}

impl PubspecVersion {
    pub fn parse(value: &str) -> Self {
        let original = value.trim().to_string();

        let build = match original.split('+').nth(1) {
            None => BuildNumber::Missing,
            Some(segment) => Self::parse_build_segment(segment),
        };

        PubspecVersion { original, build }
    }

    /// Reads the leading decimal digits of a build segment, so `12abc` yields 12.
    ///
    /// Zero counts as invalid; digits that cannot be incremented are out of range.
    fn parse_build_segment(segment: &str) -> BuildNumber {
        let trimmed = segment.trim_start();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let digits = &trimmed[..end];

        if digits.is_empty() {
            return BuildNumber::Invalid;
        }

        match digits.parse::<u64>() {
            Ok(0) => BuildNumber::Invalid,
            Ok(n) if n < u64::MAX => BuildNumber::Parsed(n),
            _ => BuildNumber::OutOfRange,
        }
    }

    pub fn next_build_number(&self) -> u64 {
        self.build.value() + 1
    }

    /// Full version string for the next release of `base`.
    pub fn bump(&self, base: &str) -> String {
        format!("{}+{}", base, self.next_build_number())
    }
}
