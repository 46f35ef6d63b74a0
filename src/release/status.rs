use std::fmt;

/// Publication state of a release, derived from its draft and prerelease
/// flags. Only used to word messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    Draft,
    Prerelease,
    Release,
}

impl ReleaseStatus {
    /// A draft wins over a prerelease flag.
    pub fn from_flags(draft: bool, prerelease: bool) -> Self {
        if draft {
            ReleaseStatus::Draft
        } else if prerelease {
            ReleaseStatus::Prerelease
        } else {
            ReleaseStatus::Release
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReleaseStatus::Draft => "draft",
            ReleaseStatus::Prerelease => "prerelease",
            ReleaseStatus::Release => "release",
        }
    }

    /// Label with its first letter uppercased, for opening a sentence.
    pub fn capitalized(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A draft can never be a prerelease at the same time.
pub fn effective_prerelease(draft: bool, prerelease: bool) -> bool {
    prerelease && !draft
}
