use std::fmt;

/// Non-fatal issues found while bumping values under the target key.
/// The offending value is left untouched and processing continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// Value is a string but not a semantic version
    NonSemanticVersion { value: String },
    /// Value under the target key is not a string at all
    NonStringValue { key: String, value: String },
    /// Semantic version whose bumped component would exceed `u64::MAX`
    VersionOverflow { value: String },
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::NonSemanticVersion { value } => {
                write!(f, "Non-semantic version: {} will not update...", value)
            }
            BumpWarning::NonStringValue { key, value } => {
                write!(
                    f,
                    "Value of '{}' is not a version string: {} will not update...",
                    key, value
                )
            }
            BumpWarning::VersionOverflow { value } => {
                write!(
                    f,
                    "Version {} cannot be incremented any further, will not update...",
                    value
                )
            }
        }
    }
}
