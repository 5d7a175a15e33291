use std::fmt;

use semver::{BuildMetadata, Prerelease, Version};
use serde::{Deserialize, Serialize};

use crate::boundary::BumpWarning;
use crate::ui;

/// Represents the type of semantic version bump to apply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IncrementKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl fmt::Display for IncrementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncrementKind::Major => "major",
            IncrementKind::Minor => "minor",
            IncrementKind::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Computes the next version for `kind`.
///
/// Increments the appropriate component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// A pre-release already sitting on the target release is promoted to that
/// release instead (`1.3.0-rc.1` bumped by minor is `1.3.0`). Pre-release and
/// build metadata never survive a bump.
///
/// Returns `None` when the incremented component would overflow `u64`.
pub fn next_version(version: &Version, kind: IncrementKind) -> Option<Version> {
    let is_pre = !version.pre.is_empty();
    let (major, minor, patch) = match kind {
        IncrementKind::Major if is_pre && version.minor == 0 && version.patch == 0 => {
            (version.major, 0, 0)
        }
        IncrementKind::Major => (version.major.checked_add(1)?, 0, 0),
        IncrementKind::Minor if is_pre && version.patch == 0 => (version.major, version.minor, 0),
        IncrementKind::Minor => (version.major, version.minor.checked_add(1)?, 0),
        IncrementKind::Patch if is_pre => (version.major, version.minor, version.patch),
        IncrementKind::Patch => (
            version.major,
            version.minor,
            version.patch.checked_add(1)?,
        ),
    };

    Some(Version {
        major,
        minor,
        patch,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    })
}

/// Bumps a version string, keeping a leading `v` if it had one.
///
/// # Returns
/// * `Ok(String)` - The bumped version string
/// * `Err(BumpWarning)` - If the value (minus its prefix) is not a semantic version,
///   or the bumped component would not fit in a `u64`
pub fn try_bump(version: &str, kind: IncrementKind) -> Result<String, BumpWarning> {
    let (prefix, bare) = match version.strip_prefix('v') {
        Some(rest) => ("v", rest),
        None => ("", version),
    };

    let parsed = Version::parse(bare).map_err(|_| BumpWarning::NonSemanticVersion {
        value: version.to_string(),
    })?;

    let next = next_version(&parsed, kind).ok_or_else(|| BumpWarning::VersionOverflow {
        value: version.to_string(),
    })?;

    Ok(format!("{}{}", prefix, next))
}

/// Bumps a version string, or reports a warning and returns it unchanged.
pub fn bump(version: &str, kind: IncrementKind) -> String {
    match try_bump(version, kind) {
        Ok(bumped) => bumped,
        Err(warning) => {
            ui::display_bump_warning(&warning);
            version.to_string()
        }
    }
}
