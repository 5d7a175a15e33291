//! Recursive search for a target key inside a YAML document.
//!
//! The walker owns the only mutable borrow of the document while it runs and
//! records what it did in a [`WalkReport`], so callers can tell whether the
//! document changed without keeping a copy of it around.

use serde_yaml::{Mapping, Value};

use crate::boundary::BumpWarning;
use crate::version::{self, IncrementKind};

/// Something the walker did (or declined to do) at one occurrence of the target key.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkEvent {
    Bumped {
        key: String,
        old: String,
        new: String,
    },
    Skipped(BumpWarning),
}

/// Ordered record of every occurrence of the target key, in visit order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkReport {
    pub events: Vec<WalkEvent>,
}

impl WalkReport {
    /// Whether any value in the document was rewritten
    pub fn changed(&self) -> bool {
        self.bumped_count() > 0
    }

    /// Number of values that were rewritten
    pub fn bumped_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, WalkEvent::Bumped { .. }))
            .count()
    }
}

/// Bumps every value stored under `key`, at any depth of `document`.
///
/// Documents whose root is not a mapping are left alone.
pub fn walk(document: &mut Value, key: &str, kind: IncrementKind) -> WalkReport {
    let mut report = WalkReport::default();
    if let Value::Mapping(mapping) = document {
        walk_mapping(mapping, key, kind, &mut report);
    }
    report
}

fn walk_mapping(mapping: &mut Mapping, key: &str, kind: IncrementKind, report: &mut WalkReport) {
    // Nested occurrences are handled before this level's own key.
    for (_, child) in mapping.iter_mut() {
        if let Value::Mapping(nested) = child {
            walk_mapping(nested, key, kind, report);
        }
    }

    let Some(value) = mapping.get_mut(key) else {
        return;
    };

    let event = match value {
        Value::String(current) => match version::try_bump(current, kind) {
            Ok(bumped) if bumped != *current => {
                let old = std::mem::replace(current, bumped.clone());
                WalkEvent::Bumped {
                    key: key.to_string(),
                    old,
                    new: bumped,
                }
            }
            Ok(_) => return,
            Err(warning) => WalkEvent::Skipped(warning),
        },
        other => WalkEvent::Skipped(BumpWarning::NonStringValue {
            key: key.to_string(),
            value: describe(other),
        }),
    };
    report.events.push(event);
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "<sequence>".to_string(),
        Value::Mapping(_) => "<mapping>".to_string(),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, describe(&tagged.value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_walk_bumps_root_key() {
        let mut doc = load("name: app\nversion: 1.0.0\n");
        let report = walk(&mut doc, "version", IncrementKind::Patch);

        assert!(report.changed());
        assert_eq!(doc["version"], Value::String("1.0.1".to_string()));
        assert_eq!(doc["name"], Value::String("app".to_string()));
    }

    #[test]
    fn test_walk_bumps_every_nested_occurrence() {
        let mut doc = load(
            r#"
a:
  version: "1.0.0"
b:
  c:
    version: "2.0.0"
"#,
        );
        let report = walk(&mut doc, "version", IncrementKind::Patch);

        assert_eq!(report.bumped_count(), 2);
        assert_eq!(doc, load("a:\n  version: 1.0.1\nb:\n  c:\n    version: 2.0.1\n"));
    }

    #[test]
    fn test_walk_visits_nested_before_current_level() {
        let mut doc = load("version: v1.0.0\nchild:\n  version: v5.0.0\n");
        let report = walk(&mut doc, "version", IncrementKind::Minor);

        assert_eq!(
            report.events,
            vec![
                WalkEvent::Bumped {
                    key: "version".to_string(),
                    old: "v5.0.0".to_string(),
                    new: "v5.1.0".to_string(),
                },
                WalkEvent::Bumped {
                    key: "version".to_string(),
                    old: "v1.0.0".to_string(),
                    new: "v1.1.0".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_walk_without_target_key_is_noop() {
        let original = load("image:\n  tag: 1.2.3\nreplicas: 2\n");
        let mut doc = original.clone();
        let report = walk(&mut doc, "version", IncrementKind::Major);

        assert!(!report.changed());
        assert!(report.events.is_empty());
        assert_eq!(doc, original);
    }

    #[test]
    fn test_walk_skips_non_semantic_values_and_continues() {
        let mut doc = load("a:\n  version: latest\nb:\n  version: 0.1.0\n");
        let report = walk(&mut doc, "version", IncrementKind::Patch);

        assert_eq!(report.bumped_count(), 1);
        assert_eq!(
            report.events[0],
            WalkEvent::Skipped(BumpWarning::NonSemanticVersion {
                value: "latest".to_string()
            })
        );
        assert_eq!(doc["a"]["version"], Value::String("latest".to_string()));
        assert_eq!(doc["b"]["version"], Value::String("0.1.1".to_string()));
    }

    #[test]
    fn test_walk_leaves_non_string_values_alone() {
        let mut doc = load("version: 1.5\nnested:\n  version: [1, 2]\n");
        let report = walk(&mut doc, "version", IncrementKind::Patch);

        assert!(!report.changed());
        assert_eq!(report.events.len(), 2);
        assert!(matches!(
            &report.events[1],
            WalkEvent::Skipped(BumpWarning::NonStringValue { value, .. }) if value == "1.5"
        ));
    }

    #[test]
    fn test_walk_leaves_overflowing_version_unchanged() {
        let original = load("version: 18446744073709551615.0.0\n");
        let mut doc = original.clone();
        let report = walk(&mut doc, "version", IncrementKind::Major);

        assert!(!report.changed());
        assert_eq!(
            report.events,
            vec![WalkEvent::Skipped(BumpWarning::VersionOverflow {
                value: "18446744073709551615.0.0".to_string()
            })]
        );
        assert_eq!(doc, original);
    }

    #[test]
    fn test_walk_does_not_descend_into_sequences() {
        let original = load("items:\n  - version: 1.0.0\n  - version: 2.0.0\n");
        let mut doc = original.clone();
        let report = walk(&mut doc, "version", IncrementKind::Patch);

        assert!(!report.changed());
        assert_eq!(doc, original);
    }

    #[test]
    fn test_walk_non_mapping_root() {
        let mut doc = load("- 1.0.0\n- 2.0.0\n");
        assert!(!walk(&mut doc, "version", IncrementKind::Patch).changed());

        let mut scalar = load("1.0.0");
        assert!(!walk(&mut scalar, "version", IncrementKind::Patch).changed());
    }

    #[test]
    fn test_walk_preserves_key_order() {
        let mut doc = load("zeta: 1\nversion: 1.0.0\nalpha: 2\n");
        walk(&mut doc, "version", IncrementKind::Major);

        let keys: Vec<&str> = doc
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "version", "alpha"]);
    }
}
