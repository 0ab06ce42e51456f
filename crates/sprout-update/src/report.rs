//! Update outcome types.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use sprout_merge::MergeStrategy;

/// What happened to one document during an update.
///
/// In 1:1 correspondence with [`MergeStrategy`], plus [`Skipped`] for
/// documents whose upstream content is empty.
///
/// [`Skipped`]: ChangeAction::Skipped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Overwritten,
    Preserved,
    SmartMerged,
    SectionMerged,
    UnionMerged,
    Skipped,
}

impl ChangeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeAction::Overwritten => "overwritten",
            ChangeAction::Preserved => "preserved",
            ChangeAction::SmartMerged => "smart_merged",
            ChangeAction::SectionMerged => "section_merged",
            ChangeAction::UnionMerged => "union_merged",
            ChangeAction::Skipped => "skipped",
        }
    }

    /// Returns `true` for the three merge variants.
    pub fn is_merge(self) -> bool {
        matches!(
            self,
            ChangeAction::SmartMerged | ChangeAction::SectionMerged | ChangeAction::UnionMerged
        )
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MergeStrategy> for ChangeAction {
    fn from(strategy: MergeStrategy) -> Self {
        match strategy {
            MergeStrategy::Overwrite => ChangeAction::Overwritten,
            MergeStrategy::Preserve => ChangeAction::Preserved,
            MergeStrategy::SmartMerge => ChangeAction::SmartMerged,
            MergeStrategy::SectionMerge => ChangeAction::SectionMerged,
            MergeStrategy::UnionMerge => ChangeAction::UnionMerged,
        }
    }
}

/// Record of a single document change during an update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileChange {
    pub filename: String,
    pub action: ChangeAction,
    pub details: String,
}

impl FileChange {
    pub fn new(filename: impl Into<String>, action: ChangeAction, details: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            action,
            details: details.into(),
        }
    }
}

/// Result of one workspace update invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateReport {
    pub success: bool,
    pub from_version: f64,
    pub to_version: f64,
    pub changes: Vec<FileChange>,
    pub backup_path: Option<PathBuf>,
    pub conflicts: Vec<String>,
}

impl UpdateReport {
    /// A terminal failure: no changes, one conflict message.
    pub fn failure(from_version: f64, to_version: f64, conflict: impl Into<String>) -> Self {
        Self {
            success: false,
            from_version,
            to_version,
            changes: Vec::new(),
            backup_path: None,
            conflicts: vec![conflict.into()],
        }
    }

    /// Already-current updates are successful no-ops, not errors.
    pub fn is_current(&self) -> bool {
        self.success && self.from_version == self.to_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_strings_match_taxonomy() {
        assert_eq!(ChangeAction::Overwritten.as_str(), "overwritten");
        assert_eq!(ChangeAction::SmartMerged.as_str(), "smart_merged");
        assert_eq!(ChangeAction::Skipped.as_str(), "skipped");
    }

    #[test]
    fn every_strategy_maps_to_an_action() {
        let strategies = [
            MergeStrategy::Overwrite,
            MergeStrategy::Preserve,
            MergeStrategy::SmartMerge,
            MergeStrategy::SectionMerge,
            MergeStrategy::UnionMerge,
        ];
        let actions: Vec<ChangeAction> = strategies.into_iter().map(ChangeAction::from).collect();
        assert_eq!(
            actions,
            vec![
                ChangeAction::Overwritten,
                ChangeAction::Preserved,
                ChangeAction::SmartMerged,
                ChangeAction::SectionMerged,
                ChangeAction::UnionMerged,
            ]
        );
    }

    #[test]
    fn failure_report_shape() {
        let report = UpdateReport::failure(1.0, 0.0, "seed not found");
        assert!(!report.success);
        assert!(report.changes.is_empty());
        assert_eq!(report.conflicts, vec!["seed not found".to_string()]);
    }

    #[test]
    fn merge_actions_classified() {
        assert!(ChangeAction::SmartMerged.is_merge());
        assert!(ChangeAction::UnionMerged.is_merge());
        assert!(!ChangeAction::Preserved.is_merge());
        assert!(!ChangeAction::Skipped.is_merge());
    }
}
