//! Catalog invariant checks.
//!
//! Duplicate ratios and duplicate resolutions within a group reject the
//! catalog outright (error severity). Malformed tokens and empty groups are
//! tolerated by the loader so a hand-edited file with one odd label still
//! works, but `rescat check` reports them.

use std::collections::HashMap;

use crate::issue::{Issue, Severity};
use crate::resolution::{AspectRatio, Resolution};

use super::ResolutionCatalog;

/// Check a catalog against the invariants, returning all problems found,
/// sorted for deterministic reporting.
pub fn validate(catalog: &ResolutionCatalog) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen_ratios: HashMap<&str, usize> = HashMap::new();

    for (index, group) in catalog.groups().iter().enumerate() {
        match seen_ratios.get(group.ratio.as_str()) {
            Some(first_index) => {
                issues.push(Issue::duplicate_ratio(index, &group.ratio, *first_index));
            }
            None => {
                seen_ratios.insert(&group.ratio, index);
            }
        }

        if let Err(err) = group.ratio.parse::<AspectRatio>() {
            issues.push(Issue::bad_ratio_token(index, &group.ratio, &format!("{:#}", err)));
        }

        if group.resolutions.is_empty() {
            issues.push(Issue::empty_group(index, &group.ratio));
        }

        let mut seen_resolutions = std::collections::HashSet::new();
        for entry in &group.resolutions {
            if !seen_resolutions.insert(entry.resolution.as_str()) {
                issues.push(Issue::duplicate_resolution(
                    index,
                    &group.ratio,
                    &entry.resolution,
                ));
            }
            if let Err(err) = entry.resolution.parse::<Resolution>() {
                issues.push(Issue::bad_resolution_token(
                    index,
                    &group.ratio,
                    &entry.resolution,
                    &format!("{:#}", err),
                ));
            }
        }
    }

    issues.sort();
    issues
}

/// True when any issue is severe enough to reject the catalog.
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|issue| issue.severity == Severity::Error)
}
