use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateRatio,
    DuplicateResolution,
    BadRatioToken,
    BadResolutionToken,
    EmptyGroup,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::DuplicateRatio => write!(f, "duplicate-ratio"),
            Rule::DuplicateResolution => write!(f, "duplicate-resolution"),
            Rule::BadRatioToken => write!(f, "bad-ratio-token"),
            Rule::BadResolutionToken => write!(f, "bad-resolution-token"),
            Rule::EmptyGroup => write!(f, "empty-group"),
        }
    }
}

/// A problem found while validating a catalog.
///
/// Error-severity issues reject the catalog (the loader substitutes the
/// built-in table); warnings are surfaced by `rescat check` but tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Zero-based index of the offending group in the catalog array.
    pub group_index: usize,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub details: Option<String>,
}

impl Issue {
    pub fn duplicate_ratio(group_index: usize, ratio: &str, first_index: usize) -> Self {
        Self {
            group_index,
            message: ratio.to_string(),
            severity: Severity::Error,
            rule: Rule::DuplicateRatio,
            details: Some(format!("first defined by group {}", first_index)),
        }
    }

    pub fn duplicate_resolution(group_index: usize, ratio: &str, resolution: &str) -> Self {
        Self {
            group_index,
            message: resolution.to_string(),
            severity: Severity::Error,
            rule: Rule::DuplicateResolution,
            details: Some(format!("appears twice under \"{}\"", ratio)),
        }
    }

    pub fn bad_ratio_token(group_index: usize, ratio: &str, reason: &str) -> Self {
        Self {
            group_index,
            message: ratio.to_string(),
            severity: Severity::Warning,
            rule: Rule::BadRatioToken,
            details: Some(reason.to_string()),
        }
    }

    pub fn bad_resolution_token(
        group_index: usize,
        ratio: &str,
        resolution: &str,
        reason: &str,
    ) -> Self {
        Self {
            group_index,
            message: resolution.to_string(),
            severity: Severity::Warning,
            rule: Rule::BadResolutionToken,
            details: Some(format!("under \"{}\": {}", ratio, reason)),
        }
    }

    pub fn empty_group(group_index: usize, ratio: &str) -> Self {
        Self {
            group_index,
            message: ratio.to_string(),
            severity: Severity::Warning,
            rule: Rule::EmptyGroup,
            details: Some("group has no resolutions".to_string()),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: \"{}\" ({}, group {})",
            self.severity, self.message, self.rule, self.group_index
        )?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: group index, rule, message. Message comparison keeps the
        // report order deterministic when one group carries several issues.
        self.group_index
            .cmp(&other.group_index)
            .then_with(|| self.rule.cmp(&other.rule))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
