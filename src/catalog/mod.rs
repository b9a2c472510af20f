//! Catalog types and queries.
//!
//! A catalog is an ordered list of ratio groups, each carrying the resolutions
//! that belong to that aspect-ratio class together with a free-text description
//! per resolution. Catalogs are built once (from a file, an HTTP endpoint, or
//! the built-in table) and never mutated afterwards.

use serde::{Deserialize, Serialize};

mod defaults;
mod load;
mod validate;

pub use load::{CatalogSource, load, parse_catalog, read_catalog};
pub use validate::{has_errors, validate};

/// A single resolution belonging to a ratio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionEntry {
    /// A `"<width>x<height>"` token.
    pub resolution: String,
    /// Free-text label shown next to the selected resolution. May be empty.
    #[serde(default, alias = "说明")]
    pub description: String,
}

impl ResolutionEntry {
    pub fn new(resolution: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            resolution: resolution.into(),
            description: description.into(),
        }
    }
}

/// All resolutions of one aspect-ratio class, in display order.
///
/// The serde aliases accept the Chinese field labels used by older catalog
/// files, so existing data parses unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioGroup {
    /// A `"<w>:<h>"` token such as `"16:9"`.
    #[serde(alias = "比例")]
    pub ratio: String,
    #[serde(alias = "分辨率")]
    pub resolutions: Vec<ResolutionEntry>,
}

/// The full ratio → resolutions → description lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionCatalog {
    groups: Vec<RatioGroup>,
}

impl ResolutionCatalog {
    /// Build a catalog from raw groups. No validation happens here; loaders
    /// run [`validate`] before trusting external data.
    pub fn new(groups: Vec<RatioGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[RatioGroup] {
        &self.groups
    }

    /// Number of ratio groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group matching `ratio` exactly, if any.
    pub fn group(&self, ratio: &str) -> Option<&RatioGroup> {
        self.groups.iter().find(|group| group.ratio == ratio)
    }

    /// All ratio labels, in stored order. Drives the ratio dropdown.
    pub fn ratios(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.ratio.as_str())
    }

    /// The resolution tokens of the group matching `ratio`, in stored order.
    /// Unknown ratios yield an empty list, not an error.
    pub fn resolutions_for(&self, ratio: &str) -> Vec<String> {
        self.entries_for(ratio)
            .iter()
            .map(|entry| entry.resolution.clone())
            .collect()
    }

    /// The full entries of the group matching `ratio`, in stored order.
    pub fn entries_for(&self, ratio: &str) -> &[ResolutionEntry] {
        self.group(ratio)
            .map(|group| group.resolutions.as_slice())
            .unwrap_or(&[])
    }

    /// The description of the entry matching both `ratio` and `resolution`
    /// exactly. Empty string when either lookup misses.
    pub fn describe(&self, ratio: &str, resolution: &str) -> &str {
        self.entries_for(ratio)
            .iter()
            .find(|entry| entry.resolution == resolution)
            .map(|entry| entry.description.as_str())
            .unwrap_or("")
    }

    /// Every resolution token across all groups, duplicates removed keeping
    /// the first occurrence. Hosts use this as the widget's initial allowed
    /// list before a ratio has been picked.
    pub fn all_resolutions(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut all = Vec::new();
        for group in &self.groups {
            for entry in &group.resolutions {
                if seen.insert(entry.resolution.as_str()) {
                    all.push(entry.resolution.clone());
                }
            }
        }
        all
    }
}

// ============================================================
// Tests
// ============================================================
