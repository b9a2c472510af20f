//! The selection rule behind the ratio/resolution dropdown pair.
//!
//! A selected ratio implies a valid subset of resolution values. The
//! controller tracks the current pair, recomputes the allowed list on ratio
//! changes, and hands back everything the host needs to update its widgets.

use std::sync::Arc;

use crate::catalog::ResolutionCatalog;

/// What a host must apply to its widgets after a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerUpdate {
    /// New allowed-value list for the resolution widget, or `None` when the
    /// list did not change.
    pub choices: Option<Vec<String>>,
    /// The resolution that should be selected after the change.
    pub selected: String,
    /// Description text for the selected pair. Empty when nothing matches.
    pub description: String,
}

/// Tracks the current ratio/resolution pair against a shared catalog.
#[derive(Debug, Clone)]
pub struct PickerController {
    catalog: Arc<ResolutionCatalog>,
    ratio: String,
    resolution: String,
}

impl PickerController {
    pub fn new(
        catalog: Arc<ResolutionCatalog>,
        ratio: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            ratio: ratio.into(),
            resolution: resolution.into(),
        }
    }

    pub fn ratio(&self) -> &str {
        &self.ratio
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn catalog(&self) -> &ResolutionCatalog {
        &self.catalog
    }

    /// Apply the filter for the current ratio. Used right after attaching to
    /// a node so the widgets start out consistent.
    pub fn refresh(&mut self) -> PickerUpdate {
        let ratio = self.ratio.clone();
        self.select_ratio(&ratio)
    }

    /// The user picked a ratio: narrow the resolution list to that class.
    /// The current resolution survives if it is still a member; otherwise the
    /// first entry of the new list is selected. An unknown ratio empties the
    /// list and leaves the current value untouched.
    pub fn select_ratio(&mut self, ratio: &str) -> PickerUpdate {
        self.ratio = ratio.to_string();
        let choices = self.catalog.resolutions_for(ratio);
        if !choices.is_empty() && !choices.iter().any(|choice| choice == &self.resolution) {
            self.resolution = choices[0].clone();
        }
        PickerUpdate {
            choices: Some(choices),
            selected: self.resolution.clone(),
            description: self.describe_current(),
        }
    }

    /// The user picked a resolution: only the description changes.
    pub fn select_resolution(&mut self, resolution: &str) -> PickerUpdate {
        self.resolution = resolution.to_string();
        PickerUpdate {
            choices: None,
            selected: self.resolution.clone(),
            description: self.describe_current(),
        }
    }

    fn describe_current(&self) -> String {
        self.catalog.describe(&self.ratio, &self.resolution).to_string()
    }
}

// ============================================================
// Tests
// ============================================================
