//! Glue between a catalog and a host editor's node widgets.
//!
//! The host owns widget creation, rendering, and refresh; this module only
//! needs three narrow capabilities from it: read/write a dropdown, replace a
//! dropdown's allowed values, and display a description string. Hosts register
//! one change handler per widget and forward the new value to
//! [`NodeBinding::ratio_changed`] / [`NodeBinding::resolution_changed`].

use std::{fmt, sync::Arc, thread, time::Duration};

use tracing::{debug, error, info};

use crate::catalog::ResolutionCatalog;
use crate::picker::{PickerController, PickerUpdate};

/// A dropdown widget holding one selected value out of an allowed list.
pub trait ChoiceWidget {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    /// Replace the allowed-value list. The host decides how to re-render.
    fn set_choices(&mut self, choices: &[String]);
}

/// Wherever the host shows the description text. A no-op sink is fine.
pub trait DescriptionSink {
    fn set_description(&mut self, text: &str);
}

/// A node under construction by the host. Widget handles may be absent while
/// the host is still wiring the node up.
pub trait HostNode {
    fn ratio_widget(&mut self) -> Option<&mut dyn ChoiceWidget>;
    fn resolution_widget(&mut self) -> Option<&mut dyn ChoiceWidget>;
    fn description_sink(&mut self) -> Option<&mut dyn DescriptionSink>;
}

/// Attachment failure. Never fatal to the host: the picker feature is simply
/// inert for that node instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    /// The ratio or resolution widget never appeared.
    WidgetsMissing { attempts: u32 },
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachError::WidgetsMissing { attempts } => write!(
                f,
                "ratio/resolution widgets not found after {} attempt(s)",
                attempts
            ),
        }
    }
}

impl std::error::Error for AttachError {}

/// Bounded retry for hosts that cannot signal "widgets attached" themselves.
/// The delay doubles after every failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            initial_delay: Duration::from_millis(50),
        }
    }
}

/// Connects one node's widgets to a catalog.
#[derive(Debug)]
pub struct NodeBinding<N: HostNode> {
    node: N,
    picker: PickerController,
}

impl<N: HostNode> NodeBinding<N> {
    /// Attach to a node whose widgets are already present, seed the picker
    /// from the widgets' current values, and apply the initial filter.
    pub fn attach(mut node: N, catalog: Arc<ResolutionCatalog>) -> Result<Self, AttachError> {
        let Some(ratio) = node.ratio_widget().map(|w| w.value()) else {
            return Err(AttachError::WidgetsMissing { attempts: 1 });
        };
        let Some(resolution) = node.resolution_widget().map(|w| w.value()) else {
            return Err(AttachError::WidgetsMissing { attempts: 1 });
        };

        let mut binding = Self {
            node,
            picker: PickerController::new(catalog, ratio, resolution),
        };
        let update = binding.picker.refresh();
        binding.apply(&update);
        info!(
            ratio = binding.picker.ratio(),
            resolution = binding.picker.resolution(),
            "picker attached"
        );
        Ok(binding)
    }

    /// Attach once the widgets show up, waiting between attempts per
    /// `policy`. Exhausting the budget reports the widgets as missing.
    pub fn attach_with_retry(
        mut node: N,
        catalog: Arc<ResolutionCatalog>,
        policy: RetryPolicy,
    ) -> Result<Self, AttachError> {
        let mut delay = policy.initial_delay;
        let attempts = policy.max_attempts.max(1);
        for attempt in 1..=attempts {
            if node.ratio_widget().is_some() && node.resolution_widget().is_some() {
                return Self::attach(node, catalog);
            }
            if attempt < attempts {
                debug!(attempt, ?delay, "picker widgets not ready, retrying");
                thread::sleep(delay);
                delay = delay.saturating_mul(2);
            }
        }
        error!(attempts, "picker widgets never appeared, feature disabled for this node");
        Err(AttachError::WidgetsMissing { attempts })
    }

    /// Host handler for the ratio widget's value-changed event.
    pub fn ratio_changed(&mut self, value: &str) {
        let update = self.picker.select_ratio(value);
        self.apply(&update);
    }

    /// Host handler for the resolution widget's value-changed event.
    pub fn resolution_changed(&mut self, value: &str) {
        let update = self.picker.select_resolution(value);
        self.apply(&update);
    }

    pub fn picker(&self) -> &PickerController {
        &self.picker
    }

    /// Give the node handle back, e.g. when the host tears the node down.
    pub fn into_node(self) -> N {
        self.node
    }

    fn apply(&mut self, update: &PickerUpdate) {
        if let Some(widget) = self.node.resolution_widget() {
            if let Some(choices) = &update.choices {
                widget.set_choices(choices);
            }
            widget.set_value(&update.selected);
        }
        if let Some(sink) = self.node.description_sink() {
            sink.set_description(&update.description);
        }
    }
}

// ============================================================
// Tests
// ============================================================
