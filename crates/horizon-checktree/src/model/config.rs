//! Node list input.
//!
//! `NodeConfig` is the raw, nested shape a caller hands to
//! [`TreeModel::new`](super::TreeModel::new). It mirrors the JSON node format:
//!
//! ```json
//! [
//!   { "value": "fruit", "label": "Fruit", "children": [
//!       { "value": "apple", "label": "Apple", "checked": true },
//!       { "value": "pear", "label": "Pear" }
//!   ]},
//!   { "value": 7, "label": "Seven" }
//! ]
//! ```
//!
//! The presence of `children`, even as an empty list, makes a node a parent.

use horizon_checktree_core::NodeValue;
use serde::{Deserialize, Serialize};

/// One node of the input tree.
///
/// `value` and `label` are optional here so that a missing field is reported
/// by model construction as [`Error::MissingField`](horizon_checktree_core::Error)
/// rather than as a JSON parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeConfig {
    /// Unique key of the node.
    pub value: Option<NodeValue>,
    /// Display label.
    pub label: Option<String>,
    /// Child nodes. `Some` (even empty) marks a parent.
    pub children: Option<Vec<NodeConfig>>,
    /// Initial check flag.
    pub checked: bool,
    /// Initial expansion flag.
    pub expanded: bool,
    /// Whether the node itself is disabled.
    pub disabled: bool,
    /// Icon name, passed through to the renderer.
    pub icon: Option<String>,
    /// Whether a checkbox is drawn for this node.
    pub show_checkbox: Option<bool>,
    /// Whether the children of this parent are mutually exclusive.
    pub is_radio_group: bool,
    /// Extra style class, passed through to the renderer.
    pub class_name: Option<String>,
    /// Tooltip title, passed through to the renderer.
    pub title: Option<String>,
}

impl NodeConfig {
    /// Creates a leaf node.
    pub fn leaf(value: impl Into<NodeValue>, label: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Creates a parent node with the given children.
    pub fn parent(
        value: impl Into<NodeValue>,
        label: impl Into<String>,
        children: Vec<NodeConfig>,
    ) -> Self {
        Self {
            value: Some(value.into()),
            label: Some(label.into()),
            children: Some(children),
            ..Default::default()
        }
    }

    /// Marks the node as initially checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Marks the node as initially expanded.
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    /// Marks the node as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the node's children as a radio group.
    pub fn radio_group(mut self) -> Self {
        self.is_radio_group = true;
        self
    }

    /// Sets the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the tooltip title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the style class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets whether a checkbox is drawn.
    pub fn with_show_checkbox(mut self, show: bool) -> Self {
        self.show_checkbox = Some(show);
        self
    }

    /// Parses a JSON array of nodes.
    pub fn list_from_json(json: &str) -> horizon_checktree_core::Result<Vec<NodeConfig>> {
        Ok(serde_json::from_str(json)?)
    }
}
