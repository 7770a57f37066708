//! Model-wide configuration.

use std::fmt;
use std::str::FromStr;

use horizon_checktree_core::{Error, NodeValue, Result};
use serde::{Deserialize, Serialize};

/// Which kinds of node are reported by [`TreeModel::get_checked`](super::TreeModel::get_checked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckModel {
    /// Only leaves are reported.
    #[default]
    Leaf,
    /// Only parents are reported.
    Parent,
    /// Every checked node is reported.
    All,
}

impl CheckModel {
    /// Returns `true` if a node of the given kind is reported under this model.
    pub fn includes(&self, is_parent: bool) -> bool {
        match self {
            CheckModel::Leaf => !is_parent,
            CheckModel::Parent => is_parent,
            CheckModel::All => true,
        }
    }

    /// Returns the option name of this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckModel::Leaf => "leaf",
            CheckModel::Parent => "parent",
            CheckModel::All => "all",
        }
    }
}

impl fmt::Display for CheckModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "leaf" => Ok(CheckModel::Leaf),
            "parent" => Ok(CheckModel::Parent),
            "all" => Ok(CheckModel::All),
            other => Err(Error::invalid_option("checkModel", other)),
        }
    }
}

/// Configuration of a [`TreeModel`](super::TreeModel).
///
/// | option              | default |
/// |---------------------|---------|
/// | `check_model`       | `leaf`  |
/// | `no_cascade_checks` | `false` |
/// | `no_cascade_disabled` | `false` |
/// | `optimistic_toggle` | `true`  |
/// | `disabled`          | `false` |
/// | `checked`           | empty   |
/// | `expanded`          | empty   |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreeOptions {
    /// Which node kinds appear in the checked list.
    pub check_model: CheckModel,
    /// Disables percolation; every node tracks only its own state.
    pub no_cascade_checks: bool,
    /// Stops a parent's disabled flag from reaching its descendants.
    pub no_cascade_disabled: bool,
    /// Clicking a partially checked node checks it fully instead of clearing it.
    pub optimistic_toggle: bool,
    /// Disables every node. Applied when the model is built.
    pub disabled: bool,
    /// Keys that start out checked, in addition to per-node flags.
    pub checked: Vec<NodeValue>,
    /// Keys that start out expanded, in addition to per-node flags.
    pub expanded: Vec<NodeValue>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            check_model: CheckModel::Leaf,
            no_cascade_checks: false,
            no_cascade_disabled: false,
            optimistic_toggle: true,
            disabled: false,
            checked: Vec::new(),
            expanded: Vec::new(),
        }
    }
}

impl TreeOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON object.
    ///
    /// An unknown `checkModel` is reported as [`Error::InvalidOption`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        if let Some(name) = raw.get("checkModel").and_then(|v| v.as_str()) {
            name.parse::<CheckModel>()?;
        }
        Ok(serde_json::from_value(raw)?)
    }

    /// Sets the check model.
    pub fn with_check_model(mut self, check_model: CheckModel) -> Self {
        self.check_model = check_model;
        self
    }

    /// Sets whether check states cascade.
    pub fn with_no_cascade_checks(mut self, no_cascade: bool) -> Self {
        self.no_cascade_checks = no_cascade;
        self
    }

    /// Sets whether disabled flags cascade.
    pub fn with_no_cascade_disabled(mut self, no_cascade: bool) -> Self {
        self.no_cascade_disabled = no_cascade;
        self
    }

    /// Sets how a partially checked node reacts to a toggle.
    pub fn with_optimistic_toggle(mut self, optimistic: bool) -> Self {
        self.optimistic_toggle = optimistic;
        self
    }

    /// Disables the whole tree.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the initially checked keys.
    pub fn with_checked<I, V>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<NodeValue>,
    {
        self.checked = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the initially expanded keys.
    pub fn with_expanded<I, V>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<NodeValue>,
    {
        self.expanded = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if check states percolate between parents and children.
    pub fn cascades_checks(&self) -> bool {
        !self.no_cascade_checks
    }
}
