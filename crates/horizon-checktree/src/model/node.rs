//! Flattened node records.

use horizon_checktree_core::{CheckState, NodeValue};

/// Leaf or parent, fixed when the model is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A node declared without `children`.
    Leaf,
    /// A node declared with `children` (possibly empty).
    Parent {
        /// Child keys in declaration order.
        children: Vec<NodeValue>,
        /// Whether the children are mutually exclusive.
        radio_group: bool,
        /// Whether the node is expanded.
        expanded: bool,
    },
}

/// The flattened, normalized record of one tree node.
///
/// Records never own their children or point at their parent; both are
/// referenced by key into the owning [`TreeModel`](super::TreeModel).
/// Records are shared between model versions and are only ever replaced,
/// never edited, once a model has been handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub(crate) value: NodeValue,
    pub(crate) label: String,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeValue>,
    pub(crate) is_radio_node: bool,
    pub(crate) check_state: CheckState,
    pub(crate) disabled: bool,
    pub(crate) hidden_by_filter: bool,
    pub(crate) show_checkbox: bool,
    pub(crate) icon: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) class_name: Option<String>,
    pub(crate) index: usize,
    pub(crate) tree_depth: usize,
}

impl NodeRecord {
    /// Returns the node's key.
    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the leaf/parent kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the parent's key, or `None` for a root.
    pub fn parent_key(&self) -> Option<&NodeValue> {
        self.parent.as_ref()
    }

    /// Returns the child keys, or `None` for a leaf.
    pub fn child_keys(&self) -> Option<&[NodeValue]> {
        match &self.kind {
            NodeKind::Parent { children, .. } => Some(children),
            NodeKind::Leaf => None,
        }
    }

    /// Returns `true` if the node was declared with children.
    pub fn is_parent(&self) -> bool {
        matches!(self.kind, NodeKind::Parent { .. })
    }

    /// Returns `true` if the node was declared without children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    /// Returns `true` if the node has a parent.
    pub fn is_child(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns `true` if this node's children are mutually exclusive.
    pub fn is_radio_group(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Parent {
                radio_group: true,
                ..
            }
        )
    }

    /// Returns `true` if this node's parent is a radio group.
    pub fn is_radio_node(&self) -> bool {
        self.is_radio_node
    }

    /// Returns the tri-state check value.
    pub fn check_state(&self) -> CheckState {
        self.check_state
    }

    /// Returns `true` if the node is expanded. Leaves are never expanded.
    pub fn is_expanded(&self) -> bool {
        matches!(self.kind, NodeKind::Parent { expanded: true, .. })
    }

    /// Returns `true` if the node is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns `true` if the active filter hides this node.
    pub fn is_hidden_by_filter(&self) -> bool {
        self.hidden_by_filter
    }

    /// Returns whether a checkbox is drawn for this node.
    pub fn show_checkbox(&self) -> bool {
        self.show_checkbox
    }

    /// Returns the icon name.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the tooltip title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the style class.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Returns the position among siblings.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the depth; roots are at depth 0.
    pub fn tree_depth(&self) -> usize {
        self.tree_depth
    }

    pub(crate) fn set_expanded(&mut self, value: bool) {
        if let NodeKind::Parent { expanded, .. } = &mut self.kind {
            *expanded = value;
        }
    }
}

/// A presentational property that can be set on a single node.
///
/// Check state cannot be set here: it only changes through toggling,
/// which keeps parents consistent with their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeProp {
    /// Expansion flag (ignored on leaves).
    Expanded(bool),
    /// Disabled flag of this node only; does not cascade.
    Disabled(bool),
    /// Whether a checkbox is drawn.
    ShowCheckbox(bool),
    /// Display label.
    Label(String),
    /// Icon name.
    Icon(Option<String>),
    /// Tooltip title.
    Title(Option<String>),
    /// Style class.
    ClassName(Option<String>),
}

impl NodeProp {
    pub(crate) fn apply(self, record: &mut NodeRecord) {
        match self {
            NodeProp::Expanded(value) => record.set_expanded(value),
            NodeProp::Disabled(value) => record.disabled = value,
            NodeProp::ShowCheckbox(value) => record.show_checkbox = value,
            NodeProp::Label(value) => record.label = value,
            NodeProp::Icon(value) => record.icon = value,
            NodeProp::Title(value) => record.title = value,
            NodeProp::ClassName(value) => record.class_name = value,
        }
    }
}
