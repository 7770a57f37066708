//! Text dumps of a tree model.

use std::fmt::{self, Write};

use horizon_checktree_core::{CheckState, NodeValue, TreeFormatOptions};

use super::node::NodeRecord;
use super::tree_model::TreeModel;

/// Debug utility for visualizing a [`TreeModel`].
///
/// Every node is printed on its own line with its check glyph: `[x]`, `[-]`
/// or `[ ]`, and `(*)` / `( )` for radio nodes. Nodes without a checkbox get
/// no glyph. Collapsed parents are still descended into.
///
/// ```
/// use horizon_checktree::model::{NodeConfig, TreeModel, TreeOptions};
///
/// let nodes = vec![NodeConfig::parent(
///     "fruit",
///     "Fruit",
///     vec![NodeConfig::leaf("apple", "Apple").checked()],
/// )];
/// let model = TreeModel::new(&nodes, TreeOptions::default()).unwrap();
/// println!("{}", model.debug());
/// ```
#[derive(Debug, Clone)]
pub struct TreeDebug<'a> {
    model: &'a TreeModel,
    options: TreeFormatOptions,
}

impl<'a> TreeDebug<'a> {
    /// Create a formatter with default options.
    pub fn new(model: &'a TreeModel) -> Self {
        Self {
            model,
            options: TreeFormatOptions::default(),
        }
    }

    /// Replace the formatting options.
    pub fn with_options(mut self, options: TreeFormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Format the subtree rooted at `key`, or `None` if no such node exists.
    pub fn format_subtree(&self, key: impl Into<NodeValue>) -> Option<String> {
        let key = key.into();
        self.model.nodes.get(&key)?;

        let mut output = String::new();
        let mut ancestors_last = Vec::new();
        self.write_subtree(&mut output, &key, 0, true, &mut ancestors_last)
            .ok()?;
        Some(output)
    }

    fn roots(&self) -> &[NodeValue] {
        if self.options.show_hidden {
            self.model.unfiltered_root_keys()
        } else {
            self.model.root_keys()
        }
    }

    fn is_shown(&self, node: &NodeRecord) -> bool {
        self.options.show_hidden || !node.hidden_by_filter
    }

    fn write_subtree(
        &self,
        out: &mut impl Write,
        key: &NodeValue,
        depth: usize,
        is_last: bool,
        ancestors_last: &mut Vec<bool>,
    ) -> fmt::Result {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }
        let Some(node) = self.model.nodes.get(key) else {
            return Ok(());
        };

        let prefix = self.options.build_prefix(ancestors_last, is_last, depth);
        out.write_str(&prefix)?;
        self.write_line(out, node)?;

        let children: Vec<&NodeValue> = node
            .child_keys()
            .unwrap_or(&[])
            .iter()
            .filter(|child| {
                self.model
                    .nodes
                    .get(*child)
                    .is_some_and(|record| self.is_shown(record))
            })
            .collect();

        // Roots do not draw a connector, so they leave no trace in the prefix.
        if depth > 0 {
            ancestors_last.push(is_last);
        }
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.write_subtree(out, child, depth + 1, i + 1 == count, ancestors_last)?;
        }
        if depth > 0 {
            ancestors_last.pop();
        }
        Ok(())
    }

    fn write_line(&self, out: &mut impl Write, node: &NodeRecord) -> fmt::Result {
        if node.show_checkbox {
            out.write_str(glyph(node))?;
            out.write_char(' ')?;
        }
        out.write_str(&node.label)?;

        if self.options.show_values {
            write!(out, " <{}>", node.value)?;
        }

        if self.options.show_flags {
            let mut flags = Vec::new();
            if node.disabled {
                flags.push("disabled");
            }
            if node.is_expanded() {
                flags.push("expanded");
            }
            if node.hidden_by_filter {
                flags.push("hidden");
            }
            if !flags.is_empty() {
                write!(out, " ({})", flags.join(", "))?;
            }
        }

        out.write_char('\n')
    }
}

fn glyph(node: &NodeRecord) -> &'static str {
    match (node.is_radio_node, node.check_state) {
        (true, CheckState::Checked) => "(*)",
        (true, _) => "( )",
        (false, CheckState::Checked) => "[x]",
        (false, CheckState::PartiallyChecked) => "[-]",
        (false, CheckState::Unchecked) => "[ ]",
    }
}

impl fmt::Display for TreeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots = self.roots();
        if roots.is_empty() {
            return writeln!(f, "(empty)");
        }
        let mut ancestors_last = Vec::new();
        for key in roots {
            self.write_subtree(f, key, 0, true, &mut ancestors_last)?;
        }
        Ok(())
    }
}
