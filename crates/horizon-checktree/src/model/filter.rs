//! Filtering without losing nodes.
//!
//! Filtering never removes a record. It marks non-matching nodes as hidden
//! and narrows the root list, so removing the filter restores the exact
//! previous view without rebuilding from the input.

use std::sync::Arc;

use horizon_checktree_core::logging::{span_names, targets};
use horizon_checktree_core::{NodeValue, PerfSpan};

use super::node::NodeRecord;
use super::tree_model::TreeModel;

impl TreeModel {
    /// Restricts the view to nodes matching `predicate` and their ancestors.
    ///
    /// Any previous filter is cleared first. A node stays visible if it
    /// matches or any descendant matches; every other node is flagged with
    /// [`NodeRecord::is_hidden_by_filter`]. Child lists are not edited, so a
    /// renderer must skip hidden children itself.
    pub fn filter<F>(&self, predicate: F) -> TreeModel
    where
        F: Fn(&NodeRecord) -> bool,
    {
        let _span = PerfSpan::new(span_names::FILTER);

        let mut model = self.remove_filter();
        let mut visible_roots = Vec::with_capacity(model.unfiltered_root_keys.len());
        for root in model.unfiltered_root_keys.clone() {
            if model.filter_subtree(&root, &predicate) {
                visible_roots.push(root);
            }
        }

        tracing::debug!(
            target: targets::FILTER,
            roots = visible_roots.len(),
            hidden = model.iter().filter(|node| node.is_hidden_by_filter()).count(),
            "applied filter"
        );
        model.root_keys = visible_roots;
        model
    }

    /// Filters by a case-insensitive substring of the label.
    ///
    /// An empty `text` removes the filter.
    pub fn filter_by_label(&self, text: &str) -> TreeModel {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return self.remove_filter();
        }
        self.filter(|node| node.label().to_lowercase().contains(&needle))
    }

    /// Clears every hidden flag and restores the full root list.
    ///
    /// Idempotent: records that are not hidden are reused as they are.
    pub fn remove_filter(&self) -> TreeModel {
        let mut model = self.clone();
        model.root_keys = model.unfiltered_root_keys.clone();

        let mut cleared = 0usize;
        for record in model.nodes.values_mut() {
            if record.hidden_by_filter {
                Arc::make_mut(record).hidden_by_filter = false;
                cleared += 1;
            }
        }
        if cleared > 0 {
            tracing::debug!(target: targets::FILTER, cleared, "removed filter");
        }
        model
    }

    /// Returns `true` while a filter is applied.
    pub fn is_filtered(&self) -> bool {
        self.root_keys != self.unfiltered_root_keys
            || self.nodes.values().any(|node| node.hidden_by_filter)
    }

    /// Post-order walk: children first, then the node itself.
    fn filter_subtree<F>(&mut self, key: &NodeValue, predicate: &F) -> bool
    where
        F: Fn(&NodeRecord) -> bool,
    {
        let Some(node) = self.nodes.get(key).cloned() else {
            return false;
        };

        let mut descendant_matched = false;
        for child in node.child_keys().unwrap_or(&[]) {
            descendant_matched |= self.filter_subtree(child, predicate);
        }

        let keep = descendant_matched || predicate(node.as_ref());
        if !keep {
            self.update(key, |record| record.hidden_by_filter = true);
        }
        keep
    }
}
