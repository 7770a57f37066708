//! Check toggling with cascade and percolation.
//!
//! A toggle runs in three steps on a fresh copy of the model:
//!
//! 1. the target gets its new state (radio nodes also clear their siblings),
//! 2. the state is pushed down to every descendant, stopping at radio groups,
//! 3. ancestors are re-derived from their children, stopping at radio nodes.
//!
//! Steps 2 and 3 are skipped when `no_cascade_checks` is set; step 3 is also
//! skipped when the target is a radio node.

use horizon_checktree_core::logging::targets;
use horizon_checktree_core::{CheckState, NodeValue};

use super::tree_model::{TreeModel, derive_parent_state};

impl TreeModel {
    /// Toggles the check state of a node.
    ///
    /// Disabled nodes, unknown keys and the already selected member of a
    /// radio group leave the model unchanged (the returned copy shares every
    /// record with `self`).
    pub fn toggle_checked(&self, key: impl Into<NodeValue>) -> TreeModel {
        let key = key.into();
        let Some(node) = self.nodes.get(&key) else {
            tracing::debug!(target: targets::TOGGLE, %key, "ignoring unknown node");
            return self.clone();
        };

        if node.disabled || (node.is_radio_node && node.check_state.is_fully_checked()) {
            tracing::trace!(target: targets::TOGGLE, %key, "toggle has no effect");
            return self.clone();
        }

        let cascade = self.options.cascades_checks();
        let mut model = self.clone();

        let state = if node.is_radio_node {
            model.clear_radio_siblings(&key);
            CheckState::Checked
        } else {
            node.check_state
                .toggle(cascade && self.options.optimistic_toggle)
        };
        model.set_check_state(&key, state);

        if cascade {
            model.cascade_checked(&key, state);
            if !node.is_radio_node {
                model.percolate_up(&key);
            }
        }

        tracing::trace!(
            target: targets::TOGGLE,
            %key,
            state = state.as_u8(),
            "toggled check state"
        );
        model
    }

    /// Unchecks every other member of `key`'s radio group.
    ///
    /// Only the siblings themselves change; their descendants keep their
    /// state and become unreachable through the unchecked sibling.
    fn clear_radio_siblings(&mut self, key: &NodeValue) {
        let Some(parent) = self.nodes.get(key).and_then(|node| node.parent.clone()) else {
            return;
        };
        for sibling in self.child_keys_owned(&parent) {
            if &sibling != key {
                self.set_check_state(&sibling, CheckState::Unchecked);
            }
        }
    }

    /// Pushes `state` to every descendant of `key`.
    ///
    /// A radio group only takes the state itself: its members keep their
    /// selection.
    fn cascade_checked(&mut self, key: &NodeValue, state: CheckState) {
        if self.nodes.get(key).is_none_or(|node| node.is_radio_group()) {
            return;
        }
        for child in self.child_keys_owned(key) {
            self.set_check_state(&child, state);
            self.cascade_checked(&child, state);
        }
    }

    /// Re-derives the ancestors of `key`, nearest first.
    ///
    /// Stops below the first ancestor that is a radio node, since a radio
    /// node's state is governed by its group.
    fn percolate_up(&mut self, key: &NodeValue) {
        let mut current = self.nodes.get(key).and_then(|node| node.parent.clone());

        while let Some(ancestor_key) = current {
            let Some(ancestor) = self.nodes.get(&ancestor_key).cloned() else {
                break;
            };
            if ancestor.is_radio_node {
                break;
            }

            let states = ancestor
                .child_keys()
                .unwrap_or(&[])
                .iter()
                .filter_map(|child| self.nodes.get(child))
                .map(|child| child.check_state);
            if let Some(state) = derive_parent_state(states, ancestor.is_radio_group()) {
                self.set_check_state(&ancestor_key, state);
            }

            current = ancestor.parent.clone();
        }
    }
}
