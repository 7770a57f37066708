//! Immutable checkbox tree model.
//!
//! `TreeModel` flattens a nested node list into an ordered arena keyed by
//! node value. Every mutator returns a new model; unchanged records are
//! shared with the previous version through `Arc`, and a record is copied
//! only at the moment it has to change.

use std::collections::HashSet;
use std::sync::Arc;

use horizon_checktree_core::logging::{span_names, targets};
use horizon_checktree_core::{
    CheckState, Error, NodeValue, PerfSpan, RadioGroupProblem, Result, checktree_debug,
    checktree_trace,
};
use indexmap::IndexMap;
use static_assertions::assert_impl_all;

use super::config::NodeConfig;
use super::debug::TreeDebug;
use super::node::{NodeKind, NodeProp, NodeRecord};
use super::options::{CheckModel, TreeOptions};

/// Arena of node records in construction (pre-order) order.
pub(crate) type NodeMap = IndexMap<NodeValue, Arc<NodeRecord>>;

/// A hierarchical checkbox tree.
///
/// The model owns a flat mapping from node value to [`NodeRecord`], the
/// ordered root keys, and its [`TreeOptions`]. It never calls out to the
/// renderer: the renderer calls an operation, takes the returned model and
/// draws from it.
///
/// # Example
///
/// ```
/// use horizon_checktree::model::{NodeConfig, TreeModel, TreeOptions};
///
/// let nodes = vec![NodeConfig::parent(
///     "fruit",
///     "Fruit",
///     vec![
///         NodeConfig::leaf("apple", "Apple").checked(),
///         NodeConfig::leaf("pear", "Pear"),
///     ],
/// )];
///
/// let model = TreeModel::new(&nodes, TreeOptions::default()).unwrap();
/// assert_eq!(model.get_checked(), vec!["apple"]);
///
/// let next = model.toggle_checked("fruit");
/// assert_eq!(next.get_checked(), vec!["apple", "pear"]);
///
/// // The previous version is untouched.
/// assert_eq!(model.get_checked(), vec!["apple"]);
/// ```
#[derive(Debug, Clone)]
pub struct TreeModel {
    pub(crate) nodes: NodeMap,
    pub(crate) root_keys: Vec<NodeValue>,
    pub(crate) unfiltered_root_keys: Vec<NodeValue>,
    pub(crate) options: TreeOptions,
}

assert_impl_all!(TreeModel: Send, Sync, Clone);

/// Collects records while walking the input tree.
struct Flattener<'a> {
    options: &'a TreeOptions,
    checked: HashSet<&'a NodeValue>,
    expanded: HashSet<&'a NodeValue>,
    nodes: NodeMap,
}

/// What a child needs to know about its parent while being flattened.
struct ParentInfo<'v> {
    value: &'v NodeValue,
    disabled: bool,
    radio_group: bool,
    depth: usize,
}

impl<'a> Flattener<'a> {
    fn new(options: &'a TreeOptions) -> Self {
        Self {
            options,
            checked: options.checked.iter().collect(),
            expanded: options.expanded.iter().collect(),
            nodes: NodeMap::new(),
        }
    }

    /// Registers `config` and its descendants, pre-order.
    ///
    /// Each record starts out with its own check flag; parent states are
    /// settled afterwards, once all children exist.
    fn flatten(
        &mut self,
        config: &NodeConfig,
        parent: Option<&ParentInfo<'_>>,
        index: usize,
    ) -> Result<NodeValue> {
        let value = match &config.value {
            Some(value) => value.clone(),
            None => {
                let location = match parent {
                    Some(parent) => format!("#{index} under '{}'", parent.value),
                    None => format!("#{index} at root"),
                };
                return Err(Error::missing_field("value", location));
            }
        };
        let label = config
            .label
            .clone()
            .ok_or_else(|| Error::missing_field("label", format!("'{value}'")))?;

        if self.nodes.contains_key(&value) {
            return Err(Error::duplicate_value(value));
        }

        let parent_disabled = parent.is_some_and(|p| p.disabled);
        let disabled = self.options.disabled
            || (!self.options.no_cascade_disabled && parent_disabled)
            || config.disabled;
        let depth = parent.map_or(0, |p| p.depth + 1);

        let kind = match &config.children {
            None => NodeKind::Leaf,
            Some(_) => NodeKind::Parent {
                children: Vec::new(),
                radio_group: config.is_radio_group,
                expanded: config.expanded || self.expanded.contains(&value),
            },
        };

        let record = NodeRecord {
            value: value.clone(),
            label,
            kind,
            parent: parent.map(|p| p.value.clone()),
            is_radio_node: parent.is_some_and(|p| p.radio_group),
            check_state: CheckState::from(config.checked || self.checked.contains(&value)),
            disabled,
            hidden_by_filter: false,
            show_checkbox: config.show_checkbox.unwrap_or(true),
            icon: config.icon.clone(),
            title: config.title.clone(),
            class_name: config.class_name.clone(),
            index,
            tree_depth: depth,
        };
        self.nodes.insert(value.clone(), Arc::new(record));

        if let Some(children) = &config.children {
            let info = ParentInfo {
                value: &value,
                disabled,
                radio_group: config.is_radio_group,
                depth,
            };
            let mut keys = Vec::with_capacity(children.len());
            for (child_index, child) in children.iter().enumerate() {
                keys.push(self.flatten(child, Some(&info), child_index)?);
            }
            if let Some(record) = self.nodes.get_mut(&value) {
                if let NodeKind::Parent { children, .. } = &mut Arc::make_mut(record).kind {
                    *children = keys;
                }
            }
        }

        Ok(value)
    }
}

/// Derives a parent's state from its children's states.
///
/// Returns `None` for a parent without children, which keeps its own state.
pub(crate) fn derive_parent_state<I>(states: I, radio_group: bool) -> Option<CheckState>
where
    I: IntoIterator<Item = CheckState>,
{
    let mut seen = false;
    let mut all_checked = true;
    let mut any_checked = false;
    let mut any_fully_checked = false;

    for state in states {
        seen = true;
        all_checked &= state.is_fully_checked();
        any_checked |= state.is_checked();
        any_fully_checked |= state.is_fully_checked();
    }

    if !seen {
        return None;
    }

    Some(if all_checked || (radio_group && any_fully_checked) {
        CheckState::Checked
    } else if any_checked {
        CheckState::PartiallyChecked
    } else {
        CheckState::Unchecked
    })
}

impl TreeModel {
    /// Builds a model from a nested node list.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if a node lacks `value` or `label`
    /// - [`Error::DuplicateValue`] if two nodes share a `value`
    /// - [`Error::RadioGroup`] if a radio group does not start with exactly
    ///   one checked child
    pub fn new(nodes: &[NodeConfig], options: TreeOptions) -> Result<Self> {
        let _span = PerfSpan::new(span_names::BUILD);

        let (flat, root_keys) = {
            let mut flattener = Flattener::new(&options);
            let mut root_keys = Vec::with_capacity(nodes.len());
            for (index, node) in nodes.iter().enumerate() {
                root_keys.push(flattener.flatten(node, None, index)?);
            }
            (flattener.nodes, root_keys)
        };

        let mut model = Self {
            nodes: flat,
            unfiltered_root_keys: root_keys.clone(),
            root_keys,
            options,
        };
        model.settle_check_states(&|record| record.check_state.is_checked())?;
        model.log_unknown_keys(&model.options.checked, "checked");
        model.log_unknown_keys(&model.options.expanded, "expanded");

        tracing::debug!(
            target: targets::MODEL,
            nodes = model.nodes.len(),
            roots = model.root_keys.len(),
            check_model = %model.options.check_model,
            "built tree model"
        );
        Ok(model)
    }

    /// Parses a JSON node list and builds a model from it.
    pub fn from_json(nodes_json: &str, options: TreeOptions) -> Result<Self> {
        let nodes = NodeConfig::list_from_json(nodes_json)?;
        Self::new(&nodes, options)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the record for `key`, or `None` if no such node exists.
    pub fn get_node(&self, key: impl Into<NodeValue>) -> Option<&NodeRecord> {
        self.nodes.get(&key.into()).map(Arc::as_ref)
    }

    /// Returns the shared record for `key`.
    ///
    /// Two model versions hold the same `Arc` for a node exactly when the
    /// operation between them left that node untouched, so
    /// `Arc::ptr_eq` is a cheap change test.
    pub fn get_shared(&self, key: impl Into<NodeValue>) -> Option<&Arc<NodeRecord>> {
        self.nodes.get(&key.into())
    }

    /// Returns the checked keys under the configured check model.
    ///
    /// See [`TreeModel::checked_with`] for the traversal rules.
    pub fn get_checked(&self) -> Vec<NodeValue> {
        self.checked_with(self.options.check_model)
    }

    /// Returns the checked keys under `check_model`, in depth-first pre-order.
    ///
    /// A node is listed when its kind matches the model, it is checked or
    /// partially checked, and it is not disabled. The walk does not enter an
    /// unchecked radio group or an unchecked radio node, whose descendants
    /// are unreachable while it is off.
    pub fn checked_with(&self, check_model: CheckModel) -> Vec<NodeValue> {
        let mut checked = Vec::new();
        for key in &self.root_keys {
            self.collect_checked(key, check_model, &mut checked);
        }
        checked
    }

    /// Returns the checked keys under the check model named `check_model`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOption`] if the name is not `leaf`, `parent` or `all`.
    pub fn checked_by_name(&self, check_model: &str) -> Result<Vec<NodeValue>> {
        Ok(self.checked_with(check_model.parse()?))
    }

    fn collect_checked(&self, key: &NodeValue, check_model: CheckModel, out: &mut Vec<NodeValue>) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };

        if check_model.includes(node.is_parent())
            && node.check_state.is_checked()
            && !node.disabled
        {
            out.push(node.value.clone());
        }

        let off = !node.check_state.is_checked();
        if off && (node.is_radio_group() || node.is_radio_node) {
            return;
        }

        for child in node.child_keys().unwrap_or(&[]) {
            self.collect_checked(child, check_model, out);
        }
    }

    /// Returns the keys of partially checked nodes, in arena order.
    pub fn get_partially_checked(&self) -> Vec<NodeValue> {
        self.keys_where(|node| node.check_state.is_partially_checked())
    }

    /// Returns the keys of expanded nodes, in arena order.
    pub fn get_expanded(&self) -> Vec<NodeValue> {
        self.keys_where(NodeRecord::is_expanded)
    }

    /// Returns the keys of disabled nodes, in arena order.
    pub fn get_disabled(&self) -> Vec<NodeValue> {
        self.keys_where(NodeRecord::is_disabled)
    }

    fn keys_where(&self, predicate: impl Fn(&NodeRecord) -> bool) -> Vec<NodeValue> {
        self.nodes
            .values()
            .filter(|node| predicate(Arc::as_ref(node)))
            .map(|node| node.value.clone())
            .collect()
    }

    /// Returns the rows a renderer draws, as `(key, depth)` pairs.
    ///
    /// Walks from the current roots, descends only into expanded parents and
    /// skips nodes hidden by the filter.
    pub fn visible_nodes(&self) -> Vec<(NodeValue, usize)> {
        let mut rows = Vec::new();
        let mut stack: Vec<&NodeValue> = self.root_keys.iter().rev().collect();
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            if node.hidden_by_filter {
                continue;
            }
            rows.push((node.value.clone(), node.tree_depth));
            if node.is_expanded() {
                stack.extend(node.child_keys().unwrap_or(&[]).iter().rev());
            }
        }
        rows
    }

    /// Returns the number of nodes, including filtered-out ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the model has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the top-level keys that survive the active filter.
    pub fn root_keys(&self) -> &[NodeValue] {
        &self.root_keys
    }

    /// Returns the top-level keys ignoring any filter.
    pub fn unfiltered_root_keys(&self) -> &[NodeValue] {
        &self.unfiltered_root_keys
    }

    /// Returns the active options.
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Returns the child keys of `key`, or `None` for leaves and unknown keys.
    pub fn children_of(&self, key: impl Into<NodeValue>) -> Option<&[NodeValue]> {
        self.nodes.get(&key.into()).and_then(|node| node.child_keys())
    }

    /// Returns the parent key of `key`, or `None` for roots and unknown keys.
    pub fn parent_of(&self, key: impl Into<NodeValue>) -> Option<&NodeValue> {
        self.nodes.get(&key.into()).and_then(|node| node.parent.as_ref())
    }

    /// Iterates all records in arena order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values().map(Arc::as_ref)
    }

    /// Returns a text formatter for this model.
    pub fn debug(&self) -> TreeDebug<'_> {
        TreeDebug::new(self)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Flips the expansion of a parent.
    ///
    /// Leaves and unknown keys leave the model unchanged. Expansion never
    /// cascades.
    pub fn toggle_expanded(&self, key: impl Into<NodeValue>) -> TreeModel {
        let key = key.into();
        let mut model = self.clone();
        match self.nodes.get(&key) {
            Some(node) if node.is_parent() => {
                let expanded = !node.is_expanded();
                model.update(&key, |record| record.set_expanded(expanded));
                tracing::trace!(target: targets::TOGGLE, %key, expanded, "toggled expansion");
            }
            Some(_) => {}
            None => tracing::debug!(target: targets::TOGGLE, %key, "ignoring unknown node"),
        }
        model
    }

    /// Flips the disabled flag of a node.
    ///
    /// Unless `no_cascade_disabled` is set, every descendant takes the new
    /// value as well.
    pub fn toggle_disabled(&self, key: impl Into<NodeValue>) -> TreeModel {
        let key = key.into();
        let mut model = self.clone();
        let Some(node) = self.nodes.get(&key) else {
            tracing::debug!(target: targets::TOGGLE, %key, "ignoring unknown node");
            return model;
        };

        let disabled = !node.disabled;
        model.update(&key, |record| record.disabled = disabled);
        if !self.options.no_cascade_disabled {
            model.cascade_disabled(&key, disabled);
        }
        tracing::trace!(target: targets::TOGGLE, %key, disabled, "toggled disabled");
        model
    }

    fn cascade_disabled(&mut self, key: &NodeValue, disabled: bool) {
        let children = self.child_keys_owned(key);
        for child in children {
            if self.nodes.get(&child).is_some_and(|node| node.disabled != disabled) {
                self.update(&child, |record| record.disabled = disabled);
            }
            self.cascade_disabled(&child, disabled);
        }
    }

    /// Expands (or collapses) every parent.
    pub fn expand_all_nodes(&self, expand: bool) -> TreeModel {
        self.expand_where(expand, |_| true)
    }

    /// Expands every parent at depth `level` or shallower.
    ///
    /// Deeper parents keep their current expansion.
    pub fn expand_nodes_to_level(&self, level: usize) -> TreeModel {
        self.expand_where(true, |node| node.tree_depth <= level)
    }

    fn expand_where(&self, expand: bool, predicate: impl Fn(&NodeRecord) -> bool) -> TreeModel {
        let mut model = self.clone();
        let mut changed = 0usize;
        for record in model.nodes.values_mut() {
            if record.is_parent() && record.is_expanded() != expand && predicate(&**record) {
                Arc::make_mut(record).set_expanded(expand);
                changed += 1;
            }
        }
        checktree_trace!(expand, changed, "changed expansion");
        model
    }

    /// Sets one presentational property on one node.
    ///
    /// Unknown keys leave the model unchanged.
    pub fn set_node_prop(&self, key: impl Into<NodeValue>, prop: NodeProp) -> TreeModel {
        let key = key.into();
        let mut model = self.clone();
        if self.nodes.contains_key(&key) {
            tracing::trace!(target: targets::MODEL, %key, ?prop, "setting node property");
            model.update(&key, |record| prop.apply(record));
        } else {
            tracing::debug!(target: targets::MODEL, %key, "ignoring unknown node");
        }
        model
    }

    /// Replaces the expanded set: exactly the listed parents are expanded.
    ///
    /// Unknown keys are ignored.
    pub fn set_expanded<I, V>(&self, keys: I) -> TreeModel
    where
        I: IntoIterator<Item = V>,
        V: Into<NodeValue>,
    {
        let keys: HashSet<NodeValue> = keys.into_iter().map(Into::into).collect();
        self.log_unknown_keys(&keys, "expanded");
        let mut model = self.clone();
        for (key, record) in model.nodes.iter_mut() {
            let expand = keys.contains(key);
            if record.is_parent() && record.is_expanded() != expand {
                Arc::make_mut(record).set_expanded(expand);
            }
        }
        model
    }

    /// Replaces the checked set and re-derives every check state.
    ///
    /// Listed nodes start out checked exactly as if they had been flagged in
    /// the input; parents are then settled from their children. Unknown keys
    /// are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::RadioGroup`] if the list leaves a radio group with zero or
    /// several checked children.
    pub fn set_checked<I, V>(&self, keys: I) -> Result<TreeModel>
    where
        I: IntoIterator<Item = V>,
        V: Into<NodeValue>,
    {
        let keys: HashSet<NodeValue> = keys.into_iter().map(Into::into).collect();
        self.log_unknown_keys(&keys, "checked");
        let mut model = self.clone();
        model.settle_check_states(&|record| keys.contains(&record.value))?;
        Ok(model)
    }

    /// Replaces the options.
    ///
    /// Non-empty `checked` / `expanded` lists are applied as by
    /// [`set_checked`](Self::set_checked) and [`set_expanded`](Self::set_expanded).
    /// Switching `no_cascade_checks` re-settles parents from their children
    /// (turning cascading off keeps only fully checked nodes checked). The
    /// model-wide `disabled` flag only takes effect when a model is built.
    ///
    /// # Errors
    ///
    /// [`Error::RadioGroup`] if a new `checked` list breaks a radio group.
    pub fn with_options(&self, options: TreeOptions) -> Result<TreeModel> {
        let mut model = self.clone();
        let cascade_changed = options.no_cascade_checks != self.options.no_cascade_checks;
        model.options = options;

        if !model.options.checked.is_empty() {
            let keys: HashSet<NodeValue> = model.options.checked.iter().cloned().collect();
            model.log_unknown_keys(&keys, "checked");
            model.settle_check_states(&|record| keys.contains(&record.value))?;
        } else if cascade_changed {
            model.settle_check_states(&|record| record.check_state.is_fully_checked())?;
        }

        if !model.options.expanded.is_empty() {
            let expanded = model.options.expanded.clone();
            model = model.set_expanded(expanded);
        }

        tracing::debug!(
            target: targets::MODEL,
            check_model = %model.options.check_model,
            no_cascade_checks = model.options.no_cascade_checks,
            "updated options"
        );
        Ok(model)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Re-derives every check state bottom-up.
    ///
    /// `own` gives each node's own flag. Leaves (and, without cascading,
    /// every node) take it directly; parents with children take the state
    /// derived from them. The one member of a radio group that ends up
    /// checked is then forced to fully checked.
    pub(crate) fn settle_check_states(&mut self, own: &dyn Fn(&NodeRecord) -> bool) -> Result<()> {
        for key in self.unfiltered_root_keys.clone() {
            self.settle_node(&key, own)?;
        }
        Ok(())
    }

    fn settle_node(
        &mut self,
        key: &NodeValue,
        own: &dyn Fn(&NodeRecord) -> bool,
    ) -> Result<CheckState> {
        let Some(node) = self.nodes.get(key).cloned() else {
            return Ok(CheckState::Unchecked);
        };

        let mut state = CheckState::from(own(node.as_ref()));

        if let Some(children) = node.child_keys() {
            let mut child_states = Vec::with_capacity(children.len());
            for child in children {
                child_states.push(self.settle_node(child, own)?);
            }

            if node.is_radio_group() {
                let selected: Vec<usize> = child_states
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.is_checked())
                    .map(|(i, _)| i)
                    .collect();
                match selected.as_slice() {
                    // The selected member is on whatever its children say.
                    &[i] => {
                        child_states[i] = CheckState::Checked;
                        self.set_check_state(&children[i], CheckState::Checked);
                    }
                    [] => {
                        return Err(Error::radio_group(
                            node.value.clone(),
                            RadioGroupProblem::NoneChecked,
                        ));
                    }
                    many => {
                        return Err(Error::radio_group(
                            node.value.clone(),
                            RadioGroupProblem::TooManyChecked(many.len()),
                        ));
                    }
                }
            }

            if self.options.cascades_checks() {
                if let Some(derived) = derive_parent_state(child_states, node.is_radio_group()) {
                    state = derived;
                }
            }
        }

        self.set_check_state(key, state);
        Ok(state)
    }

    /// Replaces the record for `key` with an edited copy.
    ///
    /// The copy is only made if another model version still shares it.
    pub(crate) fn update(&mut self, key: &NodeValue, edit: impl FnOnce(&mut NodeRecord)) {
        if let Some(record) = self.nodes.get_mut(key) {
            edit(Arc::make_mut(record));
        }
    }

    /// Sets a check state, leaving the record shared if it already matches.
    pub(crate) fn set_check_state(&mut self, key: &NodeValue, state: CheckState) {
        if self.nodes.get(key).is_some_and(|node| node.check_state != state) {
            self.update(key, |record| record.check_state = state);
        }
    }

    fn log_unknown_keys<'k>(&self, keys: impl IntoIterator<Item = &'k NodeValue>, list: &'static str) {
        let unknown = keys
            .into_iter()
            .filter(|key| !self.nodes.contains_key(*key))
            .count();
        if unknown > 0 {
            checktree_debug!(list, unknown, "ignoring unknown keys");
        }
    }

    pub(crate) fn child_keys_owned(&self, key: &NodeValue) -> Vec<NodeValue> {
        self.nodes
            .get(key)
            .and_then(|node| node.child_keys())
            .map(<[NodeValue]>::to_vec)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<NodeConfig> {
        vec![
            NodeConfig::parent(
                "0",
                "Node 0",
                vec![
                    NodeConfig::leaf("0-0", "Node 0-0"),
                    NodeConfig::parent(
                        "0-1",
                        "Node 0-1",
                        vec![
                            NodeConfig::parent(
                                "0-1-0",
                                "Node 0-1-0",
                                vec![NodeConfig::leaf("0-1-0-0", "Node 0-1-0-0").checked()],
                            ),
                            NodeConfig::parent(
                                "0-1-1",
                                "Node 0-1-1",
                                vec![NodeConfig::leaf("0-1-1-0", "Node 0-1-1-0")],
                            ),
                        ],
                    ),
                    NodeConfig::leaf("0-2", "Node 0-2"),
                ],
            ),
            NodeConfig::leaf(1, "Node 1"),
        ]
    }

    fn keys(values: &[&str]) -> Vec<NodeValue> {
        values.iter().map(|v| NodeValue::from(*v)).collect()
    }

    #[test]
    fn test_arena_is_pre_order() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let order: Vec<String> = model.iter().map(|n| n.value().to_string()).collect();
        assert_eq!(
            order,
            vec!["0", "0-0", "0-1", "0-1-0", "0-1-0-0", "0-1-1", "0-1-1-0", "0-2", "1"]
        );
    }

    #[test]
    fn test_record_bookkeeping() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();

        let node = model.get_node("0-1-1").unwrap();
        assert!(node.is_parent());
        assert!(node.is_child());
        assert_eq!(node.parent_key(), Some(&NodeValue::from("0-1")));
        assert_eq!(node.index(), 1);
        assert_eq!(node.tree_depth(), 2);
        assert_eq!(node.child_keys(), Some(&keys(&["0-1-1-0"])[..]));

        let root = model.get_node(1).unwrap();
        assert!(root.is_leaf());
        assert!(!root.is_child());
        assert_eq!(root.tree_depth(), 0);
        assert_eq!(root.index(), 1);
    }

    #[test]
    fn test_initial_percolation() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let state = |key: &str| model.get_node(key).unwrap().check_state();

        assert_eq!(state("0-1-0"), CheckState::Checked);
        assert_eq!(state("0-1"), CheckState::PartiallyChecked);
        assert_eq!(state("0"), CheckState::PartiallyChecked);
        assert_eq!(state("0-1-1"), CheckState::Unchecked);
        assert_eq!(model.get_partially_checked(), keys(&["0", "0-1"]));
    }

    #[test]
    fn test_get_node_missing() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        assert!(model.get_node("nope").is_none());
        assert!(model.get_node("1").is_none());
    }

    #[test]
    fn test_options_checked_list() {
        let options = TreeOptions::default().with_checked(["0-0", "ghost"]);
        let model = TreeModel::new(&sample(), options).unwrap();
        assert_eq!(model.get_checked(), keys(&["0-0", "0-1-0-0"]));
    }

    #[test]
    fn test_disabled_cascades_at_build() {
        let nodes = vec![
            NodeConfig::parent("p", "P", vec![NodeConfig::leaf("c", "C")]).disabled(),
            NodeConfig::leaf("q", "Q"),
        ];
        let model = TreeModel::new(&nodes, TreeOptions::default()).unwrap();
        assert_eq!(model.get_disabled(), keys(&["p", "c"]));

        let options = TreeOptions::default().with_no_cascade_disabled(true);
        let model = TreeModel::new(&nodes, options).unwrap();
        assert_eq!(model.get_disabled(), keys(&["p"]));

        let options = TreeOptions::default().with_disabled(true);
        let model = TreeModel::new(&nodes, options).unwrap();
        assert_eq!(model.get_disabled(), keys(&["p", "c", "q"]));
    }

    #[test]
    fn test_duplicate_value() {
        let nodes = vec![
            NodeConfig::parent("a", "A", vec![NodeConfig::leaf("b", "B")]),
            NodeConfig::leaf("b", "B again"),
        ];
        let err = TreeModel::new(&nodes, TreeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::DuplicateValue { ref value } if value == &NodeValue::from("b")));
    }

    #[test]
    fn test_missing_fields() {
        let nodes = vec![NodeConfig {
            label: Some("no value".into()),
            ..Default::default()
        }];
        let err = TreeModel::new(&nodes, TreeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "value", .. }));

        let nodes = vec![NodeConfig::parent(
            "p",
            "P",
            vec![NodeConfig {
                value: Some("c".into()),
                ..Default::default()
            }],
        )];
        let err = TreeModel::new(&nodes, TreeOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Node 'c' is missing required field 'label'");
    }

    /// Radio group `g` with one leaf `g-{i}` per flag.
    fn group(checked: &[bool]) -> Vec<NodeConfig> {
        vec![NodeConfig::parent(
            "g",
            "G",
            checked
                .iter()
                .enumerate()
                .map(|(i, &c)| {
                    let leaf = NodeConfig::leaf(format!("g-{i}"), "opt");
                    if c { leaf.checked() } else { leaf }
                })
                .collect(),
        )
        .radio_group()]
    }

    #[test]
    fn test_radio_group_validation() {
        assert!(TreeModel::new(&group(&[false, true, false]), TreeOptions::default()).is_ok());

        let err = TreeModel::new(&group(&[false, false]), TreeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::RadioGroup { problem: RadioGroupProblem::NoneChecked, .. }
        ));

        let err = TreeModel::new(&group(&[true, true, true]), TreeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::RadioGroup { problem: RadioGroupProblem::TooManyChecked(3), .. }
        ));
    }

    #[test]
    fn test_radio_member_selected_at_build() {
        let nodes = vec![
            NodeConfig::parent(
                "shape",
                "Shape",
                vec![
                    NodeConfig::parent(
                        "circle",
                        "Circle",
                        vec![
                            NodeConfig::leaf("small", "Small").checked(),
                            NodeConfig::leaf("large", "Large"),
                        ],
                    ),
                    NodeConfig::parent(
                        "square",
                        "Square",
                        vec![NodeConfig::leaf("filled", "Filled")],
                    ),
                ],
            )
            .radio_group(),
        ];
        let model = TreeModel::new(&nodes, TreeOptions::default()).unwrap();
        let state = |key: &str| model.get_node(key).unwrap().check_state();

        assert_eq!(state("circle"), CheckState::Checked);
        assert_eq!(state("square"), CheckState::Unchecked);
        assert_eq!(state("shape"), CheckState::Checked);
        // The member's own children are left as given.
        assert_eq!(state("small"), CheckState::Checked);
        assert_eq!(state("large"), CheckState::Unchecked);

        let on = model
            .children_of("shape")
            .unwrap()
            .iter()
            .filter(|key| model.get_node(*key).unwrap().check_state() == CheckState::Checked)
            .count();
        assert_eq!(on, 1);
        assert!(model.get_partially_checked().is_empty());
    }

    #[test]
    fn test_empty_parent_keeps_own_flag() {
        let nodes = vec![
            NodeConfig::parent("empty", "Empty", Vec::new()).checked(),
            NodeConfig::parent("other", "Other", Vec::new()),
        ];
        let model = TreeModel::new(&nodes, TreeOptions::default().with_check_model(CheckModel::All))
            .unwrap();
        assert_eq!(model.get_checked(), keys(&["empty"]));
    }

    #[test]
    fn test_derive_parent_state() {
        use CheckState::*;
        assert_eq!(derive_parent_state([Checked, Checked], false), Some(Checked));
        assert_eq!(derive_parent_state([Checked, Unchecked], false), Some(PartiallyChecked));
        assert_eq!(derive_parent_state([PartiallyChecked], false), Some(PartiallyChecked));
        assert_eq!(derive_parent_state([Unchecked, Unchecked], false), Some(Unchecked));
        assert_eq!(derive_parent_state([Checked, Unchecked], true), Some(Checked));
        assert_eq!(derive_parent_state(Vec::<CheckState>::new(), false), None);
    }

    #[test]
    fn test_toggle_expanded_leaf_is_noop() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let next = model.toggle_expanded("0-0").toggle_expanded("missing");
        assert!(next.get_expanded().is_empty());
        assert!(Arc::ptr_eq(
            model.get_shared("0-0").unwrap(),
            next.get_shared("0-0").unwrap()
        ));
    }

    #[test]
    fn test_set_node_prop_copies_only_target() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let next = model.set_node_prop("0-2", NodeProp::Title(Some("tip".into())));

        assert_eq!(next.get_node("0-2").unwrap().title(), Some("tip"));
        assert_eq!(model.get_node("0-2").unwrap().title(), None);
        assert!(!Arc::ptr_eq(
            model.get_shared("0-2").unwrap(),
            next.get_shared("0-2").unwrap()
        ));
        assert!(Arc::ptr_eq(
            model.get_shared("0").unwrap(),
            next.get_shared("0").unwrap()
        ));
    }

    #[test]
    fn test_set_expanded_replaces_set() {
        let model = TreeModel::new(&sample(), TreeOptions::default().with_expanded(["0"])).unwrap();
        assert_eq!(model.get_expanded(), keys(&["0"]));

        let next = model.set_expanded(["0-1", "0-1-1", "0-0", "ghost"]);
        assert_eq!(next.get_expanded(), keys(&["0-1", "0-1-1"]));
    }

    #[test]
    fn test_visible_nodes_follow_expansion() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let rows: Vec<String> = model
            .visible_nodes()
            .into_iter()
            .map(|(key, _)| key.to_string())
            .collect();
        assert_eq!(rows, vec!["0", "1"]);

        let expanded = model.expand_nodes_to_level(0).toggle_expanded("0-1");
        let rows = expanded.visible_nodes();
        let labels: Vec<String> = rows.iter().map(|(key, _)| key.to_string()).collect();
        assert_eq!(labels, vec!["0", "0-0", "0-1", "0-1-0", "0-1-1", "0-2", "1"]);
        assert_eq!(rows[3].1, 2);
    }

    #[test]
    fn test_with_options_applies_lists() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let next = model
            .with_options(
                TreeOptions::default()
                    .with_check_model(CheckModel::All)
                    .with_checked(["0-0"])
                    .with_expanded(["0"]),
            )
            .unwrap();

        assert_eq!(next.get_checked(), keys(&["0", "0-0"]));
        assert_eq!(next.get_expanded(), keys(&["0"]));
        assert_eq!(model.get_checked(), keys(&["0-1-0-0"]));
    }

    #[test]
    fn test_set_checked_replaces_flags() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let next = model.set_checked(["0-0", "ghost"]).unwrap();

        // "0-1-0-0" was flagged in the input and is dropped.
        assert_eq!(next.get_checked(), keys(&["0-0"]));
        assert_eq!(
            next.get_node("0").unwrap().check_state(),
            CheckState::PartiallyChecked
        );
        assert_eq!(
            next.get_node("0-1-0").unwrap().check_state(),
            CheckState::Unchecked
        );
        assert!(next.get_node("ghost").is_none());
        assert_eq!(model.get_checked(), keys(&["0-1-0-0"]));

        let cleared = next.set_checked(Vec::<NodeValue>::new()).unwrap();
        assert!(cleared.checked_with(CheckModel::All).is_empty());
    }

    #[test]
    fn test_set_checked_radio_errors() {
        let model = TreeModel::new(&group(&[true, false, false]), TreeOptions::default()).unwrap();

        let err = model.set_checked(["g-0", "g-1"]).unwrap_err();
        assert!(matches!(
            err,
            Error::RadioGroup { problem: RadioGroupProblem::TooManyChecked(2), .. }
        ));

        let err = model.set_checked(["ghost"]).unwrap_err();
        assert!(matches!(
            err,
            Error::RadioGroup { problem: RadioGroupProblem::NoneChecked, .. }
        ));

        let next = model.set_checked(["g-2"]).unwrap();
        assert_eq!(next.get_checked(), keys(&["g-2"]));
        assert_eq!(model.get_checked(), keys(&["g-0"]));

        let err = model
            .with_options(TreeOptions::default().with_checked(["g-0", "g-1"]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::RadioGroup { problem: RadioGroupProblem::TooManyChecked(2), .. }
        ));
    }

    #[test]
    fn test_with_options_switching_cascade() {
        let model = TreeModel::new(&sample(), TreeOptions::default()).unwrap();
        let flat = model
            .with_options(TreeOptions::default().with_no_cascade_checks(true))
            .unwrap();

        assert_eq!(
            flat.checked_with(CheckModel::All),
            keys(&["0-1-0", "0-1-0-0"])
        );
    }

    #[test]
    fn test_from_json() {
        let model = TreeModel::from_json(
            r#"[{"value": "a", "label": "A", "children": [{"value": 1, "label": "One", "checked": true}]}]"#,
            TreeOptions::default(),
        )
        .unwrap();
        assert_eq!(model.get_checked(), vec![NodeValue::from(1)]);

        let err = TreeModel::from_json("{", TreeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = TreeModel::from_json(r#"[{"value": 1.5, "label": "A"}]"#, TreeOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("a string or an integer"), "{err}");
    }
}
