//! Filter expression tree edited by the filter panel
//!
//! The tree is a plain owned value: one root [`FilterGroup`] whose entries are
//! either predicate leaves (keyed by field code) or nested groups (keyed by
//! `group_N`). Groups are addressed by [`GroupPath`], the chain of group keys
//! from the root. Operations on keys or paths that do not resolve are no-ops
//! and report `false`.

use contracts::shared::dynamic_view::{
    FilterGroup, FilterItem, FilterOperator, FilterPredicate, GroupOperator,
};

const GROUP_KEY_PREFIX: &str = "group_";

/// Address of a group: keys of the nested groups leading to it from the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupPath(Vec<String>);

impl GroupPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the nested group `key` inside this group
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = self.0.clone();
        keys.push(key.into());
        Self(keys)
    }

    /// Parent path and own key; `None` for the root
    pub fn split_last(&self) -> Option<(GroupPath, &str)> {
        let (last, parent) = self.0.split_last()?;
        Some((GroupPath(parent.to_vec()), last.as_str()))
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }
}

/// Change applied to a predicate leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafUpdate {
    Operator(FilterOperator),
    Value(String),
}

/// Predicate leaf together with its location, for flat listings (filter chips)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry {
    pub path: GroupPath,
    pub key: String,
    pub predicate: FilterPredicate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpressionTree {
    root: FilterGroup,
}

impl FilterExpressionTree {
    /// Empty tree: `AND` root without items
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &FilterGroup {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.filter_item.is_empty()
    }

    pub fn predicate_count(&self) -> usize {
        self.root.predicate_count()
    }

    pub fn group(&self, path: &GroupPath) -> Option<&FilterGroup> {
        path.keys()
            .iter()
            .try_fold(&self.root, |group, key| match group.filter_item.get(key) {
                Some(FilterItem::Group(nested)) => Some(nested),
                _ => None,
            })
    }

    fn group_mut(&mut self, path: &GroupPath) -> Option<&mut FilterGroup> {
        let mut group = &mut self.root;
        for key in path.keys() {
            group = match group.filter_item.get_mut(key) {
                Some(FilterItem::Group(nested)) => nested,
                _ => return None,
            };
        }
        Some(group)
    }

    pub fn leaf(&self, path: &GroupPath, key: &str) -> Option<&FilterPredicate> {
        match self.group(path)?.filter_item.get(key)? {
            FilterItem::Leaf(leaf) => Some(leaf),
            FilterItem::Group(_) => None,
        }
    }

    /// Put a fresh `equal ""` predicate under `field_code`, replacing any entry
    /// with that key. Blank codes (nothing selected) are ignored.
    pub fn add_field(&mut self, path: &GroupPath, field_code: &str) -> bool {
        let field_code = field_code.trim();
        if field_code.is_empty() {
            return false;
        }
        let Some(group) = self.group_mut(path) else {
            return false;
        };
        group.filter_item.insert(
            field_code.to_string(),
            FilterItem::Leaf(FilterPredicate::default()),
        );
        true
    }

    /// Insert an empty `AND` group under the lowest free `group_N` key of the
    /// addressed group and return that key.
    pub fn add_group(&mut self, path: &GroupPath) -> Option<String> {
        let group = self.group_mut(path)?;
        let key = next_group_key(group);
        group.filter_item.insert(
            key.clone(),
            FilterItem::Group(FilterGroup::new(GroupOperator::And)),
        );
        Some(key)
    }

    pub fn update_operator(&mut self, path: &GroupPath, operator: GroupOperator) -> bool {
        match self.group_mut(path) {
            Some(group) => {
                group.operator = operator;
                true
            }
            None => false,
        }
    }

    /// Set the operator or value of the leaf `key`; no-op unless `key` is a leaf
    pub fn update_field(&mut self, path: &GroupPath, key: &str, update: LeafUpdate) -> bool {
        let Some(FilterItem::Leaf(leaf)) = self
            .group_mut(path)
            .and_then(|group| group.filter_item.get_mut(key))
        else {
            return false;
        };
        match update {
            LeafUpdate::Operator(operator) => leaf.operator = operator,
            LeafUpdate::Value(value) => leaf.value = value,
        }
        true
    }

    /// Remove the leaf `key`; entries that are groups are left alone
    pub fn delete_field(&mut self, path: &GroupPath, key: &str) -> bool {
        self.remove_where(path, key, |item| !item.is_group())
    }

    /// Remove the nested group `key` with everything inside it
    pub fn delete_group(&mut self, path: &GroupPath, key: &str) -> bool {
        self.remove_where(path, key, FilterItem::is_group)
    }

    fn remove_where(
        &mut self,
        path: &GroupPath,
        key: &str,
        matches: impl Fn(&FilterItem) -> bool,
    ) -> bool {
        let Some(group) = self.group_mut(path) else {
            return false;
        };
        if group.filter_item.get(key).is_some_and(|item| matches(item)) {
            group.filter_item.remove(key);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.root = FilterGroup::default();
    }

    /// Wire form of the tree, as the data endpoint expects it inside `filters`
    pub fn to_wire(&self) -> FilterGroup {
        self.root.clone()
    }

    /// Wire form as JSON; groups carry `filter_item`, leaves do not
    pub fn serialize(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.root)
    }

    /// Every leaf in the tree, depth-first in key order
    pub fn leaf_entries(&self) -> Vec<LeafEntry> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &GroupPath::root(), &mut out);
        out
    }
}

fn collect_leaves(group: &FilterGroup, path: &GroupPath, out: &mut Vec<LeafEntry>) {
    for (key, item) in &group.filter_item {
        match item {
            FilterItem::Leaf(predicate) => out.push(LeafEntry {
                path: path.clone(),
                key: key.clone(),
                predicate: predicate.clone(),
            }),
            FilterItem::Group(nested) => collect_leaves(nested, &path.child(key.clone()), out),
        }
    }
}

/// Lowest `group_N` (N >= 1) not used as a key in `group`
fn next_group_key(group: &FilterGroup) -> String {
    let mut n = 1usize;
    loop {
        let key = format!("{}{}", GROUP_KEY_PREFIX, n);
        if !group.filter_item.contains_key(&key) {
            return key;
        }
        n += 1;
    }
}
