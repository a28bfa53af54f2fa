use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Boolean operator joining the items of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupOperator {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl GroupOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupOperator::And => "AND",
            GroupOperator::Or => "OR",
        }
    }

    /// Parse the wire/UI form; anything else is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "AND" => Some(GroupOperator::And),
            "OR" => Some(GroupOperator::Or),
            _ => None,
        }
    }

    pub fn all() -> &'static [GroupOperator] {
        &[GroupOperator::And, GroupOperator::Or]
    }
}

/// Comparison applied by a predicate leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    #[default]
    Equal,
    Contains,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    Empty,
    NotEmpty,
}

impl FilterOperator {
    /// Wire name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "equal",
            FilterOperator::Contains => "contains",
            FilterOperator::GreaterThan => "greater_than",
            FilterOperator::GreaterThanEqual => "greater_than_equal",
            FilterOperator::LessThan => "less_than",
            FilterOperator::LessThanEqual => "less_than_equal",
            FilterOperator::Empty => "empty",
            FilterOperator::NotEmpty => "not_empty",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|op| op.as_str() == value)
    }

    /// Display label for UI
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Equal => "equals",
            FilterOperator::Contains => "contains",
            FilterOperator::GreaterThan => "greater than",
            FilterOperator::GreaterThanEqual => "greater than or equal",
            FilterOperator::LessThan => "less than",
            FilterOperator::LessThanEqual => "less than or equal",
            FilterOperator::Empty => "is empty",
            FilterOperator::NotEmpty => "is not empty",
        }
    }

    /// `empty` and `not_empty` ignore the value
    pub fn takes_value(&self) -> bool {
        !matches!(self, FilterOperator::Empty | FilterOperator::NotEmpty)
    }

    pub fn all() -> &'static [FilterOperator] {
        &[
            FilterOperator::Equal,
            FilterOperator::Contains,
            FilterOperator::GreaterThan,
            FilterOperator::GreaterThanEqual,
            FilterOperator::LessThan,
            FilterOperator::LessThanEqual,
            FilterOperator::Empty,
            FilterOperator::NotEmpty,
        ]
    }
}

/// Single field comparison: `{value, operator}` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterPredicate {
    #[serde(default)]
    pub value: String,
    pub operator: FilterOperator,
}

impl FilterPredicate {
    pub fn new(operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            operator,
        }
    }

    /// Human-readable form, e.g. `Status equals "open"`
    pub fn display_text(&self, field_name: &str) -> String {
        if self.operator.takes_value() {
            format!("{} {} \"{}\"", field_name, self.operator.label(), self.value)
        } else {
            format!("{} {}", field_name, self.operator.label())
        }
    }
}

/// Recursive AND/OR group: `{operator, filter_item}` on the wire
///
/// `filter_item` is always serialized, even when empty, so the receiver can
/// tell a group from a leaf by the presence of that key alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterGroup {
    pub operator: GroupOperator,
    pub filter_item: BTreeMap<String, FilterItem>,
}

impl FilterGroup {
    pub fn new(operator: GroupOperator) -> Self {
        Self {
            operator,
            filter_item: BTreeMap::new(),
        }
    }

    /// Number of predicate leaves in this group and every nested group
    pub fn predicate_count(&self) -> usize {
        self.filter_item
            .values()
            .map(|item| match item {
                FilterItem::Leaf(_) => 1,
                FilterItem::Group(group) => group.predicate_count(),
            })
            .sum()
    }

    /// Leaves of this group only, in key order
    pub fn leaves(&self) -> impl Iterator<Item = (&String, &FilterPredicate)> {
        self.filter_item.iter().filter_map(|(key, item)| match item {
            FilterItem::Leaf(leaf) => Some((key, leaf)),
            FilterItem::Group(_) => None,
        })
    }

    /// Nested groups of this group only, in key order
    pub fn groups(&self) -> impl Iterator<Item = (&String, &FilterGroup)> {
        self.filter_item.iter().filter_map(|(key, item)| match item {
            FilterItem::Group(group) => Some((key, group)),
            FilterItem::Leaf(_) => None,
        })
    }
}

/// Entry of a group's `filter_item` mapping
///
/// Untagged: the `Group` variant is tried first and needs `filter_item`, so
/// the shape alone decides between the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterItem {
    Group(FilterGroup),
    Leaf(FilterPredicate),
}

impl FilterItem {
    pub fn is_group(&self) -> bool {
        matches!(self, FilterItem::Group(_))
    }
}
