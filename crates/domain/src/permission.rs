use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use paydesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Permission every session falls back to when nothing usable is stored.
pub const BASELINE_PERMISSION: &str = "Dashboard";

/// Name of a grantable navigation permission.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionName(NonEmptyString);

impl PermissionName {
    /// Creates a validated permission name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        NonEmptyString::new(value)
            .map(Self)
            .map_err(|_| AppError::Validation("permission name must not be empty".to_owned()))
    }

    /// Returns the permission name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for PermissionName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Display for PermissionName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One entry of a stored permission structure.
///
/// Stored data is either a flat name or a group whose members are names or
/// further groups. A group label is never granted by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionNode {
    /// A grantable permission name.
    Leaf(PermissionName),
    /// A labelled or anonymous collection of nodes.
    Group {
        /// Group label, absent for plain lists.
        name: Option<String>,
        /// Nested members in stored order.
        members: Vec<PermissionNode>,
    },
}

impl PermissionNode {
    /// Parses a raw stored JSON document.
    ///
    /// Nesting depth is unbounded; deep documents are parsed on a growable
    /// stack.
    pub fn parse_document(raw: &str) -> AppResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
            .map_err(invalid_json)?;
        deserializer.end().map_err(invalid_json)?;

        Self::from_json_value(&value)
    }

    /// Converts a JSON value into a permission node.
    ///
    /// Accepted shapes are a string, an array of nodes, an object carrying a
    /// `name`/`title` label with `children`/`permissions` members, or an object
    /// mapping group labels to members. Anything else is rejected.
    ///
    /// An unlabelled object is always read as a mapping, so each key becomes a
    /// group label and each string value a grantable leaf. A record such as
    /// `{"module": "Vendors", "permissions": ["Vendor List"]}` therefore grants
    /// `Vendors` as well as `Vendor List`.
    pub fn from_json_value(value: &Value) -> AppResult<Self> {
        let mut open = match NodeSource::Value(value).expand()? {
            Expansion::Leaf(leaf) => return Ok(leaf),
            Expansion::Group(frame) => vec![frame],
        };

        while let Some(mut frame) = open.pop() {
            let Some(source) = frame.sources.next() else {
                let node = Self::Group {
                    name: frame.name,
                    members: frame.members,
                };
                match open.last_mut() {
                    Some(parent) => parent.members.push(node),
                    None => return Ok(node),
                }
                continue;
            };

            match source.expand()? {
                Expansion::Leaf(leaf) => {
                    frame.members.push(leaf);
                    open.push(frame);
                }
                Expansion::Group(child) => {
                    open.push(frame);
                    open.push(child);
                }
            }
        }

        Err(AppError::Internal(
            "permission structure ended without a root node".to_owned(),
        ))
    }

    /// Collects every leaf name regardless of nesting depth.
    #[must_use]
    pub fn flatten(&self) -> PermissionSet {
        let mut names = BTreeSet::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node {
                Self::Leaf(name) => {
                    names.insert(name.clone());
                }
                Self::Group { members, .. } => pending.extend(members.iter()),
            }
        }

        PermissionSet { names }
    }
}

fn invalid_json(error: serde_json::Error) -> AppError {
    AppError::Validation(format!("stored permissions are not valid JSON: {error}"))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A JSON fragment waiting to become a permission node.
#[derive(Clone, Copy)]
enum NodeSource<'a> {
    Value(&'a Value),
    /// A `label: members` pair of a mapping object.
    Entry(&'a str, &'a Value),
}

enum Expansion<'a> {
    Leaf(PermissionNode),
    Group(OpenGroup<'a>),
}

/// A group whose members are still being converted.
struct OpenGroup<'a> {
    name: Option<String>,
    sources: std::vec::IntoIter<NodeSource<'a>>,
    members: Vec<PermissionNode>,
}

impl<'a> OpenGroup<'a> {
    fn new(name: Option<String>, sources: Vec<NodeSource<'a>>) -> Self {
        Self {
            name,
            members: Vec::with_capacity(sources.len()),
            sources: sources.into_iter(),
        }
    }

    fn of_items(name: Option<String>, items: &'a [Value]) -> Self {
        Self::new(name, items.iter().map(NodeSource::Value).collect())
    }
}

impl<'a> NodeSource<'a> {
    fn expand(self) -> AppResult<Expansion<'a>> {
        let value = match self {
            Self::Entry(label, Value::Array(items)) => {
                return Ok(Expansion::Group(OpenGroup::of_items(
                    Some(label.to_owned()),
                    items,
                )));
            }
            Self::Entry(label, other) => {
                return Ok(Expansion::Group(OpenGroup::new(
                    Some(label.to_owned()),
                    vec![Self::Value(other)],
                )));
            }
            Self::Value(value) => value,
        };

        match value {
            Value::String(name) => PermissionName::new(name.as_str())
                .map(PermissionNode::Leaf)
                .map(Expansion::Leaf),
            Value::Array(items) => Ok(Expansion::Group(OpenGroup::of_items(None, items))),
            Value::Object(object) => expand_object(object).map(Expansion::Group),
            Value::Null | Value::Bool(_) | Value::Number(_) => Err(AppError::Validation(format!(
                "unsupported permission node '{value}'"
            ))),
        }
    }
}

fn expand_object(object: &Map<String, Value>) -> AppResult<OpenGroup<'_>> {
    let label = object.get("name").or_else(|| object.get("title"));
    let Some(label) = label else {
        let entries = object
            .iter()
            .map(|(label, members)| NodeSource::Entry(label.as_str(), members))
            .collect();
        return Ok(OpenGroup::new(None, entries));
    };

    let Value::String(label) = label else {
        return Err(AppError::Validation(format!(
            "permission group label must be a string, got {}",
            value_kind(label)
        )));
    };

    match object.get("children").or_else(|| object.get("permissions")) {
        Some(Value::Array(items)) => Ok(OpenGroup::of_items(Some(label.clone()), items)),
        Some(other) => Err(AppError::Validation(format!(
            "members of permission group '{label}' must be an array, got {}",
            value_kind(other)
        ))),
        None => Err(AppError::Validation(format!(
            "permission group '{label}' has no members"
        ))),
    }
}

/// Flat set of permission names active for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    names: BTreeSet<PermissionName>,
}

impl PermissionSet {
    /// Creates an empty permission set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set holding only the baseline dashboard permission.
    #[must_use]
    pub fn baseline() -> Self {
        Self::from_static(&[BASELINE_PERMISSION])
    }

    /// Builds a set from compile-time names, skipping blank entries.
    #[must_use]
    pub fn from_static(names: &[&'static str]) -> Self {
        names
            .iter()
            .filter_map(|name| PermissionName::new(*name).ok())
            .collect()
    }

    /// Returns whether the permission is granted.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of distinct permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the set grants nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates permission names in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(PermissionName::as_str)
    }

    /// Returns the set as a flat, anonymous permission structure.
    #[must_use]
    pub fn to_node(&self) -> PermissionNode {
        PermissionNode::Group {
            name: None,
            members: self.names.iter().cloned().map(PermissionNode::Leaf).collect(),
        }
    }
}

impl FromIterator<PermissionName> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = PermissionName>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
