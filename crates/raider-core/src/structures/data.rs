//! Body data: one ordered tree per body-encoding group.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plugin::{Combine, Cookie, Header, Plugin, Url, Variable};

/// How a body group is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyGroup {
    Params,
    Data,
    Json,
    Multipart,
}

impl BodyGroup {
    pub const ALL: [BodyGroup; 4] = [
        BodyGroup::Params,
        BodyGroup::Data,
        BodyGroup::Json,
        BodyGroup::Multipart,
    ];

    /// Groups that encode a request body (everything except `params`).
    pub const BODY: [BodyGroup; 3] = [BodyGroup::Data, BodyGroup::Json, BodyGroup::Multipart];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyGroup::Params => "params",
            BodyGroup::Data => "data",
            BodyGroup::Json => "json",
            BodyGroup::Multipart => "multipart",
        }
    }
}

impl fmt::Display for BodyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyGroup::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown body group: {s}"))
    }
}

/// Body groups of a request, ordered by group.
pub type BodyData = BTreeMap<BodyGroup, DataStore>;

/// A body key: literal, or a plugin producing the key at send time.
#[derive(Debug, Clone)]
pub enum Key {
    Literal(String),
    Plugin(Box<dyn Plugin>),
}

impl Key {
    /// Name used for uniqueness: the literal, or the plugin's name.
    pub fn name(&self) -> &str {
        match self {
            Key::Literal(s) => s,
            Key::Plugin(p) => p.name(),
        }
    }

    pub fn as_plugin(&self) -> Option<&dyn Plugin> {
        match self {
            Key::Plugin(p) => Some(p.as_ref()),
            Key::Literal(_) => None,
        }
    }
}

/// A body value.
#[derive(Debug, Clone)]
pub enum Node {
    /// JSON scalar (string, number, bool, null).
    Literal(Value),
    Plugin(Box<dyn Plugin>),
    Nested(DataStore),
}

impl Node {
    pub fn as_plugin(&self) -> Option<&dyn Plugin> {
        match self {
            Node::Plugin(p) => Some(p.as_ref()),
            _ => None,
        }
    }
}

/// Ordered mapping of one body group; values may nest.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    entries: Vec<(Key, Node)>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by key name. Returns the previous value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k.name() == key.name()) {
            Some(slot) => {
                slot.0 = key;
                Some(std::mem::replace(&mut slot.1, value))
            }
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Node>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k.name() == name)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k.name() == name)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<Node> {
        let idx = self.entries.iter().position(|(k, _)| k.name() == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Node)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a literal-only store from a JSON object. `None` for non-objects.
    pub fn from_json(value: &Value) -> Option<DataStore> {
        let object = value.as_object()?;
        let mut store = DataStore::new();
        for (k, v) in object {
            let node = match v {
                Value::Object(_) => Node::Nested(DataStore::from_json(v)?),
                other => Node::Literal(other.clone()),
            };
            store.insert(k.as_str(), node);
        }
        Some(store)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Literal(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Literal(s)
    }
}

impl From<Box<dyn Plugin>> for Key {
    fn from(p: Box<dyn Plugin>) -> Self {
        Key::Plugin(p)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Literal(Value::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Literal(Value::String(s))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Literal(Value::from(n))
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Literal(Value::Bool(b))
    }
}

impl From<DataStore> for Node {
    fn from(store: DataStore) -> Self {
        Node::Nested(store)
    }
}

impl From<Box<dyn Plugin>> for Node {
    fn from(p: Box<dyn Plugin>) -> Self {
        Node::Plugin(p)
    }
}

macro_rules! key_and_node_from_plugin {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(p: $ty) -> Self {
                    Key::Plugin(Box::new(p))
                }
            }
            impl From<$ty> for Node {
                fn from(p: $ty) -> Self {
                    Node::Plugin(Box::new(p))
                }
            }
        )*
    };
}

key_and_node_from_plugin!(Variable, Header, Cookie, Combine, Url);
