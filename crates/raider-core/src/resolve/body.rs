//! Body-data resolution: recursive traversal of each group's tree.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::plugin::UserData;
use crate::prompt::{Category, Prompter};
use crate::structures::{BodyData, BodyGroup, DataStore, Key, Node};

use super::resolve_or_prompt;

/// Fully literal body groups.
pub type ResolvedBody = BTreeMap<BodyGroup, Map<String, Value>>;

/// Resolve every body group.
pub fn process_data(
    raw: &BodyData,
    userdata: &UserData,
    prompter: &mut dyn Prompter,
) -> ResolvedBody {
    let mut out = ResolvedBody::new();
    for (group, store) in raw {
        out.insert(*group, traverse(store, userdata, prompter));
    }
    out
}

/// Per entry: nested values recurse first, plugin values resolve next, and
/// only then is a plugin key resolved. A dropped value means its key is
/// never resolved.
///
/// Entries under a resolved plugin key are inserted after the whole level,
/// in resolution order. One whose name matches a literal key replaces that
/// value in place.
fn traverse(store: &DataStore, userdata: &UserData, prompter: &mut dyn Prompter) -> Map<String, Value> {
    let mut out = Map::new();
    let mut resolved_keys = Vec::new();
    for (key, node) in store.iter() {
        let value = match node {
            Node::Nested(inner) => Value::Object(traverse(inner, userdata, prompter)),
            Node::Literal(v) => v.clone(),
            Node::Plugin(p) => {
                match resolve_or_prompt(p.as_ref(), Category::Value, userdata, prompter) {
                    Some(v) => Value::String(v),
                    None => continue,
                }
            }
        };

        match key {
            Key::Literal(k) => {
                out.insert(k.clone(), value);
            }
            Key::Plugin(p) => {
                if let Some(k) = resolve_or_prompt(p.as_ref(), Category::Key, userdata, prompter) {
                    resolved_keys.push((k, value));
                }
            }
        }
    }
    for (k, value) in resolved_keys {
        out.insert(k, value);
    }
    out
}
