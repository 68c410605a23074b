//! Input discovery: which plugins a request needs, without resolving any.

use std::collections::BTreeMap;

use crate::plugin::{Input, Plugin};
use crate::structures::{DataStore, Key, Node};

use super::Request;

impl Request {
    /// Every plugin of the request by name, plus the direct children of
    /// composite plugins. Nothing is resolved, prompted or changed.
    pub fn list_inputs(&self) -> BTreeMap<String, &dyn Plugin> {
        let mut inputs = BTreeMap::new();

        if let Input::Plugin(url) = &self.url {
            register(&mut inputs, url.as_ref());
        }
        for store in [&self.cookies, &self.headers] {
            for (_, input) in store.iter() {
                if let Some(plugin) = input.as_plugin() {
                    register(&mut inputs, plugin);
                }
            }
        }
        for store in self.data.values() {
            register_data(&mut inputs, store);
        }
        inputs
    }
}

fn register<'a>(inputs: &mut BTreeMap<String, &'a dyn Plugin>, plugin: &'a dyn Plugin) {
    inputs.insert(plugin.name().to_string(), plugin);
    if plugin.depends_on_others() {
        for child in plugin.children() {
            inputs.insert(child.name().to_string(), child.as_ref());
        }
    }
}

fn register_data<'a>(inputs: &mut BTreeMap<String, &'a dyn Plugin>, store: &'a DataStore) {
    for (key, node) in store.iter() {
        if let Key::Plugin(p) = key {
            register(inputs, p.as_ref());
        }
        match node {
            Node::Plugin(p) => register(inputs, p.as_ref()),
            Node::Nested(inner) => register_data(inputs, inner),
            Node::Literal(_) => {}
        }
    }
}
