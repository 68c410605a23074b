//! Ordered, name-keyed containers of literals and plugins.
//!
//! `Store` backs headers and cookies (flat); [`DataStore`] backs each body
//! group and may nest. Both keep insertion order and unique names; inserting
//! an existing name replaces its value in place.

mod data;

use std::collections::BTreeMap;

use crate::plugin::{Input, Plugin};

pub use data::{BodyData, BodyGroup, DataStore, Key, Node};

pub type HeaderStore = Store;
pub type CookieStore = Store;

/// Flat container for headers or cookies.
#[derive(Debug, Clone, Default)]
pub struct Store {
    entries: Vec<(String, Input)>,
    fold_case: bool,
}

impl Store {
    /// Case-preserving store (cookies).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose names are folded to lower case (headers).
    pub fn headers() -> Self {
        Self {
            entries: Vec::new(),
            fold_case: true,
        }
    }

    pub fn cookies() -> Self {
        Self::new()
    }

    pub fn folds_case(&self) -> bool {
        self.fold_case
    }

    pub(crate) fn normalize(&self, name: &str) -> String {
        if self.fold_case {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }

    /// Insert or replace `name`. Returns the previous value.
    pub fn insert(&mut self, name: &str, value: impl Into<Input>) -> Option<Input> {
        let name = self.normalize(name);
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Insert a plugin under its own name.
    pub fn push<P: Plugin + 'static>(&mut self, plugin: P) -> Option<Input> {
        self.push_boxed(Box::new(plugin))
    }

    pub fn push_boxed(&mut self, plugin: Box<dyn Plugin>) -> Option<Input> {
        let name = plugin.name().to_string();
        self.insert(&name, Input::Plugin(plugin))
    }

    /// Builder form of [`Store::push`].
    pub fn with<P: Plugin + 'static>(mut self, plugin: P) -> Self {
        self.push(plugin);
        self
    }

    /// Builder form of [`Store::insert`].
    pub fn with_entry(mut self, name: &str, value: impl Into<Input>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Input> {
        let name = self.normalize(name);
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<Input> {
        let name = self.normalize(name);
        let idx = self.entries.iter().position(|(n, _)| *n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Input)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Names that are stable before resolution: excludes plugins whose name
    /// is only known once resolved.
    pub fn known_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.as_plugin().map_or(true, |p| p.name_known_in_advance()))
            .map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union with `other`; `other` wins on name collision.
    pub fn merge(&mut self, other: Store) {
        for (name, value) in other.entries {
            self.insert(&name, value);
        }
    }

    /// Flatten to a plain map. `None` while any entry is still a plugin.
    pub fn to_literal_map(&self) -> Option<BTreeMap<String, String>> {
        self.entries
            .iter()
            .map(|(n, v)| v.as_literal().map(|s| (n.clone(), s.to_string())))
            .collect()
    }
}

impl<P: Plugin + 'static> FromIterator<P> for Store {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut store = Store::new();
        for p in iter {
            store.push(p);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{Cookie, Header, Variable};

    #[test]
    fn insertion_order_and_in_place_replace() {
        let mut s = Store::new();
        s.insert("a", "1");
        s.insert("b", "2");
        s.insert("c", "3");
        let old = s.insert("b", "20");
        assert_eq!(old.and_then(|v| v.as_literal().map(String::from)).as_deref(), Some("2"));
        let names: Vec<&str> = s.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(s.get("b").and_then(Input::as_literal), Some("20"));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn header_store_folds_case() {
        let mut s = Store::headers();
        s.insert("Content-Type", "text/plain");
        s.insert("content-type", "application/json");
        assert_eq!(s.len(), 1);
        assert_eq!(
            s.get("CONTENT-TYPE").and_then(Input::as_literal),
            Some("application/json")
        );
    }

    #[test]
    fn cookie_store_preserves_case() {
        let mut s = Store::cookies();
        s.insert("SID", "a");
        s.insert("sid", "b");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn merge_overrides_and_keeps_existing() {
        let mut base = Store::headers().with(Header::new("A", "1")).with(Header::new("B", "2"));
        let over = Store::headers().with(Header::new("b", "22")).with(Header::new("C", "3"));
        base.merge(over);
        let names: Vec<&str> = base.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b", "c"]);
        let b = base.get("b").and_then(Input::as_plugin).unwrap();
        assert_eq!(b.resolve(&Default::default()).as_deref(), Some("22"));
    }

    #[test]
    fn to_literal_map_only_when_all_literal() {
        let mut s = Store::new();
        s.insert("x", "1");
        assert_eq!(s.to_literal_map().unwrap().get("x").map(String::as_str), Some("1"));
        s.push(Variable::new("y"));
        assert!(s.to_literal_map().is_none());
    }

    #[test]
    fn known_names_skip_dynamic_plugins() {
        let s = Store::cookies()
            .with(Cookie::new("fixed", "1"))
            .with(Cookie::with_dynamic_name(Variable::new("n"), Variable::new("v")));
        let known: Vec<&str> = s.known_names().collect();
        assert_eq!(known, ["fixed"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn remove_entry() {
        let mut s: Store = vec![Variable::new("a"), Variable::new("b")].into_iter().collect();
        assert!(s.remove("a").is_some());
        assert!(!s.contains("a"));
        assert!(s.remove("a").is_none());
    }
}
