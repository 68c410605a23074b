//! HTTP cookie plugin.

use super::named::{NameSource, NamedValue, ValueSource};
use super::{Plugin, UserData};

/// A request cookie. Names keep their case.
#[derive(Debug, Clone)]
pub struct Cookie(NamedValue);

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self(NamedValue::new(
            NameSource::Fixed(name.into()),
            ValueSource::Literal(value.into()),
        ))
    }

    /// Cookie whose value is produced by `parent` (e.g. a session id kept in user data).
    pub fn from_plugin<P: Plugin + 'static>(name: impl Into<String>, parent: P) -> Self {
        Self(NamedValue::new(
            NameSource::Fixed(name.into()),
            ValueSource::Parent {
                plugin: Box::new(parent),
                format: None,
            },
        ))
    }

    /// Cookie whose name is only known once `name` resolves.
    pub fn with_dynamic_name<N, V>(name: N, value: V) -> Self
    where
        N: Plugin + 'static,
        V: Plugin + 'static,
    {
        Self(NamedValue::new(
            NameSource::Dynamic(Box::new(name)),
            ValueSource::Parent {
                plugin: Box::new(value),
                format: None,
            },
        ))
    }
}

impl Plugin for Cookie {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn resolve(&self, userdata: &UserData) -> Option<String> {
        self.0.resolve(userdata)
    }

    fn children(&self) -> &[Box<dyn Plugin>] {
        self.0.children()
    }

    fn name_known_in_advance(&self) -> bool {
        self.0.name_known_in_advance()
    }

    fn resolved_name(&self, userdata: &UserData) -> Option<String> {
        self.0.resolved_name(userdata)
    }

    fn clone_box(&self) -> Box<dyn Plugin> {
        Box::new(self.clone())
    }
}
