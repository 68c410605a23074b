//! HTTP header plugin.

use super::named::{NameSource, NamedValue, ValueSource};
use super::{Plugin, UserData};

/// A request header. Names are stored lower-cased.
#[derive(Debug, Clone)]
pub struct Header(NamedValue);

impl Header {
    /// Header with a fixed value.
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self(NamedValue::new(
            NameSource::Fixed(name.to_ascii_lowercase()),
            ValueSource::Literal(value.into()),
        ))
    }

    /// Header whose value is produced by `parent`.
    pub fn from_plugin<P: Plugin + 'static>(name: &str, parent: P) -> Self {
        Self(NamedValue::new(
            NameSource::Fixed(name.to_ascii_lowercase()),
            ValueSource::Parent {
                plugin: Box::new(parent),
                format: None,
            },
        ))
    }

    /// Like [`Header::from_plugin`], with the value placed into `format`
    /// at `{}`.
    pub fn formatted<P: Plugin + 'static>(name: &str, parent: P, format: &str) -> Self {
        Self(NamedValue::new(
            NameSource::Fixed(name.to_ascii_lowercase()),
            ValueSource::Parent {
                plugin: Box::new(parent),
                format: Some(format.to_string()),
            },
        ))
    }

    /// `authorization: Bearer <token>` with the token produced by `token`.
    pub fn bearer_auth<P: Plugin + 'static>(token: P) -> Self {
        Self::formatted("authorization", token, "Bearer {}")
    }

    /// Header whose name is only known once `name` resolves.
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

impl Plugin for Header {
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
        self.0
            .resolved_name(userdata)
            .map(|n| n.to_ascii_lowercase())
    }

    fn clone_box(&self) -> Box<dyn Plugin> {
        Box::new(self.clone())
    }
}
