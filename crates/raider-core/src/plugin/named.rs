//! Shared shape of header and cookie plugins: a name and a value, either of
//! which may come from another plugin.

use super::{Plugin, UserData};

/// Where a header/cookie name comes from.
#[derive(Debug, Clone)]
pub(crate) enum NameSource {
    Fixed(String),
    /// Produced by a plugin at resolve time; the placeholder is the plugin's name.
    Dynamic(Box<dyn Plugin>),
}

/// Where a header/cookie value comes from.
#[derive(Debug, Clone)]
pub(crate) enum ValueSource {
    Literal(String),
    /// Parent plugin value, optionally wrapped by a `{}` format.
    Parent {
        plugin: Box<dyn Plugin>,
        format: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct NamedValue {
    name: NameSource,
    value: ValueSource,
    /// Plugins this value depends on, in declaration order (name plugin first).
    children: Vec<Box<dyn Plugin>>,
}

impl NamedValue {
    pub(crate) fn new(name: NameSource, value: ValueSource) -> Self {
        let mut children = Vec::new();
        if let NameSource::Dynamic(p) = &name {
            children.push(p.clone());
        }
        if let ValueSource::Parent { plugin, .. } = &value {
            children.push(plugin.clone());
        }
        Self {
            name,
            value,
            children,
        }
    }

    pub(crate) fn name(&self) -> &str {
        match &self.name {
            NameSource::Fixed(n) => n,
            NameSource::Dynamic(p) => p.name(),
        }
    }

    pub(crate) fn children(&self) -> &[Box<dyn Plugin>] {
        &self.children
    }

    pub(crate) fn name_known_in_advance(&self) -> bool {
        matches!(self.name, NameSource::Fixed(_))
    }

    pub(crate) fn resolve(&self, userdata: &UserData) -> Option<String> {
        match &self.value {
            ValueSource::Literal(v) => Some(v.clone()),
            ValueSource::Parent { plugin, format } => {
                let value = plugin.resolve(userdata).filter(|v| !v.is_empty())?;
                Some(match format {
                    Some(f) => f.replacen("{}", &value, 1),
                    None => value,
                })
            }
        }
    }

    pub(crate) fn resolved_name(&self, userdata: &UserData) -> Option<String> {
        match &self.name {
            NameSource::Fixed(n) => Some(n.clone()),
            NameSource::Dynamic(p) => p.resolve(userdata).filter(|n| !n.is_empty()),
        }
    }
}
