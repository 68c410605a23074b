//! Plugins: deferred values resolved against the active user's data.
//!
//! Every input site of a request (URL, header, cookie, body key or body value)
//! is either a literal or a `Box<dyn Plugin>`. Resolution happens right before
//! dispatch; until then a request only describes where values come from.

mod combine;
mod cookie;
mod header;
mod named;
mod url;
mod variable;

use std::collections::BTreeMap;
use std::fmt;

pub use combine::{Combine, Part};
pub use cookie::Cookie;
pub use header::Header;
pub use url::Url;
pub use variable::Variable;

/// Read-only key/value data of the active user, supplied at send time.
pub type UserData = BTreeMap<String, String>;

/// A value producer resolved against [`UserData`].
///
/// Composite plugins (`depends_on_others() == true`) delegate to their
/// `children()`; callers never resolve those children on the composite's
/// behalf, they only enumerate them as inputs.
pub trait Plugin: fmt::Debug + Send + Sync {
    /// Stable identifier, used as the externally visible input key.
    fn name(&self) -> &str;

    /// Produce the value, or `None` when it cannot be resolved.
    fn resolve(&self, userdata: &UserData) -> Option<String>;

    fn depends_on_others(&self) -> bool {
        !self.children().is_empty()
    }

    fn children(&self) -> &[Box<dyn Plugin>] {
        &[]
    }

    /// False when the effective name is only known after resolution.
    fn name_known_in_advance(&self) -> bool {
        true
    }

    /// Effective name of the slot. Differs from `name()` only for plugins
    /// whose name is not known in advance.
    fn resolved_name(&self, _userdata: &UserData) -> Option<String> {
        Some(self.name().to_string())
    }

    /// Deep copy behind a trait object.
    fn clone_box(&self) -> Box<dyn Plugin>;
}

impl Clone for Box<dyn Plugin> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

/// Lets a boxed plugin stand wherever a concrete `P: Plugin` is expected.
impl Plugin for Box<dyn Plugin> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn resolve(&self, userdata: &UserData) -> Option<String> {
        (**self).resolve(userdata)
    }

    fn depends_on_others(&self) -> bool {
        (**self).depends_on_others()
    }

    fn children(&self) -> &[Box<dyn Plugin>] {
        (**self).children()
    }

    fn name_known_in_advance(&self) -> bool {
        (**self).name_known_in_advance()
    }

    fn resolved_name(&self, userdata: &UserData) -> Option<String> {
        (**self).resolved_name(userdata)
    }

    fn clone_box(&self) -> Box<dyn Plugin> {
        (**self).clone_box()
    }
}

/// A flat input slot: a literal string or a plugin.
#[derive(Debug, Clone)]
pub enum Input {
    Literal(String),
    Plugin(Box<dyn Plugin>),
}

impl Input {
    pub fn plugin<P: Plugin + 'static>(plugin: P) -> Self {
        Input::Plugin(Box::new(plugin))
    }

    pub fn as_plugin(&self) -> Option<&dyn Plugin> {
        match self {
            Input::Plugin(p) => Some(p.as_ref()),
            Input::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Input::Literal(s) => Some(s),
            Input::Plugin(_) => None,
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Literal(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Literal(s)
    }
}

impl From<Box<dyn Plugin>> for Input {
    fn from(p: Box<dyn Plugin>) -> Self {
        Input::Plugin(p)
    }
}

macro_rules! input_from_plugin {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Input {
            fn from(p: $ty) -> Self {
                Input::Plugin(Box::new(p))
            }
        })*
    };
}

input_from_plugin!(Variable, Header, Cookie, Combine, Url);

#[cfg(test)]
mod tests {
    use super::*;

    fn userdata() -> UserData {
        let mut data = UserData::new();
        data.insert("username".to_string(), "alice".to_string());
        data
    }

    #[test]
    fn cloned_box_is_independent_copy() {
        let original: Box<dyn Plugin> = Box::new(Variable::new("username"));
        let copy = original.clone();
        assert_eq!(copy.name(), "username");
        assert_eq!(copy.resolve(&userdata()).as_deref(), Some("alice"));
        assert!(!std::ptr::eq(
            original.as_ref() as *const dyn Plugin as *const u8,
            copy.as_ref() as *const dyn Plugin as *const u8
        ));
    }

    #[test]
    fn boxed_plugin_forwards() {
        let boxed: Box<dyn Plugin> = Box::new(Combine::new("greeting").literal("hi ").plugin(Variable::new("username")));
        let header = Header::from_plugin("X-Greeting", boxed);
        assert_eq!(header.resolve(&userdata()).as_deref(), Some("hi alice"));
        assert_eq!(header.children().len(), 1);
        assert_eq!(header.children()[0].name(), "greeting");
    }

    #[test]
    fn simple_plugin_defaults() {
        let v = Variable::new("username");
        assert!(!v.depends_on_others());
        assert!(v.children().is_empty());
        assert!(v.name_known_in_advance());
        assert_eq!(v.resolved_name(&userdata()).as_deref(), Some("username"));
    }

    #[test]
    fn input_conversions() {
        let lit: Input = "x".into();
        assert_eq!(lit.as_literal(), Some("x"));
        assert!(lit.as_plugin().is_none());

        let plug: Input = Variable::new("username").into();
        assert_eq!(plug.as_plugin().map(|p| p.name()), Some("username"));
        assert!(plug.as_literal().is_none());
    }
}
