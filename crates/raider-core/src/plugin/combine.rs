//! `Combine`: concatenation of literals and plugin values.

use super::{Plugin, UserData};

/// One piece of a [`Combine`].
#[derive(Debug, Clone)]
pub enum Part {
    Literal(String),
    /// Index into the combine's children.
    Child(usize),
}

/// Joins its parts in order. Resolves to `None` if any plugin part does.
#[derive(Debug, Clone)]
pub struct Combine {
    name: String,
    parts: Vec<Part>,
    children: Vec<Box<dyn Plugin>>,
}

impl Combine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Literal(text.into()));
        self
    }

    pub fn plugin<P: Plugin + 'static>(self, plugin: P) -> Self {
        self.boxed(Box::new(plugin))
    }

    pub fn boxed(mut self, plugin: Box<dyn Plugin>) -> Self {
        self.parts.push(Part::Child(self.children.len()));
        self.children.push(plugin);
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl Plugin for Combine {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, userdata: &UserData) -> Option<String> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(s) => out.push_str(s),
                Part::Child(i) => {
                    let value = self.children.get(*i)?.resolve(userdata)?;
                    out.push_str(&value);
                }
            }
        }
        Some(out)
    }

    fn children(&self) -> &[Box<dyn Plugin>] {
        &self.children
    }

    fn clone_box(&self) -> Box<dyn Plugin> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::Variable;

    #[test]
    fn joins_literals_and_plugins() {
        let c = Combine::new("login")
            .plugin(Variable::new("user"))
            .literal(":")
            .plugin(Variable::new("pass"));
        let mut data = UserData::new();
        data.insert("user".to_string(), "alice".to_string());
        data.insert("pass".to_string(), "pw".to_string());
        assert_eq!(c.resolve(&data).as_deref(), Some("alice:pw"));
        assert!(c.depends_on_others());
        let names: Vec<&str> = c.children().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["user", "pass"]);
    }

    #[test]
    fn missing_child_yields_none() {
        let c = Combine::new("x").literal("a").plugin(Variable::new("missing"));
        assert!(c.resolve(&UserData::new()).is_none());
    }

    #[test]
    fn literal_only_is_not_composite() {
        let c = Combine::new("x").literal("a").literal("b");
        assert!(!c.depends_on_others());
        assert_eq!(c.resolve(&UserData::new()).as_deref(), Some("ab"));
    }
}
