//! `Url`: a URL pattern whose `{name}` placeholders are filled by child plugins.

use super::{Plugin, UserData};

#[derive(Debug, Clone)]
pub struct Url {
    name: String,
    pattern: String,
    children: Vec<Box<dyn Plugin>>,
}

impl Url {
    /// `pattern` such as `https://{host}/users/{user_id}`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            name: "url".to_string(),
            pattern: pattern.into(),
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Fill `{plugin.name()}` with the plugin's value.
    pub fn with<P: Plugin + 'static>(self, plugin: P) -> Self {
        self.with_boxed(Box::new(plugin))
    }

    pub fn with_boxed(mut self, plugin: Box<dyn Plugin>) -> Self {
        self.children.push(plugin);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Plugin for Url {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, userdata: &UserData) -> Option<String> {
        let mut url = self.pattern.clone();
        for child in &self.children {
            let value = child.resolve(userdata).filter(|v| !v.is_empty())?;
            url = url.replace(&format!("{{{}}}", child.name()), &value);
        }
        Some(url)
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
    fn fills_placeholders() {
        let url = Url::new("https://{host}/users/{user_id}")
            .with(Variable::new("host"))
            .with(Variable::new("user_id"));
        let mut data = UserData::new();
        data.insert("host".to_string(), "example.com".to_string());
        data.insert("user_id".to_string(), "42".to_string());
        assert_eq!(
            url.resolve(&data).as_deref(),
            Some("https://example.com/users/42")
        );
        assert_eq!(url.name(), "url");
        assert_eq!(url.children().len(), 2);
    }

    #[test]
    fn unresolved_child_yields_none() {
        let url = Url::new("https://{host}/").with(Variable::new("host"));
        assert!(url.resolve(&UserData::new()).is_none());
    }
}
