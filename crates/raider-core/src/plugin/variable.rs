//! `Variable`: a value read straight from the user's data.

use super::{Plugin, UserData};

/// Resolves to `userdata[name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Plugin for Variable {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, userdata: &UserData) -> Option<String> {
        userdata.get(&self.name).cloned()
    }

    fn clone_box(&self) -> Box<dyn Plugin> {
        Box::new(self.clone())
    }
}
