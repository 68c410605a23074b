//! Turning raw containers into concrete values.
//!
//! Every slot goes through [`resolve_or_prompt`]: resolve the plugin, ask the
//! [`Prompter`] if that yields nothing, drop the slot if the answer is empty.
//! Dropped slots are never an error; the request goes out without them.

mod body;
mod flat;
mod params;

pub use body::{process_data, ResolvedBody};
pub use flat::{process_cookies, process_headers};
pub use params::encode_params;

use crate::plugin::{Plugin, UserData};
use crate::prompt::{Category, Prompter};

/// Resolve one plugin slot, falling back to `prompter`. `None` means drop.
///
/// Only `plugin` itself is resolved; children of a composite are reached
/// through the composite's own `resolve`.
pub fn resolve_or_prompt(
    plugin: &dyn Plugin,
    category: Category,
    userdata: &UserData,
    prompter: &mut dyn Prompter,
) -> Option<String> {
    if let Some(value) = plugin.resolve(userdata).filter(|v| !v.is_empty()) {
        return Some(value);
    }
    tracing::debug!(%category, name = plugin.name(), "plugin yielded no value, prompting");
    let value = prompter
        .ask_for_value(category, plugin.name())
        .filter(|v| !v.is_empty());
    if value.is_none() {
        tracing::debug!(%category, name = plugin.name(), "dropping slot with empty value");
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{Combine, Variable};
    use crate::prompt::Scripted;

    #[test]
    fn resolved_value_skips_prompt() {
        let mut data = UserData::new();
        data.insert("user".to_string(), "alice".to_string());
        let mut prompt = Scripted::default();
        let v = resolve_or_prompt(&Variable::new("user"), Category::Value, &data, &mut prompt);
        assert_eq!(v.as_deref(), Some("alice"));
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn empty_value_prompts_with_category_and_name() {
        let mut data = UserData::new();
        data.insert("user".to_string(), String::new());
        let mut prompt = Scripted::default().answer("user", "typed");
        let v = resolve_or_prompt(&Variable::new("user"), Category::Header, &data, &mut prompt);
        assert_eq!(v.as_deref(), Some("typed"));
        assert_eq!(prompt.asked, vec![(Category::Header, "user".to_string())]);
    }

    #[test]
    fn empty_answer_drops() {
        let mut prompt = Scripted::default().answer("user", "");
        let v = resolve_or_prompt(
            &Variable::new("user"),
            Category::Value,
            &UserData::new(),
            &mut prompt,
        );
        assert!(v.is_none());
    }

    #[test]
    fn composite_prompts_for_itself_not_children() {
        let c = Combine::new("login").plugin(Variable::new("a")).plugin(Variable::new("b"));
        let mut prompt = Scripted::default();
        assert!(resolve_or_prompt(&c, Category::Value, &UserData::new(), &mut prompt).is_none());
        assert_eq!(prompt.asked, vec![(Category::Value, "login".to_string())]);
    }
}
