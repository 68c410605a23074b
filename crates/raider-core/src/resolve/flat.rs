//! Header and cookie resolution (flat containers).

use std::collections::BTreeMap;

use crate::plugin::{Input, UserData};
use crate::prompt::{Category, Prompter};
use crate::structures::{CookieStore, HeaderStore, Store};

use super::resolve_or_prompt;

/// Resolve cookies into a name → value map. Unresolved cookies are dropped.
pub fn process_cookies(
    raw: &CookieStore,
    userdata: &UserData,
    prompter: &mut dyn Prompter,
) -> BTreeMap<String, String> {
    process_flat(raw, Category::Cookie, userdata, prompter)
}

/// Resolve headers into a name → value map and set `user-agent`.
///
/// The configured user agent replaces any `user-agent` entry of the store.
pub fn process_headers(
    raw: &HeaderStore,
    userdata: &UserData,
    user_agent: &str,
    prompter: &mut dyn Prompter,
) -> BTreeMap<String, String> {
    let mut headers = process_flat(raw, Category::Header, userdata, prompter);
    headers.insert("user-agent".to_string(), user_agent.to_string());
    headers
}

fn process_flat(
    raw: &Store,
    category: Category,
    userdata: &UserData,
    prompter: &mut dyn Prompter,
) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (key, input) in raw.iter() {
        let plugin = match input {
            Input::Literal(value) => {
                out.insert(key.to_string(), value.clone());
                continue;
            }
            Input::Plugin(p) => p.as_ref(),
        };

        let Some(value) = resolve_or_prompt(plugin, category, userdata, prompter) else {
            continue;
        };

        let name = if plugin.name_known_in_advance() {
            key.to_string()
        } else {
            // Placeholder key; the real name exists only now.
            let resolved = plugin
                .resolved_name(userdata)
                .filter(|n| !n.is_empty())
                .or_else(|| {
                    prompter
                        .ask_for_value(Category::Key, plugin.name())
                        .filter(|n| !n.is_empty())
                });
            match resolved {
                Some(n) => raw.normalize(&n),
                None => {
                    tracing::debug!(%category, placeholder = key, "dropping entry without a name");
                    continue;
                }
            }
        };
        out.insert(name, value);
    }
    out
}
