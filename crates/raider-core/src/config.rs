use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::plugin::UserData;

/// One user's data (`[users.<name>]` in config.toml); plugins resolve against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub data: BTreeMap<String, String>,
}

impl User {
    pub fn to_mapping(&self) -> UserData {
        self.data.clone()
    }
}

/// Run configuration loaded from `~/.config/raider/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Verify TLS certificates.
    #[serde(default = "default_verify")]
    pub verify: bool,
    /// Route requests through `proxy`.
    #[serde(default)]
    pub use_proxy: bool,
    /// Proxy address, e.g. `http://127.0.0.1:8080`. Ignored unless `use_proxy`.
    #[serde(default)]
    pub proxy: Option<String>,
    /// Sent as `user-agent` on every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Key into `users`; None sends with empty user data.
    #[serde(default)]
    pub active_user: Option<String>,
    #[serde(default)]
    pub users: BTreeMap<String, User>,
}

fn default_verify() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!("raider/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verify: default_verify(),
            use_proxy: false,
            proxy: None,
            user_agent: default_user_agent(),
            active_user: None,
            users: BTreeMap::new(),
        }
    }
}

impl RunConfig {
    /// The proxy to use, only when enabled.
    pub fn proxy_address(&self) -> Option<&str> {
        if self.use_proxy {
            self.proxy.as_deref()
        } else {
            None
        }
    }

    pub fn active_user(&self) -> Option<&User> {
        self.active_user
            .as_deref()
            .and_then(|name| self.users.get(name))
    }

    /// The active user's mapping, or an empty one.
    pub fn active_user_data(&self) -> UserData {
        self.active_user()
            .map(User::to_mapping)
            .unwrap_or_default()
    }

    /// Select `name` as the active user; errors when it is not configured.
    pub fn with_active_user(mut self, name: &str) -> Result<Self> {
        if !self.users.contains_key(name) {
            anyhow::bail!("user {name:?} is not defined in the configuration");
        }
        self.active_user = Some(name.to_string());
        Ok(self)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("raider")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RunConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RunConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<RunConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: RunConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    if let Some(name) = &cfg.active_user {
        if !cfg.users.contains_key(name) {
            tracing::warn!("active user {:?} has no [users.{}] table", name, name);
        }
    }
    Ok(cfg)
}
