//! `raider send` – resolve a request file and send it.

use anyhow::Result;
use raider_core::config::{self, RunConfig};
use raider_core::prompt::{NoPrompt, TerminalPrompt};
use raider_core::transport::{CurlTransport, Response};
use std::path::{Path, PathBuf};

use crate::cli::request_file;

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub user: Option<String>,
    pub config: Option<PathBuf>,
    pub no_prompt: bool,
    pub insecure: bool,
}

pub fn run_send(path: &Path, opts: &SendOptions) -> Result<()> {
    let cfg = load_config(opts)?;
    tracing::debug!("loaded config: {:?}", cfg);
    let mut request = request_file::load(path)?;

    let transport = CurlTransport::default();
    let response = if opts.no_prompt {
        request.send(&cfg, &transport, &mut NoPrompt)?
    } else {
        request.send(&cfg, &transport, &mut TerminalPrompt::stdio())?
    };
    print_response(&response);
    Ok(())
}

pub(crate) fn load_config(opts: &SendOptions) -> Result<RunConfig> {
    let mut cfg = match &opts.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init()?,
    };
    if let Some(user) = &opts.user {
        cfg = cfg.with_active_user(user)?;
    }
    if opts.insecure {
        cfg.verify = false;
    }
    Ok(cfg)
}

fn print_response(response: &Response) {
    println!("HTTP {}", response.status);
    for (name, value) in &response.headers {
        println!("{name}: {value}");
    }
    println!();
    println!("{}", response.text());
}
