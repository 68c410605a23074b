//! `raider inputs` – list the user data a request file needs.

use anyhow::Result;
use raider_core::plugin::Plugin;
use std::path::Path;

use crate::cli::request_file;

pub fn run_inputs(path: &Path) -> Result<()> {
    let request = request_file::load(path)?;
    let inputs = request.list_inputs();
    if inputs.is_empty() {
        println!("No inputs: every value is literal.");
        return Ok(());
    }
    println!("{:<24} {}", "NAME", "KIND");
    for (name, plugin) in inputs {
        println!("{:<24} {}", name, kind(plugin));
    }
    Ok(())
}

pub(crate) fn kind(plugin: &dyn Plugin) -> String {
    if plugin.depends_on_others() {
        let children: Vec<&str> = plugin.children().iter().map(|c| c.name()).collect();
        format!("composite ({})", children.join(", "))
    } else if !plugin.name_known_in_advance() {
        "dynamic name".to_string()
    } else {
        "value".to_string()
    }
}
