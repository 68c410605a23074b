//! CLI command handlers, one per file.

mod inputs;
mod send;

pub use inputs::run_inputs;
pub use send::{run_send, SendOptions};

#[cfg(test)]
pub(crate) use inputs::kind;
#[cfg(test)]
pub(crate) use send::load_config;
