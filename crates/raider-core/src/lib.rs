//! Parameterized HTTP requests for authentication-flow testing.
//!
//! Any input of a [`Request`] (URL, header, cookie, body key or value) is
//! either a literal or a [`Plugin`] resolved against the active user's data
//! right before sending. Values that cannot be resolved are asked for through
//! a [`Prompter`] and dropped when still empty.

pub mod config;
pub mod logging;

pub mod plugin;
pub mod prompt;
pub mod request;
pub mod resolve;
pub mod structures;
pub mod template;
pub mod transport;

pub use config::{RunConfig, User};
pub use plugin::{Combine, Cookie, Header, Input, Plugin, Url, UserData, Variable};
pub use prompt::{Category, NoPrompt, Prompter, TerminalPrompt};
pub use request::{BodyConflict, Method, Request, SendError};
pub use structures::{BodyGroup, CookieStore, DataStore, HeaderStore, Key, Node, Store};
pub use template::{Overrides, Template};
pub use transport::{CurlTransport, PreparedRequest, Response, Transport, TransportError};
