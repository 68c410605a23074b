//! The HTTP transport boundary.
//!
//! `Request::send` hands a fully resolved [`PreparedRequest`] to a
//! [`Transport`] and returns its [`Response`] untouched. [`CurlTransport`]
//! is the libcurl-backed implementation; tests plug in their own.

mod classify;
mod error;
mod libcurl;
mod parse;

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::request::Method;

pub use classify::is_connection_failure;
pub use error::TransportError;
pub use libcurl::CurlTransport;

/// Everything the transport needs; no plugins left.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub cookies: BTreeMap<String, String>,
    /// Proxy for all schemes, when enabled.
    pub proxy: Option<String>,
    pub verify: bool,
    pub allow_redirects: bool,
    /// Already URL-encoded query string (no leading `?`).
    pub params: Option<String>,
    pub data: Option<Map<String, Value>>,
    pub json: Option<Map<String, Value>>,
    pub multipart: Option<Map<String, Value>>,
}

impl PreparedRequest {
    /// URL with `params` appended.
    pub fn full_url(&self) -> String {
        match self.params.as_deref() {
            None | Some("") => self.url.clone(),
            Some(q) if self.url.contains('?') => format!("{}&{}", self.url, q),
            Some(q) => format!("{}?{}", self.url, q),
        }
    }
}

/// Response as received; redirects are not followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u32,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// First header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Executes a prepared request.
pub trait Transport {
    fn execute(&self, request: &PreparedRequest) -> Result<Response, TransportError>;
}
