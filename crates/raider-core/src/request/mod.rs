//! A single HTTP call described declaratively.
//!
//! A `Request` holds a method, a URL and the header, cookie and body
//! containers, any slot of which may be a plugin. [`Request::list_inputs`]
//! reports the user data it needs; [`Request::send`] resolves everything and
//! hands the result to a transport.

mod error;
mod inputs;
mod method;
mod send;

use crate::plugin::{Input, Plugin};
use crate::structures::{BodyData, BodyGroup, CookieStore, DataStore, HeaderStore, Store};

pub use error::SendError;
pub use method::Method;
pub use send::{check_body_groups, BodyConflict};

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Input,
    pub headers: HeaderStore,
    pub cookies: CookieStore,
    pub data: BodyData,
}

impl Request {
    pub fn new(method: Method, url: impl Into<Input>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Store::headers(),
            cookies: Store::cookies(),
            data: BodyData::new(),
        }
    }

    pub fn get(url: impl Into<Input>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<Input>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<Input>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn patch(url: impl Into<Input>) -> Self {
        Self::new(Method::Patch, url)
    }

    pub fn head(url: impl Into<Input>) -> Self {
        Self::new(Method::Head, url)
    }

    pub fn delete(url: impl Into<Input>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn connect(url: impl Into<Input>) -> Self {
        Self::new(Method::Connect, url)
    }

    pub fn options(url: impl Into<Input>) -> Self {
        Self::new(Method::Options, url)
    }

    pub fn trace(url: impl Into<Input>) -> Self {
        Self::new(Method::Trace, url)
    }

    /// Any verb, e.g. `PROPFIND`.
    pub fn custom(method: &str, url: impl Into<Input>) -> Self {
        Self::new(Method::Custom(method.to_string()), url)
    }

    pub fn with_header<P: Plugin + 'static>(mut self, header: P) -> Self {
        self.headers.push(header);
        self
    }

    pub fn with_cookie<P: Plugin + 'static>(mut self, cookie: P) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Merge `headers` into the request's headers (incoming entries win).
    pub fn with_headers(mut self, headers: HeaderStore) -> Self {
        self.headers.merge(headers);
        self
    }

    pub fn with_cookies(mut self, cookies: CookieStore) -> Self {
        self.cookies.merge(cookies);
        self
    }

    /// Set (replace) one body group.
    pub fn with_group(mut self, group: BodyGroup, store: DataStore) -> Self {
        self.data.insert(group, store);
        self
    }

    pub fn params(self, store: DataStore) -> Self {
        self.with_group(BodyGroup::Params, store)
    }

    /// Form-encoded body.
    pub fn form(self, store: DataStore) -> Self {
        self.with_group(BodyGroup::Data, store)
    }

    pub fn json(self, store: DataStore) -> Self {
        self.with_group(BodyGroup::Json, store)
    }

    pub fn multipart(self, store: DataStore) -> Self {
        self.with_group(BodyGroup::Multipart, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{Header, Variable};

    #[test]
    fn constructors_bind_their_method() {
        assert_eq!(Request::get("u").method, Method::Get);
        assert_eq!(Request::post("u").method, Method::Post);
        assert_eq!(Request::put("u").method, Method::Put);
        assert_eq!(Request::patch("u").method, Method::Patch);
        assert_eq!(Request::head("u").method, Method::Head);
        assert_eq!(Request::delete("u").method, Method::Delete);
        assert_eq!(Request::connect("u").method, Method::Connect);
        assert_eq!(Request::options("u").method, Method::Options);
        assert_eq!(Request::trace("u").method, Method::Trace);
        assert_eq!(
            Request::custom("PROPFIND", "u").method,
            Method::Custom("PROPFIND".to_string())
        );
    }

    #[test]
    fn builder_fills_containers() {
        let r = Request::post(Variable::new("login_url"))
            .with_header(Header::new("Accept", "*/*"))
            .with_headers(Store::new().with_entry("X-Mixed", "1"))
            .json(DataStore::new().with("user", Variable::new("username")));
        assert!(r.url.as_plugin().is_some());
        assert!(r.headers.contains("accept"));
        assert!(r.headers.contains("x-mixed"));
        assert!(r.data.contains_key(&BodyGroup::Json));
        assert!(r.cookies.is_empty());
    }
}
