//! Reusable request factories.
//!
//! A [`Template`] is a [`Request`] meant to be called many times. Each call
//! deep-copies the template, applies [`Overrides`] and returns a new template;
//! the original is never touched, so instances never share plugins or
//! containers.

use std::ops::{Deref, DerefMut};

use crate::plugin::{Input, Plugin};
use crate::request::{Method, Request};
use crate::structures::{BodyData, BodyGroup, CookieStore, DataStore, HeaderStore, Store};

#[derive(Debug, Clone)]
pub struct Template {
    request: Request,
}

/// What a [`Template::call`] changes. Unset fields keep the template's value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    method: Option<Method>,
    url: Option<Input>,
    headers: Option<HeaderStore>,
    cookies: Option<CookieStore>,
    data: BodyData,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn url(mut self, url: impl Into<Input>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Headers merged over the template's; these win on collision.
    pub fn headers(mut self, headers: HeaderStore) -> Self {
        self.headers
            .get_or_insert_with(Store::headers)
            .merge(headers);
        self
    }

    pub fn cookies(mut self, cookies: CookieStore) -> Self {
        self.cookies
            .get_or_insert_with(Store::cookies)
            .merge(cookies);
        self
    }

    pub fn header<P: Plugin + 'static>(mut self, header: P) -> Self {
        self.headers.get_or_insert_with(Store::headers).push(header);
        self
    }

    pub fn cookie<P: Plugin + 'static>(mut self, cookie: P) -> Self {
        self.cookies.get_or_insert_with(Store::cookies).push(cookie);
        self
    }

    /// Replace one body group of the template as a whole.
    pub fn group(mut self, group: BodyGroup, store: DataStore) -> Self {
        self.data.insert(group, store);
        self
    }
}

impl Template {
    /// A template with an empty literal URL; set it per call or via `request_mut`.
    pub fn new(method: Method) -> Self {
        Self {
            request: Request::new(method, ""),
        }
    }

    /// A fresh template derived from this one.
    pub fn call(&self, overrides: Overrides) -> Template {
        let mut request = self.request.clone();
        let Overrides {
            method,
            url,
            headers,
            cookies,
            data,
        } = overrides;

        if let Some(method) = method {
            request.method = method;
        }
        if let Some(url) = url {
            request.url = url;
        }
        if let Some(cookies) = cookies {
            request.cookies.merge(cookies);
        }
        if let Some(headers) = headers {
            request.headers.merge(headers);
        }
        request.data.extend(data);

        Template { request }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn into_request(self) -> Request {
        self.request
    }
}

impl From<Request> for Template {
    fn from(request: Request) -> Self {
        Self { request }
    }
}

impl Deref for Template {
    type Target = Request;

    fn deref(&self) -> &Request {
        &self.request
    }
}

impl DerefMut for Template {
    fn deref_mut(&mut self) -> &mut Request {
        &mut self.request
    }
}
