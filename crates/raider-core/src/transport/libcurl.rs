//! libcurl transport (via the `curl` crate).
//!
//! One `Easy` handle per request, redirects never followed unless asked.
//! When several body groups are present only one is sent:
//! multipart, then data, then json.

use std::str;
use std::time::Duration;

use curl::easy::{Easy, Form, List};
use serde_json::Value;
use url::form_urlencoded;

use crate::request::Method;

use super::parse::parse_headers;
use super::{PreparedRequest, Response, Transport, TransportError};

/// Blocking libcurl transport.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
        }
    }
}

enum Body {
    None,
    Raw {
        bytes: Vec<u8>,
        content_type: &'static str,
    },
    Multipart(Form),
}

impl Transport for CurlTransport {
    fn execute(&self, request: &PreparedRequest) -> Result<Response, TransportError> {
        let mut easy = Easy::new();
        easy.url(&request.full_url())?;
        easy.follow_location(request.allow_redirects)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.ssl_verify_peer(request.verify)?;
        easy.ssl_verify_host(request.verify)?;
        if let Some(proxy) = &request.proxy {
            easy.proxy(proxy)?;
        }

        let mut list = List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }

        let body = encode_body(request)?;
        let has_body = !matches!(body, Body::None);
        match body {
            Body::None => {}
            Body::Raw {
                bytes,
                content_type,
            } => {
                if !request.headers.contains_key("content-type") {
                    list.append(&format!("content-type: {content_type}"))?;
                }
                easy.post_fields_copy(&bytes)?;
            }
            Body::Multipart(form) => easy.httppost(form)?,
        }
        easy.http_headers(list)?;

        if !request.cookies.is_empty() {
            easy.cookie(&cookie_header(request))?;
        }

        match &request.method {
            Method::Head => easy.nobody(true)?,
            Method::Get if !has_body => easy.get(true)?,
            other => easy.custom_request(other.as_str())?,
        }

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(Response {
            status,
            headers: parse_headers(&header_lines),
            body,
        })
    }
}

fn encode_body(request: &PreparedRequest) -> Result<Body, TransportError> {
    if let Some(parts) = &request.multipart {
        let mut form = Form::new();
        for (name, value) in parts {
            form.part(name).contents(text(value).as_bytes()).add()?;
        }
        return Ok(Body::Multipart(form));
    }
    if let Some(fields) = &request.data {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields.iter().map(|(k, v)| (k.as_str(), text(v))))
            .finish();
        return Ok(Body::Raw {
            bytes: encoded.into_bytes(),
            content_type: "application/x-www-form-urlencoded",
        });
    }
    if let Some(json) = &request.json {
        let bytes = serde_json::to_vec(&Value::Object(json.clone()))
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        return Ok(Body::Raw {
            bytes,
            content_type: "application/json",
        });
    }
    Ok(Body::None)
}

/// Form and multipart values are strings; anything else goes as JSON text.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cookie_header(request: &PreparedRequest) -> String {
    request
        .cookies
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("; ")
}
