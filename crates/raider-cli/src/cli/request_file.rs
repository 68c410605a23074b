//! Request description files (TOML).
//!
//! ```toml
//! method = "POST"
//! url = { pattern = "https://{host}/login", vars = ["host"] }
//!
//! [headers]
//! Accept = "application/json"
//! Authorization = { bearer = "access_token" }
//!
//! [cookies]
//! session = { var = "session_id" }
//!
//! [data.json]
//! username = { var = "username" }
//! "$otp_field" = { var = "otp" }
//! device = { name = "phone", os = { var = "os" } }
//! ```
//!
//! A string is a literal, `{ var = "k" }` reads user data key `k`,
//! `{ combine = [...] }` concatenates strings and `{ var }` tables,
//! `{ bearer = "k" }` sends `Bearer <k>` under the declared header name, and
//! any other table is a nested mapping. A body key written `$k` is taken from
//! user data key `k`.

use anyhow::{anyhow, bail, Context, Result};
use raider_core::plugin::{Combine, Cookie, Header, Input, Plugin, Url, Variable};
use raider_core::request::{Method, Request};
use raider_core::structures::{BodyGroup, DataStore, Key, Node};
use serde::Deserialize;
use std::convert::Infallible;
use std::fs;
use std::path::Path;
use toml::{Table, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RequestFile {
    #[serde(default = "default_method")]
    method: String,
    url: UrlSpec,
    #[serde(default)]
    headers: Table,
    #[serde(default)]
    cookies: Table,
    #[serde(default)]
    data: Table,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UrlSpec {
    Literal(String),
    Pattern {
        pattern: String,
        #[serde(default)]
        vars: Vec<String>,
    },
    Var {
        var: String,
    },
}

fn default_method() -> String {
    "GET".to_string()
}

pub fn load(path: &Path) -> Result<Request> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read request file {}", path.display()))?;
    parse(&text).with_context(|| format!("parse request file {}", path.display()))
}

pub fn parse(text: &str) -> Result<Request> {
    let file: RequestFile = toml::from_str(text)?;
    let method: Method = file
        .method
        .parse()
        .unwrap_or_else(|never: Infallible| match never {});

    let url: Input = match file.url {
        UrlSpec::Literal(s) => s.into(),
        UrlSpec::Var { var } => Variable::new(var).into(),
        UrlSpec::Pattern { pattern, vars } => vars
            .into_iter()
            .fold(Url::new(pattern), |url, v| url.with(Variable::new(v)))
            .into(),
    };
    build(Request::new(method, url), file.headers, file.cookies, file.data)
}

fn build(mut request: Request, headers: Table, cookies: Table, data: Table) -> Result<Request> {
    for (name, value) in headers {
        match value {
            Value::String(s) => {
                request.headers.insert(&name, s);
            }
            Value::Table(t) if t.contains_key("bearer") => {
                let var = string_field(&t, "bearer")?;
                request
                    .headers
                    .push(Header::formatted(&name, Variable::new(var), "Bearer {}"));
            }
            Value::Table(t) => {
                let parent = producer(&name, &t)?;
                request.headers.push(Header::from_plugin(&name, parent));
            }
            other => bail!("header {name:?}: unsupported value {other}"),
        }
    }

    for (name, value) in cookies {
        match value {
            Value::String(s) => {
                request.cookies.insert(&name, s);
            }
            Value::Table(t) => {
                let parent = producer(&name, &t)?;
                request.cookies.push(Cookie::from_plugin(name.as_str(), parent));
            }
            other => bail!("cookie {name:?}: unsupported value {other}"),
        }
    }

    for (group, value) in data {
        let group: BodyGroup = group.parse().map_err(|e: String| anyhow!(e))?;
        let Value::Table(table) = value else {
            bail!("[data.{group}] must be a table");
        };
        request.data.insert(group, data_store(table)?);
    }

    Ok(request)
}

/// `{ var = ".." }` or `{ combine = [..] }`.
fn producer(name: &str, table: &Table) -> Result<Box<dyn Plugin>> {
    if table.contains_key("var") {
        return Ok(Box::new(Variable::new(string_field(table, "var")?)));
    }
    if let Some(parts) = table.get("combine") {
        let Value::Array(parts) = parts else {
            bail!("{name:?}: combine must be an array");
        };
        let mut combine = Combine::new(name);
        for part in parts {
            combine = match part {
                Value::String(s) => combine.literal(s.as_str()),
                Value::Table(t) => combine.boxed(producer(name, t)?),
                other => bail!("{name:?}: unsupported combine part {other}"),
            };
        }
        return Ok(Box::new(combine));
    }
    bail!("{name:?}: expected {{ var = .. }} or {{ combine = [..] }}")
}

fn is_producer(table: &Table) -> bool {
    table.len() == 1 && (table.contains_key("var") || table.contains_key("combine"))
}

fn data_store(table: Table) -> Result<DataStore> {
    let mut store = DataStore::new();
    for (name, value) in table {
        let key = match name.strip_prefix('$') {
            Some(var) if !var.is_empty() => Key::from(Variable::new(var)),
            _ => Key::from(name.as_str()),
        };
        let node: Node = match value {
            Value::Table(t) if is_producer(&t) => producer(key.name(), &t)?.into(),
            Value::Table(t) => data_store(t)?.into(),
            other => Node::Literal(serde_json::to_value(&other)?),
        };
        store.insert(key, node);
    }
    Ok(store)
}

fn string_field(table: &Table, field: &str) -> Result<String> {
    match table.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => bail!("{field} must be a string"),
    }
}
