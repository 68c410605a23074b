//! Dispatch: resolve every slot, validate body groups, call the transport.

use std::fmt;

use crate::config::RunConfig;
use crate::plugin::{Input, UserData};
use crate::prompt::{Category, Prompter};
use crate::resolve::{encode_params, process_cookies, process_data, process_headers, resolve_or_prompt};
use crate::structures::{BodyData, BodyGroup};
use crate::transport::{PreparedRequest, Response, Transport};

use super::{Method, Request, SendError};

/// Body groups that do not fit the method. Reported, never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyConflict {
    /// GET only carries `params`; these groups are ignored by the server.
    IgnoredOnGet(Vec<BodyGroup>),
    /// More than one body encoding on a non-GET request.
    Multiple { method: Method, groups: Vec<BodyGroup> },
}

impl fmt::Display for BodyConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyConflict::IgnoredOnGet(groups) => write!(
                f,
                "GET requests can only contain :params. Ignoring :{}",
                join(groups)
            ),
            BodyConflict::Multiple { method, groups } => write!(
                f,
                "{} requests cannot contain :{} at the same time. Undefined behaviour!",
                method,
                join(groups)
            ),
        }
    }
}

fn join(groups: &[BodyGroup]) -> String {
    groups
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", :")
}

/// Check which body groups are populated for `method`.
pub fn check_body_groups(method: &Method, data: &BodyData) -> Option<BodyConflict> {
    let present: Vec<BodyGroup> = BodyGroup::BODY
        .into_iter()
        .filter(|g| data.contains_key(g))
        .collect();
    match method {
        Method::Get if !present.is_empty() => Some(BodyConflict::IgnoredOnGet(present)),
        Method::Get => None,
        _ if present.len() > 1 => Some(BodyConflict::Multiple {
            method: method.clone(),
            groups: present,
        }),
        _ => None,
    }
}

impl Request {
    /// Resolve with the active user's data and send through `transport`.
    ///
    /// A plugin URL is replaced by its resolved value on `self`, so a
    /// `Request` must not be shared between logical calls. The response is
    /// returned as received; redirects are never followed.
    pub fn send(
        &mut self,
        config: &RunConfig,
        transport: &dyn Transport,
        prompter: &mut dyn Prompter,
    ) -> Result<Response, SendError> {
        let userdata = config.active_user_data();
        let prepared = self.prepare(config, &userdata, prompter);

        transport.execute(&prepared).map_err(|e| {
            let err = SendError::from_transport(&prepared.url, e);
            if err.is_connection() {
                tracing::error!(url = %prepared.url, "cannot establish connection: {}", err);
            }
            err
        })
    }

    /// Everything `send` does short of calling the transport.
    pub fn prepare(
        &mut self,
        config: &RunConfig,
        userdata: &UserData,
        prompter: &mut dyn Prompter,
    ) -> PreparedRequest {
        if !config.verify {
            tracing::debug!("TLS certificate verification disabled");
        }
        let proxy = config.proxy_address().map(String::from);

        if let Input::Plugin(plugin) = &self.url {
            let url = resolve_or_prompt(plugin.as_ref(), Category::Url, userdata, prompter)
                .unwrap_or_default();
            self.url = Input::Literal(url);
        }
        let url = self.url.as_literal().unwrap_or_default().to_string();

        let cookies = process_cookies(&self.cookies, userdata, prompter);
        let headers = process_headers(&self.headers, userdata, &config.user_agent, prompter);
        let mut body = process_data(&self.data, userdata, prompter);

        let params = body
            .remove(&BodyGroup::Params)
            .map(|p| encode_params(&p));

        if let Some(conflict) = check_body_groups(&self.method, &self.data) {
            tracing::warn!("{}", conflict);
        }

        let prepared = PreparedRequest {
            method: self.method.clone(),
            url,
            headers,
            cookies,
            proxy,
            verify: config.verify,
            allow_redirects: false,
            params,
            data: body.remove(&BodyGroup::Data),
            json: body.remove(&BodyGroup::Json),
            multipart: body.remove(&BodyGroup::Multipart),
        };

        tracing::debug!("sending HTTP request: {} {}", prepared.method, prepared.url);
        tracing::debug!("cookies: {:?}", prepared.cookies);
        tracing::debug!("headers: {:?}", prepared.headers);
        tracing::debug!("params: {:?}", prepared.params);
        tracing::debug!("data: {:?}", prepared.data);
        tracing::debug!("json: {:?}", prepared.json);
        tracing::debug!("multipart: {:?}", prepared.multipart);

        prepared
    }
}
