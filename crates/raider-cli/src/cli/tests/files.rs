use crate::cli::commands::kind;
use crate::cli::request_file;
use raider_core::config::RunConfig;
use raider_core::plugin::UserData;
use raider_core::prompt::NoPrompt;
use raider_core::request::Method;
use raider_core::structures::BodyGroup;
use serde_json::json;
use std::fs;

const LOGIN: &str = r#"
method = "POST"
url = { pattern = "https://{host}/login", vars = ["host"] }

[headers]
Accept = "application/json"
Authorization = { bearer = "access_token" }
X-Device = { combine = ["dev-", { var = "device_id" }] }

[cookies]
session = { var = "session_id" }
lang = "en"

[data.json]
username = { var = "username" }
"$otp_field" = { var = "otp" }
remember = true
device = { name = "phone", os = { var = "os" } }
"#;

fn userdata() -> UserData {
    [
        ("host", "example.com"),
        ("access_token", "t0k"),
        ("device_id", "42"),
        ("session_id", "s1"),
        ("username", "alice"),
        ("otp_field", "code"),
        ("otp", "123456"),
        ("os", "linux"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn parses_method_url_and_containers() {
    let req = request_file::parse(LOGIN).unwrap();
    assert_eq!(req.method, Method::Post);
    assert!(req.url.as_plugin().is_some());
    assert_eq!(req.headers.len(), 3);
    assert_eq!(req.cookies.len(), 2);
    assert!(req.data.contains_key(&BodyGroup::Json));
}

/// Composites list their direct children only: `device_id` sits under the
/// `X-Device` combine and is not reported.
#[test]
fn lists_every_input() {
    let req = request_file::parse(LOGIN).unwrap();
    let inputs = req.list_inputs();
    let names: Vec<&str> = inputs.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        [
            "X-Device",
            "access_token",
            "authorization",
            "host",
            "os",
            "otp",
            "otp_field",
            "session",
            "session_id",
            "url",
            "username",
            "x-device",
        ]
    );
    assert_eq!(kind(inputs["url"]), "composite (host)");
    assert_eq!(kind(inputs["x-device"]), "composite (X-Device)");
    assert_eq!(kind(inputs["username"]), "value");
}

#[test]
fn resolves_against_user_data() {
    let mut req = request_file::parse(LOGIN).unwrap();
    let prepared = req.prepare(&RunConfig::default(), &userdata(), &mut NoPrompt);
    assert_eq!(prepared.url, "https://example.com/login");
    assert_eq!(
        prepared.headers.get("authorization").map(String::as_str),
        Some("Bearer t0k")
    );
    assert_eq!(
        prepared.headers.get("x-device").map(String::as_str),
        Some("dev-42")
    );
    assert_eq!(prepared.cookies.get("session").map(String::as_str), Some("s1"));
    assert_eq!(prepared.cookies.get("lang").map(String::as_str), Some("en"));
    assert_eq!(
        prepared.json,
        json!({
            "username": "alice",
            "code": "123456",
            "remember": true,
            "device": {"name": "phone", "os": "linux"}
        })
        .as_object()
        .cloned()
    );
}

#[test]
fn bearer_keeps_the_declared_header_name() {
    let mut req =
        request_file::parse("url = \"u\"\n[headers]\nX-Api-Key = { bearer = \"access_token\" }\n").unwrap();
    let prepared = req.prepare(&RunConfig::default(), &userdata(), &mut NoPrompt);
    assert_eq!(
        prepared.headers.get("x-api-key").map(String::as_str),
        Some("Bearer t0k")
    );
    assert!(!prepared.headers.contains_key("authorization"));
}

#[test]
fn method_defaults_to_get_and_url_may_be_a_variable() {
    let req = request_file::parse("url = { var = \"target\" }\n[data.params]\nq = \"x\"\n").unwrap();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url.as_plugin().map(|p| p.name()), Some("target"));
    assert!(req.data.contains_key(&BodyGroup::Params));
}

#[test]
fn rejects_unknown_group_and_bad_values() {
    assert!(request_file::parse("url = \"u\"\n[data.xml]\na = \"1\"\n").is_err());
    assert!(request_file::parse("url = \"u\"\n[headers]\nX-N = 1\n").is_err());
    assert!(request_file::parse("url = \"u\"\n[cookies]\nc = { nope = \"x\" }\n").is_err());
    assert!(request_file::parse("url = \"u\"\nextra = 1\n").is_err());
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("req.toml");
    fs::write(&path, "method = \"delete\"\nurl = \"https://example.com/item/1\"\n").unwrap();
    let req = request_file::load(&path).unwrap();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.url.as_literal(), Some("https://example.com/item/1"));

    let missing = request_file::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(missing.to_string().starts_with("read request file"));
}
