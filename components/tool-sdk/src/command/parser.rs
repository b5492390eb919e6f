//! Conversion of cURL commands into structured request templates.
//!
//! Unlike [`validation`](crate::command::validation), which is a lenient
//! pre-flight heuristic, the parser tokenizes shell-style and rejects
//! commands it cannot faithfully convert. A command can therefore pass
//! validation and still fail here.

use crate::error::ParseError;
use crate::types::{FormField, FormValue, HttpMethod, RequestBody, RequestTemplate};
use std::collections::BTreeMap;
use tracing::warn;

/// Flags accepted and discarded during conversion.
const IGNORED_FLAGS: &[&str] = &["--location", "--include", "--compressed", "--silent"];

/// Parses a command into a request template.
///
/// Walks the token stream once: recognized options consume their value,
/// unrecognized tokens are skipped, and the first `http`-prefixed token (or
/// the value of `--url`) becomes the target URL. The method defaults to
/// `GET`. If the command declares a JSON content type, the raw body is
/// re-parsed as JSON; a body that fails to parse stays raw.
///
/// # Errors
///
/// Returns an error if the command is empty, cannot be tokenized, names an
/// unsupported method, supplies a malformed header, leaves an option
/// without its value, or never specifies a URL.
pub fn parse(command: &str) -> Result<RequestTemplate, ParseError> {
    if command.trim().is_empty() {
        return Err(ParseError::EmptyCommand);
    }
    let tokens = shlex::split(command).ok_or(ParseError::UnbalancedQuoting)?;

    let mut method = HttpMethod::Get;
    let mut url: Option<String> = None;
    let mut headers = BTreeMap::new();
    let mut data: Option<String> = None;
    let mut form: Vec<FormField> = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "curl" => i += 1,
            flag if IGNORED_FLAGS.contains(&flag) => i += 1,
            "-X" | "--request" => {
                method = value_of(&tokens, i, token)?.parse()?;
                i += 2;
            }
            "--url" => {
                url = Some(value_of(&tokens, i, token)?.to_string());
                i += 2;
            }
            "-H" | "--header" => {
                let raw = value_of(&tokens, i, token)?;
                let (name, value) =
                    raw.split_once(':')
                        .ok_or_else(|| ParseError::MalformedHeader {
                            header: raw.to_string(),
                        })?;
                headers.insert(name.trim().to_string(), value.trim().to_string());
                i += 2;
            }
            "-d" | "--data" | "--data-raw" | "--data-binary" => {
                data = Some(value_of(&tokens, i, token)?.to_string());
                i += 2;
            }
            "-F" | "--form" => {
                let raw = value_of(&tokens, i, token)?;
                if let Some((name, value)) = raw.split_once('=') {
                    form.push(FormField {
                        name: name.to_string(),
                        value: value.strip_prefix('@').map_or_else(
                            || FormValue::Text(value.to_string()),
                            |path| FormValue::File(path.to_string()),
                        ),
                    });
                }
                i += 2;
            }
            other if other.starts_with("http") => {
                url = Some(other.to_string());
                i += 1;
            }
            _ => i += 1,
        }
    }

    let url = url.ok_or(ParseError::MissingUrl)?;
    let body = assemble_body(&headers, data, form);

    Ok(RequestTemplate {
        method,
        url,
        headers,
        body,
    })
}

fn value_of<'a>(tokens: &'a [String], index: usize, option: &str) -> Result<&'a str, ParseError> {
    tokens
        .get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue {
            option: option.to_string(),
        })
}

fn assemble_body(
    headers: &BTreeMap<String, String>,
    data: Option<String>,
    form: Vec<FormField>,
) -> Option<RequestBody> {
    if !form.is_empty() {
        return Some(RequestBody::Form(form));
    }
    let raw = data?;
    if declares_json(headers) {
        match serde_json::from_str(&raw) {
            Ok(value) => return Some(RequestBody::Json(value)),
            Err(error) => {
                warn!(%error, "request body is not valid JSON, keeping raw text");
            }
        }
    }
    Some(RequestBody::Raw(raw))
}

fn declares_json(headers: &BTreeMap<String, String>) -> bool {
    headers.iter().any(|(name, value)| {
        name.eq_ignore_ascii_case("content-type") && value.trim_start().starts_with("application/json")
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let template = parse("curl https://api.example.com/data").unwrap();
        assert_eq!(template.method, HttpMethod::Get);
        assert_eq!(template.url, "https://api.example.com/data");
        assert!(template.headers.is_empty());
        assert!(template.body.is_none());
    }

    #[test]
    fn test_parse_method_and_header() {
        let template =
            parse("curl -X POST https://api.example.com/users -H 'Authorization: Bearer token'")
                .unwrap();
        assert_eq!(template.method, HttpMethod::Post);
        assert_eq!(
            template.headers.get("Authorization").map(String::as_str),
            Some("Bearer token")
        );
    }

    #[test]
    fn test_parse_long_forms() {
        let template = parse(
            "curl --request PUT --url https://api.example.com/items/1 --header 'X-Env: prod'",
        )
        .unwrap();
        assert_eq!(template.method, HttpMethod::Put);
        assert_eq!(template.url, "https://api.example.com/items/1");
        assert_eq!(template.headers.get("X-Env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_parse_header_value_keeps_colons() {
        let template =
            parse("curl https://api.example.com -H 'X-Time: 12:30:45'").unwrap();
        assert_eq!(
            template.headers.get("X-Time").map(String::as_str),
            Some("12:30:45")
        );
    }

    #[test]
    fn test_parse_json_body_is_promoted() {
        let template = parse(
            r#"curl -X POST https://api.example.com/users -H 'Content-Type: application/json' -d '{"name":"test"}'"#,
        )
        .unwrap();
        assert_eq!(
            template.body,
            Some(RequestBody::Json(serde_json::json!({"name": "test"})))
        );
    }

    #[test]
    fn test_parse_invalid_json_body_stays_raw() {
        let template = parse(
            "curl -X POST https://api.example.com/users -H 'Content-Type: application/json' -d 'not json'",
        )
        .unwrap();
        assert_eq!(template.body, Some(RequestBody::Raw("not json".to_string())));
    }

    #[test]
    fn test_parse_body_without_json_header_stays_raw() {
        let template =
            parse(r#"curl -X POST https://api.example.com/users -d '{"name":"test"}'"#).unwrap();
        assert_eq!(
            template.body,
            Some(RequestBody::Raw(r#"{"name":"test"}"#.to_string()))
        );
    }

    #[test]
    fn test_parse_form_fields() {
        let template = parse(
            "curl -X POST https://api.example.com/upload -F name=report -F file=@/tmp/report.pdf",
        )
        .unwrap();
        let Some(RequestBody::Form(fields)) = template.body else {
            panic!("expected a form body");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "name");
        assert_eq!(fields[0].value, FormValue::Text("report".to_string()));
        assert_eq!(fields[1].name, "file");
        assert_eq!(fields[1].value, FormValue::File("/tmp/report.pdf".to_string()));
    }

    #[test]
    fn test_parse_ignored_flags_are_skipped() {
        let template =
            parse("curl --location --silent --compressed https://api.example.com/data").unwrap();
        assert_eq!(template.url, "https://api.example.com/data");
        assert!(template.headers.is_empty());
    }

    #[test]
    fn test_parse_unknown_tokens_are_skipped() {
        let template = parse("curl --retry 3 https://api.example.com/data").unwrap();
        assert_eq!(template.url, "https://api.example.com/data");
    }

    #[test]
    fn test_parse_method_is_uppercased() {
        let template = parse("curl -X post https://api.example.com/users").unwrap();
        assert_eq!(template.method, HttpMethod::Post);
    }

    #[test]
    fn test_parse_empty_command() {
        assert_eq!(parse("   "), Err(ParseError::EmptyCommand));
    }

    #[test]
    fn test_parse_unbalanced_quote() {
        assert_eq!(
            parse("curl 'https://api.example.com/data"),
            Err(ParseError::UnbalancedQuoting)
        );
    }

    #[test]
    fn test_parse_option_missing_value() {
        assert_eq!(
            parse("curl https://api.example.com/data -X"),
            Err(ParseError::MissingValue {
                option: "-X".to_string()
            })
        );
    }

    #[test]
    fn test_parse_malformed_header() {
        assert_eq!(
            parse("curl https://api.example.com/data -H NoColonHere"),
            Err(ParseError::MalformedHeader {
                header: "NoColonHere".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unsupported_method() {
        assert_eq!(
            parse("curl -X BREW https://api.example.com/coffee"),
            Err(ParseError::UnsupportedMethod {
                method: "BREW".to_string()
            })
        );
    }

    #[test]
    fn test_parse_missing_url() {
        assert_eq!(parse("curl -v -s"), Err(ParseError::MissingUrl));
    }
}
