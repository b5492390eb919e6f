//! Heuristic validation of candidate cURL commands.
//!
//! The validator decides whether a free-form string plausibly invokes a
//! command-line HTTP client. It is a predicate with an explanation, not a
//! shell grammar parser: matching is substring- and pattern-based, so
//! commands using tabs between options, line continuations, or compact
//! option syntax such as `-XPOST` are not recognized. Callers treat the
//! verdict as guidance, not as proof the command would execute.

use crate::command::catalogue;
use crate::types::{RejectReason, Verdict};
use regex::Regex;
use std::sync::LazyLock;

/// Standard URLs without quotes.
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)https?://[^\s"']+"#));

/// URLs enclosed in single or double quotes.
static QUOTED_URL: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)["']https?://[^"']+["']"#));

/// Multi-label domain names without a protocol, preceded by whitespace.
static BARE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)\s[-\w]+\.\w+\.\w+[^\s"']*"#));

/// `localhost:<port>` tokens preceded by whitespace.
static LOCALHOST: LazyLock<Regex> = LazyLock::new(|| compile(r#"(?i)\slocalhost:[0-9]+[^\s"']*"#));

/// Simple GET shape: `curl` followed by an optionally quoted http(s) URL.
static SIMPLE_GET: LazyLock<Regex> = LazyLock::new(|| compile(r#"curl\s+['"]?https?://"#));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => panic!("pattern should be valid at compile time: {e}"),
    }
}

/// Validates a candidate command.
///
/// Total over all inputs: every string produces a verdict and nothing
/// panics. Checks run in a fixed order and the first failing check supplies
/// the rejection reason.
#[must_use]
pub fn validate(command: &str) -> Verdict {
    if !command.trim().starts_with("curl") {
        return Verdict::invalid(RejectReason::MissingCurlPrefix);
    }

    let has_url = [&BARE_URL, &QUOTED_URL, &BARE_DOMAIN, &LOCALHOST]
        .iter()
        .any(|pattern| pattern.is_match(command));
    if !has_url {
        return Verdict::invalid(RejectReason::MissingUrl);
    }

    let has_option = catalogue::tokens().any(|token| contains_token(command, token));
    if !has_option && !SIMPLE_GET.is_match(command) {
        return Verdict::invalid(RejectReason::MissingOption);
    }

    Verdict::valid()
}

/// Whether the command contains a catalogued token surrounded by spaces, or
/// a long form immediately followed by `=`.
fn contains_token(command: &str, token: &str) -> bool {
    if command.contains(&format!(" {token} ")) {
        return true;
    }
    token.starts_with("--") && command.contains(&format!(" {token}="))
}
