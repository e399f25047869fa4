//! Crash report text and issue tracker links

use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::state::{ErrorDescriptor, StackDescriptor};

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const ISSUE_PREAMBLE: &str = "I encountered an error while using Shutter Tester.\n\n";

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Identifies the client in reports: `shutter-tester/<ver> (<os>; <arch>; TERM=<term>)`
pub fn user_agent() -> String {
    let term = std::env::var("TERM").unwrap_or_else(|_| "unknown".to_string());
    format!(
        "shutter-tester/{} ({}; {}; TERM={})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        term
    )
}

/// Markdown report: error, fenced stack, user agent and ISO-8601 time
pub fn generate_report(
    error: Option<&ErrorDescriptor>,
    stack: Option<&StackDescriptor>,
    user_agent: &str,
    now: DateTime<Utc>,
) -> String {
    let error = error
        .map(ToString::to_string)
        .unwrap_or_else(|| "Unknown error".to_string());
    let stack = stack.map(|s| s.component_stack.as_str()).unwrap_or_default();
    let time = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    format!(
        "
**Error:** `{error}`

**Stack Trace:**
```
{stack}
```

**User Agent:** {user_agent}
**Time:** {time}
"
    )
    .trim()
    .to_string()
}

/// `<tracker>/issues/new?title=..&body=..` with both parts URI-encoded
pub fn issue_url(issue_tracker: &str, error_message: &str, report: &str) -> String {
    let title = format!("Crash: {error_message}");
    let body = format!("{ISSUE_PREAMBLE}{report}");
    format!(
        "{}/issues/new?title={}&body={}",
        issue_tracker.trim_end_matches('/'),
        encode_uri_component(&title),
        encode_uri_component(&body)
    )
}
