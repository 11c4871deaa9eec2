//! Restricted markup policy for label templates.
//!
//! Labels may carry links, emphasis, spans, and line breaks. Everything
//! else is stripped (inner text is kept). The same policy applies at
//! config write time and after template rendering, so untrusted per-item
//! override labels cannot introduce unsafe markup.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<\s*(/?)\s*([a-zA-Z][a-zA-Z0-9]*)((?:"[^"]*"|'[^']*'|[^>"'])*)>"#)
        .expect("tag pattern is valid")
});

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z][a-zA-Z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("attribute pattern is valid")
});

fn is_allowed_tag(name: &str) -> bool {
    matches!(name, "a" | "strong" | "em" | "span" | "br")
}

fn allowed_attrs(name: &str) -> &'static [&'static str] {
    match name {
        "a" => &["href", "title", "rel", "target"],
        "span" => &["class"],
        _ => &[],
    }
}

/// Reject URL schemes that execute or embed content.
fn is_safe_url(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    !(compact.starts_with("javascript:")
        || compact.starts_with("data:")
        || compact.starts_with("vbscript:"))
}

/// Reduce `input` to the restricted markup subset.
///
/// Disallowed tags are removed while their inner text is kept;
/// disallowed attributes are dropped from allowed tags. Text outside
/// tags passes through unchanged.
pub fn sanitize(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for m in TAG_RE.find_iter(input) {
        out.push_str(&input[last..m.start()]);
        out.push_str(&clean_tag(m.as_str()));
        last = m.end();
    }
    out.push_str(&input[last..]);
    out
}

/// Rebuild one matched tag under the whitelist, or return empty to drop it.
fn clean_tag(tag: &str) -> String {
    let Some(caps) = TAG_RE.captures(tag) else {
        return String::new();
    };
    let closing = caps.get(1).is_some_and(|m| m.as_str() == "/");
    let name = caps
        .get(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();

    if !is_allowed_tag(&name) {
        return String::new();
    }
    if name == "br" {
        // br never closes; normalize to self-closing.
        return if closing { String::new() } else { "<br/>".to_string() };
    }
    if closing {
        return format!("</{name}>");
    }

    let mut out = format!("<{name}");
    if let Some(attrs) = caps.get(3) {
        for ac in ATTR_RE.captures_iter(attrs.as_str()) {
            let attr = ac
                .get(1)
                .map(|m| m.as_str().to_ascii_lowercase())
                .unwrap_or_default();
            if !allowed_attrs(&name).contains(&attr.as_str()) {
                continue;
            }
            let value = ac
                .get(2)
                .or_else(|| ac.get(3))
                .or_else(|| ac.get(4))
                .map(|m| m.as_str())
                .unwrap_or("");
            if attr == "href" && !is_safe_url(value) {
                continue;
            }
            out.push(' ');
            out.push_str(&attr);
            out.push_str("=\"");
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }
    }
    out.push('>');
    out
}
