use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, MatchKind};

use agemark_core::config::NoticeConfig;
use agemark_core::constants::{
    COMPANY_NAME, TOKEN_AGE_DAYS, TOKEN_AGE_MONTHS, TOKEN_AGE_YEARS, TOKEN_COMPANY,
    TOKEN_PUBLISHED_DATE,
};
use agemark_core::models::{AgeFacts, ContentItem, NoticeOverride, NoticeState};

/// Token keys (including braces) mapped to replacement values.
/// Ordered so substitution is deterministic.
pub type TokenMap = BTreeMap<String, String>;

/// Assemble the standard token set for one evaluation.
///
/// `{age_days}`, `{age_months}`, `{age_years}`, `{published_date}`,
/// `{company}` — this exact set is a compatibility contract with
/// existing templates. Callers may extend it via the token hook before
/// rendering.
pub fn standard_tokens(facts: &AgeFacts, item: &ContentItem) -> TokenMap {
    let mut tokens = TokenMap::new();
    tokens.insert(TOKEN_AGE_DAYS.to_string(), facts.age_days.to_string());
    tokens.insert(TOKEN_AGE_MONTHS.to_string(), facts.age_months.to_string());
    tokens.insert(TOKEN_AGE_YEARS.to_string(), facts.age_years.to_string());
    tokens.insert(TOKEN_PUBLISHED_DATE.to_string(), item.display_date.clone());
    tokens.insert(TOKEN_COMPANY.to_string(), COMPANY_NAME.to_string());
    tokens
}

/// Pick the template to render: a non-empty per-item override label
/// wins over the config template selected by state.
pub fn select_template<'a>(
    config: &'a NoticeConfig,
    item_override: &'a NoticeOverride,
    state: NoticeState,
) -> &'a str {
    if !item_override.label.is_empty() {
        &item_override.label
    } else if state == NoticeState::Danger {
        &config.label_danger
    } else {
        &config.label_warn
    }
}

/// Expand tokens in a template.
///
/// Literal, single-pass substitution: every occurrence of each key is
/// replaced; unmatched tokens stay verbatim; replacement values that
/// happen to contain another token's key are not re-expanded.
///
/// The output is raw. Markup sanitization is the final step of the
/// evaluation pipeline, applied after the label hook has run, so that
/// hook output falls under the same whitelist as everything else.
pub fn render(template: &str, tokens: &TokenMap) -> String {
    if tokens.is_empty() {
        return template.to_string();
    }
    let keys: Vec<&str> = tokens.keys().map(String::as_str).collect();
    let values: Vec<&str> = tokens.values().map(String::as_str).collect();
    let Ok(searcher) = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&keys)
    else {
        // Only reachable with a degenerate pattern set; leave the
        // template unrendered rather than fail the item's display.
        return template.to_string();
    };
    searcher.replace_all(template, &values)
}
