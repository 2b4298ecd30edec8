//! Build identifier extraction from the venue site's HTML.
//!
//! The identifier is an undocumented detail of the upstream site and can
//! disappear at any deploy. Nothing outside this module knows its shape.

use regex::Regex;
use std::sync::LazyLock;

static BUILD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""buildId":"(.*?)""#).expect("build id pattern compiles"));

/// First non-empty `"buildId":"..."` value in the page.
pub fn extract_build_id(html: &str) -> Option<&str> {
    BUILD_ID
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|id| !id.is_empty())
}
