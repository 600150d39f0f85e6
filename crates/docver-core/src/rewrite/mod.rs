//! Documentation URL version rewriting.
//!
//! A documentation URL carries its version as a path segment following the
//! docs root, e.g. `https://example.com/javadocs/foo/2.3/index.html`. The
//! rewrite swaps that segment for another version and leaves everything else
//! untouched. It is purely textual: no normalization, no percent-decoding, and
//! no check that the target version exists. A URL the rule does not match is
//! returned unchanged.

mod error;
mod rule;

use std::sync::OnceLock;

pub use error::RuleError;
pub use rule::{VersionRule, DEFAULT_DOCS_ROOT};

fn default_rule() -> &'static VersionRule {
    static RULE: OnceLock<VersionRule> = OnceLock::new();
    RULE.get_or_init(VersionRule::javadocs)
}

/// Rewrites the first `javadocs/…/<version>/` segment of `url` to `new_version`.
///
/// # Examples
///
/// - `rewrite("https://example.com/javadocs/foo/2.3/index.html", "3.0")`
///   → `"https://example.com/javadocs/foo/3.0/index.html"`
/// - `rewrite("https://example.com/about", "3.0")` → `"https://example.com/about"`
pub fn rewrite(url: &str, new_version: &str) -> String {
    default_rule().rewrite(url, new_version).into_owned()
}

/// Version segment of `url` under the default rule.
pub fn current_version(url: &str) -> Option<&str> {
    default_rule().current_version(url)
}
