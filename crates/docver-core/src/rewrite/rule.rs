//! The compiled version-segment rule.

use std::borrow::Cow;

use regex::Regex;

use super::error::RuleError;

/// Docs root used when none is configured.
pub const DEFAULT_DOCS_ROOT: &str = "javadocs";

/// Matches `<docs_root>`, any run of `/`, the shortest run up to a `/`, then
/// the shortest digits/periods run (group 1) terminated by `/`.
#[derive(Debug, Clone)]
pub struct VersionRule {
    docs_root: String,
    pattern: Regex,
}

impl VersionRule {
    /// Builds a rule anchored on the literal `docs_root`.
    pub fn new(docs_root: &str) -> Result<Self, RuleError> {
        if docs_root.is_empty() {
            return Err(RuleError::EmptyDocsRoot);
        }
        let source = format!(r"{}/*.*?/([0-9.]*?)/", regex::escape(docs_root));
        let pattern = Regex::new(&source).map_err(|source| RuleError::Pattern {
            docs_root: docs_root.to_string(),
            source,
        })?;
        Ok(Self {
            docs_root: docs_root.to_string(),
            pattern,
        })
    }

    /// The rule for `javadocs/<anything>/<version>/` URLs.
    pub fn javadocs() -> Self {
        Self::new(DEFAULT_DOCS_ROOT).expect("default docs root yields a valid pattern")
    }

    pub fn docs_root(&self) -> &str {
        &self.docs_root
    }

    /// Replaces the first version segment of `url` with `new_version`.
    ///
    /// `new_version` is spliced in verbatim. Returns `url` borrowed when the
    /// rule does not match.
    pub fn rewrite<'u>(&self, url: &'u str, new_version: &str) -> Cow<'u, str> {
        let Some(version) = self.pattern.captures(url).and_then(|c| c.get(1)) else {
            return Cow::Borrowed(url);
        };
        let mut out = String::with_capacity(url.len() - version.len() + new_version.len());
        out.push_str(&url[..version.start()]);
        out.push_str(new_version);
        out.push_str(&url[version.end()..]);
        Cow::Owned(out)
    }

    /// The version segment the first match captures, if any. May be empty.
    pub fn current_version<'u>(&self, url: &'u str) -> Option<&'u str> {
        self.pattern
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for VersionRule {
    fn default() -> Self {
        Self::javadocs()
    }
}
