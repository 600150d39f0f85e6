//! Error type for building a version rule.

/// Returned when a custom docs root cannot be turned into a version rule.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("docs root must not be empty")]
    EmptyDocsRoot,
    #[error("invalid version pattern for docs root {docs_root:?}: {source}")]
    Pattern {
        docs_root: String,
        #[source]
        source: regex::Error,
    },
}
