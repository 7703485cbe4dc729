//! Error types for the library layer.

/// Errors produced outside the load cycle itself (which never fails
/// outward; see [`crate::loader`]).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Writing an HTML fragment failed.
    #[error("Render error: {0}")]
    Render(#[from] quick_xml::Error),
    /// A language tag that has no label set.
    #[error("Unknown language: {0} (expected zh-tw or en)")]
    UnknownLanguage(String),
}
