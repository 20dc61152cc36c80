/// Errors that can occur during URL parsing.
///
/// Parse failures come straight from the underlying WHATWG parser and are
/// passed through untranslated, so callers can match on the parser's own
/// variants (`RelativeUrlWithoutBase`, `InvalidPort`, ...).
pub use url::ParseError;

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
