#![cfg_attr(not(feature = "std"), no_std)]
//! Chainable getters and setters for every part of a URL, with an ordered,
//! multi-valued query string, relative URLs and hash routing.
//!
//! ```
//! use fluent_url::FluentUrl;
//!
//! let mut url = FluentUrl::parse("https://example.com/home#/dashboard?msg=Hello", None)?;
//! url.set_hostname("example.org")
//!     .qs_append("page", "2")
//!     .set_hash_path("/projects");
//! assert_eq!(url.href(), "https://example.org/home?page=2#/projects?msg=Hello");
//! # Ok::<(), fluent_url::ParseError>(())
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod field;
mod fluent_url;
mod helpers;
mod percent_encode;
mod relative;
mod search_params;

// Public API
pub use error::{ParseError, Result};
pub use field::{Field, FieldValue};
pub use fluent_url::FluentUrl;
pub use search_params::SearchParams;
pub use url::Url;
