use crate::compat::{String, ToString};
use crate::error::Result;
use crate::helpers::split_dot_prefix;
use log::debug;
use url::{Position, Url, quirks};

/// Absolute URL a relative reference is parsed against. `.invalid` never
/// resolves.
pub(crate) const PLACEHOLDER_ORIGIN: &str = "http://relative.invalid";

/// A path-relative or root-relative reference (`/a`, `./a`, `../a`) with no
/// scheme or authority.
///
/// Path and fragment go through the URL parser against
/// [`PLACEHOLDER_ORIGIN`], so they follow the same rules as an absolute URL
/// (dot segments, `\` as `/`, percent-encoding). Leading `./` and `../`
/// segments are kept as written in front of the parsed path.
///
/// The query is owned by the surrounding [`SearchParams`](crate::SearchParams).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelativeRef {
    /// Dot prefix followed by the parsed pathname
    path: String,
    /// Length of the dot prefix in `path` (`0`, `1` for `.`, `2` for `..`, ...)
    prefix_len: usize,
    /// `#fragment`, or empty when there is none
    hash: String,
    /// `scheme://host` the reference was taken from by `make_relative`
    origin: Option<String>,
}

impl RelativeRef {
    /// The root reference `/`
    pub(crate) fn root() -> Self {
        Self {
            path: String::from("/"),
            prefix_len: 0,
            hash: String::new(),
            origin: None,
        }
    }

    /// Parse a cleaned relative input. Returns the reference and its
    /// serialized query (without the `?`).
    pub(crate) fn parse(input: &str) -> Result<(Self, Option<String>)> {
        let (prefix, rest) = split_dot_prefix(input);
        let mut absolute = String::from(PLACEHOLDER_ORIGIN);
        absolute.push_str(rest);
        let url = Url::parse(&absolute)?;

        let mut path = String::from(prefix);
        path.push_str(quirks::pathname(&url));
        let reference = Self {
            path,
            prefix_len: prefix.len(),
            hash: quirks::hash(&url).to_string(),
            origin: None,
        };
        Ok((reference, url.query().map(String::from)))
    }

    /// Take path and fragment of an absolute URL. Scheme and host are kept
    /// for [`promote`](Self::promote); credentials and port are dropped.
    pub(crate) fn from_url(url: &Url) -> Self {
        let mut base = url.clone();
        // Rejected for URLs without a host, which have nothing to clear.
        let _ = quirks::set_username(&mut base, "");
        let _ = quirks::set_password(&mut base, "");
        let _ = quirks::set_port(&mut base, "");
        Self {
            path: quirks::pathname(url).to_string(),
            prefix_len: 0,
            hash: quirks::hash(url).to_string(),
            origin: Some(base[..Position::BeforePath].to_string()),
        }
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Path without the dot prefix, always absolute for hierarchical URLs.
    fn parsed_path(&self) -> &str {
        &self.path[self.prefix_len..]
    }

    /// Same rules as the WHATWG pathname setter; the dot prefix stays.
    pub(crate) fn set_path(&mut self, path: &str) {
        let Some(mut url) = scratch() else {
            return;
        };
        quirks::set_pathname(&mut url, path);
        self.path.truncate(self.prefix_len);
        self.path.push_str(quirks::pathname(&url));
    }

    pub(crate) fn hash(&self) -> &str {
        &self.hash
    }

    /// Same rules as the WHATWG hash setter: one leading `#` is optional and
    /// an empty value removes the fragment.
    pub(crate) fn set_hash(&mut self, hash: &str) {
        let Some(mut url) = scratch() else {
            return;
        };
        quirks::set_hash(&mut url, hash);
        self.hash.clear();
        self.hash.push_str(quirks::hash(&url));
    }

    /// `path` + `search` + `hash`, where `search` is `""` or `?...`
    pub(crate) fn serialize(&self, search: &str) -> String {
        let mut buffer = String::with_capacity(self.path.len() + search.len() + self.hash.len());
        buffer.push_str(&self.path);
        buffer.push_str(search);
        buffer.push_str(&self.hash);
        buffer
    }

    /// The absolute URL authority setters work on: the origin this
    /// reference came from, or [`PLACEHOLDER_ORIGIN`], plus path and
    /// fragment.
    pub(crate) fn promote(&self) -> Result<Url> {
        let origin = self.origin.as_deref().unwrap_or(PLACEHOLDER_ORIGIN);
        let mut absolute = String::with_capacity(origin.len() + self.path.len() + self.hash.len());
        absolute.push_str(origin);
        absolute.push_str(self.parsed_path());
        absolute.push_str(&self.hash);
        Url::parse(&absolute)
    }
}

/// An empty placeholder URL for running the WHATWG setters.
fn scratch() -> Option<Url> {
    Url::parse(PLACEHOLDER_ORIGIN)
        .map_err(|err| debug!("cannot parse {PLACEHOLDER_ORIGIN}: {err}"))
        .ok()
}
