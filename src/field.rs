use crate::compat::{BTreeMap, String, ToString};
use crate::error::Result;
use crate::fluent_url::FluentUrl;
use log::debug;

/// A named accessor of [`FluentUrl`], used by [`FluentUrl::export`] and
/// [`FluentUrl::import`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Hash,
    HashPath,
    HashSearch,
    Host,
    Hostname,
    Href,
    IsRelative,
    Origin,
    Password,
    Pathname,
    Port,
    Protocol,
    Search,
    SearchObject,
    Username,
}

impl Field {
    /// Every known field.
    pub const ALL: [Self; 15] = [
        Self::Hash,
        Self::HashPath,
        Self::HashSearch,
        Self::Host,
        Self::Hostname,
        Self::Href,
        Self::IsRelative,
        Self::Origin,
        Self::Password,
        Self::Pathname,
        Self::Port,
        Self::Protocol,
        Self::Search,
        Self::SearchObject,
        Self::Username,
    ];

    /// Fields written by [`FluentUrl::export_default`].
    pub const DEFAULT_EXPORT: [Self; 13] = [
        Self::Hash,
        Self::Host,
        Self::Hostname,
        Self::Href,
        Self::IsRelative,
        Self::Origin,
        Self::Password,
        Self::Pathname,
        Self::Port,
        Self::Protocol,
        Self::Search,
        Self::SearchObject,
        Self::Username,
    ];

    /// The accessor name, e.g. `"searchObject"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::HashPath => "hashPath",
            Self::HashSearch => "hashSearch",
            Self::Host => "host",
            Self::Hostname => "hostname",
            Self::Href => "href",
            Self::IsRelative => "isRelative",
            Self::Origin => "origin",
            Self::Password => "password",
            Self::Pathname => "pathname",
            Self::Port => "port",
            Self::Protocol => "protocol",
            Self::Search => "search",
            Self::SearchObject => "searchObject",
            Self::Username => "username",
        }
    }

    /// Look a field up by accessor name. Unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// `isRelative` and `origin` can only be read.
    pub fn is_settable(self) -> bool {
        !matches!(self, Self::IsRelative | Self::Origin)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of one [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// An authority field of a relative URL.
    Absent,
    Bool(bool),
    Text(String),
    /// `searchObject` and `hashSearch`
    Map(BTreeMap<String, String>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Text form used by string-valued setters.
    fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Bool(value) => Some(value.to_string()),
            Self::Absent | Self::Map(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<BTreeMap<String, String>> for FieldValue {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::Map(map)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldValue {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl FluentUrl {
    /// Read one field.
    pub fn get_field(&self, field: Field) -> FieldValue {
        match field {
            Field::Hash => self.hash().into(),
            Field::HashPath => self.hash_path().into(),
            Field::HashSearch => self.hash_search().into(),
            Field::Host => self.host().into(),
            Field::Hostname => self.hostname().into(),
            Field::Href => self.href().into(),
            Field::IsRelative => self.is_relative().into(),
            Field::Origin => self.origin().into(),
            Field::Password => self.password().into(),
            Field::Pathname => self.pathname().into(),
            Field::Port => self.port().into(),
            Field::Protocol => self.protocol().into(),
            Field::Search => self.search().into(),
            Field::SearchObject => self.search_object().into(),
            Field::Username => self.username().into(),
        }
    }

    /// Write one field.
    ///
    /// Read-only fields and values of the wrong shape (a mapping for
    /// `hostname`, `Absent` for anything) are skipped. A mapping goes
    /// through [`set_search_object`](Self::set_search_object) for `search`.
    ///
    /// # Errors
    ///
    /// Only `href` can fail, with the parser's error.
    pub fn set_field(&mut self, field: Field, value: &FieldValue) -> Result<&mut Self> {
        match (field, value) {
            (Field::IsRelative | Field::Origin, _) | (_, FieldValue::Absent) => {
                debug!("skipped {field} = {value:?}");
            }
            (Field::Search | Field::SearchObject, FieldValue::Map(map)) => {
                self.set_search_object(map.clone());
            }
            (Field::HashSearch, FieldValue::Map(map)) => {
                self.set_hash_search(map.clone());
            }
            _ => match value.to_text() {
                Some(text) => return self.set_text(field, &text),
                None => debug!("skipped {field} = {value:?}"),
            },
        }
        Ok(self)
    }

    fn set_text(&mut self, field: Field, text: &str) -> Result<&mut Self> {
        match field {
            Field::Hash => {
                self.set_hash(text);
            }
            Field::HashPath => {
                self.set_hash_path(text);
            }
            Field::HashSearch => {
                self.set_hash_search(text);
            }
            Field::Host => {
                self.set_host(text);
            }
            Field::Hostname => {
                self.set_hostname(text);
            }
            Field::Href => {
                self.set_href(text)?;
            }
            Field::Password => {
                self.set_password(text);
            }
            Field::Pathname => {
                self.set_pathname(text);
            }
            Field::Port => {
                self.set_port(text);
            }
            Field::Protocol => {
                self.set_protocol(text);
            }
            Field::Search => {
                self.set_search(text);
            }
            Field::SearchObject => {
                self.set_search_object(text);
            }
            Field::Username => {
                self.set_username(text);
            }
            Field::IsRelative | Field::Origin => {}
        }
        Ok(self)
    }

    /// Read the named fields into a mapping. Names that are not fields are
    /// skipped.
    ///
    /// ```
    /// use fluent_url::{FieldValue, FluentUrl};
    ///
    /// let url = FluentUrl::parse("https://sub.example.com:8443/", None)?;
    /// let values = url.export(["host", "protocol", "notAThing"]);
    /// assert_eq!(values.len(), 2);
    /// assert_eq!(values["host"], FieldValue::from("sub.example.com:8443"));
    /// # Ok::<(), fluent_url::ParseError>(())
    /// ```
    pub fn export<I, S>(&self, names: I) -> BTreeMap<&'static str, FieldValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| Field::from_name(name.as_ref()))
            .map(|field| (field.name(), self.get_field(field)))
            .collect()
    }

    /// [`export`](Self::export) of [`Field::DEFAULT_EXPORT`].
    pub fn export_default(&self) -> BTreeMap<&'static str, FieldValue> {
        self.export(Field::DEFAULT_EXPORT.iter().map(|field| field.name()))
    }

    /// Write each named field in order. Unknown names are skipped.
    ///
    /// # Errors
    ///
    /// Stops at the first `href` that fails to parse; fields before it have
    /// already been written.
    pub fn import<I, K, V>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        for (name, value) in values {
            match Field::from_name(name.as_ref()) {
                Some(field) => {
                    self.set_field(field, &value.into())?;
                }
                None => debug!("skipped unknown field {:?}", name.as_ref()),
            }
        }
        Ok(self)
    }
}
