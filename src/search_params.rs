use crate::compat::{BTreeMap, String, ToOwned, ToString, Vec};
use crate::percent_encode::{form_decode, form_encode_into};

/// Ordered, multi-valued query string parameters.
///
/// Pairs keep their insertion order through every operation except
/// [`sort`](Self::sort), and the same name may appear any number of times.
/// Mutators return `&mut Self` so calls can be chained:
///
/// ```
/// use fluent_url::SearchParams;
///
/// let mut params = SearchParams::parse("q=hello");
/// params.append("tag", "a").append("tag", "b").set("q", "bye");
/// assert_eq!(params.to_string(), "q=bye&tag=a&tag=b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        if query.is_empty() {
            return Self::new();
        }

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (form_decode(key), form_decode(value)),
                None => (form_decode(pair), String::new()),
            })
            .collect();

        Self { params }
    }

    /// Add a pair at the end, regardless of existing pairs with that name.
    pub fn append(&mut self, key: &str, value: &str) -> &mut Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Delete every pair with the given name.
    pub fn delete(&mut self, key: &str) -> &mut Self {
        self.params.retain(|(k, _)| k != key);
        self
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Set a key to a single value, replacing all existing values for that key.
    /// The pair stays where the first occurrence was; a new key goes last.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        let mut found_first = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            value.clone_into(v);
            true
        });
        if !found_first {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Remove every pair.
    ///
    /// Deletion walks a snapshot of the names taken up front, never the
    /// collection being shrunk.
    pub fn reset(&mut self) -> &mut Self {
        let keys: Vec<String> = self.keys().map(ToOwned::to_owned).collect();
        for key in &keys {
            self.delete(key);
        }
        self
    }

    /// Alias for [`reset`](Self::reset).
    pub fn clear(&mut self) -> &mut Self {
        self.reset()
    }

    /// Merge `params` into this collection.
    ///
    /// Every incoming pair is applied with [`set`](Self::set) semantics, so an
    /// incoming name replaces all existing values for it and the last incoming
    /// value for a repeated name wins. Use [`append`](Self::append) to keep
    /// multiple values.
    ///
    /// ```
    /// use fluent_url::SearchParams;
    ///
    /// let mut params = SearchParams::parse("q=hello&a=1&a=2");
    /// params.extend("a=3&b=4");
    /// assert_eq!(params.to_string(), "q=hello&a=3&b=4");
    /// ```
    pub fn extend<P: Into<SearchParams>>(&mut self, params: P) -> &mut Self {
        for (key, value) in params.into().params {
            self.set(&key, &value);
        }
        self
    }

    /// Replace the whole collection: [`reset`](Self::reset) then
    /// [`extend`](Self::extend).
    pub fn set_all<P: Into<SearchParams>>(&mut self, params: P) -> &mut Self {
        self.reset().extend(params)
    }

    /// Sort parameters by key in code point order.
    /// Pairs with equal keys keep their relative order.
    pub fn sort(&mut self) -> &mut Self {
        self.params.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }

    /// Get the number of parameters (WHATWG API).
    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over all key-value pairs (alias for `iter`, matches WHATWG API).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Call `callback(value, name)` for every pair, in order.
    pub fn for_each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&str, &str),
    {
        for (key, value) in self.iter() {
            callback(value, key);
        }
        self
    }

    /// Collapse into a plain mapping. For a repeated name the last value wins.
    /// Keys come back sorted, not in query order.
    pub fn to_object(&self) -> BTreeMap<String, String> {
        self.params.iter().cloned().collect()
    }

    /// Convert to query string with leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        self.write_pairs(&mut result);
        result
    }

    fn write_pairs(&self, buffer: &mut String) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            form_encode_into(buffer, key);
            buffer.push('=');
            form_encode_into(buffer, value);
        }
    }
}

/// Form-urlencoded serialization without the leading `?`.
impl core::fmt::Display for SearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut result = String::new();
        self.write_pairs(&mut result);
        f.write_str(&result)
    }
}

impl<'a> IntoIterator for &'a SearchParams {
    type Item = (&'a str, &'a str);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let as_strs: fn(&'a (String, String)) -> (&'a str, &'a str) =
            |(k, v)| (k.as_str(), v.as_str());
        self.params.iter().map(as_strs)
    }
}

impl From<&str> for SearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for SearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&String> for SearchParams {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<&SearchParams> for SearchParams {
    fn from(params: &SearchParams) -> Self {
        params.clone()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let params = iter
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();
        Self { params }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<Vec<(K, V)>> for SearchParams {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> From<[(K, V); N]> for SearchParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> From<BTreeMap<K, V>> for SearchParams {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(feature = "std")]
impl<K: AsRef<str>, V: AsRef<str>, S> From<std::collections::HashMap<K, V, S>> for SearchParams {
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}
