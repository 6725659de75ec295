//! Request parameters.
//!
//! [`ParameterSet`] keeps query-string or form pairs in the order they
//! arrived, duplicates included.

use http::Uri;
use indexmap::IndexMap;

/// Ordered `(name, value)` pairs from a query string or urlencoded form.
///
/// # Example
///
/// ```rust
/// use tessera_web::ParameterSet;
///
/// let params = ParameterSet::from_query("color=red&size=m&color=blue").unwrap();
///
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get("color"), Some("red"));
/// assert_eq!(params.get_all("color").collect::<Vec<_>>(), ["red", "blue"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(String, String)>,
}

impl ParameterSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string (without the leading `?`).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid urlencoded data.
    pub fn from_query(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(Self { pairs })
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid urlencoded data.
    pub fn from_form(body: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
        Ok(Self { pairs })
    }

    /// Parses the query component of `uri`; empty when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is not valid urlencoded data.
    pub fn from_uri(uri: &Uri) -> Result<Self, serde_urlencoded::de::Error> {
        uri.query().map_or_else(|| Ok(Self::new()), Self::from_query)
    }

    /// Appends a pair.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Returns the first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any pair is named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(n, _)| n == name)
    }

    /// Iterates all pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Collects the parameters whose names start with `prefix`, prefix removed.
///
/// An absent or empty prefix selects every parameter. A name that repeats
/// contributes its first value, matching [`ParameterSet::get`]; keys are
/// ordered by first appearance.
///
/// # Example
///
/// ```rust
/// use tessera_web::{group_parameters_by_prefix, ParameterSet};
///
/// let params = ParameterSet::from_query("price_1=10&price_2=20&other=x").unwrap();
/// let prices = group_parameters_by_prefix(&params, Some("price_"));
///
/// assert_eq!(prices.len(), 2);
/// assert_eq!(prices["1"], "10");
/// assert_eq!(prices["2"], "20");
/// ```
pub fn group_parameters_by_prefix(
    params: &ParameterSet,
    prefix: Option<&str>,
) -> IndexMap<String, String> {
    let prefix = prefix.unwrap_or("");

    let mut grouped = IndexMap::new();
    for (name, value) in params.iter() {
        if let Some(key) = name.strip_prefix(prefix) {
            grouped
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }
    }
    grouped
}
