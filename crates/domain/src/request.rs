//! Request specification types.
//!
//! A [`RequestSpec`] is assembled from a step's captured arguments and
//! issued exactly once. Query parameters and body tables keep insertion
//! order, matching the order rows appear in the feature file.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::Endpoint;
use crate::method::Method;

/// Optional path suffix appended to an endpoint path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathSuffix {
    /// No suffix, request the collection itself.
    #[default]
    None,
    /// A single numeric segment, e.g. `/posts/1`. Negative IDs are
    /// permitted so scenarios can probe invalid resources.
    Id(i64),
    /// A nested `{id}/{subresource}` pair, e.g. `/posts/1/comments`.
    Nested {
        /// Parent resource ID.
        id: i64,
        /// Child resource name.
        subresource: String,
    },
}

impl PathSuffix {
    /// Renders the suffix for URL concatenation, empty for [`Self::None`].
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Id(id) => format!("/{id}"),
            Self::Nested { id, subresource } => format!("/{id}/{subresource}"),
        }
    }
}

/// An ordered collection of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    items: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a collection holding a single parameter.
    #[must_use]
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = Self::new();
        params.add(key, value);
        params
    }

    /// Appends a parameter, preserving insertion order.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.push((key.into(), value.into()));
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serializes as `?k1=v1&k2=v2`: a leading `?`, pairs joined by `&`,
    /// no leading or trailing `&`. An empty collection renders as the
    /// empty string so it can be appended to a URL unconditionally.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let mut out = String::from("?");
        for (i, (key, value)) in self.items.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            let _ = write!(out, "{key}={value}");
        }
        out
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// An ordered key-value table serialized to a flat JSON object body.
///
/// Values stay strings with no type coercion, matching the step data-table
/// contract. The empty table is an explicit case and serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyTable {
    rows: Vec<(String, String)>,
}

impl BodyTable {
    /// Creates an empty body table.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends a row, preserving insertion order.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rows.push((key.into(), value.into()));
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds the JSON object this table represents, keys in insertion
    /// order. The empty table yields the empty object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(self.rows.len());
        for (key, value) in &self.rows {
            map.insert(key.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }

    /// Serializes the table to a JSON body string.
    #[must_use]
    pub fn to_body_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl FromIterator<(String, String)> for BodyTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// A fully specified request, ready for a client to issue once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,
    /// Target endpoint.
    pub endpoint: Endpoint,
    /// Optional path suffix after the endpoint path.
    #[serde(default)]
    pub suffix: PathSuffix,
    /// Query parameters, possibly empty.
    #[serde(default)]
    pub query: QueryParams,
    /// JSON body table; only sent for methods with a body.
    #[serde(default)]
    pub body: Option<BodyTable>,
}

impl RequestSpec {
    /// Creates a request with no suffix, query, or body.
    #[must_use]
    pub const fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            suffix: PathSuffix::None,
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Sets the path suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: PathSuffix) -> Self {
        self.suffix = suffix;
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Sets the body table. POST and PUT steps always set one, an empty
    /// table for the empty-body variants.
    #[must_use]
    pub fn with_body(mut self, body: BodyTable) -> Self {
        self.body = Some(body);
        self
    }

    /// Renders the path-and-query portion of the URL, relative to the
    /// base URL: endpoint path, suffix, then query string.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        format!(
            "{}{}{}",
            self.endpoint.path(),
            self.suffix.render(),
            self.query.to_query_string()
        )
    }

    /// Serializes the body table, `{}` when the table is present but
    /// empty, `None` when the method sends no body.
    #[must_use]
    pub fn body_string(&self) -> Option<String> {
        self.body.as_ref().map(BodyTable::to_body_string)
    }
}
