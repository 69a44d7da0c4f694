//! The fixed set of JSONPlaceholder endpoints.
//!
//! Step text names endpoints by their display name ("Posts", "ToDos", ...);
//! the harness maps that closed set to URL paths. Free-form endpoint strings
//! are rejected at parse time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A named JSONPlaceholder resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// The `/posts` resource.
    Posts,
    /// The `/comments` resource.
    Comments,
    /// The `/albums` resource.
    Albums,
    /// The `/photos` resource.
    Photos,
    /// The `/todos` resource, spelled "ToDos" in step text.
    ToDos,
    /// The `/users` resource.
    Users,
}

impl Endpoint {
    /// Returns all endpoints in the fixed set.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Posts,
            Self::Comments,
            Self::Albums,
            Self::Photos,
            Self::ToDos,
            Self::Users,
        ]
    }

    /// Returns the URL path for this endpoint, with the leading slash.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Posts => "/posts",
            Self::Comments => "/comments",
            Self::Albums => "/albums",
            Self::Photos => "/photos",
            Self::ToDos => "/todos",
            Self::Users => "/users",
        }
    }

    /// Returns the display name used in step text.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Posts => "Posts",
            Self::Comments => "Comments",
            Self::Albums => "Albums",
            Self::Photos => "Photos",
            Self::ToDos => "ToDos",
            Self::Users => "Users",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Endpoint {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "Posts" => Ok(Self::Posts),
            "Comments" => Ok(Self::Comments),
            "Albums" => Ok(Self::Albums),
            "Photos" => Ok(Self::Photos),
            "ToDos" => Ok(Self::ToDos),
            "Users" => Ok(Self::Users),
            other => Err(DomainError::UnknownEndpoint(other.to_string())),
        }
    }
}
