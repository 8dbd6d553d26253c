//! Namespaced identifiers (`namespace:path`) for blocks, items and recipes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Namespace assumed when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("invalid character {ch:?} in namespace of {id:?}")]
    InvalidNamespace { id: String, ch: char },
    #[error("invalid character {ch:?} in path of {id:?}")]
    InvalidPath { id: String, ch: char },
    #[error("empty path in {0:?}")]
    EmptyPath(String),
}

/// A `namespace:path` pair.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: Cow<'static, str>,
    path: Cow<'static, str>,
}

impl Identifier {
    /// Identifier in the `minecraft` namespace. Not validated.
    #[must_use]
    pub const fn vanilla(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(DEFAULT_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Identifier from static parts. Not validated.
    #[must_use]
    pub const fn from_static(namespace: &'static str, path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            path: Cow::Borrowed(path),
        }
    }

    /// Parse `namespace:path` or a bare `path` (defaulting to `minecraft`).
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        let (namespace, path) = s.split_once(':').unwrap_or((DEFAULT_NAMESPACE, s));
        let namespace = if namespace.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            namespace
        };

        if let Some(ch) = namespace.chars().find(|&c| !is_namespace_char(c)) {
            return Err(IdentifierError::InvalidNamespace { id: s.to_owned(), ch });
        }
        if path.is_empty() {
            return Err(IdentifierError::EmptyPath(s.to_owned()));
        }
        if let Some(ch) = path.chars().find(|&c| !is_path_char(c)) {
            return Err(IdentifierError::InvalidPath { id: s.to_owned(), ch });
        }

        Ok(Self {
            namespace: Cow::Owned(namespace.to_owned()),
            path: Cow::Owned(path.to_owned()),
        })
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn is_vanilla(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }
}

const fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

const fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({self})")
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = Cow::<'de, str>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
