//! Namespaced resource keys (`namespace:value`), used for fonts, item and
//! entity types, and command storage identifiers.

use crate::parsers::{self, ParseError, is_namespace_char, is_value_char, run_parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The namespace used when a key is written without one.
pub const MINECRAFT_NAMESPACE: &str = "minecraft";

/// A validated `namespace:value` identifier.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Key {
    namespace: Arc<str>,
    value: Arc<str>,
}

impl Key {
    /// Creates a key from its parts, validating the allowed characters.
    pub fn new(
        namespace: impl Into<Arc<str>>,
        value: impl Into<Arc<str>>,
    ) -> Result<Self, ParseError> {
        let namespace = namespace.into();
        let value = value.into();
        let invalid = |reason: &str| ParseError::InvalidKey {
            key: format!("{}:{}", namespace, value),
            reason: reason.to_string(),
        };

        if namespace.is_empty() {
            return Err(invalid("namespace is empty"));
        }
        if let Some(c) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(invalid(&format!("illegal character '{}' in namespace", c)));
        }
        if value.is_empty() {
            return Err(invalid("value is empty"));
        }
        if let Some(c) = value.chars().find(|c| !is_value_char(*c)) {
            return Err(invalid(&format!("illegal character '{}' in value", c)));
        }

        Ok(Self { namespace, value })
    }

    /// Creates a key in the `minecraft` namespace.
    pub fn minecraft(value: impl Into<Arc<str>>) -> Result<Self, ParseError> {
        Self::new(MINECRAFT_NAMESPACE, value)
    }

    /// Parses `namespace:value`, defaulting the namespace to `minecraft`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let (namespace, value) =
            run_parser(parsers::parse_key, s).map_err(|e| ParseError::InvalidKey {
                key: s.to_string(),
                reason: e.to_string(),
            })?;
        Self::new(namespace.unwrap_or(MINECRAFT_NAMESPACE), value)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl FromStr for Key {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
