//! Product name handle.
//!
//! A [`ProductName`] is a cheap-to-clone handle for a product name. The same
//! name appears on every batch and sale record of that product, so the string
//! is stored once behind an `Arc` and cloning is a reference-count bump.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A product name.
///
/// This is a thin wrapper around `Arc<str>` providing cheap cloning and
/// comparison. It serializes as a plain string.
#[derive(Debug, Clone, Eq)]
pub struct ProductName(Arc<str>);

impl ProductName {
    /// Create a new product name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ProductName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProductName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

impl PartialEq for ProductName {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: both handles share the same allocation
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        self.0 == other.0
    }
}

impl PartialEq<str> for ProductName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ProductName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::hash::Hash for ProductName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialOrd for ProductName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProductName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProductName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&ProductName> for ProductName {
    fn from(s: &ProductName) -> Self {
        s.clone()
    }
}
