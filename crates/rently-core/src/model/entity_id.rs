// ── Core identity type ──
//
// EntityId is the foundation of every domain type. The backend hands out
// numeric ids for business entities and opaque strings elsewhere (user
// ids, MEV transaction hashes); EntityId unifies both behind one
// ergonomic interface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical identifier for any entity.
///
/// Transparently wraps either a numeric id (business resources) or an
/// opaque string (user ids, transaction hashes). Consumers never care
/// which.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Numeric(i64),
    Text(String),
}

impl EntityId {
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Numeric(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Numeric(n)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match s.parse::<i64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_numeric_string() {
        let id = EntityId::from("42".to_owned());
        assert_eq!(id.as_numeric(), Some(42));
    }

    #[test]
    fn entity_id_from_opaque_string() {
        let id = EntityId::from("0xdeadbeef".to_owned());
        assert_eq!(id.as_text(), Some("0xdeadbeef"));
    }

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId::Numeric(7).to_string(), "7");
        assert_eq!(EntityId::from("u1").to_string(), "u1");
    }

    #[test]
    fn entity_id_from_str() {
        let id: EntityId = "1024".parse().unwrap();
        assert_eq!(id, EntityId::Numeric(1024));
    }
}
