//! proj4 definition strings.
//!
//! A proj4 definition is a whitespace separated list of `+key=value`
//! parameters and bare `+flag` switches, e.g.
//! `+proj=utm +zone=32 +datum=WGS84 +units=m +no_defs`.

use std::fmt;
use std::str::FromStr;

/// A single `+key[=value]` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proj4Param {
    pub key: String,
    pub value: Option<String>,
}

impl Proj4Param {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// A bare switch (`+no_defs`) or one explicitly set to `True`.
    pub fn is_set_flag(&self) -> bool {
        match &self.value {
            None => true,
            Some(v) => v.eq_ignore_ascii_case("true"),
        }
    }

    /// Value used when comparing definitions: `+south` and `+south=True` compare equal.
    fn comparable_value(&self) -> Option<&str> {
        if self.is_set_flag() {
            None
        } else {
            self.value.as_deref()
        }
    }
}

impl fmt::Display for Proj4Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "+{}={}", self.key, value),
            None => write!(f, "+{}", self.key),
        }
    }
}

/// A parsed proj4 definition with parameters kept in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proj4Definition {
    params: Vec<Proj4Param>,
}

impl Proj4Definition {
    /// Parse a proj4 string.
    ///
    /// Every token must start with `+`, keys must be unique and a `+proj=<name>`
    /// parameter is required. No projection-specific validation happens here.
    pub fn parse(s: &str) -> Result<Self, Proj4ParseError> {
        let mut params: Vec<Proj4Param> = Vec::new();

        for token in s.split_whitespace() {
            let body = token
                .strip_prefix('+')
                .ok_or_else(|| Proj4ParseError::MissingPlus(token.to_string()))?;

            let (key, value) = match body.split_once('=') {
                Some((key, value)) => (key, Some(value.to_string())),
                None => (body, None),
            };

            if key.is_empty() {
                return Err(Proj4ParseError::EmptyKey(token.to_string()));
            }
            if params.iter().any(|p| p.key == key) {
                return Err(Proj4ParseError::DuplicateKey(key.to_string()));
            }

            params.push(Proj4Param::new(key, value));
        }

        if params.is_empty() {
            return Err(Proj4ParseError::Empty);
        }

        match params.iter().find(|p| p.key == "proj") {
            None => Err(Proj4ParseError::MissingProj),
            Some(p) if p.value.as_deref().map_or(true, str::is_empty) => {
                Err(Proj4ParseError::MissingValue("proj".to_string()))
            }
            Some(_) => Ok(Self { params }),
        }
    }

    /// All parameters in definition order.
    pub fn params(&self) -> &[Proj4Param] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Value of `key`, if present with a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .and_then(|p| p.value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|p| p.key == key)
    }

    /// Whether `key` is present as a switch (bare, or `=True`).
    pub fn has_flag(&self, key: &str) -> bool {
        self.params
            .iter()
            .any(|p| p.key == key && p.is_set_flag())
    }

    /// The projection name (`+proj=<name>`).
    pub fn projection(&self) -> &str {
        // parse() guarantees a non-empty proj value
        self.get("proj").unwrap_or_default()
    }

    /// Re-serialize the definition in its original parameter order.
    pub fn to_proj4_string(&self) -> String {
        self.params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check whether two definitions carry the same parameters, ignoring order.
    pub fn equivalent(&self, other: &Proj4Definition) -> bool {
        self.params.len() == other.params.len()
            && self.params.iter().all(|p| {
                other
                    .params
                    .iter()
                    .any(|q| q.key == p.key && q.comparable_value() == p.comparable_value())
            })
    }
}

impl fmt::Display for Proj4Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_proj4_string())
    }
}

impl FromStr for Proj4Definition {
    type Err = Proj4ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Proj4ParseError {
    #[error("proj4 string is empty")]
    Empty,

    #[error("proj4 parameter must start with '+': {0}")]
    MissingPlus(String),

    #[error("proj4 parameter has an empty name: {0}")]
    EmptyKey(String),

    #[error("proj4 parameter given more than once: {0}")]
    DuplicateKey(String),

    #[error("proj4 parameter requires a value: {0}")]
    MissingValue(String),

    #[error("proj4 string has no +proj parameter")]
    MissingProj,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utm_definition() {
        let def = Proj4Definition::parse("+proj=utm +zone=32 +datum=WGS84 +units=m +no_defs=True")
            .unwrap();
        assert_eq!(def.projection(), "utm");
        assert_eq!(def.get("zone"), Some("32"));
        assert_eq!(def.get("datum"), Some("WGS84"));
        assert!(def.has_flag("no_defs"));
        assert!(!def.has_flag("south"));
        assert_eq!(def.len(), 5);
    }

    #[test]
    fn test_bare_flag_has_no_value() {
        let def = Proj4Definition::parse("+proj=longlat +datum=WGS84 +no_defs").unwrap();
        assert!(def.contains_key("no_defs"));
        assert_eq!(def.get("no_defs"), None);
        assert!(def.has_flag("no_defs"));
    }

    #[test]
    fn test_false_flag_is_not_set() {
        let def = Proj4Definition::parse("+proj=utm +zone=10 +south=False").unwrap();
        assert!(def.contains_key("south"));
        assert!(!def.has_flag("south"));
    }

    #[test]
    fn test_serialization_keeps_order() {
        let text = "+proj=utm +zone=33 +datum=WGS84 +units=m +no_defs=True +south=True";
        let def: Proj4Definition = text.parse().unwrap();
        assert_eq!(def.to_proj4_string(), text);
        assert_eq!(def.to_string(), text);
    }

    #[test]
    fn test_extra_whitespace_is_collapsed() {
        let def = Proj4Definition::parse("  +proj=merc\t+lon_0=0   +k=1 ").unwrap();
        assert_eq!(def.to_proj4_string(), "+proj=merc +lon_0=0 +k=1");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Proj4Definition::parse(""), Err(Proj4ParseError::Empty));
        assert_eq!(Proj4Definition::parse("   "), Err(Proj4ParseError::Empty));
        assert_eq!(
            Proj4Definition::parse("+proj=utm zone=32"),
            Err(Proj4ParseError::MissingPlus("zone=32".to_string()))
        );
        assert_eq!(
            Proj4Definition::parse("+proj=utm +=32"),
            Err(Proj4ParseError::EmptyKey("+=32".to_string()))
        );
        assert_eq!(
            Proj4Definition::parse("+proj=utm +zone=32 +zone=33"),
            Err(Proj4ParseError::DuplicateKey("zone".to_string()))
        );
        assert_eq!(
            Proj4Definition::parse("+datum=WGS84 +no_defs"),
            Err(Proj4ParseError::MissingProj)
        );
        assert_eq!(
            Proj4Definition::parse("+proj +datum=WGS84"),
            Err(Proj4ParseError::MissingValue("proj".to_string()))
        );
    }

    #[test]
    fn test_equivalent_ignores_order_and_flag_spelling() {
        let a = Proj4Definition::parse("+proj=utm +zone=33 +south +datum=WGS84 +no_defs").unwrap();
        let b =
            Proj4Definition::parse("+datum=WGS84 +proj=utm +zone=33 +no_defs=True +south=True")
                .unwrap();
        assert!(a.equivalent(&b));
        assert!(b.equivalent(&a));
    }

    #[test]
    fn test_not_equivalent() {
        let a = Proj4Definition::parse("+proj=utm +zone=33 +datum=WGS84").unwrap();
        let b = Proj4Definition::parse("+proj=utm +zone=34 +datum=WGS84").unwrap();
        let c = Proj4Definition::parse("+proj=utm +zone=33 +datum=WGS84 +south").unwrap();
        assert!(!a.equivalent(&b));
        assert!(!a.equivalent(&c));
        assert!(!c.equivalent(&a));
    }
}
