use std::fmt;

use crate::error::{KvError, Result};

/// Attribute holding the primary key.
pub const NAME_ATTR: &str = "Name";
/// Attribute holding the value.
pub const VALUE_ATTR: &str = "Value";

/// A single row of the table: `Name` is the key, `Value` is any string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub value: String,
}

impl Item {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Item {
        Item {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses `key=value`, splitting on the first `=` only.
    pub fn parse_pair(token: &str) -> Result<Item> {
        match token.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok(Item::new(name, value)),
            _ => Err(KvError::InvalidPair(token.to_string())),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
