use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::BoardError;

/// Unique identifier for a column (e.g., col-1, col-42)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(u64);

/// Unique identifier for an item (e.g., item-1, item-42)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ColumnId {
    const PREFIX: &'static str = "col-";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl ItemId {
    const PREFIX: &'static str = "item-";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Parses either the prefixed form (`col-7`) or a bare number (`7`).
fn parse_prefixed(s: &str, prefix: &str) -> Result<u64, BoardError> {
    let trimmed = s.trim();
    let digits = trimmed
        .get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &trimmed[prefix.len()..])
        .unwrap_or(trimmed);

    // `u64::from_str` would also take a leading '+'.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BoardError::InvalidId(s.to_string()));
    }

    digits
        .parse::<u64>()
        .map_err(|_| BoardError::InvalidId(s.to_string()))
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, Self::PREFIX).map(Self)
    }
}

impl FromStr for ItemId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, Self::PREFIX).map(Self)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// Hands out identifiers for new columns and items.
///
/// Both id domains draw from one counter, so a number is never issued twice
/// within a session even across kinds.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    fn bump(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    pub fn next_column_id(&mut self) -> ColumnId {
        ColumnId(self.bump())
    }

    pub fn next_item_id(&mut self) -> ItemId {
        ItemId(self.bump())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
