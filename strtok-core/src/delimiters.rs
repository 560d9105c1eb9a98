//! Delimiter membership
//!
//! A delimiter string is treated as a set of independent characters. ASCII
//! members are kept in a 128-bit bitmap; anything else goes in a sorted array
//! searched with binary search.

use once_cell::sync::Lazy;
use std::fmt;
use strtok_config::DEFAULT_DELIMITERS;

static DEFAULT_SET: Lazy<DelimiterSet> = Lazy::new(|| DelimiterSet::new(DEFAULT_DELIMITERS));

/// Set of delimiter characters
///
/// Two sets are equal when they classify the same characters, regardless of
/// the order or repetition in the strings they were built from.
#[derive(Clone)]
pub struct DelimiterSet {
    /// The string exactly as supplied
    source: String,
    ascii: u128,
    /// Sorted, deduplicated non-ASCII members
    wide: Vec<char>,
}

impl DelimiterSet {
    pub fn new(delimiters: impl Into<String>) -> Self {
        let source = delimiters.into();
        let mut ascii = 0u128;
        let mut wide = Vec::new();

        for c in source.chars() {
            if c.is_ascii() {
                ascii |= 1u128 << (c as u32);
            } else {
                wide.push(c);
            }
        }
        wide.sort_unstable();
        wide.dedup();

        Self {
            source,
            ascii,
            wide,
        }
    }

    /// The shared `" \t\n\r\f"` set
    pub fn default_set() -> &'static DelimiterSet {
        &DEFAULT_SET
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << (c as u32)) != 0
        } else {
            self.wide.binary_search(&c).is_ok()
        }
    }

    /// The string the set was built from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of distinct delimiter characters
    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.wide.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.wide.is_empty()
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::default_set().clone()
    }
}

impl PartialEq for DelimiterSet {
    fn eq(&self, other: &Self) -> bool {
        self.ascii == other.ascii && self.wide == other.wide
    }
}

impl Eq for DelimiterSet {}

impl fmt::Debug for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DelimiterSet").field(&self.source).finish()
    }
}

impl From<&str> for DelimiterSet {
    fn from(delimiters: &str) -> Self {
        Self::new(delimiters)
    }
}

impl From<String> for DelimiterSet {
    fn from(delimiters: String) -> Self {
        Self::new(delimiters)
    }
}
