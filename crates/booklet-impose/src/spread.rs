//! Double-page spreads

use crate::types::{ImposeError, PageNumber, Result};
use std::fmt;
use std::str::FromStr;

/// Two adjacent source pages meant to be viewed side by side.
///
/// Always normalized so that `left + 1 == right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpreadPair {
    left: PageNumber,
    right: PageNumber,
}

impl SpreadPair {
    /// Create a spread from two adjacent pages given in either order
    pub fn new(a: PageNumber, b: PageNumber) -> Result<Self> {
        if a.abs_diff(b) != 1 {
            return Err(ImposeError::InvalidSpread {
                first: a,
                second: b,
            });
        }
        Ok(Self {
            left: a.min(b),
            right: a.max(b),
        })
    }

    pub fn left(&self) -> PageNumber {
        self.left
    }

    pub fn right(&self) -> PageNumber {
        self.right
    }

    /// Check if a page number is part of this spread
    pub fn contains(&self, page: PageNumber) -> bool {
        page == self.left || page == self.right
    }

    pub fn as_tuple(&self) -> (PageNumber, PageNumber) {
        (self.left, self.right)
    }
}

impl fmt::Display for SpreadPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}

impl FromStr for SpreadPair {
    type Err = ImposeError;

    /// Parse `"12-13"` (either order)
    fn from_str(s: &str) -> Result<Self> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| ImposeError::Config(format!("Invalid spread '{}'", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<PageNumber>()
                .map_err(|_| ImposeError::Config(format!("Invalid spread '{}'", s)))
        };
        SpreadPair::new(parse(a)?, parse(b)?)
    }
}
