/// Lower case letters, without glyphs that are easy to misread (`l` among
/// them).
pub const LOWERCASE: &str = "abcdefgijkmnopqrstwxyz";
/// Upper case letters, without `I` and `O`.
pub const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTWXYZ";
/// Digits, without `0` and `1`.
pub const NUMERIC: &str = "23456789";
/// Special symbols used when the caller doesn't supply their own.
pub const DEFAULT_SPECIAL: &str = "*$-+?_&=!%{}/";

/// The ordered list of character pools that participate in one generation
/// call. The last pool in the list is the special symbol pool; generated
/// passwords never start with a character from it. An empty pool is valid
/// input and simply sits out the draw.
#[derive(Debug, Clone)]
pub struct PoolSet {
    pools: Vec<Vec<char>>,
}

impl PoolSet {
    /// The three default alphanumeric classes plus a caller supplied special
    /// class.
    pub fn with_special(special_chars: &str) -> Self {
        Self::from_classes(&[LOWERCASE, UPPERCASE, NUMERIC, special_chars])
    }

    /// The default classes with no special symbols at all.
    pub fn alphanumeric() -> Self {
        Self::with_special("")
    }

    /// Builds a pool set from arbitrary character classes, in order. The
    /// last class is treated as the special pool. Classes must not share
    /// characters with each other.
    pub fn from_classes(classes: &[&str]) -> Self {
        Self {
            pools: classes.iter().map(|c| c.chars().collect()).collect(),
        }
    }

    /// The number of pools that can contribute at least one character.
    pub fn non_empty_pools(&self) -> usize {
        self.pools.iter().filter(|p| !p.is_empty()).count()
    }

    /// True if `c` belongs to the special pool.
    pub fn is_special(&self, c: char) -> bool {
        self.pools.last().map_or(false, |p| p.contains(&c))
    }

    /// True if `c` belongs to any pool in the set.
    pub fn contains(&self, c: char) -> bool {
        self.pools.iter().any(|p| p.contains(&c))
    }

    pub(crate) fn pools(&self) -> &[Vec<char>] {
        &self.pools
    }
}

impl Default for PoolSet {
    fn default() -> Self {
        Self::with_special(DEFAULT_SPECIAL)
    }
}

#[cfg(test)]
#[path = "tests/pools.rs"]
mod pools;
