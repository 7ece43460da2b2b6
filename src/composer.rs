pub use crate::error::{Error, Result};
use crate::pools::PoolSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use zeroize::Zeroizing;

/// Bounds used by [`generate`] when the caller has no length preference.
pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Generates a password of 8 to 10 characters with the default pool set.
pub fn generate() -> Result<String> {
    generate_from_pools(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH, &PoolSet::default())
}

/// Generates a password of exactly `length` characters, with
/// `special_chars` as the special symbol pool. An empty string yields an
/// alphanumeric password.
pub fn generate_exact(length: usize, special_chars: &str) -> Result<String> {
    generate_between(length, length, special_chars)
}

/// Generates a password of `min_length` to `max_length` characters, with
/// `special_chars` as the special symbol pool.
pub fn generate_between(
    min_length: usize,
    max_length: usize,
    special_chars: &str,
) -> Result<String> {
    generate_from_pools(min_length, max_length, &PoolSet::with_special(special_chars))
}

/// Generates a password from an arbitrary pool set.
///
/// The length is drawn uniformly from `min_length..=max_length`. Every
/// non-empty pool is visited once before any pool is visited again, so each
/// of them contributes at least one character whenever the length allows it.
/// The password never starts with a special symbol, except when the special
/// pool is the only one with characters in it; the start constraint can't be
/// met then and is waived.
///
/// Each call seeds its own generator from operating system entropy, so
/// concurrent callers never share rng state.
pub fn generate_from_pools(
    min_length: usize,
    max_length: usize,
    set: &PoolSet,
) -> Result<String> {
    if min_length == 0 || max_length == 0 || min_length > max_length {
        return Err(Error::InvalidLengthRange {
            min: min_length,
            max: max_length,
        });
    }

    compose(min_length, max_length, set, &mut StdRng::from_entropy())
}

fn compose(
    min_length: usize,
    max_length: usize,
    set: &PoolSet,
    rng: &mut impl Rng,
) -> Result<String> {
    // Working copies, the picks below permute them in place.
    let mut groups: Vec<Vec<char>> = set
        .pools()
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect();
    if groups.is_empty() {
        return Err(Error::EmptyPoolSet);
    }

    let length = if min_length < max_length {
        rng.gen_range(min_length..=max_length)
    } else {
        min_length
    };

    // Sampling without replacement over two levels: which group supplies the
    // next character, and which character of that group. Both are tracked as
    // an unused prefix that shrinks with every pick and rewinds to the full
    // size once exhausted.
    let mut chars_left: Vec<usize> = groups.iter().map(Vec::len).collect();
    let mut group_order: Vec<usize> = (0..groups.len()).collect();
    let mut groups_left = group_order.len();

    let mut password = Zeroizing::new(Vec::with_capacity(length));

    for _ in 0..length {
        let order_idx = if groups_left == 1 {
            0
        } else {
            rng.gen_range(0..groups_left)
        };
        let group = group_order[order_idx];

        let left = chars_left[group];
        let char_idx = if left == 1 { 0 } else { rng.gen_range(0..left) };
        password.push(groups[group][char_idx]);

        // Swap the pick out of the unused prefix instead of removing it.
        if left == 1 {
            chars_left[group] = groups[group].len();
        } else {
            groups[group].swap(char_idx, left - 1);
            chars_left[group] = left - 1;
        }
        if groups_left == 1 {
            groups_left = group_order.len();
        } else {
            group_order.swap(order_idx, groups_left - 1);
            groups_left -= 1;
        }
    }

    // The first character must not come from the special pool. Trade places
    // with the earliest character that isn't special, if there is one.
    if length > 1 && set.is_special(password[0]) {
        if let Some(idx) = password.iter().position(|c| !set.is_special(*c)) {
            password.swap(0, idx);
        }
    }

    Ok(password.iter().collect())
}

#[cfg(test)]
#[path = "tests/composer.rs"]
mod composer;
