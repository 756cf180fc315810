//! Case-insensitive string helpers.
//!
//! Provider types, item specs and rendered dependency ids are compared
//! ignoring case everywhere. Equality and hashing both fold through
//! `char::to_lowercase` so that values which compare equal also hash equal.

use std::hash::Hasher;

/// Returns true if both strings are equal ignoring case
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    folded(a).eq(folded(b))
}

/// Feeds the case-folded characters of `value` into `state`
///
/// A terminator is written after the characters so that adjacent fields
/// hashed one after another cannot collide by shifting characters between
/// them.
pub fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    for c in folded(value) {
        state.write_u32(c as u32);
    }
    state.write_u8(0xff);
}

/// Strips `prefix` from the start of `value` ignoring case
///
/// Returns the remainder of `value` on a match.
pub fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = value.char_indices();
    let mut expected = prefix.chars();

    loop {
        let Some(p) = expected.next() else {
            let offset = rest.next().map(|(i, _)| i).unwrap_or(value.len());
            return Some(&value[offset..]);
        };
        let (_, c) = rest.next()?;
        if c != p && !c.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
    }
}

fn folded(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}
