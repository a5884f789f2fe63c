//! Membership tests of a character against one set or a list of sets.

use crate::charset::CharSet;

/// Test whether `ch` is a member of `set`.
pub fn is_member(ch: char, set: &CharSet) -> bool {
    set.contains(ch)
}

pub fn is_not_member(ch: char, set: &CharSet) -> bool {
    !is_member(ch, set)
}

/// Test whether `ch` is a member of at least one of `sets`.
///
/// Stops at the first set that contains `ch`.  An empty list matches nothing.
pub fn is_member_of_any<'a, I>(ch: char, sets: I) -> bool
where
    I: IntoIterator<Item = &'a CharSet>,
{
    sets.into_iter().any(|set| set.contains(ch))
}

/// Test whether `ch` is a member of none of `sets`.
pub fn is_member_of_none<'a, I>(ch: char, sets: I) -> bool
where
    I: IntoIterator<Item = &'a CharSet>,
{
    !is_member_of_any(ch, sets)
}

/// Method-call form of the membership tests, for `char`.
///
/// ```
/// use charset::{CharMembership, CharSet};
///
/// assert!('e'.is_in(CharSet::lowercase_letters()));
/// assert!('E'.is_not_in(CharSet::lowercase_letters()));
/// assert!('7'.is_in_any([CharSet::letters(), CharSet::decimal_digits()]));
/// ```
pub trait CharMembership {
    fn is_in(self, set: &CharSet) -> bool;

    fn is_not_in(self, set: &CharSet) -> bool;

    fn is_in_any<'a, I>(self, sets: I) -> bool
    where
        I: IntoIterator<Item = &'a CharSet>;

    fn is_in_none<'a, I>(self, sets: I) -> bool
    where
        I: IntoIterator<Item = &'a CharSet>;
}

impl CharMembership for char {
    fn is_in(self, set: &CharSet) -> bool {
        is_member(self, set)
    }

    fn is_not_in(self, set: &CharSet) -> bool {
        is_not_member(self, set)
    }

    fn is_in_any<'a, I>(self, sets: I) -> bool
    where
        I: IntoIterator<Item = &'a CharSet>,
    {
        is_member_of_any(self, sets)
    }

    fn is_in_none<'a, I>(self, sets: I) -> bool
    where
        I: IntoIterator<Item = &'a CharSet>,
    {
        is_member_of_none(self, sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_set() {
        assert!(is_member('e', CharSet::lowercase_letters()));
        assert!(is_not_member('E', CharSet::lowercase_letters()));
        assert!('e'.is_in(CharSet::lowercase_letters()));
        assert!('E'.is_not_in(CharSet::lowercase_letters()));
    }

    #[test]
    fn reversed_set() {
        let not_digits = CharSet::decimal_digits().reversed();
        assert!(is_member('x', &not_digits));
        assert!(is_not_member('5', &not_digits));
    }

    #[test]
    fn list_of_sets() {
        let sets = [CharSet::from("abc"), CharSet::from("xyz")];
        assert!(is_member_of_any('b', &sets));
        assert!(is_member_of_any('z', &sets));
        assert!(!is_member_of_any('m', &sets));
        assert!(is_member_of_none('m', &sets));
        assert!(!is_member_of_none('a', &sets));
        assert!('y'.is_in_any(&sets));
        assert!('q'.is_in_none(&sets));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let sets: [&CharSet; 0] = [];
        assert!(!is_member_of_any('a', sets));
        assert!(is_member_of_none('a', sets));
    }

    #[test]
    fn standard_sets_in_list() {
        let word = [CharSet::letters(), CharSet::decimal_digits()];
        assert!('Z'.is_in_any(word));
        assert!('4'.is_in_any(word));
        assert!('-'.is_in_none(word));
    }
}
