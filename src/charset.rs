//! The [`CharSet`] value type: a set of characters with a complement flag.
//!
//! Membership of `ch` is `storage.contains(ch) != is_reversed`.  Complement
//! is therefore O(1); the flag is the only way a set expresses negation.
//!
//! Composition is complement-aware.  Every binary operation matches on the
//! polarity of both operands and rewrites the result so that, for all `ch`,
//! `a.union(&b).contains(ch) == a.contains(ch) || b.contains(ch)` and
//! likewise for intersection, symmetric difference and difference.
//!
//! | `a` reversed | `b` reversed | `a ∪ b`          | `a ∩ b`          |
//! |--------------|--------------|------------------|------------------|
//! | no           | no           | `A ∪ B`          | `A ∩ B`          |
//! | yes          | yes          | `¬(A ∩ B)`       | `¬(A ∪ B)`       |
//! | no           | yes          | `¬(B − A)`       | `A − B`          |
//! | yes          | no           | `¬(A − B)`       | `B − A`          |
//!
//! Storage is shared between clones and copied on the first mutation, so a
//! mutated set never affects another value, including the shared standard
//! sets.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

/// Number of Unicode scalar values, i.e. the number of distinct `char`s.
pub const SCALAR_VALUE_COUNT: usize = 0x110000 - 0x800;

/// A set of characters, possibly complemented.
///
/// A character is a single Unicode scalar value (`char`).  Grapheme clusters
/// made of several scalars are not members of any set; test their scalars
/// individually.
#[derive(Clone, Default)]
pub struct CharSet {
    storage: Arc<HashSet<char>>,
    is_reversed: bool,
}

impl CharSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of [`CharSet::new`].
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_parts(storage: HashSet<char>, is_reversed: bool) -> Self {
        Self {
            storage: Arc::new(storage),
            is_reversed,
        }
    }

    /// Create a set holding exactly the given characters.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self::from_parts(chars.into_iter().collect(), false)
    }

    /// Create a set from raw scalar values.
    ///
    /// Values that are not Unicode scalars (surrogates, anything above
    /// `0x10FFFF`) are skipped without error.
    pub fn from_scalars<I: IntoIterator<Item = u32>>(scalars: I) -> Self {
        Self::from_chars(scalars.into_iter().filter_map(char::from_u32))
    }

    /// Test whether `ch` is a member of this set.
    pub fn contains(&self, ch: char) -> bool {
        self.storage.contains(&ch) != self.is_reversed
    }

    /// A predicate closure for `contains`, usable as a `str` pattern.
    ///
    /// ```
    /// use charset::CharSet;
    ///
    /// let ws = CharSet::whitespace();
    /// assert_eq!("  hi\t".trim_matches(ws.predicate()), "hi");
    /// ```
    pub fn predicate(&self) -> impl Fn(char) -> bool + '_ {
        move |ch| self.contains(ch)
    }

    /// Complement this set in place.
    pub fn reverse(&mut self) {
        self.is_reversed = !self.is_reversed;
    }

    /// Return the complement of this set.
    pub fn reversed(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            is_reversed: !self.is_reversed,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    /// Number of explicitly stored characters.
    ///
    /// For a reversed set these are the characters that are *not* members.
    pub fn stored_len(&self) -> usize {
        self.storage.len()
    }

    /// Iterate the explicitly stored characters in arbitrary order.
    pub fn iter_stored(&self) -> impl Iterator<Item = char> + '_ {
        self.storage.iter().copied()
    }

    /// Whether no character at all is a member.
    pub fn is_empty(&self) -> bool {
        if self.is_reversed {
            self.storage.len() == SCALAR_VALUE_COUNT
        } else {
            self.storage.is_empty()
        }
    }

    pub fn union(&self, other: &CharSet) -> CharSet {
        let (a, b) = (&*self.storage, &*other.storage);
        match (self.is_reversed, other.is_reversed) {
            (false, false) => Self::from_parts(a.union(b).copied().collect(), false),
            (true, true) => Self::from_parts(a.intersection(b).copied().collect(), true),
            (false, true) => Self::from_parts(b.difference(a).copied().collect(), true),
            (true, false) => Self::from_parts(a.difference(b).copied().collect(), true),
        }
    }

    pub fn intersection(&self, other: &CharSet) -> CharSet {
        let (a, b) = (&*self.storage, &*other.storage);
        match (self.is_reversed, other.is_reversed) {
            (false, false) => Self::from_parts(a.intersection(b).copied().collect(), false),
            (true, true) => Self::from_parts(a.union(b).copied().collect(), true),
            (false, true) => Self::from_parts(a.difference(b).copied().collect(), false),
            (true, false) => Self::from_parts(b.difference(a).copied().collect(), false),
        }
    }

    /// Characters in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &CharSet) -> CharSet {
        let storage = self
            .storage
            .symmetric_difference(&other.storage)
            .copied()
            .collect();
        Self::from_parts(storage, self.is_reversed != other.is_reversed)
    }

    /// Characters in `self` but not in `other`.
    pub fn difference(&self, other: &CharSet) -> CharSet {
        self.intersection(&other.reversed())
    }

    pub fn form_union(&mut self, other: &CharSet) {
        if !self.is_reversed && !other.is_reversed {
            Arc::make_mut(&mut self.storage).extend(other.storage.iter().copied());
        } else {
            *self = self.union(other);
        }
    }

    pub fn form_intersection(&mut self, other: &CharSet) {
        *self = self.intersection(other);
    }

    pub fn form_symmetric_difference(&mut self, other: &CharSet) {
        *self = self.symmetric_difference(other);
    }

    pub fn form_difference(&mut self, other: &CharSet) {
        *self = self.difference(other);
    }

    /// Make `ch` a member.
    ///
    /// Returns `(true, ch)` if it was not a member before, `(false, ch)` if it
    /// already was.
    pub fn insert(&mut self, ch: char) -> (bool, char) {
        if self.contains(ch) {
            return (false, ch);
        }
        let storage = Arc::make_mut(&mut self.storage);
        if self.is_reversed {
            storage.remove(&ch);
        } else {
            storage.insert(ch);
        }
        (true, ch)
    }

    /// Make `ch` a non-member, returning it if it was a member.
    pub fn remove(&mut self, ch: char) -> Option<char> {
        if !self.contains(ch) {
            return None;
        }
        let storage = Arc::make_mut(&mut self.storage);
        if self.is_reversed {
            storage.insert(ch);
        } else {
            storage.remove(&ch);
        }
        Some(ch)
    }

    /// Make `ch` a member, returning it if it already was one.
    pub fn update(&mut self, ch: char) -> Option<char> {
        let (inserted, ch) = self.insert(ch);
        if inserted { None } else { Some(ch) }
    }
}

/// Sets are equal when they have the same members, whatever their polarity.
impl PartialEq for CharSet {
    fn eq(&self, other: &Self) -> bool {
        if self.is_reversed == other.is_reversed {
            Arc::ptr_eq(&self.storage, &other.storage) || self.storage == other.storage
        } else {
            self.storage.len() + other.storage.len() == SCALAR_VALUE_COUNT
                && self.storage.is_disjoint(&other.storage)
        }
    }
}

impl Eq for CharSet {}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharSet")
            .field("stored", &self.storage.len())
            .field("is_reversed", &self.is_reversed)
            .finish()
    }
}

/// Renders a bracketed class with sorted members, e.g. `[abc]` or `[^ \t]`.
impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .storage
            .iter()
            .sorted()
            .map(|&ch| match ch {
                ']' | '^' | '-' => format!("\\{ch}"),
                _ => ch.escape_debug().to_string(),
            })
            .join("");
        let negation = if self.is_reversed { "^" } else { "" };
        write!(f, "[{negation}{body}]")
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.insert(ch);
        }
    }
}

impl From<char> for CharSet {
    fn from(ch: char) -> Self {
        Self::from_chars([ch])
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        Self::from_chars(chars.chars())
    }
}

macro_rules! set_operator {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $set_fn:ident, $form_fn:ident) => {
        impl std::ops::$op for CharSet {
            type Output = CharSet;
            fn $method(self, rhs: CharSet) -> CharSet {
                self.$set_fn(&rhs)
            }
        }

        impl std::ops::$op<&CharSet> for &CharSet {
            type Output = CharSet;
            fn $method(self, rhs: &CharSet) -> CharSet {
                self.$set_fn(rhs)
            }
        }

        impl std::ops::$assign_op<&CharSet> for CharSet {
            fn $assign_method(&mut self, rhs: &CharSet) {
                self.$form_fn(rhs);
            }
        }

        impl std::ops::$assign_op for CharSet {
            fn $assign_method(&mut self, rhs: CharSet) {
                self.$form_fn(&rhs);
            }
        }
    };
}

set_operator!(Add, add, AddAssign, add_assign, union, form_union);
set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union, form_union);
set_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection, form_intersection);
set_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, symmetric_difference, form_symmetric_difference);
set_operator!(Sub, sub, SubAssign, sub_assign, difference, form_difference);

impl std::ops::Not for CharSet {
    type Output = CharSet;
    fn not(mut self) -> CharSet {
        self.reverse();
        self
    }
}

impl std::ops::Not for &CharSet {
    type Output = CharSet;
    fn not(self) -> CharSet {
        self.reversed()
    }
}

#[cfg(test)]
mod tests;
