//! Static Unicode general category data.
//!
//! One module per major category, one range table per subcategory. Ranges
//! are inclusive and sorted by first scalar; no two ranges in a table overlap
//! or touch.

pub mod letter;
pub mod mark;
pub mod number;
pub mod other;
pub mod punctuation;
pub mod separator;
pub mod symbol;

/// Expand a range table into its ordered scalar sequence.
pub fn expand(ranges: &'static [(u32, u32)]) -> impl Iterator<Item = u32> + 'static {
    ranges.iter().flat_map(|&(first, last)| first..=last)
}

/// Whether `scalar` falls in one of the ranges of `table`.
pub fn table_contains(table: &[(u32, u32)], scalar: u32) -> bool {
    table
        .binary_search_by(|&(first, last)| {
            if last < scalar {
                std::cmp::Ordering::Less
            } else if first > scalar {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::category::Category;

    #[test]
    fn tables_are_sorted_and_disjoint() {
        for cat in Category::ALL {
            let table = cat.ranges();
            assert!(!table.is_empty(), "empty table: {cat:?}");
            for &(first, last) in table {
                assert!(first <= last, "inverted range in {cat:?}: {first:#x}..{last:#x}");
                assert!(last <= 0x10FFFF, "out of range in {cat:?}: {last:#x}");
            }
            for ((_, a_last), (b_first, _)) in table.iter().copied().tuple_windows() {
                assert!(a_last + 1 < b_first, "ranges touch or overlap in {cat:?}");
            }
        }
    }

    #[test]
    fn subcategories_do_not_overlap() {
        let mut all = Category::ALL
            .iter()
            .flat_map(|cat| cat.ranges().iter().copied())
            .collect::<Vec<_>>();
        all.sort_unstable();
        for ((_, a_last), (b_first, _)) in all.into_iter().tuple_windows() {
            assert!(a_last < b_first, "overlap at {b_first:#x}");
        }
    }

    #[test]
    fn expand_yields_every_scalar_in_order() {
        let scalars = expand(&[(0x30, 0x32), (0x41, 0x41)]).collect::<Vec<_>>();
        assert_eq!(scalars, vec![0x30, 0x31, 0x32, 0x41]);
    }

    #[test]
    fn table_contains_uses_inclusive_bounds() {
        let table = &[(0x30, 0x39), (0x41, 0x5A)];
        assert!(table_contains(table, 0x30));
        assert!(table_contains(table, 0x39));
        assert!(table_contains(table, 0x5A));
        assert!(!table_contains(table, 0x40));
        assert!(!table_contains(table, 0x2F));
        assert!(!table_contains(table, 0x5B));
    }

    #[test]
    fn known_assignments() {
        assert!(table_contains(letter::UPPERCASE, 'A' as u32));
        assert!(table_contains(letter::LOWERCASE, 'z' as u32));
        assert!(table_contains(letter::TITLECASE, 0x01C5));
        assert!(table_contains(mark::NONSPACING, 0x0301));
        assert!(table_contains(number::DECIMAL_DIGIT, '7' as u32));
        assert!(table_contains(number::LETTER, 0x2160));
        assert!(table_contains(number::OTHER, 0x00BD));
        assert!(table_contains(punctuation::OPEN, '(' as u32));
        assert!(table_contains(punctuation::CLOSE, ')' as u32));
        assert!(table_contains(punctuation::DASH, '-' as u32));
        assert!(table_contains(punctuation::CONNECTOR, '_' as u32));
        assert!(table_contains(symbol::MATH, '+' as u32));
        assert!(table_contains(symbol::CURRENCY, '$' as u32));
        assert!(table_contains(symbol::MODIFIER, '^' as u32));
        assert!(table_contains(separator::SPACE, ' ' as u32));
        assert!(table_contains(other::CONTROL, '\t' as u32));
        assert!(table_contains(other::FORMAT, 0x200D));
        assert!(table_contains(other::SURROGATE, 0xD800));
        assert!(table_contains(other::PRIVATE_USE, 0xE000));
    }
}
