//! Character classification by Unicode general category, with composable
//! character sets.
//!
//! A [`CharSet`] is a set of `char`s plus a complement flag.  Sets can be
//! built from literal characters, raw scalar values, general categories or
//! category abbreviations, and combined with union, intersection, symmetric
//! difference and complement.  All combinations are exact, including those
//! involving complemented sets.
//!
//! # Example
//!
//! ```rust
//! use charset::{CharMembership, CharSet, Category};
//!
//! let ident_start = CharSet::letters() + &CharSet::from('_');
//! let ident_rest = &ident_start | CharSet::decimal_digits();
//!
//! assert!('x'.is_in(&ident_start));
//! assert!('7'.is_not_in(&ident_start));
//! assert!('7'.is_in(&ident_rest));
//!
//! // Everything except ASCII quotes.
//! let unquoted = CharSet::from("\"'").reversed();
//! assert!(unquoted.contains('a'));
//! assert!(!unquoted.contains('"'));
//!
//! // Complement-aware composition: digits that are not ASCII.
//! let ascii = CharSet::from_scalars(0..0x80);
//! let wide_digits = CharSet::category(Category::DecimalNumber) & &ascii.reversed();
//! assert!(wide_digits.contains('\u{0663}'));
//! assert!(!wide_digits.contains('3'));
//! ```
//!
//! # Characters
//!
//! A character here is a single Unicode scalar value.  Multi-scalar grapheme
//! clusters (a base letter followed by combining marks, say) are classified
//! one scalar at a time.
//!
//! # Unicode version
//!
//! Category tables follow Unicode 14.0.0.  The surrogate subcategory `Cs` is
//! present as data but contributes no members: surrogates are not `char`s, and
//! the aggregate `Other` category is `Cc + Cf + Co`.

pub mod category;
mod charset;
mod membership;
mod standard;
mod tables;

pub use category::{Category, GeneralCategory, parse_category_names};
pub use charset::{CharSet, SCALAR_VALUE_COUNT};
pub use membership::{
    CharMembership, is_member, is_member_of_any, is_member_of_none, is_not_member,
};
