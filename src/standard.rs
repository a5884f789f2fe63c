//! Memoised category sets and the named standard sets.
//!
//! Nothing here is built until first use.  Each set is materialised exactly
//! once, even under concurrent first access, and then shared as
//! `&'static CharSet`.  Callers that want to modify one clone it first; the
//! clone copies its storage on the first write.

use std::sync::{LazyLock, OnceLock};

use anyhow::Result;
use tracing::debug;

use crate::category::{Category, GeneralCategory, parse_category_names};
use crate::charset::CharSet;

use Category::*;
use GeneralCategory::*;

static CATEGORY_SETS: [OnceLock<CharSet>; Category::ALL.len()] =
    [const { OnceLock::new() }; Category::ALL.len()];

static GENERAL_CATEGORY_SETS: [OnceLock<CharSet>; GeneralCategory::ALL.len()] =
    [const { OnceLock::new() }; GeneralCategory::ALL.len()];

/// Newline characters: LF, VT, FF, CR, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR.
const NEWLINES: [char; 7] = [
    '\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// Newlines added to `Z` for `whitespace_and_newlines`; U+2028/U+2029 are already in `Z`.
const LINE_BREAKS: [char; 5] = ['\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0085}'];

fn union_of<'a>(name: &str, sets: impl IntoIterator<Item = &'a CharSet>) -> CharSet {
    let mut result = CharSet::new();
    for set in sets {
        result.form_union(set);
    }
    debug!(set = name, chars = result.stored_len(), "built standard character set");
    result
}

macro_rules! standard_sets {
    ($($(#[$doc:meta])* $name:ident => $build:expr;)*) => {
        impl CharSet {
            $(
                $(#[$doc])*
                pub fn $name() -> &'static CharSet {
                    static SET: LazyLock<CharSet> = LazyLock::new(|| $build);
                    &SET
                }
            )*
        }
    };
}

standard_sets! {
    /// Letters, marks and numbers: `L + M + N`.
    alphanumerics => union_of("alphanumerics", [
        CharSet::general_category(Letter),
        CharSet::general_category(Mark),
        CharSet::general_category(Number),
    ]);
    /// Titlecase letters: `Lt`.
    capitalized_letters => union_of("capitalized_letters", [CharSet::category(TitlecaseLetter)]);
    /// Control and format characters: `Cc + Cf`.
    control_characters => union_of("control_characters", [
        CharSet::category(Control),
        CharSet::category(Format),
    ]);
    /// Decimal digits: `Nd`.
    decimal_digits => union_of("decimal_digits", [CharSet::category(DecimalNumber)]);
    /// Letters and marks: `L + M`.
    letters => union_of("letters", [
        CharSet::general_category(Letter),
        CharSet::general_category(Mark),
    ]);
    /// Lowercase letters: `Ll`.
    lowercase_letters => union_of("lowercase_letters", [CharSet::category(LowercaseLetter)]);
    /// U+000A..U+000D, U+0085, U+2028 and U+2029.
    newlines => union_of("newlines", [&CharSet::from_chars(NEWLINES)]);
    /// Combining marks: `M`.
    non_base_characters => union_of("non_base_characters", [CharSet::general_category(Mark)]);
    /// Punctuation: `P`.
    punctuation_characters => union_of("punctuation_characters", [
        CharSet::general_category(Punctuation),
    ]);
    /// Symbols: `S`.
    symbols => union_of("symbols", [CharSet::general_category(Symbol)]);
    /// Uppercase and titlecase letters: `Lu + Lt`.
    uppercase_letters => union_of("uppercase_letters", [
        CharSet::category(UppercaseLetter),
        CharSet::category(TitlecaseLetter),
    ]);
    /// Separators plus CHARACTER TABULATION: `Z + U+0009`.
    whitespace => union_of("whitespace", [
        CharSet::general_category(Separator),
        &CharSet::from('\t'),
    ]);
    /// Separators plus line breaks: `Z + U+000A..U+000D + U+0085`.
    whitespace_and_newlines => union_of("whitespace_and_newlines", [
        CharSet::general_category(Separator),
        &CharSet::from_chars(LINE_BREAKS),
    ]);
}

impl CharSet {
    /// The members of one general category subtype.
    ///
    /// `Cs` yields an empty set: surrogate code points are not `char`s.
    pub fn category(category: Category) -> &'static CharSet {
        CATEGORY_SETS[category.index()].get_or_init(|| {
            let set = CharSet::from_scalars(category.scalars());
            debug!(%category, chars = set.stored_len(), "built category set");
            set
        })
    }

    /// The union of a major category's aggregate members.
    ///
    /// [`GeneralCategory::Other`] is `Cc + Cf + Co`; `Cs` is left out.
    pub fn general_category(general: GeneralCategory) -> &'static CharSet {
        GENERAL_CATEGORY_SETS[general as usize].get_or_init(|| {
            let set = union_of(
                general.abbreviation(),
                general.aggregate_members().map(CharSet::category),
            );
            debug!(%general, chars = set.stored_len(), "built general category set");
            set
        })
    }

    /// Build a set from category abbreviations such as `"Lu Ll Nd"` or `"L, Zs"`.
    ///
    /// One-letter names select the whole major category.
    pub fn from_category_names(names: &str) -> Result<CharSet> {
        let categories = parse_category_names(names)?;
        Ok(union_of(
            names,
            categories.into_iter().map(CharSet::category),
        ))
    }
}

impl From<Category> for CharSet {
    fn from(category: Category) -> Self {
        CharSet::category(category).clone()
    }
}

impl From<GeneralCategory> for CharSet {
    fn from(general: GeneralCategory) -> Self {
        CharSet::general_category(general).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_letters() {
        assert!(CharSet::lowercase_letters().contains('e'));
        assert!(!CharSet::lowercase_letters().contains('E'));
        assert!(CharSet::lowercase_letters().contains('ß'));
    }

    #[test]
    fn uppercase_letters_include_titlecase() {
        assert!(CharSet::uppercase_letters().contains('E'));
        assert!(CharSet::uppercase_letters().contains('\u{01C5}'));
        assert!(!CharSet::uppercase_letters().contains('e'));
        assert!(CharSet::capitalized_letters().contains('\u{01C5}'));
        assert!(!CharSet::capitalized_letters().contains('E'));
    }

    #[test]
    fn decimal_digits() {
        assert!(CharSet::decimal_digits().contains('5'));
        assert!(!CharSet::decimal_digits().contains('x'));
        assert!(CharSet::decimal_digits().contains('\u{0663}')); // ARABIC-INDIC DIGIT THREE
        assert!(!CharSet::decimal_digits().contains('\u{00BD}'));
    }

    #[test]
    fn whitespace() {
        let ws = CharSet::whitespace();
        assert!(ws.contains(' '));
        assert!(ws.contains('\t'));
        assert!(ws.contains('\u{00A0}'));
        assert!(ws.contains('\u{2028}'));
        assert!(!ws.contains('a'));
        assert!(!ws.contains('\n'));
    }

    #[test]
    fn whitespace_and_newlines() {
        let ws = CharSet::whitespace_and_newlines();
        for ch in [' ', '\n', '\u{000B}', '\u{000C}', '\r', '\u{0085}', '\u{2029}'] {
            assert!(ws.contains(ch), "expected whitespace: {ch:?}");
        }
        assert!(!ws.contains('\t'));
        assert!(!ws.contains('x'));
    }

    #[test]
    fn newlines() {
        let nl = CharSet::newlines();
        assert_eq!(nl.stored_len(), 7);
        assert!(nl.contains('\n'));
        assert!(nl.contains('\u{2028}'));
        assert!(!nl.contains(' '));
    }

    #[test]
    fn alphanumerics_is_letters_marks_and_numbers() {
        let alnum = CharSet::alphanumerics();
        for ch in [
            'A', 'a', '\u{01C5}', '\u{02B0}', '\u{05D0}', // Lu Ll Lt Lm Lo
            '\u{0301}', '\u{0903}', '\u{20DD}', // Mn Mc Me
            '7', '\u{2160}', '\u{00BD}', // Nd Nl No
        ] {
            assert!(alnum.contains(ch), "expected alphanumeric: {ch:?}");
        }
        assert!(!alnum.contains(' '));
        assert!(!alnum.contains('!'));

        let composed = CharSet::letters().union(CharSet::general_category(Number));
        assert_eq!(*alnum, composed);
    }

    #[test]
    fn letters_include_marks() {
        assert!(CharSet::letters().contains('q'));
        assert!(CharSet::letters().contains('\u{0301}'));
        assert!(!CharSet::letters().contains('1'));
        assert!(CharSet::non_base_characters().contains('\u{0301}'));
        assert!(!CharSet::non_base_characters().contains('e'));
    }

    #[test]
    fn punctuation_and_symbols() {
        for ch in ['!', '(', ')', '-', '_', '«', '»', '.'] {
            assert!(CharSet::punctuation_characters().contains(ch), "{ch:?}");
        }
        for ch in ['+', '$', '^', '©'] {
            assert!(CharSet::symbols().contains(ch), "{ch:?}");
            assert!(!CharSet::punctuation_characters().contains(ch), "{ch:?}");
        }
    }

    #[test]
    fn control_characters_skip_private_use() {
        let cc = CharSet::control_characters();
        assert!(cc.contains('\u{0000}'));
        assert!(cc.contains('\u{007F}'));
        assert!(cc.contains('\u{200D}'));
        assert!(!cc.contains('\u{E000}'));
        assert!(!cc.contains('a'));
    }

    #[test]
    fn surrogate_category_is_empty() {
        assert!(CharSet::category(Surrogate).is_empty());
        assert!(Surrogate.scalar_count() > 0);
    }

    #[test]
    fn general_category_other_is_control_format_private_use() {
        let other = CharSet::general_category(Other);
        assert!(other.contains('\u{E000}'));
        assert!(other.contains('\u{0001}'));
        assert_eq!(
            other.stored_len(),
            Control.scalar_count() + Format.scalar_count() + PrivateUse.scalar_count()
        );
    }

    #[test]
    fn category_sets_match_tables() {
        for cat in Category::ALL {
            if cat == Surrogate {
                continue;
            }
            let set = CharSet::category(cat);
            assert_eq!(set.stored_len(), cat.scalar_count(), "{cat}");
            for scalar in cat.scalars().take(64) {
                let ch = char::from_u32(scalar).unwrap();
                assert!(set.contains(ch), "{cat} missing {scalar:#x}");
            }
        }
    }

    #[test]
    fn memoised_sets_are_shared() {
        assert!(std::ptr::eq(CharSet::letters(), CharSet::letters()));
        assert!(std::ptr::eq(
            CharSet::category(DecimalNumber),
            CharSet::category(DecimalNumber)
        ));
    }

    #[test]
    fn clones_of_standard_sets_are_independent() {
        let mut digits = CharSet::decimal_digits().clone();
        digits.insert('x');
        digits.remove('5');
        assert!(digits.contains('x'));
        assert!(!CharSet::decimal_digits().contains('x'));
        assert!(CharSet::decimal_digits().contains('5'));
    }

    #[test]
    fn from_category_names() {
        let cs = CharSet::from_category_names("Lu Nd").unwrap();
        assert!(cs.contains('Q'));
        assert!(cs.contains('3'));
        assert!(!cs.contains('q'));

        let cs = CharSet::from_category_names("Z").unwrap();
        assert_eq!(cs, *CharSet::general_category(Separator));

        let msg = CharSet::from_category_names("Lu Qq").unwrap_err().to_string();
        assert!(msg.contains("'Qq'"), "got: {}", msg);
    }

    #[test]
    fn from_category_conversions() {
        let mut cs: CharSet = DecimalNumber.into();
        cs.form_union(&CharSet::from(Separator));
        assert!(cs.contains('1'));
        assert!(cs.contains(' '));
        assert!(!CharSet::decimal_digits().contains(' '));
    }
}
