//! Unicode general categories and their scalar tables.
//!
//! Every [`Category`] owns one static range table.
//! Major categories ([`GeneralCategory`]) are unions of their subcategories.

use anyhow::{Result, bail};
use phf::{Map, phf_map};

use crate::tables::{self, letter, mark, number, other, punctuation, separator, symbol};

/// One of the seven major Unicode general categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneralCategory {
    Letter,      // L
    Mark,        // M
    Number,      // N
    Punctuation, // P
    Symbol,      // S
    Separator,   // Z
    Other,       // C
}

impl GeneralCategory {
    pub const ALL: [GeneralCategory; 7] = [
        Self::Letter,
        Self::Mark,
        Self::Number,
        Self::Punctuation,
        Self::Symbol,
        Self::Separator,
        Self::Other,
    ];

    /// The one-letter abbreviation, e.g. `"L"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Letter => "L",
            Self::Mark => "M",
            Self::Number => "N",
            Self::Punctuation => "P",
            Self::Symbol => "S",
            Self::Separator => "Z",
            Self::Other => "C",
        }
    }

    /// Every subcategory with data, including `Cs` for [`GeneralCategory::Other`].
    pub fn subcategories(self) -> &'static [Category] {
        use Category::*;
        match self {
            Self::Letter => &[
                UppercaseLetter,
                LowercaseLetter,
                TitlecaseLetter,
                ModifierLetter,
                OtherLetter,
            ],
            Self::Mark => &[NonspacingMark, SpacingMark, EnclosingMark],
            Self::Number => &[DecimalNumber, LetterNumber, OtherNumber],
            Self::Punctuation => &[
                ConnectorPunctuation,
                DashPunctuation,
                OpenPunctuation,
                ClosePunctuation,
                InitialPunctuation,
                FinalPunctuation,
                OtherPunctuation,
            ],
            Self::Symbol => &[MathSymbol, CurrencySymbol, ModifierSymbol, OtherSymbol],
            Self::Separator => &[SpaceSeparator, LineSeparator, ParagraphSeparator],
            Self::Other => &[Control, Format, Surrogate, PrivateUse],
        }
    }

    /// The subcategories that make up the aggregate set for this category.
    ///
    /// Identical to [`subcategories`](Self::subcategories) except that
    /// `Other` leaves out `Cs`.
    pub fn aggregate_members(self) -> impl Iterator<Item = Category> {
        self.subcategories()
            .iter()
            .copied()
            .filter(|&cat| cat != Category::Surrogate)
    }
}

/// A Unicode general category subtype (`Lu`, `Nd`, `Zs`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    UppercaseLetter,      // Lu
    LowercaseLetter,      // Ll
    TitlecaseLetter,      // Lt
    ModifierLetter,       // Lm
    OtherLetter,          // Lo
    NonspacingMark,       // Mn
    SpacingMark,          // Mc
    EnclosingMark,        // Me
    DecimalNumber,        // Nd
    LetterNumber,         // Nl
    OtherNumber,          // No
    ConnectorPunctuation, // Pc
    DashPunctuation,      // Pd
    OpenPunctuation,      // Ps
    ClosePunctuation,     // Pe
    InitialPunctuation,   // Pi
    FinalPunctuation,     // Pf
    OtherPunctuation,     // Po
    MathSymbol,           // Sm
    CurrencySymbol,       // Sc
    ModifierSymbol,       // Sk
    OtherSymbol,          // So
    SpaceSeparator,       // Zs
    LineSeparator,        // Zl
    ParagraphSeparator,   // Zp
    Control,              // Cc
    Format,               // Cf
    Surrogate,            // Cs
    PrivateUse,           // Co
}

/// Subcategory abbreviations.  Keep grouped by major category.
const CATEGORY_ABBREVIATIONS: Map<&'static str, Category> = phf_map! {
    "Lu" => Category::UppercaseLetter,
    "Ll" => Category::LowercaseLetter,
    "Lt" => Category::TitlecaseLetter,
    "Lm" => Category::ModifierLetter,
    "Lo" => Category::OtherLetter,
    "Mn" => Category::NonspacingMark,
    "Mc" => Category::SpacingMark,
    "Me" => Category::EnclosingMark,
    "Nd" => Category::DecimalNumber,
    "Nl" => Category::LetterNumber,
    "No" => Category::OtherNumber,
    "Pc" => Category::ConnectorPunctuation,
    "Pd" => Category::DashPunctuation,
    "Ps" => Category::OpenPunctuation,
    "Pe" => Category::ClosePunctuation,
    "Pi" => Category::InitialPunctuation,
    "Pf" => Category::FinalPunctuation,
    "Po" => Category::OtherPunctuation,
    "Sm" => Category::MathSymbol,
    "Sc" => Category::CurrencySymbol,
    "Sk" => Category::ModifierSymbol,
    "So" => Category::OtherSymbol,
    "Zs" => Category::SpaceSeparator,
    "Zl" => Category::LineSeparator,
    "Zp" => Category::ParagraphSeparator,
    "Cc" => Category::Control,
    "Cf" => Category::Format,
    "Cs" => Category::Surrogate,
    "Co" => Category::PrivateUse,
};

const GENERAL_CATEGORY_ABBREVIATIONS: Map<&'static str, GeneralCategory> = phf_map! {
    "L" => GeneralCategory::Letter,
    "M" => GeneralCategory::Mark,
    "N" => GeneralCategory::Number,
    "P" => GeneralCategory::Punctuation,
    "S" => GeneralCategory::Symbol,
    "Z" => GeneralCategory::Separator,
    "C" => GeneralCategory::Other,
};

impl Category {
    pub const ALL: [Category; 29] = [
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
    ];

    /// Position of this category in [`Category::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Look up a subcategory by its two-letter abbreviation, e.g. `"Nd"`.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Category> {
        CATEGORY_ABBREVIATIONS.get(abbreviation).copied()
    }

    /// The two-letter abbreviation, e.g. `"Nd"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
        }
    }

    pub fn major(self) -> GeneralCategory {
        GeneralCategory::ALL
            .into_iter()
            .find(|major| major.subcategories().contains(&self))
            .unwrap_or(GeneralCategory::Other)
    }

    /// The static range table backing this category.
    pub fn ranges(self) -> &'static [(u32, u32)] {
        match self {
            Self::UppercaseLetter => letter::UPPERCASE,
            Self::LowercaseLetter => letter::LOWERCASE,
            Self::TitlecaseLetter => letter::TITLECASE,
            Self::ModifierLetter => letter::MODIFIER,
            Self::OtherLetter => letter::OTHER,
            Self::NonspacingMark => mark::NONSPACING,
            Self::SpacingMark => mark::SPACING_COMBINING,
            Self::EnclosingMark => mark::ENCLOSING,
            Self::DecimalNumber => number::DECIMAL_DIGIT,
            Self::LetterNumber => number::LETTER,
            Self::OtherNumber => number::OTHER,
            Self::ConnectorPunctuation => punctuation::CONNECTOR,
            Self::DashPunctuation => punctuation::DASH,
            Self::OpenPunctuation => punctuation::OPEN,
            Self::ClosePunctuation => punctuation::CLOSE,
            Self::InitialPunctuation => punctuation::INITIAL_QUOTE,
            Self::FinalPunctuation => punctuation::FINAL_QUOTE,
            Self::OtherPunctuation => punctuation::OTHER,
            Self::MathSymbol => symbol::MATH,
            Self::CurrencySymbol => symbol::CURRENCY,
            Self::ModifierSymbol => symbol::MODIFIER,
            Self::OtherSymbol => symbol::OTHER,
            Self::SpaceSeparator => separator::SPACE,
            Self::LineSeparator => separator::LINE,
            Self::ParagraphSeparator => separator::PARAGRAPH,
            Self::Control => other::CONTROL,
            Self::Format => other::FORMAT,
            Self::Surrogate => other::SURROGATE,
            Self::PrivateUse => other::PRIVATE_USE,
        }
    }

    /// The ordered scalar values assigned to this category.
    ///
    /// `Cs` yields surrogate code points, which have no `char` equivalent.
    pub fn scalars(self) -> impl Iterator<Item = u32> + 'static {
        tables::expand(self.ranges())
    }

    /// Number of scalar values in this category.
    pub fn scalar_count(self) -> usize {
        self.ranges()
            .iter()
            .map(|&(first, last)| (last - first + 1) as usize)
            .sum()
    }

    /// Whether the raw scalar value belongs to this category.
    pub fn contains_scalar(self, scalar: u32) -> bool {
        tables::table_contains(self.ranges(), scalar)
    }

    /// Classify a character.  Returns `None` for unassigned code points (`Cn`).
    pub fn of(ch: char) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|cat| cat.contains_scalar(ch as u32))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl std::fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Resolve a single abbreviation.  One-letter names expand to the aggregate
/// members of the major category.
fn name_to_categories(name: &str) -> Result<Vec<Category>> {
    if let Some(&cat) = CATEGORY_ABBREVIATIONS.get(name) {
        return Ok(vec![cat]);
    }
    GENERAL_CATEGORY_ABBREVIATIONS
        .get(name)
        .map(|major| major.aggregate_members().collect())
        .ok_or_else(|| anyhow::anyhow!("unknown general category '{}'", name))
}

/// Parse a whitespace- or comma-separated list of category abbreviations.
///
/// `"Lu Ll Nd"` yields three categories; `"L"` yields all five letter
/// subcategories.  Duplicates are removed and the result is sorted.
pub fn parse_category_names(names: &str) -> Result<Vec<Category>> {
    let mut categories = Vec::new();
    for name in names
        .split(|ch: char| ch.is_ascii_whitespace() || ch == ',')
        .filter(|name| !name.is_empty())
    {
        categories.extend(name_to_categories(name)?);
    }
    if categories.is_empty() {
        bail!("no general category names given");
    }
    categories.sort_unstable();
    categories.dedup();
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn abbreviation_round_trips() {
        for cat in Category::ALL {
            assert_eq!(Category::from_abbreviation(cat.abbreviation()), Some(cat));
        }
        assert_eq!(Category::from_abbreviation("Cn"), None);
        assert_eq!(Category::from_abbreviation("lu"), None);
    }

    #[test]
    fn abbreviation_starts_with_major() {
        for cat in Category::ALL {
            assert!(cat.abbreviation().starts_with(cat.major().abbreviation()));
        }
    }

    #[test]
    fn every_subcategory_has_one_major() {
        let total: usize = GeneralCategory::ALL
            .iter()
            .map(|major| major.subcategories().len())
            .sum();
        assert_eq!(total, Category::ALL.len());
    }

    #[test]
    fn other_aggregate_skips_surrogates() {
        let members = GeneralCategory::Other.aggregate_members().collect::<Vec<_>>();
        assert_eq!(
            members,
            vec![Category::Control, Category::Format, Category::PrivateUse]
        );
        assert_eq!(
            GeneralCategory::Letter.aggregate_members().count(),
            GeneralCategory::Letter.subcategories().len()
        );
    }

    #[test]
    fn scalars_are_ordered() {
        let zs = Category::SpaceSeparator.scalars().collect::<Vec<_>>();
        assert_eq!(zs.first(), Some(&0x20));
        assert_eq!(zs.len(), 17);
        assert!(zs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Category::SpaceSeparator.scalar_count(), 17);
        assert_eq!(Category::Surrogate.scalar_count(), 0x800);
    }

    #[test]
    fn repeated_calls_are_equal() {
        let a = Category::DecimalNumber.scalars().collect::<Vec<_>>();
        let b = Category::DecimalNumber.scalars().collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn classify_chars() {
        assert_eq!(Category::of('A'), Some(Category::UppercaseLetter));
        assert_eq!(Category::of('a'), Some(Category::LowercaseLetter));
        assert_eq!(Category::of('5'), Some(Category::DecimalNumber));
        assert_eq!(Category::of(' '), Some(Category::SpaceSeparator));
        assert_eq!(Category::of('\n'), Some(Category::Control));
        assert_eq!(Category::of('('), Some(Category::OpenPunctuation));
        assert_eq!(Category::of('€'), Some(Category::CurrencySymbol));
        assert_eq!(Category::of('\u{0378}'), None);
    }

    #[test]
    fn parse_names() {
        let cats = parse_category_names("Nd Lu, Lu").unwrap();
        assert_eq!(cats, vec![Category::UppercaseLetter, Category::DecimalNumber]);

        let cats = parse_category_names("Z").unwrap();
        assert_eq!(
            cats,
            vec![
                Category::SpaceSeparator,
                Category::LineSeparator,
                Category::ParagraphSeparator
            ]
        );

        let cats = parse_category_names("C").unwrap();
        assert!(!cats.contains(&Category::Surrogate));
        let cats = parse_category_names("Cs").unwrap();
        assert_eq!(cats, vec![Category::Surrogate]);
    }

    #[test]
    fn parse_names_rejects_unknown() {
        let msg = parse_category_names("Lu Xx").unwrap_err().to_string();
        assert!(msg.contains("unknown general category 'Xx'"), "got: {}", msg);

        let msg = parse_category_names("  ").unwrap_err().to_string();
        assert!(msg.contains("no general category"), "got: {}", msg);
    }

    #[test]
    fn display_uses_abbreviation() {
        assert_eq!(Category::TitlecaseLetter.to_string(), "Lt");
        assert_eq!(GeneralCategory::Separator.to_string(), "Z");
    }
}
