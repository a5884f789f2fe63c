//! Separator (Z) general category tables, Unicode 14.0.0.
//!
//! Each table is a sorted list of inclusive `(first, last)` scalar ranges.

/// Zs: Separator, Space (17 scalars).
#[rustfmt::skip]
pub const SPACE: &[(u32, u32)] = &[
    (0x0020, 0x0020), (0x00A0, 0x00A0), (0x1680, 0x1680), (0x2000, 0x200A),
    (0x202F, 0x202F), (0x205F, 0x205F), (0x3000, 0x3000),
];

/// Zl: Separator, Line (1 scalar).
#[rustfmt::skip]
pub const LINE: &[(u32, u32)] = &[
    (0x2028, 0x2028),
];

/// Zp: Separator, Paragraph (1 scalar).
#[rustfmt::skip]
pub const PARAGRAPH: &[(u32, u32)] = &[
    (0x2029, 0x2029),
];
