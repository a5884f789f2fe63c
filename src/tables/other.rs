//! Other (C) general category tables, Unicode 14.0.0.
//!
//! Each table is a sorted list of inclusive `(first, last)` scalar ranges.

/// Cc: Other, Control (65 scalars).
#[rustfmt::skip]
pub const CONTROL: &[(u32, u32)] = &[
    (0x0000, 0x001F), (0x007F, 0x009F),
];

/// Cf: Other, Format (163 scalars).
#[rustfmt::skip]
pub const FORMAT: &[(u32, u32)] = &[
    (0x00AD, 0x00AD), (0x0600, 0x0605), (0x061C, 0x061C), (0x06DD, 0x06DD),
    (0x070F, 0x070F), (0x0890, 0x0891), (0x08E2, 0x08E2), (0x180E, 0x180E),
    (0x200B, 0x200F), (0x202A, 0x202E), (0x2060, 0x2064), (0x2066, 0x206F),
    (0xFEFF, 0xFEFF), (0xFFF9, 0xFFFB), (0x110BD, 0x110BD), (0x110CD, 0x110CD),
    (0x13430, 0x13438), (0x1BCA0, 0x1BCA3), (0x1D173, 0x1D17A), (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

/// Cs: Other, Surrogate (2048 scalars).
#[rustfmt::skip]
pub const SURROGATE: &[(u32, u32)] = &[
    (0xD800, 0xDFFF),
];

/// Co: Other, Private Use (137468 scalars).
#[rustfmt::skip]
pub const PRIVATE_USE: &[(u32, u32)] = &[
    (0xE000, 0xF8FF), (0xF0000, 0xFFFFD), (0x100000, 0x10FFFD),
];
