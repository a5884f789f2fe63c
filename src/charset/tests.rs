use super::*;

fn set(chars: &str) -> CharSet {
    CharSet::from(chars)
}

#[test]
fn empty_contains_nothing() {
    let cs = CharSet::empty();
    assert!(!cs.contains('a'));
    assert!(cs.is_empty());
    assert!(!cs.is_reversed());
    assert_eq!(cs, CharSet::new());
}

#[test]
fn from_chars_dedups() {
    let cs = CharSet::from_chars("abca".chars());
    assert_eq!(cs.stored_len(), 3);
    assert!(cs.contains('a'));
    assert!(cs.contains('c'));
    assert!(!cs.contains('d'));
}

#[test]
fn from_single_char() {
    let cs = CharSet::from('\t');
    assert!(cs.contains('\t'));
    assert_eq!(cs.stored_len(), 1);
}

#[test]
fn from_scalars_drops_invalid_values() {
    let cs = CharSet::from_scalars([0x41, 0xD800, 0xDFFF, 0x110000, u32::MAX, 0x10FFFF]);
    assert_eq!(cs.stored_len(), 2);
    assert!(cs.contains('A'));
    assert!(cs.contains('\u{10FFFF}'));
}

#[test]
fn reverse_toggles_membership() {
    let mut cs = set("ab");
    cs.reverse();
    assert!(cs.is_reversed());
    assert!(!cs.contains('a'));
    assert!(cs.contains('z'));
    cs.reverse();
    assert!(cs.contains('a'));
    assert!(!cs.contains('z'));
}

#[test]
fn reversed_leaves_receiver_alone() {
    let cs = set("ab");
    let rev = cs.reversed();
    assert!(cs.contains('a'));
    assert!(!rev.contains('a'));
    assert!(rev.contains('c'));
    assert_eq!(rev.reversed(), cs);
}

#[test]
fn union_of_plain_sets() {
    let cs = set("ab").union(&set("bc"));
    assert_eq!(cs, set("abc"));
    assert!(!cs.is_reversed());
}

#[test]
fn union_with_reversed_operand() {
    // "ab" ∪ ¬"bc" == ¬"c"
    let cs = set("ab").union(&set("bc").reversed());
    assert!(cs.contains('a'));
    assert!(cs.contains('b'));
    assert!(!cs.contains('c'));
    assert!(cs.contains('z'));
    assert_eq!(cs, set("c").reversed());

    let cs = set("bc").reversed().union(&set("ab"));
    assert_eq!(cs, set("c").reversed());
}

#[test]
fn union_of_two_reversed_sets() {
    // ¬"ab" ∪ ¬"bc" == ¬"b"
    let cs = set("ab").reversed().union(&set("bc").reversed());
    assert_eq!(cs, set("b").reversed());
}

#[test]
fn intersection_cases() {
    assert_eq!(set("abc").intersection(&set("bcd")), set("bc"));
    // "abc" ∩ ¬"b" == "ac"
    assert_eq!(set("abc").intersection(&set("b").reversed()), set("ac"));
    assert_eq!(set("b").reversed().intersection(&set("abc")), set("ac"));
    // ¬"a" ∩ ¬"b" == ¬"ab"
    assert_eq!(
        set("a").reversed().intersection(&set("b").reversed()),
        set("ab").reversed()
    );
}

#[test]
fn symmetric_difference_cases() {
    assert_eq!(set("abc").symmetric_difference(&set("bcd")), set("ad"));
    // ¬"ab" Δ "bc" == ¬"ac"
    let cs = set("ab").reversed().symmetric_difference(&set("bc"));
    assert!(cs.is_reversed());
    assert!(!cs.contains('a'));
    assert!(cs.contains('b'));
    assert!(!cs.contains('c'));
    assert!(cs.contains('z'));
    // ¬"ab" Δ ¬"bc" == "ac"
    assert_eq!(
        set("ab").reversed().symmetric_difference(&set("bc").reversed()),
        set("ac")
    );
}

#[test]
fn difference_cases() {
    assert_eq!(set("abc").difference(&set("b")), set("ac"));
    assert_eq!(set("abc").difference(&set("b").reversed()), set("b"));
    assert_eq!(
        set("a").reversed().difference(&set("b")),
        set("ab").reversed()
    );
}

#[test]
fn form_variants_assign() {
    let mut cs = set("ab");
    cs.form_union(&set("c"));
    assert_eq!(cs, set("abc"));
    cs.form_intersection(&set("bcd"));
    assert_eq!(cs, set("bc"));
    cs.form_symmetric_difference(&set("cd"));
    assert_eq!(cs, set("bd"));
    cs.form_difference(&set("d"));
    assert_eq!(cs, set("b"));
    cs.form_union(&set("b").reversed());
    assert!(cs.contains('b'));
    assert!(cs.contains('x'));
}

#[test]
fn insert_reports_new_members() {
    let mut cs = CharSet::new();
    assert_eq!(cs.insert('x'), (true, 'x'));
    assert_eq!(cs.insert('x'), (false, 'x'));
    assert!(cs.contains('x'));
}

#[test]
fn insert_into_reversed_set() {
    let mut cs = set("x").reversed();
    assert_eq!(cs.insert('y'), (false, 'y'));
    assert_eq!(cs.insert('x'), (true, 'x'));
    assert!(cs.contains('x'));
    assert_eq!(cs.stored_len(), 0);
}

#[test]
fn remove_present_and_absent() {
    let mut cs = set("xy");
    assert_eq!(cs.remove('z'), None);
    assert_eq!(cs.stored_len(), 2);
    assert_eq!(cs.remove('x'), Some('x'));
    assert!(!cs.contains('x'));
    assert_eq!(cs.remove('x'), None);
}

#[test]
fn remove_from_reversed_set() {
    let mut cs = CharSet::new().reversed();
    assert_eq!(cs.remove('q'), Some('q'));
    assert!(!cs.contains('q'));
    assert!(cs.contains('r'));
}

#[test]
fn update_returns_existing_member() {
    let mut cs = set("a");
    assert_eq!(cs.update('a'), Some('a'));
    assert_eq!(cs.update('b'), None);
    assert!(cs.contains('b'));
}

#[test]
fn mutation_does_not_leak_into_clones() {
    let original = set("abc");
    let mut copy = original.clone();
    copy.insert('d');
    copy.remove('a');
    copy.form_union(&set("e"));
    assert_eq!(original, set("abc"));
    assert_eq!(copy, set("bcde"));
}

#[test]
fn equality_ignores_representation() {
    let all = CharSet::from_scalars(0..=0x10FFFF);
    assert_eq!(all.stored_len(), SCALAR_VALUE_COUNT);
    assert_eq!(all, CharSet::new().reversed());
    assert!(all.reversed().is_empty());
    assert_ne!(set("a"), set("a").reversed());
}

#[test]
fn operators_match_methods() {
    let a = set("ab");
    let b = set("bc");
    assert_eq!(&a + &b, a.union(&b));
    assert_eq!(&a | &b, a.union(&b));
    assert_eq!(&a & &b, a.intersection(&b));
    assert_eq!(&a ^ &b, a.symmetric_difference(&b));
    assert_eq!(&a - &b, a.difference(&b));
    assert_eq!(!&a, a.reversed());
    assert_eq!(a.clone() + b.clone() + set("d"), set("abcd"));

    let mut c = a.clone();
    c += &b;
    c -= set("a");
    assert_eq!(c, set("bc"));
    c &= set("c");
    c |= set("x");
    c ^= set("cz");
    assert_eq!(c, set("xz"));
    assert_eq!(!!c.clone(), c);
}

#[test]
fn extend_inserts() {
    let mut cs = set("a");
    cs.extend("bc".chars());
    assert_eq!(cs, set("abc"));
    let collected: CharSet = "xyz".chars().collect();
    assert_eq!(collected.stored_len(), 3);
}

#[test]
fn display_is_sorted() {
    assert_eq!(set("cab").to_string(), "[abc]");
    assert_eq!(set("x").reversed().to_string(), "[^x]");
    assert_eq!(set("]-").to_string(), "[\\-\\]]");
    assert_eq!(set("\t").to_string(), "[\\t]");
}

#[test]
fn debug_is_compact() {
    assert_eq!(
        format!("{:?}", set("ab").reversed()),
        "CharSet { stored: 2, is_reversed: true }"
    );
}

#[test]
fn predicate_works_with_str_patterns() {
    let digits = set("0123456789");
    assert_eq!("abc42def".find(digits.predicate()), Some(3));
    let ch = '7';
    let kind = match ch {
        c if digits.contains(c) => "digit",
        _ => "other",
    };
    assert_eq!(kind, "digit");
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    fn small_char() -> impl Strategy<Value = char> {
        prop::char::range('a', 'p')
    }

    fn any_set() -> impl Strategy<Value = CharSet> {
        (prop::collection::vec(small_char(), 0..12), any::<bool>()).prop_map(|(chars, reversed)| {
            let cs = CharSet::from_chars(chars);
            if reversed { cs.reversed() } else { cs }
        })
    }

    proptest! {
        #[test]
        fn reversed_negates_membership(s in any_set(), ch in small_char()) {
            prop_assert_eq!(s.reversed().contains(ch), !s.contains(ch));
        }

        #[test]
        fn double_reverse_is_identity(s in any_set(), ch in small_char()) {
            prop_assert_eq!(s.reversed().reversed().contains(ch), s.contains(ch));
            prop_assert_eq!(s.reversed().reversed(), s);
        }

        #[test]
        fn union_is_or(a in any_set(), b in any_set(), ch in small_char()) {
            prop_assert_eq!(a.union(&b).contains(ch), a.contains(ch) || b.contains(ch));
        }

        #[test]
        fn intersection_is_and(a in any_set(), b in any_set(), ch in small_char()) {
            prop_assert_eq!(a.intersection(&b).contains(ch), a.contains(ch) && b.contains(ch));
        }

        #[test]
        fn symmetric_difference_is_xor(a in any_set(), b in any_set(), ch in small_char()) {
            prop_assert_eq!(
                a.symmetric_difference(&b).contains(ch),
                a.contains(ch) != b.contains(ch)
            );
        }

        #[test]
        fn difference_is_and_not(a in any_set(), b in any_set(), ch in small_char()) {
            prop_assert_eq!(a.difference(&b).contains(ch), a.contains(ch) && !b.contains(ch));
        }

        #[test]
        fn de_morgan(a in any_set(), b in any_set()) {
            prop_assert_eq!(a.union(&b).reversed(), a.reversed().intersection(&b.reversed()));
            prop_assert_eq!(a.intersection(&b).reversed(), a.reversed().union(&b.reversed()));
        }

        #[test]
        fn insert_then_contains(mut s in any_set(), ch in small_char()) {
            let was_member = s.contains(ch);
            prop_assert_eq!(s.insert(ch), (!was_member, ch));
            prop_assert!(s.contains(ch));
        }

        #[test]
        fn remove_then_not_contains(mut s in any_set(), ch in small_char()) {
            let was_member = s.contains(ch);
            prop_assert_eq!(s.remove(ch), was_member.then_some(ch));
            prop_assert!(!s.contains(ch));
        }
    }
}
