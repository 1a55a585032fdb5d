//! Context discrimination: field matchers, map-key echoes, element indexes,
//! complex parts, and callback precedence.

use refill::{options, Complex32, Complex64, Generator, KeyEcho};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

const INTVAL: i64 = 1;
const INTVAL2: i64 = 17;
const INTVAL3: i64 = 18;

refill::reflect_newtype! {
    #[derive(Debug, Default, PartialEq)]
    struct CustInt(i64);
}

refill::reflect_struct! {
    #[derive(Debug, Default)]
    struct Matched {
        int: i64,
        int2: i64,
        cust_int: CustInt,
        string1: String,
        string2: String,
    }
}

refill::reflect_struct! {
    #[derive(Debug, Default)]
    struct Unmatched {
        int: i64,
    }
}

refill::reflect_struct! {
    #[derive(Debug, Default)]
    struct Holder {
        matched: Matched,
        unmatched: Unmatched,
    }
}

#[test]
fn field_discrimination_routes_values() {
    let mut generator = Generator::new()
        .with_options([
            options::i64_fn(|m| {
                if m.matches_field_of::<Matched>(&["int"]) {
                    Some((INTVAL2, INTVAL2))
                } else if m.matches_a::<CustInt>() {
                    Some((INTVAL3, INTVAL3))
                } else {
                    Some((INTVAL, INTVAL))
                }
            }),
            options::string_fn(|m| {
                if m.matches_field_of::<Matched>(&["string1"]) {
                    Some("TESTING".to_string())
                } else {
                    None
                }
            }),
        ])
        .unwrap();

    let mut h = Holder::default();
    generator.fill(&mut h).unwrap();

    assert_eq!(h.unmatched.int, INTVAL);
    assert_eq!(h.matched.int, INTVAL2);
    assert_eq!(h.matched.int2, INTVAL);
    assert_eq!(h.matched.cust_int, CustInt(INTVAL3));
    assert_eq!(h.matched.string1, "TESTING");
}

#[test]
fn last_matching_callback_wins() {
    let mut generator = Generator::new()
        .with_options([
            options::i64_fn(|_| Some((1, 1))),
            options::i64_fn(|_| Some((2, 2))),
        ])
        .unwrap();

    let mut x = 0i64;
    generator.fill(&mut x).unwrap();
    assert_eq!(x, 2);
}

#[test]
fn non_matching_callbacks_leave_earlier_matches() {
    let mut generator = Generator::new()
        .with_options([
            options::i64_fn(|_| Some((1, 1))),
            options::i64_fn(|_| None),
        ])
        .unwrap();

    let mut x = 0i64;
    generator.fill(&mut x).unwrap();
    assert_eq!(x, 1);
}

const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";
const GREEK: &str = "αβγδεζηθικλμνξοπρστυφχψω";
const CYRILLIC: &str = "абвгдежзиклмнопрстуфхцчшщэюя";

fn script_alphabet(name: &str) -> Option<&'static str> {
    match name {
        "Latin" => Some(LATIN),
        "Greek" => Some(GREEK),
        "Cyrillic" => Some(CYRILLIC),
        _ => None,
    }
}

refill::reflect_struct! {
    #[derive(Debug, Default)]
    struct Scripts {
        script_map: HashMap<String, String>,
    }
}

#[test]
fn map_values_follow_their_keys_alphabet() {
    static NEXT_SCRIPT: AtomicUsize = AtomicUsize::new(0);
    const SCRIPTS: [&str; 3] = ["Latin", "Greek", "Cyrillic"];

    let mut generator = Generator::new()
        .with_options([
            options::string_fn(|m| {
                if m.is_map_key() {
                    let i = NEXT_SCRIPT.fetch_add(1, Ordering::Relaxed) % SCRIPTS.len();
                    Some(SCRIPTS[i].to_string())
                } else {
                    None
                }
            }),
            options::alphabet_fn(|m| {
                if !m.is_map_value() {
                    return None;
                }
                m.map_key()
                    .and_then(KeyEcho::as_str)
                    .and_then(script_alphabet)
                    .map(|a| a.chars().collect())
            }),
            options::map_len_range(3, 3),
            options::string_len_range(1, 24),
        ])
        .unwrap();

    let mut s = Scripts::default();
    generator.fill(&mut s).unwrap();

    assert_eq!(s.script_map.len(), 3);
    for (key, value) in &s.script_map {
        let alphabet = script_alphabet(key).expect("unexpected key");
        assert!(!value.is_empty());
        assert!(
            value.chars().all(|c| alphabet.contains(c)),
            "value {value:?} escapes the {key} alphabet"
        );
    }
}

#[test]
fn slice_elements_can_depend_on_index() {
    let mut generator = Generator::new()
        .with_options([
            options::slice_len_range(16, 16),
            options::i64_fn(|m| {
                if m.is_slice_element() {
                    let i = m.index().unwrap_or_default() as i64;
                    Some((i, i))
                } else {
                    None
                }
            }),
        ])
        .unwrap();

    let mut v: Vec<i64> = Vec::new();
    generator.fill(&mut v).unwrap();
    assert_eq!(v.len(), 16);
    for (i, x) in v.iter().enumerate() {
        assert_eq!(*x, i as i64);
    }
}

#[test]
fn array_elements_can_depend_on_inverse_index() {
    let mut generator = Generator::new()
        .with_options([options::i64_fn(|m| {
            if m.is_array_element() {
                let n = m.length().unwrap_or_default() as i64;
                let i = m.index().unwrap_or_default() as i64;
                Some((n - i, n - i))
            } else {
                None
            }
        })])
        .unwrap();

    let mut arr = [0i64; 10];
    generator.fill(&mut arr).unwrap();
    for (i, x) in arr.iter().enumerate() {
        assert_eq!(*x, 10 - i as i64);
    }
}

#[test]
fn complex_parts_resolve_separately() {
    const RE: f64 = 2.5;
    const IM: f64 = -7.25;

    let mut generator = Generator::new()
        .with_options([options::f64_fn(|m| {
            if m.is_real_part() {
                Some((RE, RE))
            } else if m.is_imag_part() {
                Some((IM, IM))
            } else {
                None
            }
        })])
        .unwrap();

    let mut z = Complex64::default();
    generator.fill(&mut z).unwrap();
    assert_eq!(z, Complex64::new(RE, IM));
}

#[test]
fn complex32_parts_use_the_f32_resolver() {
    let mut generator = Generator::new()
        .with_options([options::f32_fn(|m| {
            if m.is_real_part() {
                Some((1.5, 1.5))
            } else if m.is_imag_part() {
                Some((-0.5, -0.5))
            } else {
                None
            }
        })])
        .unwrap();

    let mut z = Complex32::default();
    generator.fill(&mut z).unwrap();
    assert_eq!(z, Complex32::new(1.5, -0.5));
}

refill::reflect_struct! {
    #[derive(Debug, Default)]
    struct Inner {
        word: String,
    }
}

refill::reflect_struct! {
    #[derive(Debug, Default)]
    struct Nested {
        by_name: HashMap<String, Inner>,
    }
}

#[test]
fn parent_exposes_two_levels_of_context() {
    let mut generator = Generator::new()
        .with_options([
            options::string_fn(|m| {
                if m.is_map_key() {
                    Some("keyed".to_string())
                } else {
                    None
                }
            }),
            options::alphabet_fn(|m| {
                let keyed_parent = m
                    .parent()
                    .and_then(|p| p.map_key())
                    .and_then(KeyEcho::as_str)
                    == Some("keyed");
                if keyed_parent {
                    Some("xyz".chars().collect())
                } else {
                    None
                }
            }),
            options::map_len_range(1, 1),
            options::string_len_range(5, 5),
        ])
        .unwrap();

    let mut nested = Nested::default();
    generator.fill(&mut nested).unwrap();

    assert_eq!(nested.by_name.len(), 1);
    let inner = nested.by_name.get("keyed").expect("key should be pinned");
    assert_eq!(inner.word.chars().count(), 5);
    assert!(inner.word.chars().all(|c| "xyz".contains(c)));
}

#[test]
fn length_contexts_are_discriminable() {
    let mut generator = Generator::new()
        .with_options([
            options::string_len_fn(|m| {
                if m.is_string_length() {
                    Some((2, 2))
                } else {
                    None
                }
            }),
            options::slice_len_fn(|m| {
                if m.is_slice_length() {
                    Some((3, 3))
                } else {
                    None
                }
            }),
            options::map_len_fn(|m| if m.is_map_length() { Some((4, 4)) } else { None }),
        ])
        .unwrap();

    let mut text = String::new();
    generator.fill(&mut text).unwrap();
    assert_eq!(text.chars().count(), 2);

    let mut items: Vec<bool> = Vec::new();
    generator.fill(&mut items).unwrap();
    assert_eq!(items.len(), 3);

    let mut table: HashMap<u32, bool> = HashMap::new();
    generator.fill(&mut table).unwrap();
    assert_eq!(table.len(), 4);
}

refill::reflect_struct! {
    #[derive(Debug, Default)]
    struct MixedKeys {
        by_id: HashMap<u32, String>,
    }
}

#[test]
fn numeric_map_keys_echo_to_values() {
    let mut generator = Generator::new()
        .with_options([
            options::u32_fn(|m| if m.is_map_key() { Some((7, 7)) } else { None }),
            options::string_fn(|m| match m.map_key() {
                Some(KeyEcho::U64(7)) => Some("seven".to_string()),
                _ => None,
            }),
            options::map_len_range(1, 1),
        ])
        .unwrap();

    let mut mixed = MixedKeys::default();
    generator.fill(&mut mixed).unwrap();
    assert_eq!(mixed.by_id.get(&7).map(String::as_str), Some("seven"));
}
