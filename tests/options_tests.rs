//! Option validation, application order, and source injection.

use rand_core::RngCore;
use refill::{options, Error, GenOption, Generator, Prng};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn invalid_options_are_rejected() {
    let scenarios: Vec<(&str, GenOption, Error)> = vec![
        (
            "negative bool true ratio",
            options::bool_true_ratio(-1.0),
            Error::InvalidRatio {
                option: "bool_true_ratio",
            },
        ),
        (
            "excessive pointer nil ratio",
            options::pointer_nil_ratio(1.5),
            Error::InvalidRatio {
                option: "pointer_nil_ratio",
            },
        ),
        (
            "inverted integer range",
            options::i64_range(5, 3),
            Error::InvertedRange { option: "i64_range" },
        ),
        (
            "inverted length range",
            options::slice_len_range(4, 1),
            Error::InvertedRange {
                option: "slice_len_range",
            },
        ),
        (
            "float range with NaN",
            options::f64_range(f64::NAN, 1.0),
            Error::NonFiniteRange { option: "f64_range" },
        ),
        (
            "float range with infinity",
            options::f64_range(f64::INFINITY, 1.0),
            Error::NonFiniteRange { option: "f64_range" },
        ),
        (
            "float range with negative infinity",
            options::f32_range(f32::NEG_INFINITY, 1.0),
            Error::NonFiniteRange { option: "f32_range" },
        ),
        (
            "empty alphabet",
            options::alphabet(""),
            Error::EmptyAlphabet { option: "alphabet" },
        ),
    ];

    for (name, option, expected) in scenarios {
        let err = Generator::new()
            .with_options([option])
            .err()
            .unwrap_or_else(|| panic!("{name}: option should be rejected"));
        assert_eq!(err, expected, "{name}");
    }
}

#[test]
fn error_messages_name_the_option() {
    let err = Generator::new()
        .with_options([options::bool_true_ratio(2.0)])
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bool_true_ratio"));
    assert!(message.contains("ratio must be in range 0 to 1"));
}

#[test]
fn application_stops_at_the_first_error() {
    let err = Generator::new()
        .with_options([
            options::i64_range(1, 10),
            options::u8_range(9, 2),
            options::bool_true_ratio(7.0),
        ])
        .unwrap_err();
    assert_eq!(err, Error::InvertedRange { option: "u8_range" });
}

#[test]
fn later_ranges_replace_earlier_ones() {
    let mut generator = Generator::new()
        .with_options([options::i64_range(1, 1), options::i64_range(2, 2)])
        .unwrap();

    let mut x = 0i64;
    generator.fill(&mut x).unwrap();
    assert_eq!(x, 2);
}

#[test]
fn generators_can_be_refined_in_stages() {
    let mut generator = Generator::new()
        .with_options([options::i64_range(1, 1)])
        .unwrap()
        .with_options([options::u8_range(3, 3)])
        .unwrap();

    let mut x = 0i64;
    generator.fill(&mut x).unwrap();
    assert_eq!(x, 1);

    let mut y = 0u8;
    generator.fill(&mut y).unwrap();
    assert_eq!(y, 3);
}

#[test]
fn string_callbacks_prefer_the_first_match() {
    let mut generator = Generator::new()
        .with_options([
            options::string_fn(|_| Some("first".to_string())),
            options::string_fn(|_| Some("second".to_string())),
        ])
        .unwrap();

    let mut s = String::new();
    generator.fill(&mut s).unwrap();
    assert_eq!(s, "first");
}

#[derive(Clone)]
struct CountingRng {
    inner: Prng,
    used: Rc<Cell<u64>>,
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.used.set(self.used.get() + 1);
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.used.set(self.used.get() + 1);
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.used.set(self.used.get() + 1);
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn injected_sources_are_used() {
    let used = Rc::new(Cell::new(0));
    let rng = CountingRng {
        inner: Prng::from_seed(1, 2),
        used: Rc::clone(&used),
    };

    let mut generator = Generator::new().with_options([options::use_random(rng)]).unwrap();

    let mut x = 0u64;
    generator.fill(&mut x).unwrap();
    assert!(used.get() > 0);
}

#[test]
fn dynamic_depth_option_applies() {
    let generator = Generator::new().with_options([options::dynamic_depth(0)]);
    assert!(generator.is_ok());
}
