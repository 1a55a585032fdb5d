//! The option catalogue.
//!
//! Each option is a deferred, fallible edit of a [`Generator`]; invalid
//! arguments are rejected when [`Generator::with_options`] applies the
//! option, and application stops at the first rejection. Range options
//! replace any previously configured range for their kind; callback options
//! append, and during filling the **last** matching callback wins (so later
//! registrations refine earlier ones without being shadowed).
//!
//! Callbacks receive the current [`Matcher`] and return `None` for "not
//! matched"; matched payloads for numeric kinds are `(min, max)` intervals,
//! for ratios a probability, for strings the finished string.

use crate::generator::Generator;
use crate::matcher::Matcher;
use crate::source::Source;
use crate::Error;

/// A single configuration step for [`Generator::with_options`].
pub struct GenOption {
    f: Box<dyn FnOnce(&mut Generator) -> Result<(), Error>>,
}

impl GenOption {
    fn new(f: impl FnOnce(&mut Generator) -> Result<(), Error> + 'static) -> Self {
        Self { f: Box::new(f) }
    }

    pub(crate) fn apply(self, g: &mut Generator) -> Result<(), Error> {
        (self.f)(g)
    }
}

/// Replaces the default pseudo-random source.
pub fn use_random(source: impl Source + 'static) -> GenOption {
    GenOption::new(move |g| {
        g.rng = Box::new(source);
        Ok(())
    })
}

/// Sets the probability that a nil-able pointer is left empty.
pub fn pointer_nil_ratio(ratio: f64) -> GenOption {
    GenOption::new(move |g| {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::InvalidRatio {
                option: "pointer_nil_ratio",
            });
        }
        g.pointer_nil_ratio = Some(ratio);
        Ok(())
    })
}

/// Registers a context-dependent nil-pointer probability.
pub fn pointer_nil_fn(f: impl Fn(&Matcher<'_>) -> Option<f64> + 'static) -> GenOption {
    GenOption::new(move |g| {
        g.pointer_nil_fns.push(Box::new(f));
        Ok(())
    })
}

/// Sets the probability that a generated boolean is true.
pub fn bool_true_ratio(ratio: f64) -> GenOption {
    GenOption::new(move |g| {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::InvalidRatio {
                option: "bool_true_ratio",
            });
        }
        g.bool_true_ratio = Some(ratio);
        Ok(())
    })
}

/// Registers a context-dependent boolean-true probability.
pub fn bool_true_fn(f: impl Fn(&Matcher<'_>) -> Option<f64> + 'static) -> GenOption {
    GenOption::new(move |g| {
        g.bool_true_fns.push(Box::new(f));
        Ok(())
    })
}

macro_rules! int_range_options {
    ($($(#[$doc:meta])* $name:ident, $ty:ty, $set:ident);* $(;)?) => {$(
        $(#[$doc])*
        pub fn $name(min: $ty, max: $ty) -> GenOption {
            GenOption::new(move |g| {
                if min > max {
                    return Err(Error::InvertedRange {
                        option: stringify!($name),
                    });
                }
                g.$set.range = Some((min, max));
                Ok(())
            })
        }
    )*};
}

int_range_options! {
    /// Static range for `i8` leaves.
    i8_range, i8, i8_set;
    /// Static range for `i16` leaves.
    i16_range, i16, i16_set;
    /// Static range for `i32` leaves.
    i32_range, i32, i32_set;
    /// Static range for `i64` leaves.
    i64_range, i64, i64_set;
    /// Static range for `isize` leaves.
    isize_range, isize, isize_set;
    /// Static range for `u8` leaves.
    u8_range, u8, u8_set;
    /// Static range for `u16` leaves.
    u16_range, u16, u16_set;
    /// Static range for `u32` leaves.
    u32_range, u32, u32_set;
    /// Static range for `u64` leaves.
    u64_range, u64, u64_set;
    /// Static range for `usize` leaves.
    usize_range, usize, usize_set;
    /// Static range for generated string lengths.
    string_len_range, usize, string_len_set;
    /// Static range for generated sequence lengths.
    slice_len_range, usize, slice_len_set;
    /// Static range for generated map lengths.
    map_len_range, usize, map_len_set;
}

macro_rules! float_range_options {
    ($($(#[$doc:meta])* $name:ident, $ty:ty, $set:ident);* $(;)?) => {$(
        $(#[$doc])*
        pub fn $name(min: $ty, max: $ty) -> GenOption {
            GenOption::new(move |g| {
                if min.is_nan() || max.is_nan() || min.is_infinite() || max.is_infinite() {
                    return Err(Error::NonFiniteRange {
                        option: stringify!($name),
                    });
                }
                if min > max {
                    return Err(Error::InvertedRange {
                        option: stringify!($name),
                    });
                }
                g.$set.range = Some((min, max));
                Ok(())
            })
        }
    )*};
}

float_range_options! {
    /// Static range for `f32` leaves. Bounds must be finite.
    f32_range, f32, f32_set;
    /// Static range for `f64` leaves. Bounds must be finite.
    f64_range, f64, f64_set;
}

macro_rules! range_fn_options {
    ($($(#[$doc:meta])* $name:ident, $ty:ty, $set:ident);* $(;)?) => {$(
        $(#[$doc])*
        pub fn $name(f: impl Fn(&Matcher<'_>) -> Option<($ty, $ty)> + 'static) -> GenOption {
            GenOption::new(move |g| {
                g.$set.fns.push(Box::new(f));
                Ok(())
            })
        }
    )*};
}

range_fn_options! {
    /// Registers a context-dependent range for `i8` leaves.
    i8_fn, i8, i8_set;
    /// Registers a context-dependent range for `i16` leaves.
    i16_fn, i16, i16_set;
    /// Registers a context-dependent range for `i32` leaves.
    i32_fn, i32, i32_set;
    /// Registers a context-dependent range for `i64` leaves.
    i64_fn, i64, i64_set;
    /// Registers a context-dependent range for `isize` leaves.
    isize_fn, isize, isize_set;
    /// Registers a context-dependent range for `u8` leaves.
    u8_fn, u8, u8_set;
    /// Registers a context-dependent range for `u16` leaves.
    u16_fn, u16, u16_set;
    /// Registers a context-dependent range for `u32` leaves.
    u32_fn, u32, u32_set;
    /// Registers a context-dependent range for `u64` leaves.
    u64_fn, u64, u64_set;
    /// Registers a context-dependent range for `usize` leaves.
    usize_fn, usize, usize_set;
    /// Registers a context-dependent range for `f32` leaves.
    f32_fn, f32, f32_set;
    /// Registers a context-dependent range for `f64` leaves.
    f64_fn, f64, f64_set;
    /// Registers a context-dependent range for string lengths.
    string_len_fn, usize, string_len_set;
    /// Registers a context-dependent range for sequence lengths.
    slice_len_fn, usize, slice_len_set;
    /// Registers a context-dependent range for map lengths.
    map_len_fn, usize, map_len_set;
}

/// Replaces the alphabet strings and chars are drawn from.
pub fn alphabet(chars: &str) -> GenOption {
    let chars: Vec<char> = chars.chars().collect();
    GenOption::new(move |g| {
        if chars.is_empty() {
            return Err(Error::EmptyAlphabet { option: "alphabet" });
        }
        g.alphabet = chars;
        Ok(())
    })
}

/// Registers a context-dependent alphabet; the first matching callback
/// wins. An empty matched alphabet is ignored.
pub fn alphabet_fn(f: impl Fn(&Matcher<'_>) -> Option<Vec<char>> + 'static) -> GenOption {
    GenOption::new(move |g| {
        g.alphabet_fns.push(Box::new(f));
        Ok(())
    })
}

/// Registers a callback producing entire strings; the first matching
/// callback wins and bypasses length and alphabet resolution.
pub fn string_fn(f: impl Fn(&Matcher<'_>) -> Option<String> + 'static) -> GenOption {
    GenOption::new(move |g| {
        g.string_fns.push(Box::new(f));
        Ok(())
    })
}

/// Sets the composite nesting depth allowed when synthesizing values for
/// [`Dynamic`](crate::Dynamic) targets.
pub fn dynamic_depth(max: u32) -> GenOption {
    GenOption::new(move |g| {
        g.dynamic_depth = max;
        Ok(())
    })
}
