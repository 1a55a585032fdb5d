//! Generator state and the scalar value generators.
//!
//! A [`Generator`] bundles the injected random [`Source`] with the
//! customization state accumulated by options: per-kind numeric sets (an
//! optional static range plus an ordered callback list), length sets for
//! strings, sequences, and maps, boolean/pointer ratios, the string
//! alphabet, and whole-string callbacks. The resolvers here reduce
//! "callbacks, else static range, else default" into one interval per leaf
//! and sample it; the traversal itself lives in `fill`.

use crate::matcher::{Matcher, Site};
use crate::options::GenOption;
use crate::reflect::Reflect;
use crate::source::{Prng, Source};
use crate::Error;
use num_traits::Bounded;

pub(crate) const DEF_MIN_LEN: usize = 0;
pub(crate) const DEF_MAX_LEN: usize = 256;
pub(crate) const DEF_RATIO: f64 = 0.5;
pub(crate) const DEF_DYNAMIC_DEPTH: u32 = 3;

pub(crate) const DEF_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) type RangeFn<T> = Box<dyn Fn(&Matcher<'_>) -> Option<(T, T)>>;
pub(crate) type RatioFn = Box<dyn Fn(&Matcher<'_>) -> Option<f64>>;
pub(crate) type StringFn = Box<dyn Fn(&Matcher<'_>) -> Option<String>>;
pub(crate) type AlphabetFn = Box<dyn Fn(&Matcher<'_>) -> Option<Vec<char>>>;

/// Per-kind configuration bundle: an optional static interval plus the
/// ordered callback list.
pub(crate) struct NumericSet<T> {
    pub(crate) range: Option<(T, T)>,
    pub(crate) fns: Vec<RangeFn<T>>,
}

impl<T> Default for NumericSet<T> {
    fn default() -> Self {
        Self {
            range: None,
            fns: Vec::new(),
        }
    }
}

/// Reduces a numeric set to one effective interval for the current context.
///
/// The static range (or the kind default) seeds the interval; every matching
/// callback overwrites it in registration order, so the last match wins.
fn resolve<T: Copy>(set: &NumericSet<T>, m: &Matcher<'_>, default: (T, T)) -> (T, T) {
    let mut interval = set.range.unwrap_or(default);
    for f in &set.fns {
        if let Some(pair) = f(m) {
            interval = pair;
        }
    }
    interval
}

/// Sampling of one numeric kind over a resolved closed interval.
pub(crate) trait RangeSample: Copy + PartialEq {
    fn full_range() -> (Self, Self);
    fn sample(rng: &mut dyn Source, min: Self, max: Self) -> Self;
}

macro_rules! sample_via_i32 {
    ($($ty:ty),*) => {$(
        impl RangeSample for $ty {
            fn full_range() -> (Self, Self) {
                (<$ty as Bounded>::min_value(), <$ty as Bounded>::max_value())
            }

            fn sample(rng: &mut dyn Source, min: Self, max: Self) -> Self {
                rng.inclusive_i32(min as i32, max as i32) as $ty
            }
        }
    )*};
}

macro_rules! sample_via_i64 {
    ($($ty:ty),*) => {$(
        impl RangeSample for $ty {
            fn full_range() -> (Self, Self) {
                (<$ty as Bounded>::min_value(), <$ty as Bounded>::max_value())
            }

            fn sample(rng: &mut dyn Source, min: Self, max: Self) -> Self {
                rng.inclusive_i64(min as i64, max as i64) as $ty
            }
        }
    )*};
}

macro_rules! sample_via_u32 {
    ($($ty:ty),*) => {$(
        impl RangeSample for $ty {
            fn full_range() -> (Self, Self) {
                (<$ty as Bounded>::min_value(), <$ty as Bounded>::max_value())
            }

            fn sample(rng: &mut dyn Source, min: Self, max: Self) -> Self {
                rng.inclusive_u32(min as u32, max as u32) as $ty
            }
        }
    )*};
}

macro_rules! sample_via_u64 {
    ($($ty:ty),*) => {$(
        impl RangeSample for $ty {
            fn full_range() -> (Self, Self) {
                (<$ty as Bounded>::min_value(), <$ty as Bounded>::max_value())
            }

            fn sample(rng: &mut dyn Source, min: Self, max: Self) -> Self {
                rng.inclusive_u64(min as u64, max as u64) as $ty
            }
        }
    )*};
}

sample_via_i32!(i8, i16, i32);
sample_via_i64!(i64, isize);
sample_via_u32!(u8, u16, u32);
sample_via_u64!(u64, usize);

// The half-range form avoids overflow when `max - min` exceeds the type's
// representable span.
macro_rules! sample_floats {
    ($($ty:ty => $unit:ident),*) => {$(
        impl RangeSample for $ty {
            fn full_range() -> (Self, Self) {
                (<$ty as Bounded>::min_value(), <$ty as Bounded>::max_value())
            }

            fn sample(rng: &mut dyn Source, min: Self, max: Self) -> Self {
                let r = rng.$unit();
                ((r * (max / 2.0 - min / 2.0)) + min / 2.0) * 2.0
            }
        }
    )*};
}

sample_floats!(f32 => f32, f64 => f64);

/// A configured pseudo-random filler.
///
/// Construct with [`Generator::new`], refine with
/// [`with_options`](Generator::with_options), then fill targets with
/// [`fill`](Generator::fill) or [`fill_value`](Generator::fill_value).
/// Filling draws from the source but never mutates the configuration, so a
/// generator can be reused across any number of targets.
pub struct Generator {
    pub(crate) rng: Box<dyn Source>,

    pub(crate) bool_true_ratio: Option<f64>,
    pub(crate) bool_true_fns: Vec<RatioFn>,
    pub(crate) pointer_nil_ratio: Option<f64>,
    pub(crate) pointer_nil_fns: Vec<RatioFn>,

    pub(crate) i8_set: NumericSet<i8>,
    pub(crate) i16_set: NumericSet<i16>,
    pub(crate) i32_set: NumericSet<i32>,
    pub(crate) i64_set: NumericSet<i64>,
    pub(crate) isize_set: NumericSet<isize>,
    pub(crate) u8_set: NumericSet<u8>,
    pub(crate) u16_set: NumericSet<u16>,
    pub(crate) u32_set: NumericSet<u32>,
    pub(crate) u64_set: NumericSet<u64>,
    pub(crate) usize_set: NumericSet<usize>,
    pub(crate) f32_set: NumericSet<f32>,
    pub(crate) f64_set: NumericSet<f64>,

    pub(crate) string_len_set: NumericSet<usize>,
    pub(crate) slice_len_set: NumericSet<usize>,
    pub(crate) map_len_set: NumericSet<usize>,

    pub(crate) alphabet: Vec<char>,
    pub(crate) alphabet_fns: Vec<AlphabetFn>,
    pub(crate) string_fns: Vec<StringFn>,

    pub(crate) dynamic_depth: u32,
}

impl core::fmt::Debug for Generator {
    // Callback lists are opaque; show the tunables that print usefully.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Generator")
            .field("bool_true_ratio", &self.bool_true_ratio)
            .field("pointer_nil_ratio", &self.pointer_nil_ratio)
            .field("alphabet_len", &self.alphabet.len())
            .field("dynamic_depth", &self.dynamic_depth)
            .finish_non_exhaustive()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            rng: Box::new(Prng::default()),
            bool_true_ratio: None,
            bool_true_fns: Vec::new(),
            pointer_nil_ratio: None,
            pointer_nil_fns: Vec::new(),
            i8_set: NumericSet::default(),
            i16_set: NumericSet::default(),
            i32_set: NumericSet::default(),
            i64_set: NumericSet::default(),
            isize_set: NumericSet::default(),
            u8_set: NumericSet::default(),
            u16_set: NumericSet::default(),
            u32_set: NumericSet::default(),
            u64_set: NumericSet::default(),
            usize_set: NumericSet::default(),
            f32_set: NumericSet::default(),
            f64_set: NumericSet::default(),
            string_len_set: NumericSet::default(),
            slice_len_set: NumericSet::default(),
            map_len_set: NumericSet::default(),
            alphabet: DEF_ALPHABET.chars().collect(),
            alphabet_fns: Vec::new(),
            string_fns: Vec::new(),
            dynamic_depth: DEF_DYNAMIC_DEPTH,
        }
    }
}

macro_rules! numeric_gens {
    ($($gen:ident, $set:ident, $ty:ty);* $(;)?) => {$(
        pub(crate) fn $gen(&mut self, m: &Matcher<'_>) -> $ty {
            let (min, max) = resolve(&self.$set, m, <$ty as RangeSample>::full_range());
            if min == max {
                return min;
            }
            <$ty as RangeSample>::sample(self.rng.as_mut(), min, max)
        }
    )*};
}

impl Generator {
    /// Builds a generator with default settings: full type ranges for
    /// numerics, lengths in `0..=256`, even boolean and nil-pointer odds,
    /// the Latin alphabet, and a freshly seeded default source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies options in order, stopping at the first rejected one.
    pub fn with_options<I>(mut self, options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = GenOption>,
    {
        for option in options {
            option.apply(&mut self)?;
        }
        Ok(self)
    }

    numeric_gens! {
        gen_i8, i8_set, i8;
        gen_i16, i16_set, i16;
        gen_i32, i32_set, i32;
        gen_i64, i64_set, i64;
        gen_isize, isize_set, isize;
        gen_u8, u8_set, u8;
        gen_u16, u16_set, u16;
        gen_u32, u32_set, u32;
        gen_u64, u64_set, u64;
        gen_usize, usize_set, usize;
        gen_f32, f32_set, f32;
        gen_f64, f64_set, f64;
    }

    /// Draws against a probability; `ratio <= 0` never hits, `ratio >= 1`
    /// always hits, otherwise `r < ratio` hits so the empirical frequency
    /// converges to the ratio.
    pub(crate) fn chance(&mut self, ratio: f64) -> bool {
        if ratio <= 0.0 {
            return false;
        }
        if ratio >= 1.0 {
            return true;
        }
        self.rng.f64() < ratio
    }

    pub(crate) fn gen_bool(&mut self, m: &Matcher<'_>) -> bool {
        let mut ratio = self.bool_true_ratio.unwrap_or(DEF_RATIO);
        for f in &self.bool_true_fns {
            if let Some(r) = f(m) {
                ratio = r;
            }
        }
        self.chance(ratio)
    }

    pub(crate) fn gen_use_nil(&mut self, m: &Matcher<'_>) -> bool {
        let mut ratio = self.pointer_nil_ratio.unwrap_or(DEF_RATIO);
        for f in &self.pointer_nil_fns {
            if let Some(r) = f(m) {
                ratio = r;
            }
        }
        self.chance(ratio)
    }

    pub(crate) fn gen_string_len(&mut self, m: &Matcher<'_>) -> usize {
        let (min, max) = resolve(&self.string_len_set, m, (DEF_MIN_LEN, DEF_MAX_LEN));
        if min == max {
            return min;
        }
        <usize as RangeSample>::sample(self.rng.as_mut(), min, max)
    }

    pub(crate) fn gen_slice_len(&mut self, m: &Matcher<'_>) -> usize {
        let (min, max) = resolve(&self.slice_len_set, m, (DEF_MIN_LEN, DEF_MAX_LEN));
        if min == max {
            return min;
        }
        <usize as RangeSample>::sample(self.rng.as_mut(), min, max)
    }

    pub(crate) fn gen_map_len(&mut self, m: &Matcher<'_>) -> usize {
        let (min, max) = resolve(&self.map_len_set, m, (DEF_MIN_LEN, DEF_MAX_LEN));
        if min == max {
            return min;
        }
        <usize as RangeSample>::sample(self.rng.as_mut(), min, max)
    }

    /// The alphabet in effect for the current context: first matching
    /// alphabet callback, else the configured alphabet.
    fn effective_alphabet(&self, m: &Matcher<'_>) -> Vec<char> {
        for f in &self.alphabet_fns {
            if let Some(chars) = f(m) {
                if !chars.is_empty() {
                    return chars;
                }
            }
        }
        self.alphabet.clone()
    }

    pub(crate) fn gen_string(&mut self, m: &Matcher<'_>) -> String {
        for f in &self.string_fns {
            if let Some(s) = f(m) {
                return s;
            }
        }
        let len = {
            let lm = Matcher::new(Some(m), Site::StringLen, <usize as Reflect>::shape());
            self.gen_string_len(&lm)
        };
        if len == 0 {
            return String::new();
        }
        let alphabet = self.effective_alphabet(m);
        let mut out = String::with_capacity(len);
        for _ in 0..len {
            let i = self.rng.u64n(alphabet.len() as u64) as usize;
            out.push(alphabet[i]);
        }
        out
    }

    pub(crate) fn gen_char(&mut self, m: &Matcher<'_>) -> char {
        let alphabet = self.effective_alphabet(m);
        let i = self.rng.u64n(alphabet.len() as u64) as usize;
        alphabet[i]
    }
}
