//! Synthesized values for targets whose concrete type is not known.
//!
//! Rust cannot construct new struct types at runtime, so untyped positions
//! are modeled as a tagged sum over the primitive shapes plus homogeneous
//! collections of them. Filling a [`Dynamic`] picks a kind from a biased
//! menu (primitives weighted high, composites depth-limited) and recurses.

use crate::matcher::{Matcher, Site};
use crate::reflect::Reflect;
use crate::Generator;
use tracing::trace;

/// A value of runtime-chosen shape.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Dynamic {
    /// The empty value; what a fresh, unfilled target holds.
    #[default]
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    Str(String),
    /// A homogeneous-shaped list.
    List(Vec<Dynamic>),
    /// Key-value entries; kept as pairs, so duplicate keys cannot collide.
    Map(Vec<(Dynamic, Dynamic)>),
    /// An ad-hoc record with synthesized field names.
    Struct(Vec<(String, Dynamic)>),
}

const NAME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

// Five primitive kinds at weight 2, three composite kinds at weight 1.
const PRIMITIVE_LANES: u32 = 10;
const COMPOSITE_LANES: u32 = 3;

impl Generator {
    pub(crate) fn synth_dynamic(&mut self, m: &Matcher<'_>, depth: u32) -> Dynamic {
        let composites_allowed = depth < self.dynamic_depth;
        let lanes = if composites_allowed {
            PRIMITIVE_LANES + COMPOSITE_LANES
        } else {
            PRIMITIVE_LANES
        };
        trace!(depth, "synthesizing dynamic value");

        match self.rng.u32n(lanes) {
            0 | 1 => Dynamic::Bool(self.gen_bool(m)),
            2 | 3 => Dynamic::Int(self.gen_i64(m)),
            4 | 5 => Dynamic::Uint(self.gen_u64(m)),
            6 | 7 => Dynamic::Float(self.gen_f64(m)),
            8 | 9 => Dynamic::Str(self.gen_string(m)),
            10 => self.synth_list(m, depth),
            11 => self.synth_map(m, depth),
            _ => self.synth_struct(m, depth),
        }
    }

    fn synth_list(&mut self, m: &Matcher<'_>, depth: u32) -> Dynamic {
        let len = {
            let lm = Matcher::new(Some(m), Site::SliceLen, <usize as Reflect>::shape());
            self.gen_slice_len(&lm)
        };
        let mut items = Vec::with_capacity(len);
        for index in 0..len {
            let em = Matcher::new(
                Some(m),
                Site::SliceElem { index, len },
                <Dynamic as Reflect>::shape(),
            );
            items.push(self.synth_dynamic(&em, depth + 1));
        }
        Dynamic::List(items)
    }

    fn synth_map(&mut self, m: &Matcher<'_>, depth: u32) -> Dynamic {
        let len = {
            let lm = Matcher::new(Some(m), Site::MapLen, <usize as Reflect>::shape());
            self.gen_map_len(&lm)
        };
        let mut entries = Vec::with_capacity(len);
        for _ in 0..len {
            let key = {
                let km = Matcher::new(Some(m), Site::MapKey, <Dynamic as Reflect>::shape());
                self.synth_dynamic_key(&km)
            };
            let vm = Matcher::new(
                Some(m),
                Site::MapValue { key: key.echo() },
                <Dynamic as Reflect>::shape(),
            );
            let value = self.synth_dynamic(&vm, depth + 1);
            entries.push((key, value));
        }
        Dynamic::Map(entries)
    }

    // Keys stay primitive and never float, so any concrete map type could
    // hold them.
    fn synth_dynamic_key(&mut self, m: &Matcher<'_>) -> Dynamic {
        match self.rng.u32n(4) {
            0 => Dynamic::Bool(self.gen_bool(m)),
            1 => Dynamic::Int(self.gen_i64(m)),
            2 => Dynamic::Uint(self.gen_u64(m)),
            _ => Dynamic::Str(self.gen_string(m)),
        }
    }

    fn synth_struct(&mut self, m: &Matcher<'_>, depth: u32) -> Dynamic {
        let count = 1 + self.rng.u32n(5) as usize;
        let mut fields: Vec<(String, Dynamic)> = Vec::with_capacity(count);
        for _ in 0..count {
            let name = loop {
                let candidate = self.synth_field_name();
                if !fields.iter().any(|(n, _)| *n == candidate) {
                    break candidate;
                }
            };
            let fm = Matcher::new(Some(m), Site::Plain, <Dynamic as Reflect>::shape());
            let value = self.synth_dynamic(&fm, depth + 1);
            fields.push((name, value));
        }
        Dynamic::Struct(fields)
    }

    /// A title-cased identifier-looking name for a synthesized field.
    fn synth_field_name(&mut self) -> String {
        let len = 3 + self.rng.u32n(6) as usize;
        let mut name = String::with_capacity(len);
        for i in 0..len {
            let c = NAME_CHARS[self.rng.u32n(NAME_CHARS.len() as u32) as usize] as char;
            if i == 0 {
                name.push(c.to_ascii_uppercase());
            } else {
                name.push(c);
            }
        }
        name
    }
}
