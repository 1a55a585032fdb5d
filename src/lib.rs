//! Pseudo-random filling of nested data structures.
//!
//! Given a mutable reference to a value whose shape is described through
//! [`Reflect`], a [`Generator`] walks the type graph and writes a
//! pseudo-randomly chosen value into every leaf it can reach: numbers honor
//! per-kind ranges, booleans and nil-able pointers honor probability ratios,
//! strings draw from a configurable alphabet, and every decision can be
//! overridden per *context* through callbacks that inspect the current
//! [`Matcher`] (which field of which struct, which map key, which slice
//! index, ...). The intended consumer is test code that needs representative
//! instances of deep structures without hand-written factories.
//!
//! # Example
//!
//! ```
//! use refill::{options, Generator};
//!
//! refill::reflect_struct! {
//!     #[derive(Debug, Default)]
//!     pub struct Profile {
//!         pub name: String,
//!         pub age: u8,
//!         pub scores: Vec<u16>,
//!     }
//! }
//!
//! # fn main() -> Result<(), refill::Error> {
//! let mut generator = Generator::new().with_options([
//!     options::u8_range(18, 99),
//!     options::slice_len_range(1, 4),
//!     options::string_len_range(3, 12),
//! ])?;
//!
//! let mut profile = Profile::default();
//! generator.fill(&mut profile)?;
//! assert!((18..=99).contains(&profile.age));
//! assert!((1..=4).contains(&profile.scores.len()));
//! # Ok(())
//! # }
//! ```
//!
//! # Calibration
//!
//! Where defaults are concerned this crate commits to: lengths in `0..=256`
//! for strings, sequences, and maps; boolean and nil-pointer ratios compared
//! as `draw < ratio`, so a configured ratio equals the long-run frequency of
//! `true` (respectively of an empty pointer); even odds for both when
//! unconfigured. Seeding policy is the caller's business: inject any
//! `rand_core` generator with [`options::use_random`], or rely on the
//! default [`Prng`], which seeds itself distinctly per instance.

mod dynamic;
mod error;
mod fill;
mod generator;
mod matcher;
pub mod options;
pub mod reflect;
pub mod source;

pub use num_complex::{Complex32, Complex64};

pub use crate::dynamic::Dynamic;
pub use crate::error::Error;
pub use crate::fill::fill;
pub use crate::generator::Generator;
pub use crate::matcher::{KeyEcho, Matcher};
pub use crate::options::GenOption;
pub use crate::reflect::{Kind, Node, Reflect, Shape, Target};
pub use crate::source::{Prng, Source};

// Prelude for easy importing of common types.
pub mod prelude {
    pub use crate::dynamic::Dynamic;
    pub use crate::error::Error;
    pub use crate::generator::Generator;
    pub use crate::matcher::{KeyEcho, Matcher};
    pub use crate::options::GenOption;
    pub use crate::reflect::{Kind, Node, Reflect, Shape, Target};
    pub use crate::source::{Prng, Source};
}
