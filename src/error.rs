use thiserror::Error;

/// Errors surfaced by the library.
///
/// Configuration errors are returned by [`Generator::with_options`]; the
/// traversal itself never fails past the entry-point guard. Unsupported leaf
/// kinds (raw pointers and other opaque values) are skipped silently instead
/// of failing the whole fill.
///
/// [`Generator::with_options`]: crate::Generator::with_options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The root of a fill was not a fillable location.
    #[error("the fill target must be a fillable value")]
    UnfillableTarget,

    /// A ratio option was given a value outside `[0, 1]`.
    #[error("{option}: ratio must be in range 0 to 1")]
    InvalidRatio {
        /// The option that rejected its argument.
        option: &'static str,
    },

    /// A range option was given `min > max`.
    #[error("{option}: min may not exceed max")]
    InvertedRange {
        /// The option that rejected its argument.
        option: &'static str,
    },

    /// A float range option was given a NaN or infinite bound.
    #[error("{option}: range bounds must be finite")]
    NonFiniteRange {
        /// The option that rejected its argument.
        option: &'static str,
    },

    /// The alphabet option was given no characters to draw from.
    #[error("{option}: alphabet may not be empty")]
    EmptyAlphabet {
        /// The option that rejected its argument.
        option: &'static str,
    },
}
