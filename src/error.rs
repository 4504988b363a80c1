use std::fmt;

use crate::IndexType;

/// Every failure the crate can report is a caller contract violation; the
/// algorithms themselves are deterministic and never fail on valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// A sequence of length at least one was required.
    EmptySequence,

    /// `sequence[offset]` does not fit in `[0, alphabet_size)`.
    SymbolOutOfRange {
        offset: usize,
        symbol: u32,
        alphabet_size: u32,
    },

    /// A concatenation needs at least one input string.
    NoStrings,

    /// The concatenated length (strings plus sentinels) is not addressable by [`IndexType`].
    TooLong { len: usize },

    /// The A/B boundary must be an offset inside the concatenated sequence.
    BoundaryOutOfRange { boundary: IndexType, len: usize },

    /// Occurrence counting needs a minimum substring length of at least one.
    ZeroMinLength,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptySequence => write!(f, "sequence must not be empty"),
            InvalidInput::SymbolOutOfRange {
                offset,
                symbol,
                alphabet_size,
            } => write!(
                f,
                "symbol {} at offset {} is outside the alphabet [0, {})",
                symbol, offset, alphabet_size
            ),
            InvalidInput::NoStrings => write!(f, "at least one input string is required"),
            InvalidInput::TooLong { len } => {
                write!(f, "concatenated length {} exceeds the 32-bit index range", len)
            }
            InvalidInput::BoundaryOutOfRange { boundary, len } => write!(
                f,
                "boundary offset {} is outside a sequence of length {}",
                boundary, len
            ),
            InvalidInput::ZeroMinLength => write!(f, "minimum substring length must be positive"),
        }
    }
}

impl std::error::Error for InvalidInput {}

pub type Result<T> = std::result::Result<T, InvalidInput>;
