//! Suffix arrays with LCP (height) arrays, and two common-substring queries built on them:
//!
//! - the longest substrings shared by a majority (or any quorum) of a set of strings, and
//! - the number of occurrence pairs of common substrings of at least a given length between
//!   two strings.
//!
//! All input strings are joined into one [`Concatenation`], each string terminated by its own
//! sentinel, and suffix-sorted once with a prefix-doubling [`SuffixArray`]. Both queries are
//! then linear scans over the height array.
//!
//! # Examples
//!
//! ```
//! let found = common_substrings::longest_quorum_substrings(&["abcdefg", "bcdefgh", "cdefghi"]).unwrap();
//! assert_eq!(found.max_len, 6);
//! assert_eq!(found.substrings, vec![b"bcdefg".to_vec(), b"cdefgh".to_vec()]);
//!
//! let count = common_substrings::count_common_substrings(b"aababaa", b"abaabaa", 2).unwrap();
//! assert_eq!(count, 22);
//! ```

mod cross_pairs;
mod error;
mod quorum;
mod suffix_array;
mod text;

pub use crate::cross_pairs::{count_cross_pairs, count_matching_pairs};
pub use crate::error::{InvalidInput, Result};
pub use crate::quorum::{find_quorum_substrings, QuorumFinder, QuorumSubstrings};
pub use crate::suffix_array::{build_heights, sort_suffixes, SuffixArray};
pub use crate::text::Concatenation;

/// Offsets into, and lengths within, a concatenated sequence.
pub type IndexType = u32;
/// Index of an input string.
pub type StrID = u32;
/// A renamed character or sentinel.
pub type Symbol = u32;

/// Longest substrings occurring in more than half of `strings`.
pub fn longest_quorum_substrings<I, S>(strings: I) -> Result<QuorumSubstrings>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let text = Concatenation::new(strings)?;
    let sa = SuffixArray::new(text.symbols(), text.alphabet_size())?;
    Ok(find_quorum_substrings(&text, &sa))
}

/// Number of (occurrence in `a`, occurrence in `b`) pairs of common substrings that are at
/// least `min_len` long. See [`count_cross_pairs`].
pub fn count_common_substrings(a: &[u8], b: &[u8], min_len: IndexType) -> Result<u64> {
    let text = Concatenation::pair(a, b)?;
    let sa = SuffixArray::new(text.symbols(), text.alphabet_size())?;
    count_cross_pairs(&sa, text.boundary(), min_len)
}
