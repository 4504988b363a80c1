//! Counting common substrings between two strings without enumerating suffix pairs.
//!
//! Both counters expect a [`SuffixArray`] over two strings `A` and `B` separated at
//! `boundary`: offsets below it belong to `A`, offsets above it to `B`, and the symbol at
//! `boundary` must be a sentinel that occurs nowhere else (see [`crate::Concatenation::pair`]).

use crate::error::{InvalidInput, Result};
use crate::suffix_array::SuffixArray;
use crate::IndexType;

/// A block of earlier suffixes of the opposite string that share at least `height` characters
/// with the current suffix.
#[derive(Debug, Clone, Copy)]
struct Frame {
    count: u64,
    height: IndexType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// Number of pairs `(i, j, k)` with `k >= min_len` such that the `k` characters starting at
/// offset `i` of `A` equal those starting at offset `j` of `B`. Equivalently, the sum over all
/// (suffix of `A`, suffix of `B`) pairs of `max(0, lcp - min_len + 1)`.
///
/// A pair of suffixes sharing `lcp` characters is counted once per matching length. To count
/// each pair of suffixes with `lcp >= min_len` only once, use [`count_matching_pairs`].
///
/// # Examples
///
/// ```
/// use common_substrings::{count_cross_pairs, count_matching_pairs, Concatenation, SuffixArray};
/// let text = Concatenation::pair(b"xx", b"xx").unwrap();
/// let sa = SuffixArray::new(text.symbols(), text.alphabet_size()).unwrap();
/// // "x" occurs 2 x 2 times, "xx" once in each string.
/// assert_eq!(count_cross_pairs(&sa, text.boundary(), 1).unwrap(), 5);
/// assert_eq!(count_cross_pairs(&sa, text.boundary(), 2).unwrap(), 1);
///
/// let text = Concatenation::pair(b"aaa", b"aaa").unwrap();
/// let sa = SuffixArray::new(text.symbols(), text.alphabet_size()).unwrap();
/// assert_eq!(count_cross_pairs(&sa, text.boundary(), 1).unwrap(), 14);
/// assert_eq!(count_matching_pairs(&sa, text.boundary(), 1).unwrap(), 9);
/// ```
pub fn count_cross_pairs(sa: &SuffixArray, boundary: IndexType, min_len: IndexType) -> Result<u64> {
    validate(sa, boundary, min_len)?;

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("count_cross_pairs", n = sa.len(), min_len).entered();

    // Each pass only pairs a suffix of the anchor string with earlier suffixes of the other
    // one, so the two directions together see every pair exactly once.
    let a_after_b = anchored_pass(sa, boundary, min_len, Side::A);
    let b_after_a = anchored_pass(sa, boundary, min_len, Side::B);
    Ok(a_after_b + b_after_a)
}

/// Sums, over suffixes of `anchor`, the matches against all preceding suffixes of the other
/// string in sorted order.
fn anchored_pass(sa: &SuffixArray, boundary: IndexType, min_len: IndexType, anchor: Side) -> u64 {
    let suffix = sa.suffix();
    let height = sa.height();
    let side = |offset: IndexType| if offset < boundary { Side::A } else { Side::B };

    let mut stack: Vec<Frame> = vec![];
    // Matches of length >= min_len between the current suffix and the open frames.
    let mut contribution: u64 = 0;
    let mut total: u64 = 0;

    for i in 1..suffix.len() {
        let h = height[i];
        if h < min_len {
            stack.clear();
            contribution = 0;
            continue;
        }

        let mut merged = Frame { count: 0, height: h };
        if side(suffix[i - 1]) != anchor {
            merged.count = 1;
            contribution += u64::from(h - min_len + 1);
        }
        // Frames at or above `h` can only match `h` characters from here on.
        while let Some(top) = stack.last() {
            if top.height < h {
                break;
            }
            contribution -= top.count * u64::from(top.height - h);
            merged.count += top.count;
            stack.pop();
        }
        stack.push(merged);

        if side(suffix[i]) == anchor {
            total += contribution;
        }
    }
    total
}

/// Number of (suffix of `A`, suffix of `B`) pairs whose common prefix is at least `min_len`
/// long, i.e. pairs of start offsets at which `A` and `B` agree on `min_len` characters.
///
/// ```
/// use common_substrings::{count_matching_pairs, Concatenation, SuffixArray};
/// let text = Concatenation::pair(b"aaa", b"aaa").unwrap();
/// let sa = SuffixArray::new(text.symbols(), text.alphabet_size()).unwrap();
/// assert_eq!(count_matching_pairs(&sa, text.boundary(), 1).unwrap(), 9);
/// ```
pub fn count_matching_pairs(
    sa: &SuffixArray,
    boundary: IndexType,
    min_len: IndexType,
) -> Result<u64> {
    validate(sa, boundary, min_len)?;

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("count_matching_pairs", n = sa.len(), min_len).entered();

    let suffix = sa.suffix();
    let height = sa.height();
    let mut total: u64 = 0;
    let (mut in_a, mut in_b): (u64, u64) = (0, 0);
    for i in 0..suffix.len() {
        if i == 0 || height[i] < min_len {
            total += in_a * in_b;
            in_a = 0;
            in_b = 0;
        }
        if suffix[i] < boundary {
            in_a += 1;
        } else if suffix[i] > boundary {
            in_b += 1;
        }
    }
    Ok(total + in_a * in_b)
}

fn validate(sa: &SuffixArray, boundary: IndexType, min_len: IndexType) -> Result<()> {
    if sa.is_empty() {
        return Err(InvalidInput::EmptySequence);
    }
    if boundary as usize >= sa.len() {
        return Err(InvalidInput::BoundaryOutOfRange {
            boundary,
            len: sa.len(),
        });
    }
    if min_len == 0 {
        return Err(InvalidInput::ZeroMinLength);
    }
    Ok(())
}
