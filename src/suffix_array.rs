use mediumvec::Vec32;

use crate::error::{InvalidInput, Result};
use crate::{IndexType, Symbol};

/// Suffix array of a symbol sequence, together with its inverse and the LCP (height) array.
///
/// `suffix()[i]` is the offset of the suffix ranked `i` in ascending lexicographic order,
/// `rank()` is its inverse, and `height()[i]` is the length of the longest common prefix of
/// the suffixes ranked `i - 1` and `i` (`height()[0]` is always zero).
///
/// # Examples
///
/// ```
/// use common_substrings::SuffixArray;
/// // "banana" over a=1, b=2, n=3, terminated by 4.
/// let sa = SuffixArray::new(&[2, 1, 3, 1, 3, 1, 4], 5).unwrap();
/// assert_eq!(sa.suffix(), &[1, 3, 5, 0, 2, 4, 6]);
/// assert_eq!(sa.height(), &[0, 3, 1, 0, 0, 2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct SuffixArray {
    suffix: Vec32<IndexType>,
    rank: Vec32<IndexType>,
    height: Vec32<IndexType>,
}

impl SuffixArray {
    /// Sorts all suffixes of `sequence` and builds the height array.
    /// Every symbol must be smaller than `alphabet_size`.
    pub fn new(sequence: &[Symbol], alphabet_size: u32) -> Result<SuffixArray> {
        let (suffix, rank) = sort_suffixes(sequence, alphabet_size)?;
        let height = build_heights(sequence, &suffix, &rank);
        Ok(SuffixArray {
            suffix: Vec32::from_vec(suffix),
            rank: Vec32::from_vec(rank),
            height: Vec32::from_vec(height),
        })
    }

    pub fn suffix(&self) -> &[IndexType] {
        &self.suffix
    }

    pub fn rank(&self) -> &[IndexType] {
        &self.rank
    }

    pub fn height(&self) -> &[IndexType] {
        &self.height
    }

    pub fn len(&self) -> usize {
        self.suffix().len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix().is_empty()
    }

    /// Returns `(suffix, rank, height)`.
    pub fn into_parts(self) -> (Vec<IndexType>, Vec<IndexType>, Vec<IndexType>) {
        (
            self.suffix.into_vec(),
            self.rank.into_vec(),
            self.height.into_vec(),
        )
    }
}

/// Sorts the suffixes of `sequence` by prefix doubling with two-pass counting sort.
/// Returns `(suffix, rank)`, which are inverse permutations of `[0, n)`.
///
/// Runs in O(n log n) time. Besides the output, it keeps two key buffers whose roles swap
/// after every round, and one bucket array.
pub fn sort_suffixes(
    sequence: &[Symbol],
    alphabet_size: u32,
) -> Result<(Vec<IndexType>, Vec<IndexType>)> {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("sort_suffixes", n = sequence.len()).entered();

    validate(sequence, alphabet_size)?;
    let n = sequence.len();

    // `key[i]` is the class of the suffix at `i` with respect to the prefix length sorted so far.
    let mut key: Vec<IndexType> = sequence.to_vec();
    // Scratch: first the order by second key, then the previous round's classes.
    let mut aux: Vec<IndexType> = vec![0; n];
    // Only symbols that occur need a bucket; `alphabet_size` is just an upper bound.
    let mut range = sequence.iter().max().map_or(0, |&c| c as usize + 1);
    let mut bucket: Vec<usize> = vec![0; range.max(n)];

    let mut suffix: Vec<IndexType> = vec![0; n];
    counting_sort(&key, (0..n as IndexType).rev(), &mut bucket[..range], &mut suffix);

    let mut step = 1;
    while step < n {
        // Order by second key: suffixes without one come first, then the rest in the
        // current order of their second halves.
        let mut p = 0;
        for i in n - step..n {
            aux[p] = i as IndexType;
            p += 1;
        }
        for &s in &suffix {
            if s as usize >= step {
                aux[p] = s - step as IndexType;
                p += 1;
            }
        }
        debug_assert_eq!(p, n);

        // Stable by first key.
        counting_sort(&key, aux.iter().rev().copied(), &mut bucket[..range], &mut suffix);

        std::mem::swap(&mut key, &mut aux);
        let prev = &aux;
        let second = |i: IndexType| {
            let j = i as usize + step;
            if j < n {
                Some(prev[j])
            } else {
                None
            }
        };
        let mut classes: IndexType = 1;
        key[suffix[0] as usize] = 0;
        for w in 1..n {
            let (a, b) = (suffix[w - 1], suffix[w]);
            if prev[a as usize] != prev[b as usize] || second(a) != second(b) {
                classes += 1;
            }
            key[b as usize] = classes - 1;
        }

        range = classes as usize;
        if range == n {
            break;
        }
        step *= 2;
    }

    let mut rank = vec![0; n];
    for (i, &s) in suffix.iter().enumerate() {
        rank[s as usize] = i as IndexType;
    }
    Ok((suffix, rank))
}

/// Places each offset yielded by `order` into `out` by its `key`. Offsets must be yielded in
/// reverse of the desired order among equal keys.
fn counting_sort<I>(key: &[IndexType], order: I, bucket: &mut [usize], out: &mut [IndexType])
where
    I: Iterator<Item = IndexType> + Clone,
{
    for b in bucket.iter_mut() {
        *b = 0;
    }
    for i in order.clone() {
        bucket[key[i as usize] as usize] += 1;
    }
    for c in 1..bucket.len() {
        bucket[c] += bucket[c - 1];
    }
    for i in order {
        let c = key[i as usize] as usize;
        bucket[c] -= 1;
        out[bucket[c]] = i;
    }
}

fn validate(sequence: &[Symbol], alphabet_size: u32) -> Result<()> {
    if sequence.is_empty() {
        return Err(InvalidInput::EmptySequence);
    }
    if sequence.len() > IndexType::max_value() as usize {
        return Err(InvalidInput::TooLong {
            len: sequence.len(),
        });
    }
    match sequence.iter().position(|&c| c >= alphabet_size) {
        Some(offset) => Err(InvalidInput::SymbolOutOfRange {
            offset,
            symbol: sequence[offset],
            alphabet_size,
        }),
        None => Ok(()),
    }
}

/// Builds the height array in linear time.
///
/// Suffixes are visited in text order. Dropping the first character of a suffix loses at most
/// one character of the common prefix with its sorted predecessor, so the match length of the
/// previous offset minus one is a safe starting point.
///
/// # Panics
///
/// Panics if `suffix` or `rank` is not as long as `sequence`.
pub fn build_heights(
    sequence: &[Symbol],
    suffix: &[IndexType],
    rank: &[IndexType],
) -> Vec<IndexType> {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("build_heights", n = sequence.len()).entered();

    let n = sequence.len();
    assert_eq!(suffix.len(), n, "Suffix array length mismatch");
    assert_eq!(rank.len(), n, "Rank array length mismatch");

    let mut height = vec![0; n];
    let mut p = 0;
    for i in 0..n {
        let r = rank[i] as usize;
        if r == 0 {
            p = 0;
            continue;
        }
        let j = suffix[r - 1] as usize;
        while i + p < n && j + p < n && sequence[i + p] == sequence[j + p] {
            p += 1;
        }
        height[r] = p as IndexType;
        p = p.saturating_sub(1);
    }
    height
}
