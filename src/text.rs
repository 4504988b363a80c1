use std::convert::TryFrom;

use crate::error::{InvalidInput, Result};
use crate::{IndexType, StrID, Symbol};

/// Several byte strings joined into one symbol sequence suitable for suffix sorting.
///
/// Bytes that occur in the input are renamed, in byte order, to the dense range `[1, k]`.
/// String `i` is then terminated by the sentinel `k + 1 + i`. Sentinels are unique and larger
/// than every real symbol, so no common prefix can ever run across the end of a string.
/// Symbol `0` is never used.
///
/// ```
/// use common_substrings::Concatenation;
/// let text = Concatenation::new(&["abcd", "cdef"]).unwrap();
/// assert_eq!(text.len(), 10);
/// assert_eq!(text.alphabet_size(), 9);
/// assert_eq!(text.origin(5), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Concatenation {
    symbols: Vec<Symbol>,

    /// Raw input bytes laid out like `symbols`, with `0` at sentinel positions.
    bytes: Vec<u8>,

    /// `origin[offset]` is the string owning `offset`; a sentinel belongs to the string it ends.
    origin: Vec<StrID>,

    /// Offset of each string's sentinel.
    ends: Vec<IndexType>,

    alphabet_size: u32,
}

impl Concatenation {
    pub fn new<I, S>(strings: I) -> Result<Concatenation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut bytes = vec![];
        let mut origin = vec![];
        let mut ends = vec![];
        for (str_id, s) in strings.into_iter().enumerate() {
            let s = s.as_ref();
            let str_id = StrID::try_from(str_id).map_err(|_| InvalidInput::TooLong {
                len: bytes.len(),
            })?;
            bytes.extend_from_slice(s);
            origin.extend(std::iter::repeat(str_id).take(s.len()));
            ends.push(bytes.len());
            bytes.push(0);
            origin.push(str_id);
        }
        if ends.is_empty() {
            return Err(InvalidInput::NoStrings);
        }
        if IndexType::try_from(bytes.len()).is_err() {
            return Err(InvalidInput::TooLong { len: bytes.len() });
        }

        // Rename the bytes in use to [1, k], keeping their relative order.
        let mut used = [false; 256];
        let mut sentinel = ends.iter().peekable();
        for (offset, &b) in bytes.iter().enumerate() {
            if sentinel.peek() == Some(&&offset) {
                sentinel.next();
            } else {
                used[b as usize] = true;
            }
        }
        let mut rename = [0; 256];
        let mut k = 0;
        for (b, &u) in used.iter().enumerate() {
            if u {
                k += 1;
                rename[b] = k;
            }
        }

        let mut symbols: Vec<Symbol> = bytes.iter().map(|&b| rename[b as usize]).collect();
        for (str_id, &end) in ends.iter().enumerate() {
            symbols[end] = k + 1 + str_id as Symbol;
        }

        Ok(Concatenation {
            alphabet_size: k + 1 + ends.len() as u32,
            symbols,
            bytes,
            origin,
            ends: ends.into_iter().map(|e| e as IndexType).collect(),
        })
    }

    /// Joins exactly two strings. Offsets below [`Concatenation::boundary`] belong to `a`,
    /// offsets above it to `b`.
    pub fn pair(a: &[u8], b: &[u8]) -> Result<Concatenation> {
        Concatenation::new(&[a, b])
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn num_strings(&self) -> usize {
        self.ends.len()
    }

    pub fn origin(&self, offset: IndexType) -> StrID {
        self.origin[offset as usize]
    }

    pub fn origins(&self) -> &[StrID] {
        &self.origin
    }

    /// Offset of the sentinel that terminates the first string.
    pub fn boundary(&self) -> IndexType {
        self.ends[0]
    }

    /// Number of real characters from `offset` up to its string's sentinel.
    pub fn remaining(&self, offset: IndexType) -> IndexType {
        self.ends[self.origin(offset) as usize] - offset
    }

    /// Length of the longest input string.
    pub fn max_string_len(&self) -> IndexType {
        let mut start = 0;
        let mut longest = 0;
        for &end in &self.ends {
            longest = longest.max(end - start);
            start = end + 1;
        }
        longest
    }

    /// The input bytes `[offset, offset + len)`.
    ///
    /// # Panics
    ///
    /// Panics if the range runs past the sentinel ending the string that owns `offset`.
    pub fn substring(&self, offset: IndexType, len: IndexType) -> &[u8] {
        assert!(
            len <= self.remaining(offset),
            "Substring runs past the end of its string"
        );
        &self.bytes[offset as usize..(offset + len) as usize]
    }
}
