use crate::suffix_array::SuffixArray;
use crate::text::Concatenation;
use crate::{IndexType, StrID};

/// The longest substrings shared by a quorum of the input strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuorumSubstrings {
    /// Zero when no non-empty substring reaches the quorum, in which case `substrings` is empty.
    pub max_len: IndexType,

    /// Every distinct qualifying substring of length `max_len`, in lexicographic order.
    pub substrings: Vec<Vec<u8>>,
}

/// Finds substrings that occur in at least `quorum` distinct input strings.
///
/// Substrings of length `len` shared by several suffixes show up as blocks of adjacent
/// suffixes in sorted order whose heights are all at least `len`. Such a block (a run) is
/// accepted when the suffixes in it start in at least `quorum` distinct strings.
///
/// ```
/// use common_substrings::{Concatenation, QuorumFinder, SuffixArray};
/// let text = Concatenation::new(&["abcd", "cdef"]).unwrap();
/// let sa = SuffixArray::new(text.symbols(), text.alphabet_size()).unwrap();
/// let finder = QuorumFinder::new(&text, &sa);
/// assert!(finder.check(2));
/// assert!(!finder.check(3));
/// assert_eq!(finder.longest(), 2);
/// ```
pub struct QuorumFinder<'a> {
    text: &'a Concatenation,
    sa: &'a SuffixArray,
    quorum: usize,
}

impl<'a> QuorumFinder<'a> {
    /// Uses a strict majority of the input strings as quorum.
    ///
    /// # Panics
    ///
    /// Panics if `sa` was not built from `text.symbols()` (lengths differ).
    pub fn new(text: &'a Concatenation, sa: &'a SuffixArray) -> QuorumFinder<'a> {
        assert_eq!(text.len(), sa.len(), "Suffix array does not match the text");
        QuorumFinder {
            text,
            sa,
            quorum: text.num_strings() / 2 + 1,
        }
    }

    /// Overrides the number of distinct strings a substring has to occur in.
    /// A quorum of zero is treated as one.
    pub fn with_quorum(mut self, min_strings: usize) -> Self {
        self.quorum = min_strings.max(1);
        self
    }

    pub fn quorum(&self) -> usize {
        self.quorum
    }

    /// Whether some substring of length `len` reaches the quorum.
    pub fn check(&self, len: IndexType) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("quorum_check", len).entered();

        let mut found = false;
        self.scan(len, |_| {
            found = true;
            false
        });
        found
    }

    /// Start offsets of one occurrence of every substring of length `len` that reaches the
    /// quorum, in sorted order.
    pub fn emit(&self, len: IndexType) -> Vec<IndexType> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("quorum_emit", len).entered();

        let mut starts = vec![];
        self.scan(len, |start| {
            starts.push(start);
            true
        });
        starts
    }

    /// The largest `len` for which [`QuorumFinder::check`] holds, found by binary search.
    /// Zero means no non-empty substring reaches the quorum.
    pub fn longest(&self) -> IndexType {
        let mut lo = 0;
        let mut hi = self.text.max_string_len();
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if self.check(mid) {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            max_len = lo,
            quorum = self.quorum,
            strings = self.text.num_strings(),
            "longest quorum substring"
        );

        lo
    }

    pub fn find(&self) -> QuorumSubstrings {
        let max_len = self.longest();
        if max_len == 0 {
            return QuorumSubstrings::default();
        }
        let substrings = self
            .emit(max_len)
            .into_iter()
            .map(|start| self.text.substring(start, max_len).to_vec())
            .collect();
        QuorumSubstrings {
            max_len,
            substrings,
        }
    }

    /// Calls `on_run` with the first offset of every accepted run, left to right in sorted
    /// order, and stops early once it returns `false`.
    fn scan<F>(&self, len: IndexType, mut on_run: F)
    where
        F: FnMut(IndexType) -> bool,
    {
        let suffix = self.sa.suffix();
        let height = self.sa.height();

        // `seen[s] == run` marks string `s` as already counted in the current run.
        let mut seen: Vec<u32> = vec![0; self.text.num_strings()];
        let mut run: u32 = 0;
        let mut distinct = 0;
        let mut start = 0;
        let mut live = false;

        for i in 0..suffix.len() {
            if i == 0 || height[i] < len {
                if live && distinct >= self.quorum && !on_run(start) {
                    return;
                }
                // Open a new run at `i`. It only stands for a substring if the suffix has
                // `len` real characters; a following height >= len guarantees that anyway.
                run += 1;
                distinct = 0;
                start = suffix[i];
                live = self.text.remaining(start) >= len;
            }
            let s: StrID = self.text.origin(suffix[i]);
            if seen[s as usize] != run {
                seen[s as usize] = run;
                distinct += 1;
            }
        }
        if live && distinct >= self.quorum {
            on_run(start);
        }
    }
}

/// [`QuorumFinder::find`] with the default strict-majority quorum.
pub fn find_quorum_substrings(text: &Concatenation, sa: &SuffixArray) -> QuorumSubstrings {
    QuorumFinder::new(text, sa).find()
}
