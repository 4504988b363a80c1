use common_substrings::{
    count_cross_pairs, count_matching_pairs, find_quorum_substrings, Concatenation, IndexType,
    QuorumFinder, SuffixArray,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn build(strings: &[String]) -> (Concatenation, SuffixArray) {
        let text = Concatenation::new(strings).unwrap();
        let sa = SuffixArray::new(text.symbols(), text.alphabet_size()).unwrap();
        (text, sa)
    }

    fn owned(strings: &[&str]) -> Vec<String> {
        strings.iter().map(|s| s.to_string()).collect()
    }

    fn gen_random_string(len: usize, alphabet_size: usize) -> String {
        let mut s = String::new();
        for _ in 0..len {
            let ch = (rand::random::<u8>() % alphabet_size as u8) + 'a' as u8;
            s.push(ch as char);
        }
        s
    }

    fn lcp(a: &[u8], b: &[u8]) -> usize {
        a.iter().zip(b).take_while(|(x, y)| x == y).count()
    }

    /// Longest length shared by more than half of `strings`, and all such substrings sorted.
    fn brute_force_quorum(strings: &[String]) -> (usize, Vec<Vec<u8>>) {
        let quorum = strings.len() / 2 + 1;
        let max = strings.iter().map(|s| s.len()).max().unwrap_or(0);
        for len in (1..=max).rev() {
            let mut found: Vec<Vec<u8>> = vec![];
            for s in strings {
                for w in s.as_bytes().windows(len) {
                    let hits = strings
                        .iter()
                        .filter(|t| t.as_bytes().windows(len).any(|x| x == w))
                        .count();
                    if hits >= quorum && !found.iter().any(|f| f.as_slice() == w) {
                        found.push(w.to_vec());
                    }
                }
            }
            if !found.is_empty() {
                found.sort();
                return (len, found);
            }
        }
        (0, vec![])
    }

    fn brute_force_pairs(a: &str, b: &str, min_len: usize) -> (u64, u64) {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let (mut weighted, mut pairs) = (0, 0);
        for i in 0..a.len() {
            for j in 0..b.len() {
                let l = lcp(&a[i..], &b[j..]);
                if l >= min_len {
                    weighted += (l - min_len + 1) as u64;
                    pairs += 1;
                }
            }
        }
        (weighted, pairs)
    }

    #[test]
    fn test_quorum_two_strings() {
        let (text, sa) = build(&owned(&["abcd", "cdef"]));
        let found = find_quorum_substrings(&text, &sa);
        assert_eq!(found.max_len, 2);
        assert_eq!(found.substrings, vec![b"cd".to_vec()]);
    }

    #[test]
    fn test_quorum_three_rotations() {
        // Each letter is shared by two of the three strings, which is a strict majority,
        // but no pair of letters is.
        let (text, sa) = build(&owned(&["xy", "yz", "zx"]));
        let finder = QuorumFinder::new(&text, &sa);
        assert!(!finder.check(2));
        assert_eq!(finder.longest(), 1);

        let (text, sa) = build(&owned(&["xy", "yz", "zw"]));
        let found = find_quorum_substrings(&text, &sa);
        assert_eq!(found.max_len, 1);
        assert_eq!(found.substrings, vec![b"y".to_vec(), b"z".to_vec()]);

        let (text, sa) = build(&owned(&["xy", "uv", "st"]));
        let found = find_quorum_substrings(&text, &sa);
        assert_eq!(found.max_len, 0);
        assert!(found.substrings.is_empty());
    }

    #[test]
    fn test_cross_pairs_identical() {
        let (text, sa) = build(&owned(&["aaa", "aaa"]));
        assert_eq!(count_matching_pairs(&sa, text.boundary(), 1).unwrap(), 9);
        for k in 1..=3 {
            let (weighted, pairs) = brute_force_pairs("aaa", "aaa", k);
            assert_eq!(
                count_cross_pairs(&sa, text.boundary(), k as IndexType).unwrap(),
                weighted
            );
            assert_eq!(
                count_matching_pairs(&sa, text.boundary(), k as IndexType).unwrap(),
                pairs
            );
        }
    }

    #[test]
    fn test_cross_pairs_min_len_too_long() {
        let s = "abracadabra";
        let (text, sa) = build(&owned(&[s, s]));
        let k = s.len() as IndexType + 1;
        assert_eq!(count_cross_pairs(&sa, text.boundary(), k).unwrap(), 0);
        assert_eq!(count_matching_pairs(&sa, text.boundary(), k).unwrap(), 0);
    }

    #[test]
    fn test_repeated_builds_share_no_state() {
        let strings = owned(&["mississippi", "missouri", "misery"]);
        let (text, first) = build(&strings);
        let first = find_quorum_substrings(&text, &first);
        let (_, _) = build(&owned(&["zzzzzzzz", "zzzz"]));
        let (text, second) = build(&strings);
        assert_eq!(first, find_quorum_substrings(&text, &second));
        assert_eq!(first.substrings, vec![b"miss".to_vec()]);
    }

    #[test]
    fn test_quorum_cross_check() {
        for _ in 0..200 {
            let count = 1 + rand::random::<usize>() % 5;
            let strings: Vec<String> = (0..count)
                .map(|_| gen_random_string(rand::random::<usize>() % 12, 3))
                .collect();
            let (text, sa) = build(&strings);
            let found = find_quorum_substrings(&text, &sa);
            let (len, substrings) = brute_force_quorum(&strings);
            assert_eq!(found.max_len as usize, len, "{:?}", strings);
            assert_eq!(found.substrings, substrings, "{:?}", strings);
        }
    }

    #[test]
    fn test_cross_pairs_cross_check() {
        for _ in 0..200 {
            let a = gen_random_string(rand::random::<usize>() % 40, 2);
            let b = gen_random_string(rand::random::<usize>() % 40, 3);
            let (text, sa) = build(&[a.clone(), b.clone()]);
            for k in 1..6 {
                let (weighted, pairs) = brute_force_pairs(&a, &b, k);
                assert_eq!(
                    count_cross_pairs(&sa, text.boundary(), k as IndexType).unwrap(),
                    weighted,
                    "{} / {} with k = {}",
                    a,
                    b,
                    k
                );
                assert_eq!(
                    count_matching_pairs(&sa, text.boundary(), k as IndexType).unwrap(),
                    pairs
                );
            }
        }
    }

    #[test]
    fn test_large_input_counts_do_not_wrap() {
        let a = "a".repeat(50_000);
        let count = common_substrings::count_common_substrings(a.as_bytes(), a.as_bytes(), 1)
            .unwrap();
        // Sum over i, j < n of min(n - i, n - j) = n (n + 1) (2n + 1) / 6.
        let n = 50_000u64;
        assert_eq!(count, n * (n + 1) * (2 * n + 1) / 6);
    }
}
