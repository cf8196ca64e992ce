//! # Similarity Scoring
//!
//! String similarity metrics on a 0–100 scale.
//!
//! ## Metrics
//!
//! - [`ratio`]: Ratcliff/Obershelp gestalt similarity. The longest common
//!   block is found, then the procedure recurses on the unmatched text to
//!   its left and right. The score is `200 * M / T` for `M` matched
//!   characters out of `T` total.
//! - [`partial_ratio`]: best [`ratio`] of the shorter string against every
//!   equal-length window of the longer one.
//! - [`token_sort_ratio`]: [`ratio`] after sorting whitespace-separated
//!   tokens, so word order does not matter.
//! - [`fuzzy_score`]: maximum of the three.
//!
//! Every metric scores 0 when either side is empty, including two empty
//! strings. Comparison is by Unicode scalar value and case-sensitive;
//! callers normalize first.
//!
//! ## Cost
//!
//! [`ratio`] is `O(n * m)` per recursion level. [`partial_ratio`] runs it
//! once per window, so it is the dominant cost for long names.

/// Plain sequence similarity, 0–100.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_ratio(&a, &b)
}

/// Best plain ratio of the shorter string over every window of the longer.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        best = best.max(char_ratio(shorter, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Plain ratio after sorting whitespace-separated tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Maximum of [`ratio`], [`partial_ratio`] and [`token_sort_ratio`].
pub fn fuzzy_score(a: &str, b: &str) -> f64 {
    ratio(a, b)
        .max(partial_ratio(a, b))
        .max(token_sort_ratio(a, b))
}

/// Similarity of two strings as compared by the screening engine.
///
/// This is the plain [`ratio`]; see [`fuzzy_match`] for the combined
/// metric over normalized names.
pub fn similarity(a: &str, b: &str) -> f64 {
    ratio(a, b)
}

/// Normalize two Latin-script names and compare them with [`fuzzy_score`].
///
/// Returns whether the score reaches `threshold`, and the score.
pub fn fuzzy_match(a: &str, b: &str, threshold: f64) -> (bool, f64) {
    let a = crate::normalize::normalize_latin(a);
    let b = crate::normalize::normalize_latin(b);
    if a.is_empty() || b.is_empty() {
        return (false, 0.0);
    }
    let score = fuzzy_score(&a, &b);
    (score >= threshold, score)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn char_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    200.0 * matched_chars(a, b) as f64 / total as f64
}

/// Total size of the matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);
    // run[j - blo + 1]: length of the common run ending at a[i], b[j]
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[slot - 1] + 1;
                cur[slot] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            } else {
                cur[slot] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(ratio("ahmed ali", "ahmed ali"), 100.0);
        assert_eq!(similarity("x", "x"), 100.0);
    }

    #[test]
    fn empty_inputs_score_0() {
        assert_eq!(ratio("", ""), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
        assert_eq!(ratio("", "abc"), 0.0);
        assert_eq!(partial_ratio("", "abc"), 0.0);
        assert_eq!(token_sort_ratio("", ""), 0.0);
        assert_eq!(fuzzy_score("", ""), 0.0);
    }

    #[test]
    fn ratio_known_values() {
        // 17 of 20 characters shared on each side
        assert_eq!(ratio("abcdefghijklmnopqrst", "abcdefghijklmnopqxyz"), 85.0);
        assert_eq!(ratio("abcdefghijklmnopqrst", "abcdefghijklmnopqrsx"), 95.0);
        // "abcd" vs "bcde": block "bcd", 2*3/8
        assert_eq!(ratio("abcd", "bcde"), 75.0);
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn ratio_recurses_on_both_sides_of_the_longest_block() {
        // longest block "bcd", then "a" on the left and "e" on the right
        assert_eq!(ratio("abcde", "a_bcd_e"), 200.0 * 5.0 / 12.0);
    }

    #[test]
    fn ratio_is_case_sensitive() {
        assert!(ratio("Ahmed", "ahmed") < 100.0);
    }

    #[test]
    fn partial_ratio_finds_contained_name() {
        assert_eq!(partial_ratio("Ali", "Mohamed Ali Hassan"), 100.0);
        assert_eq!(partial_ratio("Mohamed Ali Hassan", "Ali"), 100.0);
        assert!(ratio("Ali", "Mohamed Ali Hassan") < 100.0);
    }

    #[test]
    fn token_sort_ignores_word_order() {
        assert_eq!(
            token_sort_ratio("John Michael Smith", "Smith John Michael"),
            100.0
        );
        assert!(ratio("John Michael Smith", "Smith John Michael") < 100.0);
    }

    #[test]
    fn fuzzy_score_takes_the_maximum() {
        let a = "smith john";
        let b = "john smith";
        assert_eq!(fuzzy_score(a, b), 100.0);
        assert!(fuzzy_score(a, b) >= ratio(a, b));
    }

    #[test]
    fn fuzzy_match_normalizes_before_scoring() {
        let (is_match, score) = fuzzy_match("Dr. Ahmed Ali", "AHMED ALI", 85.0);
        assert!(is_match);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn fuzzy_match_threshold_is_inclusive() {
        let (is_match, score) =
            fuzzy_match("abcdefghijklmnopqrst", "abcdefghijklmnopqxyz", 85.0);
        assert_eq!(score, 85.0);
        assert!(is_match);
        let (is_match, _) = fuzzy_match("abcdefghijklmnopqrst", "abcdefghijklmnopqxyz", 85.5);
        assert!(!is_match);
    }

    #[test]
    fn fuzzy_match_rejects_names_that_normalize_to_nothing() {
        assert_eq!(fuzzy_match("Mr.", "Mr.", 0.0), (false, 0.0));
    }

    proptest! {
        #[test]
        fn ratio_is_bounded(a in "\\PC{0,20}", b in "\\PC{0,20}") {
            let r = ratio(&a, &b);
            prop_assert!((0.0..=100.0).contains(&r));
        }

        #[test]
        fn ratio_of_self_is_100(s in "\\PC{1,30}") {
            prop_assert_eq!(ratio(&s, &s), 100.0);
        }

        #[test]
        fn partial_ratio_dominates_ratio_for_substrings(
            prefix in "[a-z ]{0,10}",
            needle in "[a-z]{1,10}",
            suffix in "[a-z ]{0,10}",
        ) {
            let haystack = format!("{prefix}{needle}{suffix}");
            prop_assert_eq!(partial_ratio(&needle, &haystack), 100.0);
            prop_assert!(partial_ratio(&needle, &haystack) >= ratio(&needle, &haystack));
        }

        #[test]
        fn token_sort_is_order_invariant(
            mut words in proptest::collection::vec("[a-z]{1,8}", 1..5)
        ) {
            let forward = words.join(" ");
            words.reverse();
            let backward = words.join(" ");
            prop_assert_eq!(token_sort_ratio(&forward, &backward), 100.0);
        }
    }
}
