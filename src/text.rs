// 🔤 Text utilities - normalization and approximate phrase matching
//
// Similarity is the matching-blocks ratio: find the longest common substring,
// recurse on the pieces left and right of it, and score 2*M / (len_a + len_b)
// where M is the total size of all blocks found.

/// Lowercase, strip ASCII punctuation, collapse runs of whitespace
///
/// Example: "  Thank   you!! " -> "thank you"
pub fn normalize_text(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-case a label: first letter of each alphabetic run upper, rest lower
///
/// Example: " french " -> "French", "SOUTH indian" -> "South Indian"
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// Similarity in [0, 1]; identical strings score 1.0
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Candidates scoring at least `cutoff`, best first, at most `n`
///
/// The ratio is not symmetric; each candidate is scored as the first
/// sequence against `word`.
pub fn close_matches<'a, I>(word: &str, candidates: I, n: usize, cutoff: f64) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &'a str)> = candidates
        .into_iter()
        .map(|c| (similarity_ratio(c, word), c))
        .filter(|(score, _)| *score >= cutoff)
        .collect();

    // Best score first; equal scores ordered by candidate text, descending
    scored.sort_by(|x, y| y.0.total_cmp(&x.0).then_with(|| y.1.cmp(x.1)));
    scored.truncate(n);
    scored.into_iter().map(|(_, c)| c).collect()
}

/// Total size of the matching blocks between `a` and `b`
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;

        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// Longest common run in a[alo..ahi] x b[blo..bhi].
///
/// Ties go to the earliest start in `a`, then the earliest start in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // run_len[j + 1] = length of the common run ending at a[i - 1], b[j]
    let mut run_len = vec![0usize; b.len() + 1];

    for i in alo..ahi {
        let mut next = vec![0usize; b.len() + 1];
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let k = run_len[j] + 1;
            next[j + 1] = k;
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        run_len = next;
    }

    (best_i, best_j, best_size)
}

// ============================================================================
// TESTS
// ============================================================================
