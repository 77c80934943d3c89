//! Partial string similarity.
//!
//! The metric rewards a short string that aligns as a near-substring of a
//! longer one: the shorter string is slid across every equal-length character
//! window of the longer, each window is scored with the edit-based ratio
//! `2·matches / (len_a + len_b)` (matches = longest common subsequence), and
//! the best window wins. The result is scaled to an integer in [0, 100].
//!
//! # Reference values
//!
//! - `partial_ratio("immigration act", "visa immigration act 2014") == 100`
//!   (exact window alignment)
//! - `partial_ratio("visa applications & issues", "visa immigration act 2014") == 52`
//!   (only "visa " and scattered characters align)

/// Partial similarity score between two strings, in [0, 100].
///
/// Symmetric in its arguments. Two empty strings score 100; an empty string
/// against a non-empty one scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let m = shorter.len();
    if m == 0 {
        return if longer.is_empty() { 100 } else { 0 };
    }

    let mut best = 0;
    for start in 0..=(longer.len() - m) {
        let window = &longer[start..start + m];
        best = best.max(lcs_len(shorter, window));
        if best == m {
            break;
        }
    }

    // ratio = 2·best / (m + m); scale to [0, 100] and round.
    ((100 * best + m / 2) / m) as u8
}

/// Longest-common-subsequence length, single-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diag + 1
            } else {
                above.max(row[j])
            };
            diag = above;
        }
    }
    row[b.len()]
}
