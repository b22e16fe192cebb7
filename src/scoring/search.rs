//! Minimum-entropy covering search.
//!
//! Given the full set of candidate matches, selects the cheapest sequence of
//! non-overlapping matches that covers the whole password, filling uncovered
//! spans with synthetic brute-force matches. This is a shortest-path dynamic
//! program over password positions: `O(N · |M|)` after bucketing candidates
//! by their end index.

use crate::models::{Match, MatchKind};
use crate::scoring::password_cardinality;

/// Selects the lowest-entropy complete covering of `chars`.
///
/// Returns the total entropy and the chosen sequence. The sequence is
/// contiguous and gap-free: it starts at 0, ends at `chars.len() - 1`, and
/// each match begins right after its predecessor ends. An empty password
/// yields `(0.0, [])`.
pub fn minimum_entropy_match_sequence(chars: &[char], matches: &[Match]) -> (f64, Vec<Match>) {
    let n = chars.len();
    if n == 0 {
        return (0.0, Vec::new());
    }

    let password: String = chars.iter().collect();
    let cardinality = password_cardinality(&password);
    let base_bits = (cardinality as f64).log2();

    // Bucket candidate indices by end position, preserving input order so
    // that ties keep the first candidate.
    let mut ending_at: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (idx, m) in matches.iter().enumerate() {
        ending_at[m.j].push(idx);
    }

    // up_to[k]: minimum entropy covering chars[0..=k].
    // best[k]: the match that achieves it, when cheaper than brute force.
    let mut up_to = vec![0.0f64; n];
    let mut best: Vec<Option<usize>> = vec![None; n];

    for k in 0..n {
        up_to[k] = if k == 0 { base_bits } else { up_to[k - 1] + base_bits };
        for &idx in &ending_at[k] {
            let m = &matches[idx];
            let prefix = if m.i == 0 { 0.0 } else { up_to[m.i - 1] };
            let candidate = prefix + m.entropy;
            if candidate < up_to[k] {
                up_to[k] = candidate;
                best[k] = Some(idx);
            }
        }
    }

    // Backtrack: jump over a chosen match, or step one brute-force char.
    let mut chosen: Vec<Match> = Vec::new();
    let mut k = n as isize - 1;
    while k >= 0 {
        match best[k as usize] {
            Some(idx) => {
                let m = &matches[idx];
                chosen.push(m.clone());
                k = m.i as isize - 1;
            }
            None => k -= 1,
        }
    }
    chosen.reverse();

    (up_to[n - 1], fill_gaps(chars, cardinality, base_bits, chosen))
}

/// Inserts a synthetic brute-force match over every maximal uncovered span,
/// including any prefix and suffix the chosen matches leave open.
fn fill_gaps(chars: &[char], cardinality: u64, base_bits: f64, chosen: Vec<Match>) -> Vec<Match> {
    let n = chars.len();
    let mut sequence = Vec::with_capacity(chosen.len() * 2 + 1);
    let mut next_start = 0;
    for m in chosen {
        if m.i > next_start {
            sequence.push(bruteforce_match(chars, cardinality, base_bits, next_start, m.i - 1));
        }
        next_start = m.j + 1;
        sequence.push(m);
    }
    if next_start < n {
        sequence.push(bruteforce_match(chars, cardinality, base_bits, next_start, n - 1));
    }
    sequence
}

fn bruteforce_match(chars: &[char], cardinality: u64, base_bits: f64, i: usize, j: usize) -> Match {
    Match {
        i,
        j,
        token: chars[i..=j].iter().collect(),
        cardinality,
        entropy: (j - i + 1) as f64 * base_bits,
        kind: MatchKind::Bruteforce,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
