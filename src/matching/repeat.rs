//! Repeated-character matcher.
//!
//! Maximal runs of a single character, length 3 or more. A run is charged
//! `log2(cardinality · length)`: pick the character, pick how often to
//! repeat it.

use crate::models::{Match, MatchKind, Matcher};
use crate::scoring::password_cardinality;

pub struct RepeatMatcher;

impl Matcher for RepeatMatcher {
    fn name(&self) -> &str {
        "repeat"
    }

    fn matches(&self, password: &[char]) -> Vec<Match> {
        let mut matches = Vec::new();
        let n = password.len();
        let mut i = 0;
        while i < n {
            let mut j = i;
            while j + 1 < n && password[j + 1] == password[i] {
                j += 1;
            }
            let length = j - i + 1;
            if length >= 3 {
                let token: String = password[i..=j].iter().collect();
                let cardinality = password_cardinality(&token);
                matches.push(Match {
                    i,
                    j,
                    cardinality,
                    entropy: (cardinality as f64 * length as f64).log2(),
                    kind: MatchKind::Repeat {
                        repeated_char: password[i],
                    },
                    token,
                });
            }
            i = j + 1;
        }
        matches
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
