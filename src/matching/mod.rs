//! Pattern matchers and the orchestrator that fans out to all of them.
//!
//! Matchers are mutually independent: each sees only the password and its
//! own immutable tables, so running order never changes the result. The
//! orchestrator unions their outputs by value equality and hands the flat
//! candidate set to the covering search.

pub mod date;
pub mod dictionary;
pub mod graphs;
pub mod leet;
pub mod regexes;
pub mod repeat;
pub mod sequence;
pub mod spatial;

use std::sync::Arc;

use crate::models::{Match, Matcher};
use crate::wordlists::{builtin_dictionaries, RankedDictionary};

use date::DateMatcher;
use dictionary::DictionaryMatcher;
use leet::L33tMatcher;
use regexes::RegexMatcher;
use repeat::RepeatMatcher;
use sequence::SequenceMatcher;
use spatial::SpatialMatcher;

// ---------------------------------------------------------------------------
// MatcherSet
// ---------------------------------------------------------------------------

/// The matcher factory: owns every matcher and the shared dictionaries.
///
/// Built once and reused across evaluations; all state is immutable after
/// construction. Per-evaluation user inputs are turned into a throwaway
/// dictionary matcher (plus a leet wrapper over it) inside [`omnimatch`].
///
/// [`omnimatch`]: MatcherSet::omnimatch
pub struct MatcherSet {
    matchers: Vec<Box<dyn Matcher>>,
}

impl MatcherSet {
    /// The full builtin set over the bundled wordlists.
    pub fn builtin() -> Self {
        Self::with_dictionaries(builtin_dictionaries().to_vec())
    }

    /// The full matcher set over caller-supplied dictionaries.
    pub fn with_dictionaries(dicts: Vec<Arc<RankedDictionary>>) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> = Vec::new();
        for dict in &dicts {
            matchers.push(Box::new(DictionaryMatcher::new(dict.clone())));
        }
        matchers.push(Box::new(L33tMatcher::new(dicts)));
        matchers.push(Box::new(SpatialMatcher::new()));
        matchers.push(Box::new(RepeatMatcher));
        matchers.push(Box::new(SequenceMatcher));
        matchers.push(Box::new(RegexMatcher::builtin()));
        matchers.push(Box::new(DateMatcher));
        MatcherSet { matchers }
    }

    /// Runs every matcher over the full password, plus a per-evaluation
    /// dictionary built from `user_inputs`, and returns the union of all
    /// candidates ordered by span.
    pub fn omnimatch(&self, password: &[char], user_inputs: &[String]) -> Vec<Match> {
        let mut all = Vec::new();
        for matcher in &self.matchers {
            all.extend(matcher.matches(password));
        }
        if !user_inputs.is_empty() {
            let dict = Arc::new(RankedDictionary::from_words("user_inputs", user_inputs));
            all.extend(DictionaryMatcher::new(dict.clone()).matches(password));
            all.extend(L33tMatcher::new(vec![dict]).matches(password));
        }

        all.sort_by(|a, b| (a.i, a.j).cmp(&(b.i, b.j)));
        // union by value equality: different matchers (or leet passes) can
        // produce identical records
        let mut union: Vec<Match> = Vec::new();
        for m in all {
            if !union.contains(&m) {
                union.push(m);
            }
        }
        union
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pattern;

    fn omnimatch(password: &str, user_inputs: &[&str]) -> Vec<Match> {
        let chars: Vec<char> = password.chars().collect();
        let inputs: Vec<String> = user_inputs.iter().map(|s| s.to_string()).collect();
        MatcherSet::builtin().omnimatch(&chars, &inputs)
    }

    // --- Fan-out ---

    #[test]
    fn multiple_matchers_contribute() {
        let matches = omnimatch("password123", &[]);
        let patterns: Vec<Pattern> = matches.iter().map(Match::pattern).collect();
        assert!(patterns.contains(&Pattern::Dictionary)); // "password"
        assert!(patterns.contains(&Pattern::Regex)); // "123"
        assert!(patterns.contains(&Pattern::Sequence)); // "123"
    }

    #[test]
    fn results_are_ordered_by_span() {
        let matches = omnimatch("password123", &[]);
        for pair in matches.windows(2) {
            assert!((pair[0].i, pair[0].j) <= (pair[1].i, pair[1].j));
        }
    }

    #[test]
    fn empty_password_matches_nothing() {
        assert!(omnimatch("", &[]).is_empty());
    }

    #[test]
    fn no_duplicate_records_in_the_union() {
        let matches = omnimatch("p@ssword1991", &[]);
        for (idx, m) in matches.iter().enumerate() {
            assert!(
                !matches[idx + 1..].contains(m),
                "duplicate record: {m:?}"
            );
        }
    }

    // --- User inputs ---

    #[test]
    fn user_inputs_match_as_a_dictionary() {
        let matches = omnimatch("xkaterinax", &["Katerina"]);
        let hit = matches
            .iter()
            .find(|m| m.token == "katerina")
            .expect("user input should match");
        assert_eq!(hit.pattern(), Pattern::Dictionary);
    }

    #[test]
    fn user_inputs_get_a_leet_wrapper() {
        let matches = omnimatch("k4terina", &["katerina"]);
        assert!(matches.iter().any(Match::is_l33t));
    }

    #[test]
    fn without_user_inputs_no_user_dictionary_exists() {
        let matches = omnimatch("katerina", &[]);
        assert!(matches
            .iter()
            .all(|m| !matches!(&m.kind,
                crate::models::MatchKind::Dictionary { dictionary_name, .. }
                    if dictionary_name == "user_inputs")));
    }
}
