//! Ranked-wordlist matcher.
//!
//! Every substring of the password is looked up case-insensitively in one
//! ranked list; each hit costs `log2(rank)` bits plus the capitalization
//! bonus. All hits are reported, overlapping ones included; the covering
//! search decides which survive.

use std::sync::Arc;

use crate::models::{Match, MatchKind, Matcher};
use crate::scoring::{password_cardinality, uppercase_entropy};
use crate::wordlists::RankedDictionary;

pub struct DictionaryMatcher {
    dict: Arc<RankedDictionary>,
    label: String,
}

impl DictionaryMatcher {
    pub fn new(dict: Arc<RankedDictionary>) -> Self {
        let label = format!("dictionary:{}", dict.name());
        DictionaryMatcher { dict, label }
    }
}

impl Matcher for DictionaryMatcher {
    fn name(&self) -> &str {
        &self.label
    }

    fn matches(&self, password: &[char]) -> Vec<Match> {
        dictionary_match(password, &self.dict)
    }
}

/// All-substring lookup against one dictionary.
///
/// Free-standing so the leet matcher can run it over a translated password
/// and then rewrite the resulting tokens and entropies.
pub fn dictionary_match(password: &[char], dict: &RankedDictionary) -> Vec<Match> {
    let mut matches = Vec::new();
    if dict.is_empty() {
        return matches;
    }
    for i in 0..password.len() {
        let mut lowered = String::new();
        for (j, &c) in password.iter().enumerate().skip(i) {
            lowered.extend(c.to_lowercase());
            if let Some(rank) = dict.rank_of(&lowered) {
                let token: String = password[i..=j].iter().collect();
                let base_entropy = (rank as f64).log2();
                let upper = uppercase_entropy(&token);
                matches.push(Match {
                    i,
                    j,
                    cardinality: password_cardinality(&token),
                    entropy: base_entropy + upper,
                    kind: MatchKind::Dictionary {
                        dictionary_name: dict.name().to_string(),
                        matched_word: lowered.clone(),
                        rank,
                        base_entropy,
                        uppercase_entropy: upper,
                        l33t: None,
                    },
                    token,
                });
            }
        }
    }
    matches
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pattern;

    fn dict(words: &[&str]) -> RankedDictionary {
        RankedDictionary::from_words("test", words)
    }

    fn run(password: &str, words: &[&str]) -> Vec<Match> {
        let chars: Vec<char> = password.chars().collect();
        dictionary_match(&chars, &dict(words))
    }

    // --- Basic lookup ---

    #[test]
    fn exact_word_matches_with_rank_entropy() {
        let matches = run("motherboard", &["mother", "motherboard", "board"]);
        let full = matches.iter().find(|m| m.token == "motherboard").unwrap();
        assert_eq!(full.pattern(), Pattern::Dictionary);
        assert_eq!((full.i, full.j), (0, 10));
        assert!((full.entropy - 2f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn overlapping_hits_are_all_reported() {
        let matches = run("motherboard", &["mother", "motherboard", "board"]);
        let tokens: Vec<&str> = matches.iter().map(|m| m.token.as_str()).collect();
        assert!(tokens.contains(&"mother"));
        assert!(tokens.contains(&"board"));
        assert!(tokens.contains(&"motherboard"));
    }

    #[test]
    fn embedded_word_has_correct_span() {
        let matches = run("xxwordxx", &["word"]);
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].i, matches[0].j), (2, 5));
        assert_eq!(matches[0].token, "word");
    }

    #[test]
    fn no_hit_yields_no_matches() {
        assert!(run("zqxv", &["word"]).is_empty());
    }

    // --- Case handling ---

    #[test]
    fn lookup_is_case_insensitive_and_token_keeps_original_case() {
        let matches = run("WoRd", &["word"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token, "WoRd");
        match &matches[0].kind {
            MatchKind::Dictionary { matched_word, .. } => assert_eq!(matched_word, "word"),
            other => panic!("expected dictionary kind, got {other:?}"),
        }
    }

    #[test]
    fn capitalized_token_pays_uppercase_bonus() {
        let plain = run("word", &["word"]);
        let capped = run("Word", &["word"]);
        assert!((capped[0].entropy - plain[0].entropy - 1.0).abs() < 1e-9);
    }

    // --- Rank semantics ---

    #[test]
    fn rank_one_word_costs_zero_base_bits() {
        let matches = run("first", &["first", "second"]);
        match &matches[0].kind {
            MatchKind::Dictionary {
                rank, base_entropy, ..
            } => {
                assert_eq!(*rank, 1);
                assert_eq!(*base_entropy, 0.0);
            }
            other => panic!("expected dictionary kind, got {other:?}"),
        }
    }

    #[test]
    fn empty_dictionary_matches_nothing() {
        let chars: Vec<char> = "anything".chars().collect();
        let empty = RankedDictionary::from_words("user_inputs", Vec::<String>::new());
        assert!(dictionary_match(&chars, &empty).is_empty());
    }
}
