//! Ranked wordlists.
//!
//! A wordlist is plain text, one word per line, ordered by rank: the first
//! line is rank 1, the most common entry. Blank lines and `#` comments are
//! skipped. The builtin set (`passwords`, `english`, `male_names`,
//! `female_names`, `surnames`) is embedded at compile time and parsed once,
//! then shared read-only across every evaluator.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::GaugeError;

// ---------------------------------------------------------------------------
// RankedDictionary
// ---------------------------------------------------------------------------

/// An ordered wordlist with O(1) case-normalized lookup.
#[derive(Debug)]
pub struct RankedDictionary {
    name: String,
    /// Lower-cased word → 1-based rank. First occurrence wins.
    ranks: HashMap<String, usize>,
}

impl RankedDictionary {
    /// Parses the plain-text ranked format.
    ///
    /// Returns an error for a list with no entries; an estimator built on an
    /// empty dictionary would silently match nothing, which is always a
    /// caller mistake.
    pub fn from_text(name: &str, text: &str) -> Result<Self, GaugeError> {
        let mut ranks = HashMap::new();
        let mut rank = 0;
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            rank += 1;
            ranks.entry(word.to_lowercase()).or_insert(rank);
        }
        if ranks.is_empty() {
            return Err(GaugeError::Wordlist(format!(
                "dictionary '{name}' has no entries"
            )));
        }
        Ok(RankedDictionary {
            name: name.to_string(),
            ranks,
        })
    }

    /// Builds a dictionary from an in-memory word sequence, ranked by
    /// position. Used for per-evaluation user-input lists; an empty list is
    /// valid here and simply never matches.
    pub fn from_words<I, S>(name: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = HashMap::new();
        for (idx, word) in words.into_iter().enumerate() {
            ranks
                .entry(word.as_ref().to_lowercase())
                .or_insert(idx + 1);
        }
        RankedDictionary {
            name: name.to_string(),
            ranks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rank of an already lower-cased word.
    pub fn rank_of(&self, word: &str) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Builtin set
// ---------------------------------------------------------------------------

/// The default dictionaries, parsed once from the embedded data files.
pub fn builtin_dictionaries() -> &'static [Arc<RankedDictionary>] {
    static BUILTIN: OnceLock<Vec<Arc<RankedDictionary>>> = OnceLock::new();
    BUILTIN
        .get_or_init(|| {
            let load = |name: &str, text: &str| {
                Arc::new(
                    RankedDictionary::from_text(name, text)
                        .expect("embedded wordlist must parse"),
                )
            };
            vec![
                load("passwords", include_str!("../../data/passwords.txt")),
                load("english", include_str!("../../data/english.txt")),
                load("male_names", include_str!("../../data/male_names.txt")),
                load("female_names", include_str!("../../data/female_names.txt")),
                load("surnames", include_str!("../../data/surnames.txt")),
            ]
        })
        .as_slice()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
