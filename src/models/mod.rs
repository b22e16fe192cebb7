use std::collections::BTreeMap;

use serde::Serialize;

use crate::feedback::{Suggestion, Warning};

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// Enumeration of the weakness classes a match can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Dictionary,
    Spatial,
    Repeat,
    Sequence,
    Regex,
    Date,
    Bruteforce,
}

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// A single recognized span of the password.
///
/// The common header carries everything the covering search and the gap
/// filler need; pattern-specific fields live in the [`MatchKind`] payload and
/// are only inspected by the feedback deriver and by callers.
///
/// Indices are **character** indices into the original password, 0-based and
/// inclusive on both ends, so `token.chars().count() == j - i + 1` holds for
/// multi-byte passwords too.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    /// Start index (inclusive).
    pub i: usize,
    /// End index (inclusive). Always `>= i`.
    pub j: usize,
    /// The literal substring `password[i..=j]`.
    pub token: String,
    /// Effective alphabet size assumed for this match.
    pub cardinality: u64,
    /// Bits of entropy attributed to this match. Finite and `>= 0`.
    pub entropy: f64,
    #[serde(flatten)]
    pub kind: MatchKind,
}

impl Match {
    /// The pattern tag, derived from the variant payload.
    pub fn pattern(&self) -> Pattern {
        match self.kind {
            MatchKind::Dictionary { .. } => Pattern::Dictionary,
            MatchKind::Spatial { .. } => Pattern::Spatial,
            MatchKind::Repeat { .. } => Pattern::Repeat,
            MatchKind::Sequence { .. } => Pattern::Sequence,
            MatchKind::Regex { .. } => Pattern::Regex,
            MatchKind::Date { .. } => Pattern::Date,
            MatchKind::Bruteforce => Pattern::Bruteforce,
        }
    }

    /// Token length in characters.
    pub fn len(&self) -> usize {
        self.j - self.i + 1
    }

    /// True for the leet variant of a dictionary match.
    pub fn is_l33t(&self) -> bool {
        matches!(self.kind, MatchKind::Dictionary { l33t: Some(_), .. })
    }
}

// ---------------------------------------------------------------------------
// MatchKind
// ---------------------------------------------------------------------------

/// Pattern-specific payload, discriminated by the serialized `pattern` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "pattern", rename_all = "lowercase")]
pub enum MatchKind {
    Dictionary {
        /// Which ranked list produced the hit (`passwords`, `english`, ...).
        dictionary_name: String,
        /// The list entry that matched, normalized to lower case.
        matched_word: String,
        /// 1-based position in the list; rank 1 is the most common entry.
        rank: usize,
        /// `log2(rank)`.
        base_entropy: f64,
        /// Bonus bits for the token's capitalization shape.
        uppercase_entropy: f64,
        /// Present when the hit required leet substitutions.
        #[serde(skip_serializing_if = "Option::is_none")]
        l33t: Option<L33tExtension>,
    },
    Spatial {
        /// Keyboard graph the run was walked on (`qwerty`, `keypad`, ...).
        graph: String,
        /// Direction changes along the run. A straight run counts 1.
        turns: usize,
        /// Characters in the run that require the shift key.
        shifted_count: usize,
    },
    Repeat {
        repeated_char: char,
    },
    Sequence {
        sequence_name: String,
        ascending: bool,
    },
    Regex {
        /// Name of the spec that fired (`digits`, `recent_year`).
        spec_name: String,
    },
    Date {
        day: u32,
        month: u32,
        year: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        separator: Option<char>,
    },
    Bruteforce,
}

/// Leet extension of a dictionary match.
///
/// Invariant: `subs` is non-empty (at least one substitution was exercised by
/// the token) and `l33t_entropy >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct L33tExtension {
    /// The leet-character → normal-letter mapping actually used by the token.
    pub subs: BTreeMap<char, char>,
    /// Extra bits charged for the substitutions.
    pub l33t_entropy: f64,
}

// ---------------------------------------------------------------------------
// Matcher trait
// ---------------------------------------------------------------------------

/// Every pattern matcher implements this trait.
///
/// Matchers see only the password and their own immutable shared tables, so
/// they can run in any order without changing the result. They return *every*
/// candidate span, including overlapping ones; the covering search picks the
/// cheapest combination.
pub trait Matcher: Send + Sync {
    /// Short name used in diagnostics ("dictionary:english", "spatial", ...).
    fn name(&self) -> &str;

    /// All candidate matches over the full password.
    fn matches(&self, password: &[char]) -> Vec<Match>;
}

// ---------------------------------------------------------------------------
// Strength
// ---------------------------------------------------------------------------

/// The complete output of one evaluation. The core result type of the crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strength {
    pub password: String,
    /// Total bits across the chosen decomposition.
    pub entropy: f64,
    /// Contiguous, gap-free cover of the password. Empty for an empty password.
    pub match_sequence: Vec<Match>,
    /// Estimated seconds to crack under the fixed guesses-per-second model.
    pub crack_time: f64,
    /// Human-oriented rendering of `crack_time`. Opaque to the core; a
    /// localizing caller may replace it.
    pub crack_time_display: String,
    /// Ordinal score on the fixed 0..6 scale.
    pub score: u8,
    pub warning: Warning,
    pub suggestions: Vec<Suggestion>,
    /// Wall-clock cost of this evaluation, in milliseconds.
    pub calc_time_ms: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
