//! Pattern-based password strength estimation.
//!
//! Given a candidate password (and, optionally, strings an attacker may
//! already know about the user), the estimator decomposes the password into
//! recognized weakness patterns — wordlist hits, leet substitutions,
//! keyboard walks, repeats, sequences, digit runs, years, dates — picks the
//! lowest-entropy complete covering, and derives a crack-time estimate, an
//! ordinal 0..6 score, and feedback tags from it.
//!
//! ```
//! use passgauge::match_password;
//!
//! let strength = match_password("Tr0ub4dour&3", &[]);
//! assert!(strength.score <= 6);
//! println!("{} bits, {}", strength.entropy, strength.crack_time_display);
//! ```
//!
//! One-shot callers use [`match_password`]; anything evaluating more than a
//! handful of passwords builds an [`Estimator`] once and reuses it.

pub mod config;
pub mod estimator;
pub mod feedback;
pub mod matching;
pub mod models;
pub mod scoring;
pub mod wordlists;

use thiserror::Error;

/// Top-level error type.
///
/// Evaluation itself is total and never fails; errors only arise while
/// constructing matcher inputs (wordlists, regex specs) and always surface
/// before an estimator exists.
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("wordlist error: {0}")]
    Wordlist(String),

    #[error("regex spec error: {0}")]
    RegexSpec(String),
}

pub use config::EvalOptions;
pub use estimator::{match_password, Estimator};
pub use feedback::{Suggestion, Warning};
pub use models::{L33tExtension, Match, MatchKind, Matcher, Pattern, Strength};
pub use wordlists::RankedDictionary;
