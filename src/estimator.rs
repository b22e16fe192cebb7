//! The evaluator: wires the matcher fan-out, the covering search, the
//! crack-time model, and the feedback deriver into one call.
//!
//! Evaluation is total — every input password produces a [`Strength`] — and
//! strictly synchronous. An [`Estimator`] is immutable after construction
//! and can be shared across threads; per-evaluation state lives and dies
//! inside [`evaluate`].
//!
//! [`evaluate`]: Estimator::evaluate

use std::sync::Arc;
use std::time::Instant;

use crate::config::EvalOptions;
use crate::feedback::derive_feedback;
use crate::matching::MatcherSet;
use crate::models::Strength;
use crate::scoring::{self, search};
use crate::wordlists::RankedDictionary;

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// A reusable evaluator built from a matcher factory.
pub struct Estimator {
    matchers: MatcherSet,
}

impl Estimator {
    /// An estimator over the bundled default dictionaries.
    pub fn new() -> Self {
        Estimator {
            matchers: MatcherSet::builtin(),
        }
    }

    /// An estimator over caller-supplied ranked dictionaries. The rest of
    /// the matcher set (spatial, repeat, sequence, regex, date) is unchanged.
    pub fn with_dictionaries(dicts: Vec<Arc<RankedDictionary>>) -> Self {
        Self::from_matchers(MatcherSet::with_dictionaries(dicts))
    }

    /// An estimator over an arbitrary pre-built matcher factory.
    pub fn from_matchers(matchers: MatcherSet) -> Self {
        Estimator { matchers }
    }

    /// Evaluates one password.
    pub fn evaluate(&self, password: &str, options: &EvalOptions) -> Strength {
        let started = Instant::now();

        let chars: Vec<char> = password.chars().collect();
        let candidates = self.matchers.omnimatch(&chars, &options.user_inputs);
        let (entropy, match_sequence) = search::minimum_entropy_match_sequence(&chars, &candidates);

        let crack_time = scoring::entropy_to_crack_time(entropy);
        let score = scoring::crack_time_to_score(crack_time);
        let (warning, suggestions) = derive_feedback(score, &match_sequence);

        Strength {
            password: password.to_string(),
            entropy,
            match_sequence,
            crack_time,
            crack_time_display: scoring::crack_time_display(crack_time),
            score,
            warning,
            suggestions,
            calc_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// One-shot entry point
// ---------------------------------------------------------------------------

/// Evaluates one password against a freshly built default estimator.
///
/// For repeated calls, build an [`Estimator`] once and reuse it — the
/// dictionaries and keyboard graphs are worth amortizing.
pub fn match_password(password: &str, user_inputs: &[&str]) -> Strength {
    let options = EvalOptions::with_user_inputs(user_inputs.iter().copied());
    Estimator::new().evaluate(password, &options)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
