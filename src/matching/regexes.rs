//! Parameterised regex matcher.
//!
//! Specs are data: a name, a regex, a fixed alphabet size, and whether the
//! alphabet is paid per character (digit runs) or once for the whole token
//! (recent years). Specs compile at construction and invalid caller-supplied
//! patterns surface as errors before any evaluation runs.

use regex::Regex;

use crate::models::{Match, MatchKind, Matcher};
use crate::GaugeError;

// ---------------------------------------------------------------------------
// RegexSpec
// ---------------------------------------------------------------------------

/// One compiled pattern with its entropy parameters.
pub struct RegexSpec {
    name: String,
    regex: Regex,
    cardinality: u64,
    per_char: bool,
}

impl RegexSpec {
    /// Compiles a spec. Returns an error if the pattern is invalid.
    pub fn new(
        name: &str,
        pattern: &str,
        cardinality: u64,
        per_char: bool,
    ) -> Result<Self, GaugeError> {
        let regex = Regex::new(pattern)
            .map_err(|e| GaugeError::RegexSpec(format!("invalid pattern '{name}': {e}")))?;
        Ok(RegexSpec {
            name: name.to_string(),
            regex,
            cardinality,
            per_char,
        })
    }

    fn entropy(&self, token_len: usize) -> f64 {
        let bits = (self.cardinality as f64).log2();
        if self.per_char {
            token_len as f64 * bits
        } else {
            bits
        }
    }
}

// ---------------------------------------------------------------------------
// RegexMatcher
// ---------------------------------------------------------------------------

pub struct RegexMatcher {
    specs: Vec<RegexSpec>,
}

impl RegexMatcher {
    pub fn new(specs: Vec<RegexSpec>) -> Self {
        RegexMatcher { specs }
    }

    /// The default specs: runs of 3+ digits (alphabet 10, per character) and
    /// recent years 19xx/20xx (119 candidate years, flat).
    pub fn builtin() -> Self {
        let spec = |name, pattern, cardinality, per_char| {
            RegexSpec::new(name, pattern, cardinality, per_char)
                .expect("hard-coded regex spec must compile")
        };
        RegexMatcher::new(vec![
            spec("digits", r"[0-9]{3,}", 10, true),
            spec("recent_year", r"19[0-9]{2}|20[0-9]{2}", 119, false),
        ])
    }
}

impl Matcher for RegexMatcher {
    fn name(&self) -> &str {
        "regex"
    }

    fn matches(&self, password: &[char]) -> Vec<Match> {
        let text: String = password.iter().collect();
        let mut matches = Vec::new();
        for spec in &self.specs {
            for found in spec.regex.find_iter(&text) {
                // spans come back as byte offsets; the match record wants
                // character indices
                let i = text[..found.start()].chars().count();
                let len = found.as_str().chars().count();
                matches.push(Match {
                    i,
                    j: i + len - 1,
                    token: found.as_str().to_string(),
                    cardinality: spec.cardinality,
                    entropy: spec.entropy(len),
                    kind: MatchKind::Regex {
                        spec_name: spec.name.clone(),
                    },
                });
            }
        }
        matches
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pattern;

    fn run(password: &str) -> Vec<Match> {
        let chars: Vec<char> = password.chars().collect();
        RegexMatcher::builtin().matches(&chars)
    }

    fn spec_name(m: &Match) -> &str {
        match &m.kind {
            MatchKind::Regex { spec_name } => spec_name.as_str(),
            other => panic!("expected regex kind, got {other:?}"),
        }
    }

    // --- Digit runs ---

    #[test]
    fn digit_run_pays_per_character() {
        let matches = run("xx90210xx");
        let m = matches.iter().find(|m| spec_name(m) == "digits").unwrap();
        assert_eq!(m.pattern(), Pattern::Regex);
        assert_eq!(m.token, "90210");
        assert_eq!((m.i, m.j), (2, 6));
        assert!((m.entropy - 5.0 * 10f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn two_digits_do_not_fire() {
        assert!(run("ab12cd").is_empty());
    }

    // --- Recent years ---

    #[test]
    fn recent_year_is_flat_entropy() {
        let matches = run("born1987");
        let m = matches
            .iter()
            .find(|m| spec_name(m) == "recent_year")
            .unwrap();
        assert_eq!(m.token, "1987");
        assert_eq!(m.cardinality, 119);
        assert!((m.entropy - 119f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn year_run_also_fires_digits_spec() {
        let names: Vec<String> = run("2016").iter().map(|m| spec_name(m).to_string()).collect();
        assert!(names.contains(&"digits".to_string()));
        assert!(names.contains(&"recent_year".to_string()));
    }

    // --- Char-index conversion ---

    #[test]
    fn spans_are_character_indices_after_multibyte_prefix() {
        let matches = run("日本語1999");
        let m = matches
            .iter()
            .find(|m| spec_name(m) == "recent_year")
            .unwrap();
        assert_eq!((m.i, m.j), (3, 6));
        assert_eq!(m.token, "1999");
    }

    // --- Spec compilation ---

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(RegexSpec::new("bad", "[unclosed", 10, true).is_err());
    }
}
