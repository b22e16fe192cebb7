//! End-to-end scenarios against the bundled wordlists.
//!
//! Each case pins the observable contract: the chosen decomposition, the
//! entropy accounting invariants, and the derived feedback tags. Structural
//! invariants (covering, token fidelity, entropy summation, idempotence)
//! are checked across a shared password corpus.

use passgauge::{match_password, Estimator, EvalOptions, Pattern, Strength, Suggestion, Warning};

fn patterns(strength: &Strength) -> Vec<Pattern> {
    strength.match_sequence.iter().map(|m| m.pattern()).collect()
}

fn assert_covering_invariants(strength: &Strength) {
    let n = strength.password.chars().count();
    let seq = &strength.match_sequence;
    if n == 0 {
        assert!(seq.is_empty());
        assert_eq!(strength.entropy, 0.0);
        return;
    }
    // contiguous, gap-free cover
    assert_eq!(seq.first().unwrap().i, 0);
    assert_eq!(seq.last().unwrap().j, n - 1);
    for pair in seq.windows(2) {
        assert_eq!(pair[1].i, pair[0].j + 1);
    }
    // token fidelity and non-negative entropy
    let chars: Vec<char> = strength.password.chars().collect();
    for m in seq {
        let expected: String = chars[m.i..=m.j].iter().collect();
        assert_eq!(m.token, expected);
        assert_eq!(m.token.chars().count(), m.j - m.i + 1);
        assert!(m.entropy >= 0.0 && m.entropy.is_finite());
    }
    // per-match entropy sums to the total
    let sum: f64 = seq.iter().map(|m| m.entropy).sum();
    assert!(
        (sum - strength.entropy).abs() <= 1e-9,
        "entropy sum {sum} != total {}",
        strength.entropy
    );
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn empty_password() {
    let strength = match_password("", &[]);
    assert_eq!(strength.entropy, 0.0);
    assert!(strength.match_sequence.is_empty());
    assert_eq!(strength.score, 0);
    assert_eq!(strength.warning, Warning::Default);
    assert_eq!(strength.suggestions, vec![Suggestion::Default]);
}

#[test]
fn top_ranked_common_password() {
    let strength = match_password("password", &[]);
    assert_eq!(strength.match_sequence.len(), 1);
    let m = &strength.match_sequence[0];
    assert_eq!(m.pattern(), Pattern::Dictionary);
    assert!(!m.is_l33t());
    assert_eq!(strength.entropy, 0.0); // rank 1: log2(1) = 0
    assert_eq!(strength.score, 0);
    assert_eq!(strength.warning, Warning::Top10Passwords);
    assert_eq!(strength.crack_time_display, "instant");
}

#[test]
fn leet_variant_of_common_password() {
    let strength = match_password("p@ssword", &[]);
    assert_eq!(strength.match_sequence.len(), 1);
    let m = &strength.match_sequence[0];
    assert!(m.is_l33t());
    assert_eq!(m.token, "p@ssword");
    // one exercised substitution, clamped to the 1-bit minimum
    assert!((strength.entropy - 1.0).abs() < 1e-9);
    assert_eq!(strength.score, 0);
    assert_eq!(strength.warning, Warning::SimilarCommonPasswords);
    assert!(strength
        .suggestions
        .contains(&Suggestion::PredictableSubstitutionsEasy));
    assert!(strength
        .suggestions
        .contains(&Suggestion::AddAnotherWordOrTwo));
}

#[test]
fn straight_keyboard_row() {
    let strength = match_password("qwerty", &[]);
    assert_eq!(strength.match_sequence.len(), 1);
    let m = &strength.match_sequence[0];
    assert_eq!(m.pattern(), Pattern::Spatial);
    assert_eq!(strength.warning, Warning::StraightRow);
    assert!(strength
        .suggestions
        .contains(&Suggestion::UseLongerKeyboardPattern));
}

#[test]
fn ascending_sequence() {
    let strength = match_password("abcdef", &[]);
    assert_eq!(strength.match_sequence.len(), 1);
    assert_eq!(strength.match_sequence[0].pattern(), Pattern::Sequence);
    assert_eq!(strength.warning, Warning::SequenceAbcEasy);
}

#[test]
fn repeated_character_run() {
    let strength = match_password("aaaaaa", &[]);
    assert_eq!(strength.match_sequence.len(), 1);
    assert_eq!(strength.match_sequence[0].pattern(), Pattern::Repeat);
    assert_eq!(strength.warning, Warning::RepeatsLikeAaaEasy);
    assert!(strength
        .suggestions
        .contains(&Suggestion::AvoidRepeatedWordsAndChars));
}

#[test]
fn mixed_leet_and_bruteforce_decomposition() {
    let strength = match_password("Tr0ub4dour&3", &[]);
    let pats = patterns(&strength);
    assert!(pats.contains(&Pattern::Bruteforce));
    assert!(strength.match_sequence.iter().any(|m| m.is_l33t()));
    // strong enough that the feedback stays silent
    assert!(strength.score >= 3, "score = {}", strength.score);
    assert_eq!(strength.warning, Warning::Empty);
    assert_eq!(strength.suggestions, vec![Suggestion::Empty]);
}

#[test]
fn recent_year_feedback() {
    let strength = match_password("1991", &[]);
    assert_eq!(strength.match_sequence.len(), 1);
    assert_eq!(strength.match_sequence[0].pattern(), Pattern::Regex);
    assert_eq!(strength.warning, Warning::RecentYearsEasy);
    assert!(strength
        .suggestions
        .contains(&Suggestion::AvoidYearsAssociatedYou));
}

#[test]
fn separated_date_feedback() {
    let strength = match_password("13/12/1991", &[]);
    assert_eq!(strength.match_sequence.len(), 1);
    assert_eq!(strength.match_sequence[0].pattern(), Pattern::Date);
    assert_eq!(strength.warning, Warning::DatesEasy);
    assert!(strength
        .suggestions
        .contains(&Suggestion::AvoidDatesYearsAssociatedYou));
}

#[test]
fn user_inputs_become_the_cheapest_dictionary() {
    let strength = match_password("voskresenie7", &["Voskresenie"]);
    let dict_match = strength
        .match_sequence
        .iter()
        .find(|m| m.pattern() == Pattern::Dictionary)
        .expect("user input should be matched");
    assert_eq!(dict_match.token, "voskresenie");
    assert_eq!(strength.warning, Warning::Empty); // user list carries no tag
}

// ---------------------------------------------------------------------------
// Structural invariants
// ---------------------------------------------------------------------------

const CORPUS: &[&str] = &[
    "",
    "a",
    "password",
    "p@ssword",
    "P@SSW0RD!",
    "qwerty",
    "abcdef",
    "aaaaaa",
    "Tr0ub4dour&3",
    "13/12/1991",
    "correcthorsebatterystaple",
    "D0g..................",
    "москва2024",
    "neverg0nnagiveyouup",
];

#[test]
fn covering_invariants_hold_across_the_corpus() {
    for password in CORPUS {
        let strength = match_password(password, &[]);
        assert_covering_invariants(&strength);
    }
}

#[test]
fn evaluation_is_idempotent() {
    let estimator = Estimator::new();
    let options = EvalOptions::with_user_inputs(["kate", "smith"]);
    for password in CORPUS {
        let a = estimator.evaluate(password, &options);
        let b = estimator.evaluate(password, &options);
        assert_eq!(a.entropy, b.entropy, "password {password:?}");
        assert_eq!(a.match_sequence, b.match_sequence);
        assert_eq!(a.score, b.score);
        assert_eq!(a.warning, b.warning);
        assert_eq!(a.suggestions, b.suggestions);
        // only calc_time_ms may differ between the two runs
    }
}

#[test]
fn score_tracks_crack_time_monotonically() {
    let mut pairs: Vec<(f64, u8)> = CORPUS
        .iter()
        .map(|p| {
            let s = match_password(p, &[]);
            (s.crack_time, s.score)
        })
        .collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    for w in pairs.windows(2) {
        assert!(w[0].1 <= w[1].1, "score must not decrease with crack time");
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn strength_serializes_to_json() {
    let strength = match_password("p@ssword", &[]);
    let json = serde_json::to_value(&strength).unwrap();
    assert_eq!(json["password"], "p@ssword");
    assert_eq!(json["score"], 0);
    assert_eq!(json["warning"], "similar_common_passwords");
    assert_eq!(json["match_sequence"][0]["pattern"], "dictionary");
    assert_eq!(json["match_sequence"][0]["l33t"]["subs"]["@"], "a");
}
