//! Feedback derivation.
//!
//! The core never renders text: it emits closed warning/suggestion tags that
//! an external collaborator localizes. Feedback is keyed off the chosen
//! decomposition — specifically its longest match, on the theory that the
//! longest recognized pattern is what the user thinks makes the password
//! strong.

use serde::Serialize;

use crate::models::{Match, MatchKind, Pattern};
use crate::scoring::{crack_time_to_score, entropy_to_crack_time};

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Warning tags. `Empty` is the no-warning value; `Default` is the blank
/// slate shown for an empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    Default,
    Empty,
    StraightRow,
    ShortKeyboardPatterns,
    RepeatsLikeAaaEasy,
    RepeatsLikeAbcSlighterHarder,
    SequenceAbcEasy,
    RecentYearsEasy,
    DatesEasy,
    Top10Passwords,
    Top100Passwords,
    CommonPasswords,
    SimilarCommonPasswords,
    WordEasy,
    NameSurnamesEasy,
    CommonNameSurnamesEasy,
}

/// Suggestion tags, rendered and ordered by the caller as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    Default,
    Empty,
    AddAnotherWordOrTwo,
    UseLongerKeyboardPattern,
    AvoidRepeatedWordsAndChars,
    AvoidSequences,
    AvoidYearsAssociatedYou,
    AvoidDatesYearsAssociatedYou,
    CapsDontHelp,
    AllCapsEasy,
    ReversedWordEasy,
    PredictableSubstitutionsEasy,
}

// ---------------------------------------------------------------------------
// Deriver
// ---------------------------------------------------------------------------

/// Derives feedback from the chosen decomposition and the overall score.
pub fn derive_feedback(score: u8, sequence: &[Match]) -> (Warning, Vec<Suggestion>) {
    if sequence.is_empty() {
        return (Warning::Default, vec![Suggestion::Default]);
    }
    if score > 2 {
        return (Warning::Empty, vec![Suggestion::Empty]);
    }

    // longest token wins; ties keep the earliest
    let mut longest = &sequence[0];
    for m in &sequence[1..] {
        if m.len() > longest.len() {
            longest = m;
        }
    }

    let (warning, mut suggestions) = match_feedback(longest, sequence);
    suggestions.insert(0, Suggestion::AddAnotherWordOrTwo);
    (warning, suggestions)
}

fn match_feedback(m: &Match, sequence: &[Match]) -> (Warning, Vec<Suggestion>) {
    match &m.kind {
        MatchKind::Spatial { turns, .. } => {
            let warning = if *turns == 1 {
                Warning::StraightRow
            } else {
                Warning::ShortKeyboardPatterns
            };
            (warning, vec![Suggestion::UseLongerKeyboardPattern])
        }
        MatchKind::Repeat { .. } => (
            Warning::RepeatsLikeAaaEasy,
            vec![Suggestion::AvoidRepeatedWordsAndChars],
        ),
        MatchKind::Sequence { .. } => {
            (Warning::SequenceAbcEasy, vec![Suggestion::AvoidSequences])
        }
        MatchKind::Regex { spec_name } if spec_name == "recent_year" => (
            Warning::RecentYearsEasy,
            vec![Suggestion::AvoidYearsAssociatedYou],
        ),
        MatchKind::Date { .. } => (
            Warning::DatesEasy,
            vec![Suggestion::AvoidDatesYearsAssociatedYou],
        ),
        MatchKind::Dictionary {
            dictionary_name,
            rank,
            l33t,
            ..
        } => dictionary_feedback(m, dictionary_name, *rank, l33t.is_some(), sequence),
        _ => (Warning::Empty, Vec::new()),
    }
}

fn dictionary_feedback(
    m: &Match,
    dictionary_name: &str,
    rank: usize,
    is_l33t: bool,
    sequence: &[Match],
) -> (Warning, Vec<Suggestion>) {
    let sole = sequence
        .iter()
        .filter(|m| m.pattern() != Pattern::Bruteforce)
        .count()
        == 1;

    let warning = match dictionary_name {
        "passwords" => {
            if sole && !is_l33t {
                if rank <= 10 {
                    Warning::Top10Passwords
                } else if rank <= 100 {
                    Warning::Top100Passwords
                } else {
                    Warning::CommonPasswords
                }
            } else if crack_time_to_score(entropy_to_crack_time(m.entropy)) <= 1 {
                Warning::SimilarCommonPasswords
            } else {
                Warning::Empty
            }
        }
        "english" => {
            if sole {
                Warning::WordEasy
            } else {
                Warning::Empty
            }
        }
        "surnames" | "male_names" | "female_names" => {
            if sole {
                Warning::NameSurnamesEasy
            } else {
                Warning::CommonNameSurnamesEasy
            }
        }
        _ => Warning::Empty,
    };

    let mut suggestions = Vec::new();
    if m.token.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        suggestions.push(Suggestion::CapsDontHelp);
    }
    let has_letters = m.token.chars().any(char::is_alphabetic);
    if has_letters && m.token == m.token.to_uppercase() {
        suggestions.push(Suggestion::AllCapsEasy);
    }
    if is_l33t {
        suggestions.push(Suggestion::PredictableSubstitutionsEasy);
    }
    (warning, suggestions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
