//! Date matcher.
//!
//! Tries every substring as a `[d]d mm yy(yy)` date, with or without a
//! separator. Candidates that do not form a possible calendar date emit
//! nothing — a failed parse is a non-match, never an error.
//!
//! A date is cheap for an attacker regardless of which date it is, so the
//! entropy only distinguishes two-digit from four-digit years and charges
//! two extra bits when a separator is present.

use crate::models::{Match, MatchKind, Matcher};
use crate::scoring::password_cardinality;

const SEPARATORS: [char; 6] = ['/', '\\', '-', '.', ',', ' '];

/// Accepted range for four-digit years. Two-digit years are unrestricted.
const MIN_FULL_YEAR: u32 = 1900;
const MAX_FULL_YEAR: u32 = 2050;

/// Candidate years an attacker tries for a four-digit date.
const NUM_YEARS: f64 = 119.0;
/// Candidate years for a two-digit date.
const NUM_SHORT_YEARS: f64 = 100.0;

pub struct DateMatcher;

impl Matcher for DateMatcher {
    fn name(&self) -> &str {
        "date"
    }

    fn matches(&self, password: &[char]) -> Vec<Match> {
        let mut matches: Vec<Match> = Vec::new();
        let n = password.len();
        for i in 0..n {
            for j in i + 3..n.min(i + 10) {
                let slice = &password[i..=j];
                let mut candidates = Vec::new();
                if slice.len() <= 8 && slice.iter().all(|c| c.is_ascii_digit()) {
                    candidates.extend(unseparated_candidates(slice));
                }
                if slice.len() >= 6 {
                    candidates.extend(separated_candidate(slice));
                }
                for candidate in candidates {
                    push_unique(&mut matches, build_match(password, i, j, candidate));
                }
            }
        }
        matches
    }
}

#[derive(Clone, Copy, PartialEq)]
struct DateCandidate {
    day: u32,
    month: u32,
    year: u32,
    four_digit_year: bool,
    separator: Option<char>,
}

/// All valid day/month/year splits of an all-digit run.
fn unseparated_candidates(slice: &[char]) -> Vec<DateCandidate> {
    let mut found = Vec::new();
    let len = slice.len();
    for day_len in 1..=2usize {
        for month_len in 1..=2usize {
            for year_len in [4usize, 2] {
                if day_len + month_len + year_len != len {
                    continue;
                }
                let day = digits(&slice[..day_len]);
                let month = digits(&slice[day_len..day_len + month_len]);
                let year = digits(&slice[day_len + month_len..]);
                if let Some(candidate) = validate(day, month, year, year_len == 4, None) {
                    found.push(candidate);
                }
            }
        }
    }
    found
}

/// A `[d]d SEP mm SEP yy(yy)` reading of a substring containing exactly two
/// occurrences of one separator character.
fn separated_candidate(slice: &[char]) -> Option<DateCandidate> {
    let sep_positions: Vec<usize> = slice
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .collect();
    let [first, second] = sep_positions[..] else {
        return None;
    };
    let sep = slice[first];
    if slice[second] != sep || !SEPARATORS.contains(&sep) {
        return None;
    }
    let day_part = &slice[..first];
    let month_part = &slice[first + 1..second];
    let year_part = &slice[second + 1..];
    if !(1..=2).contains(&day_part.len())
        || !(1..=2).contains(&month_part.len())
        || !(year_part.len() == 2 || year_part.len() == 4)
    {
        return None;
    }
    validate(
        digits(day_part),
        digits(month_part),
        digits(year_part),
        year_part.len() == 4,
        Some(sep),
    )
}

fn digits(slice: &[char]) -> u32 {
    slice
        .iter()
        .fold(0, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0))
}

/// Rejects impossible dates. Day and month are swapped when that reading is
/// the legal one (`25/12` vs `12/25`).
fn validate(
    day: u32,
    month: u32,
    year: u32,
    four_digit_year: bool,
    separator: Option<char>,
) -> Option<DateCandidate> {
    let (day, month) = if month > 12 && month <= 31 && day >= 1 && day <= 12 {
        (month, day)
    } else {
        (day, month)
    };
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return None;
    }
    if four_digit_year && !(MIN_FULL_YEAR..=MAX_FULL_YEAR).contains(&year) {
        return None;
    }
    Some(DateCandidate {
        day,
        month,
        year,
        four_digit_year,
        separator,
    })
}

fn build_match(password: &[char], i: usize, j: usize, candidate: DateCandidate) -> Match {
    let token: String = password[i..=j].iter().collect();
    let years = if candidate.four_digit_year {
        NUM_YEARS
    } else {
        NUM_SHORT_YEARS
    };
    let mut entropy = (31.0 * 12.0 * years).log2();
    if candidate.separator.is_some() {
        entropy += 2.0;
    }
    Match {
        i,
        j,
        cardinality: password_cardinality(&token),
        entropy,
        kind: MatchKind::Date {
            day: candidate.day,
            month: candidate.month,
            year: candidate.year,
            separator: candidate.separator,
        },
        token,
    }
}

/// Distinct `(span, day, month, year, separator)` results only; different
/// splits of one run can converge on the same reading.
fn push_unique(matches: &mut Vec<Match>, m: Match) {
    if !matches.contains(&m) {
        matches.push(m);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
