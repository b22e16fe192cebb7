//! Leet-substitution matcher.
//!
//! Translates plausible symbol-for-letter substitutions back to letters and
//! reruns the dictionary matchers on each translated password. Within one
//! substitution dictionary every leet character maps to exactly one normal
//! letter; when a leet character could stand for several letters (`1` is both
//! `i` and `l`), the enumeration produces one dictionary per choice — `||ke`
//! tries `iike` and `llke` in separate passes, never the mixed `like`. This
//! mirrors the reference behavior and is a known, deliberate limitation.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{L33tExtension, Match, MatchKind, Matcher};
use crate::scoring::{binomial, password_cardinality, uppercase_entropy};
use crate::wordlists::RankedDictionary;

use super::dictionary::dictionary_match;

// ---------------------------------------------------------------------------
// Substitution table
// ---------------------------------------------------------------------------

/// Normal letter → the leet characters that commonly stand for it.
const L33T_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('b', &['8']),
    ('c', &['(', '{', '[', '<']),
    ('e', &['3']),
    ('g', &['6', '9']),
    ('i', &['1', '!', '|']),
    ('l', &['1', '|', '7']),
    ('o', &['0']),
    ('s', &['$', '5']),
    ('t', &['+', '7']),
    ('x', &['%']),
    ('z', &['2']),
];

/// Rows of the table restricted to leet characters that actually appear in
/// the password. Rows left with no characters are dropped.
fn relevant_subtable(password: &[char]) -> Vec<(char, Vec<char>)> {
    L33T_TABLE
        .iter()
        .filter_map(|&(letter, leet_chars)| {
            let present: Vec<char> = leet_chars
                .iter()
                .copied()
                .filter(|c| password.contains(c))
                .collect();
            if present.is_empty() {
                None
            } else {
                Some((letter, present))
            }
        })
        .collect()
}

/// Enumerates substitution dictionaries as `(leet_char, letter)` pair lists.
///
/// Built row by row: each existing partial dictionary is extended with one
/// leet character of the current row. A collision (the leet character is
/// already bound to an earlier letter) forks the dictionary instead of
/// overwriting it, which yields the Cartesian product over collision points.
fn enumerate_subs(relevant: &[(char, Vec<char>)]) -> Vec<Vec<(char, char)>> {
    let mut subs: Vec<Vec<(char, char)>> = vec![Vec::new()];
    for (letter, leet_chars) in relevant {
        let mut next: Vec<Vec<(char, char)>> = Vec::new();
        for &leet_chr in leet_chars {
            for sub in &subs {
                match sub.iter().position(|&(c, _)| c == leet_chr) {
                    None => {
                        let mut extended = sub.clone();
                        extended.push((leet_chr, *letter));
                        next.push(extended);
                    }
                    Some(pos) => {
                        let mut alternative = sub.clone();
                        alternative.remove(pos);
                        alternative.push((leet_chr, *letter));
                        next.push(sub.clone());
                        next.push(alternative);
                    }
                }
            }
        }
        subs = dedup_subs(next);
    }
    subs.retain(|s| !s.is_empty());
    subs
}

fn dedup_subs(mut subs: Vec<Vec<(char, char)>>) -> Vec<Vec<(char, char)>> {
    for sub in &mut subs {
        sub.sort_unstable();
    }
    subs.sort_unstable();
    subs.dedup();
    subs
}

// ---------------------------------------------------------------------------
// L33tMatcher
// ---------------------------------------------------------------------------

pub struct L33tMatcher {
    dicts: Vec<Arc<RankedDictionary>>,
}

impl L33tMatcher {
    pub fn new(dicts: Vec<Arc<RankedDictionary>>) -> Self {
        L33tMatcher { dicts }
    }
}

impl Matcher for L33tMatcher {
    fn name(&self) -> &str {
        "l33t"
    }

    fn matches(&self, password: &[char]) -> Vec<Match> {
        let mut matches = Vec::new();
        for sub in enumerate_subs(&relevant_subtable(password)) {
            let translated: Vec<char> = password
                .iter()
                .map(|&c| {
                    sub.iter()
                        .find(|&&(leet_chr, _)| leet_chr == c)
                        .map_or(c, |&(_, letter)| letter)
                })
                .collect();
            for dict in &self.dicts {
                for inner in dictionary_match(&translated, dict) {
                    let token: String = password[inner.i..=inner.j].iter().collect();
                    // keep the subset of the dictionary this token exercised;
                    // a hit that used no substitution is the plain matcher's
                    // business, not ours
                    let used: Vec<(char, char)> = sub
                        .iter()
                        .copied()
                        .filter(|&(leet_chr, _)| token.contains(leet_chr))
                        .collect();
                    if used.is_empty() {
                        continue;
                    }
                    matches.push(rewrite_match(inner, token, &used));
                }
            }
        }
        matches
    }
}

/// Converts an inner dictionary match on the translated password into a leet
/// match on the original: original token, recomputed uppercase bonus (the
/// inner matcher saw the translated string), and the substitution surcharge.
fn rewrite_match(inner: Match, token: String, used: &[(char, char)]) -> Match {
    let (dictionary_name, matched_word, rank, base_entropy) = match inner.kind {
        MatchKind::Dictionary {
            dictionary_name,
            matched_word,
            rank,
            base_entropy,
            ..
        } => (dictionary_name, matched_word, rank, base_entropy),
        other => unreachable!("dictionary_match produced {other:?}"),
    };
    let l33t_entropy = extra_l33t_entropy(&token, used);
    let upper = uppercase_entropy(&token);
    Match {
        i: inner.i,
        j: inner.j,
        cardinality: password_cardinality(&token),
        entropy: base_entropy + upper + l33t_entropy,
        kind: MatchKind::Dictionary {
            dictionary_name,
            matched_word,
            rank,
            base_entropy,
            uppercase_entropy: upper,
            l33t: Some(L33tExtension {
                subs: used.iter().copied().collect::<BTreeMap<char, char>>(),
                l33t_entropy,
            }),
        },
        token,
    }
}

/// Extra bits for the substitutions exercised by `token`.
///
/// Per pair, `S` counts the subbed character and `U` counts the target
/// normal letter in the (unsubstituted) token; the pair contributes
/// `log2 Σ_{i=0..min(S,U)} C(S+U, i)`. `U` is usually zero — the token still
/// holds the leet characters — which makes the term zero, so the total is
/// clamped to a minimum of one bit.
fn extra_l33t_entropy(token: &str, used: &[(char, char)]) -> f64 {
    let lower = token.to_lowercase();
    let mut extra = 0.0;
    for &(leet_chr, letter) in used {
        let subbed = lower.chars().filter(|&c| c == leet_chr).count() as u64;
        let unsubbed = lower.chars().filter(|&c| c == letter).count() as u64;
        let mut possibilities = 0.0;
        for i in 0..=subbed.min(unsubbed) {
            possibilities += binomial(subbed + unsubbed, i);
        }
        extra += possibilities.log2();
    }
    if extra < 1.0 {
        1.0
    } else {
        extra
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
