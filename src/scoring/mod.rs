//! Scoring primitives shared by every matcher and by the covering search.
//!
//! All entropy in this crate is expressed in bits (`log2(guesses)`), so each
//! matcher's estimate stays commensurable with the brute-force baseline the
//! covering search injects per character. The crack-time model is a fixed
//! guesses-per-second constant; no adversary modeling beyond that.

pub mod search;

// ---------------------------------------------------------------------------
// Alphabet sizes
// ---------------------------------------------------------------------------

/// Lowercase ASCII letters.
const LOWER_COUNT: u64 = 26;
/// Uppercase ASCII letters.
const UPPER_COUNT: u64 = 26;
/// ASCII digits.
const DIGIT_COUNT: u64 = 10;
/// Printable ASCII symbols: `[0x20..0x2F]`, `[0x3A..0x40]`, `[0x5B..0x60]`,
/// `[0x7B..0x7E]`.
const SYMBOL_COUNT: u64 = 33;
/// Assigned-codepoint estimate used for the non-ASCII bonus.
const UNICODE_COUNT: u64 = 120_672;
/// Size of the ASCII block already covered by the classes above.
const ASCII_COUNT: u64 = 128;

// ---------------------------------------------------------------------------
// Crack-time model
// ---------------------------------------------------------------------------

/// Seconds for a single guess on one machine.
const SINGLE_GUESS_SECONDS: f64 = 0.010;
/// Guessing machines working in parallel.
const NUM_ATTACKERS: f64 = 100.0;

/// Score band thresholds in seconds, offset by +7 at comparison time so a
/// crack time landing exactly on a power of ten never sits on a boundary.
const SCORE_THRESHOLDS: [f64; 7] = [1e3, 1e6, 1e8, 1e10, 1e11, 1e12, 1e13];
const SCORE_THRESHOLD_OFFSET: f64 = 7.0;

// ---------------------------------------------------------------------------
// Cardinality
// ---------------------------------------------------------------------------

/// Effective brute-force alphabet size for a password: the sum of the sizes
/// of every character class present in it. Empty input is 0.
///
/// Any codepoint above `0x7F` adds the non-ASCII block once; ASCII control
/// characters count toward the symbol class.
pub fn password_cardinality(password: &str) -> u64 {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;
    let mut unicode = false;

    for c in password.chars() {
        if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if (c as u32) > 0x7F {
            unicode = true;
        } else {
            symbol = true;
        }
    }

    let mut cardinality = 0;
    if lower {
        cardinality += LOWER_COUNT;
    }
    if upper {
        cardinality += UPPER_COUNT;
    }
    if digit {
        cardinality += DIGIT_COUNT;
    }
    if symbol {
        cardinality += SYMBOL_COUNT;
    }
    if unicode {
        cardinality += UNICODE_COUNT - ASCII_COUNT;
    }
    cardinality
}

// ---------------------------------------------------------------------------
// Entropy → crack time → score
// ---------------------------------------------------------------------------

/// Expected seconds to crack a secret worth `bits` of entropy: half the
/// search space at `NUM_ATTACKERS` machines taking `SINGLE_GUESS_SECONDS`
/// per guess each.
pub fn entropy_to_crack_time(bits: f64) -> f64 {
    0.5 * bits.exp2() * (SINGLE_GUESS_SECONDS / NUM_ATTACKERS)
}

/// Maps a crack time in seconds onto the fixed 0..6 ordinal scale.
pub fn crack_time_to_score(seconds: f64) -> u8 {
    for (score, threshold) in SCORE_THRESHOLDS.iter().enumerate() {
        if seconds < threshold + SCORE_THRESHOLD_OFFSET {
            return score as u8;
        }
    }
    6
}

// ---------------------------------------------------------------------------
// Binomial
// ---------------------------------------------------------------------------

/// `n` choose `k` via the iterative multiplicative identity.
///
/// Returned as `f64`: exact for every argument the matchers produce, and it
/// degrades gracefully instead of overflowing on degenerate long tokens.
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 {
        return 1.0;
    }
    let mut r = 1.0;
    let mut n = n;
    for d in 1..=k {
        r *= n as f64;
        r /= d as f64;
        n -= 1;
    }
    r
}

// ---------------------------------------------------------------------------
// Uppercase entropy
// ---------------------------------------------------------------------------

/// Bonus bits for a token's capitalization shape.
///
/// The common shapes (first-upper, last-upper, all-caps) cost a single bit;
/// anything else is charged the log of the number of ways to place the
/// rarer case among the word's letters.
pub fn uppercase_entropy(word: &str) -> f64 {
    let chars: Vec<char> = word.chars().collect();
    let has_upper = chars.iter().any(|c| c.is_uppercase());
    if !has_upper {
        return 0.0;
    }
    let has_lower = chars.iter().any(|c| c.is_lowercase());
    if !has_lower {
        return 1.0; // all caps
    }
    let inner_upper = |range: &[char]| range.iter().any(|c| c.is_uppercase());
    if chars.len() >= 2 {
        if chars[0].is_uppercase() && !inner_upper(&chars[1..]) {
            return 1.0; // Startupper
        }
        if chars[chars.len() - 1].is_uppercase() && !inner_upper(&chars[..chars.len() - 1]) {
            return 1.0; // startuppeR
        }
    }

    let upper = chars.iter().filter(|c| c.is_uppercase()).count() as u64;
    let lower = chars.iter().filter(|c| c.is_lowercase()).count() as u64;
    let mut possibilities = 0.0;
    for i in 0..=upper.min(lower) {
        possibilities += binomial(upper + lower, i);
    }
    possibilities.log2()
}

// ---------------------------------------------------------------------------
// Crack-time display
// ---------------------------------------------------------------------------

const MINUTE: f64 = 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const MONTH: f64 = DAY * 31.0;
const YEAR: f64 = MONTH * 12.0;
const CENTURY: f64 = YEAR * 100.0;

/// Default English rendering of a crack time. Callers that localize replace
/// this string; the core only guarantees the field is populated.
pub fn crack_time_display(seconds: f64) -> String {
    if seconds < MINUTE {
        "instant".to_string()
    } else if seconds < HOUR {
        format!("{} minutes", 1 + (seconds / MINUTE).ceil() as u64)
    } else if seconds < DAY {
        format!("{} hours", 1 + (seconds / HOUR).ceil() as u64)
    } else if seconds < MONTH {
        format!("{} days", 1 + (seconds / DAY).ceil() as u64)
    } else if seconds < YEAR {
        format!("{} months", 1 + (seconds / MONTH).ceil() as u64)
    } else if seconds < CENTURY {
        format!("{} years", 1 + (seconds / YEAR).ceil() as u64)
    } else {
        "centuries".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
