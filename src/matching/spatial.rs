//! Keyboard-walk matcher.
//!
//! Detects maximal runs in which each character is physically adjacent to
//! the previous one on some keyboard, tracking direction changes ("turns")
//! and shifted keys. Minimum run length is 3; the first step of a run always
//! opens a turn, so a straight row counts `turns == 1`.

use crate::models::{Match, MatchKind, Matcher};
use crate::scoring::{binomial, password_cardinality};

use super::graphs::{keyboard_graphs, KeyboardGraph};

pub struct SpatialMatcher {
    graphs: &'static [KeyboardGraph],
    keyboard_starts: f64,
    keyboard_degree: f64,
    keypad_starts: f64,
    keypad_degree: f64,
}

impl SpatialMatcher {
    pub fn new() -> Self {
        let graphs = keyboard_graphs();
        let stat = |name: &str| {
            let g = graphs
                .iter()
                .find(|g| g.name() == name)
                .expect("builtin graph set must contain qwerty and keypad");
            (g.starting_positions() as f64, g.average_degree())
        };
        // qwerty and keypad stand in for their aligned/slanted siblings
        let (keyboard_starts, keyboard_degree) = stat("qwerty");
        let (keypad_starts, keypad_degree) = stat("keypad");
        SpatialMatcher {
            graphs,
            keyboard_starts,
            keyboard_degree,
            keypad_starts,
            keypad_degree,
        }
    }

    fn entropy(&self, graph_name: &str, length: usize, turns: usize, shifted_count: usize) -> f64 {
        let (starts, degree) = if graph_name == "qwerty" || graph_name == "dvorak" {
            (self.keyboard_starts, self.keyboard_degree)
        } else {
            (self.keypad_starts, self.keypad_degree)
        };

        // count walks of every length up to the token's, with every feasible
        // number of turns
        let mut possibilities = 0.0;
        for i in 2..=length {
            let possible_turns = turns.min(i - 1);
            for j in 1..=possible_turns {
                possibilities +=
                    binomial((i - 2) as u64, (j - 1) as u64) * starts * degree.powi(j as i32);
            }
        }
        let mut entropy = possibilities.log2();

        if shifted_count > 0 {
            let shifted = shifted_count as u64;
            let unshifted = (length - shifted_count) as u64;
            let mut shift_possibilities = 0.0;
            for i in 0..=shifted.min(unshifted) {
                shift_possibilities += binomial(shifted + unshifted, i);
            }
            entropy += shift_possibilities.log2();
        }
        entropy
    }

    fn match_graph(&self, password: &[char], graph: &KeyboardGraph) -> Vec<Match> {
        let mut matches = Vec::new();
        let n = password.len();
        let mut i = 0;
        while i + 1 < n {
            let mut j = i + 1;
            let mut last_direction: Option<usize> = None;
            let mut turns = 0;
            let mut shifted_count = 0;
            loop {
                let mut found = false;
                if j < n {
                    let cur = password[j];
                    if let Some(adjacents) = graph.neighbors(password[j - 1]) {
                        for (direction, adj) in adjacents.iter().enumerate() {
                            let Some(adj) = adj else { continue };
                            if let Some(pos) = adj.chars().position(|c| c == cur) {
                                found = true;
                                if pos == 1 {
                                    shifted_count += 1;
                                }
                                if last_direction != Some(direction) {
                                    turns += 1;
                                    last_direction = Some(direction);
                                }
                                break;
                            }
                        }
                    }
                }
                if found {
                    j += 1;
                } else {
                    if j - i > 2 {
                        let token: String = password[i..j].iter().collect();
                        matches.push(Match {
                            i,
                            j: j - 1,
                            cardinality: password_cardinality(&token),
                            entropy: self.entropy(graph.name(), j - i, turns, shifted_count),
                            kind: MatchKind::Spatial {
                                graph: graph.name().to_string(),
                                turns,
                                shifted_count,
                            },
                            token,
                        });
                    }
                    i = j;
                    break;
                }
            }
        }
        matches
    }
}

impl Default for SpatialMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for SpatialMatcher {
    fn name(&self) -> &str {
        "spatial"
    }

    fn matches(&self, password: &[char]) -> Vec<Match> {
        self.graphs
            .iter()
            .flat_map(|graph| self.match_graph(password, graph))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
