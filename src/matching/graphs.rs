//! Keyboard adjacency graphs.
//!
//! Each graph maps every reachable character (shifted and unshifted) to its
//! neighbor slots in a fixed clockwise order; the slot index doubles as the
//! movement direction during run detection. Graphs are built once from the
//! layout strings below and shared read-only.
//!
//! The keyboards use a slanted coordinate system (six neighbor slots, the
//! way rows of physical keys interleave); the keypads are grid-aligned
//! (eight slots). A two-character token is an unshifted/shifted pair; keypad
//! tokens are single characters.

use std::collections::HashMap;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Layouts
// ---------------------------------------------------------------------------

const QWERTY: &str = r#"
`~ 1! 2@ 3# 4$ 5% 6^ 7& 8* 9( 0) -_ =+
    qQ wW eE rR tT yY uU iI oO pP [{ ]} \|
     aA sS dD fF gG hH jJ kK lL ;: '"
      zZ xX cC vV bB nN mM ,< .> /?
"#;

const DVORAK: &str = r#"
`~ 1! 2@ 3# 4$ 5% 6^ 7& 8* 9( 0) [{ ]}
    '" ,< .> pP yY fF gG cC rR lL /? =+ \|
     aA oO eE uU iI dD hH tT nN sS -_
      ;: qQ jJ kK xX bB mM wW vV zZ
"#;

const KEYPAD: &str = r#"
  / * -
7 8 9 +
4 5 6
1 2 3
  0 .
"#;

const MAC_KEYPAD: &str = r#"
  = / *
7 8 9 -
4 5 6 +
1 2 3
  0 .
"#;

/// Slanted neighbor offsets: left, up-left, up-right, right, down-right,
/// down-left (in slanted coordinates).
const SLANTED_DELTAS: [(i32, i32); 6] = [(-1, 0), (0, -1), (1, -1), (1, 0), (0, 1), (-1, 1)];

/// Aligned neighbor offsets, clockwise from left.
const ALIGNED_DELTAS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

// ---------------------------------------------------------------------------
// KeyboardGraph
// ---------------------------------------------------------------------------

pub struct KeyboardGraph {
    name: &'static str,
    /// Character → neighbor tokens by direction slot; `None` marks an edge
    /// of the keyboard.
    adjacencies: HashMap<char, Vec<Option<String>>>,
}

impl KeyboardGraph {
    fn build(name: &'static str, layout: &str, slanted: bool) -> Self {
        let token_size = layout
            .split_whitespace()
            .next()
            .map(str::len)
            .unwrap_or(1);
        let x_unit = (token_size + 1) as i32;

        // Key positions. The layout strings are indented so that
        // `(byte_index - slant) / x_unit` is exact for every token.
        let mut positions: HashMap<(i32, i32), &str> = HashMap::new();
        for (y, line) in layout.lines().enumerate() {
            let slant = if slanted { y as i32 - 1 } else { 0 };
            for (start, token) in tokens_with_offsets(line) {
                let x = (start as i32 - slant) / x_unit;
                positions.insert((x, y as i32), token);
            }
        }

        let deltas: &[(i32, i32)] = if slanted {
            &SLANTED_DELTAS
        } else {
            &ALIGNED_DELTAS
        };
        let mut adjacencies = HashMap::new();
        for (&(x, y), token) in &positions {
            let neighbors: Vec<Option<String>> = deltas
                .iter()
                .map(|&(dx, dy)| positions.get(&(x + dx, y + dy)).map(|t| t.to_string()))
                .collect();
            for c in token.chars() {
                adjacencies.insert(c, neighbors.clone());
            }
        }
        KeyboardGraph { name, adjacencies }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Neighbor slots for a character, if it exists on this keyboard.
    pub fn neighbors(&self, c: char) -> Option<&[Option<String>]> {
        self.adjacencies.get(&c).map(Vec::as_slice)
    }

    /// Number of keys an attacker could start a walk from.
    pub fn starting_positions(&self) -> usize {
        self.adjacencies.len()
    }

    /// Mean number of real (non-edge) neighbors per key.
    pub fn average_degree(&self) -> f64 {
        let total: usize = self
            .adjacencies
            .values()
            .map(|n| n.iter().flatten().count())
            .sum();
        total as f64 / self.adjacencies.len() as f64
    }
}

fn tokens_with_offsets(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, c) in line.char_indices() {
        if c == ' ' {
            if let Some(s) = start.take() {
                tokens.push((s, &line[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }
    tokens
}

/// The four builtin graphs, built on first use.
pub fn keyboard_graphs() -> &'static [KeyboardGraph] {
    static GRAPHS: OnceLock<Vec<KeyboardGraph>> = OnceLock::new();
    GRAPHS
        .get_or_init(|| {
            vec![
                KeyboardGraph::build("qwerty", QWERTY, true),
                KeyboardGraph::build("dvorak", DVORAK, true),
                KeyboardGraph::build("keypad", KEYPAD, false),
                KeyboardGraph::build("mac_keypad", MAC_KEYPAD, false),
            ]
        })
        .as_slice()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
