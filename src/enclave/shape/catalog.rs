use std::sync::OnceLock;

use super::Shape;

/// Every shape a piece can be dealt with, as rows of 0s and 1s.
const TEMPLATES: [&[&[u8]]; 29] = [
    &[&[1, 1, 1, 1]],                        // I
    &[&[1, 1], &[1, 1]],                     // O
    &[&[1, 1, 1], &[0, 1, 0]],               // T
    &[&[1, 1, 0], &[0, 1, 1]],               // S
    &[&[0, 1, 1], &[1, 1, 0]],               // Z
    &[&[1, 1, 1], &[1, 0, 0]],               // L
    &[&[1, 1, 1], &[0, 0, 1]],               // J
    &[&[1]],                                 // monomino
    &[&[1, 1]],                              // domino
    &[&[1, 1, 1]],                           // triomino
    &[&[1, 0], &[1, 1]],                     // small L
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 1]],   // long S
    &[&[1, 0, 1], &[1, 1, 1]],               // U
    &[&[1, 1, 1], &[1, 0, 1]],               // cap
    &[&[1, 1], &[0, 1], &[0, 1]],            // long L
    &[&[1, 0, 0], &[1, 1, 1]],               // hook
    &[&[0, 0, 1], &[1, 1, 1]],               // reverse hook
    &[&[1, 1, 1, 1, 1]],                     // long I
    &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0]],   // tree
    &[&[1, 0], &[1, 1], &[1, 0]],            // small T
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 1]],   // stairs
    &[&[1, 1, 1], &[1, 1, 1]],               // 2x3
    &[&[1, 1], &[1, 1], &[1, 1]],            // 3x2
    &[&[1, 0, 0], &[1, 0, 0], &[1, 1, 1]],   // corner
    &[&[0, 1], &[1, 1], &[1, 0]],            // zig
    &[&[1, 1, 1, 1], &[0, 1, 0, 0]],         // flag
    &[&[1, 1, 0, 0], &[0, 1, 1, 1]],         // bolt
    &[&[1, 0, 1, 0], &[1, 1, 1, 1]],         // comb
    &[&[1, 1, 1], &[0, 1, 0], &[1, 1, 1]],   // bobbin
];

static CATALOG: OnceLock<Vec<Shape>> = OnceLock::new();

/// The full shape catalog, built once. Never empty, and always contains the monomino.
pub fn all() -> &'static [Shape] {
    CATALOG.get_or_init(|| {
        TEMPLATES.iter().filter_map(|rows| Shape::from_rows(*rows).ok()).collect()
    })
}
