//! Static stroke-path tables for the supported characters.
//!
//! Every path is drawn with the pen down from its first point to its last, so
//! segments may be retraced to keep a letter to a single stroke. Coordinates are
//! multiples of 1/8 in a box of unit height. Letters do not have to start at the
//! origin and some extend into negative x.
//!
//! The space character is the one exception to the pen-down rule: its path only
//! moves the pen.

/// A point in unscaled glyph space, `[x, y]`.
pub type UnitPoint = [f64; 2];

/// The space character, drawn as a blank advance.
pub const SPACE: char = ' ';

/// Glyph table sorted by character.
pub static GLYPHS: &[(char, &[UnitPoint])] = &[
    (' ', &[[0.0, 0.0], [0.625, 0.0]]),
    (
        'A',
        &[[0.0, 0.0], [0.5, 1.0], [0.75, 0.5], [0.25, 0.5], [0.75, 0.5], [1.0, 0.0]],
    ),
    (
        'B',
        &[
            [0.0, 0.0],
            [0.0, 1.0],
            [0.625, 1.0],
            [0.75, 0.875],
            [0.75, 0.625],
            [0.625, 0.5],
            [0.0, 0.5],
            [0.625, 0.5],
            [0.75, 0.375],
            [0.75, 0.125],
            [0.625, 0.0],
            [0.0, 0.0],
        ],
    ),
    (
        'C',
        &[
            [0.0, 0.125],
            [-0.125, 0.0],
            [-0.625, 0.0],
            [-0.75, 0.125],
            [-0.75, 0.875],
            [-0.625, 1.0],
            [-0.125, 1.0],
            [0.0, 0.875],
        ],
    ),
    (
        'D',
        &[
            [0.0, 0.0],
            [0.0, 1.0],
            [0.625, 1.0],
            [0.75, 0.875],
            [0.75, 0.125],
            [0.625, 0.0],
            [0.0, 0.0],
        ],
    ),
    (
        'E',
        &[
            [0.0, 0.0],
            [-0.75, 0.0],
            [-0.75, 0.5],
            [0.0, 0.5],
            [-0.75, 0.5],
            [-0.75, 1.0],
            [0.0, 1.0],
        ],
    ),
    (
        'F',
        &[[0.0, 0.0], [0.0, 0.5], [0.75, 0.5], [0.0, 0.5], [0.0, 1.0], [0.75, 1.0]],
    ),
    (
        'G',
        &[
            [0.0, 0.5],
            [-0.125, 0.5],
            [0.0, 0.5],
            [0.0, 0.125],
            [-0.125, 0.0],
            [-0.625, 0.0],
            [-0.75, 0.125],
            [-0.75, 0.875],
            [-0.625, 1.0],
            [-0.125, 1.0],
            [0.0, 0.875],
        ],
    ),
    (
        'H',
        &[[0.0, 0.0], [0.0, 1.0], [0.0, 0.5], [0.75, 0.5], [0.75, 1.0], [0.75, 0.0]],
    ),
    (
        'I',
        &[[0.0, 0.0], [0.25, 0.0], [0.125, 0.0], [0.125, 1.0], [0.0, 1.0], [0.25, 1.0]],
    ),
    (
        'J',
        &[[0.0, 0.125], [0.125, 0.0], [0.375, 0.0], [0.5, 0.125], [0.5, 1.0]],
    ),
    (
        'K',
        &[[0.0, 0.0], [0.0, 1.0], [0.0, 0.5], [0.75, 1.0], [0.0, 0.5], [0.75, 0.0]],
    ),
    ('L', &[[0.0, 0.0], [0.0, 1.0], [0.0, 0.0], [0.75, 0.0]]),
    (
        'M',
        &[[0.0, 0.0], [0.0, 1.0], [0.5, 0.0], [1.0, 1.0], [1.0, 0.0]],
    ),
    ('N', &[[0.0, 0.0], [0.0, 1.0], [0.75, 0.0], [0.75, 1.0]]),
    (
        'O',
        &[
            [0.0, 0.125],
            [-0.125, 0.0],
            [-0.625, 0.0],
            [-0.75, 0.125],
            [-0.75, 0.875],
            [-0.625, 1.0],
            [-0.125, 1.0],
            [0.0, 0.875],
            [0.0, 0.125],
        ],
    ),
    (
        'P',
        &[
            [0.0, 0.0],
            [0.0, 1.0],
            [0.625, 1.0],
            [0.75, 0.875],
            [0.75, 0.625],
            [0.625, 0.5],
            [0.0, 0.5],
        ],
    ),
    (
        'Q',
        &[
            [0.0, 0.125],
            [-0.125, 0.0],
            [-0.625, 0.0],
            [-0.75, 0.125],
            [-0.75, 0.875],
            [-0.625, 1.0],
            [-0.125, 1.0],
            [0.0, 0.875],
            [0.0, 0.125],
            [0.125, 0.0],
        ],
    ),
    (
        'R',
        &[
            [0.0, 0.0],
            [0.0, 1.0],
            [0.625, 1.0],
            [0.75, 0.875],
            [0.75, 0.625],
            [0.625, 0.5],
            [0.0, 0.5],
            [0.625, 0.5],
            [0.875, 0.0],
        ],
    ),
    (
        'S',
        &[
            [0.0, 0.125],
            [0.125, 0.0],
            [0.625, 0.0],
            [0.75, 0.125],
            [0.75, 0.375],
            [0.675, 0.5],
            [0.125, 0.5],
            [0.0, 0.625],
            [0.0, 0.875],
            [0.125, 1.0],
            [0.625, 1.0],
            [0.75, 0.875],
        ],
    ),
    (
        'T',
        &[[0.0, 1.0], [0.5, 1.0], [0.5, 0.0], [0.5, 1.0], [1.0, 1.0]],
    ),
    (
        'U',
        &[[0.0, 1.0], [0.0, 0.125], [0.125, 0.0], [0.625, 0.0], [0.75, 0.125], [0.75, 1.0]],
    ),
    ('V', &[[0.0, 1.0], [0.375, 0.0], [0.75, 1.0]]),
    (
        'W',
        &[[0.0, 1.0], [0.25, 0.0], [0.5, 1.0], [0.75, 0.0], [1.0, 1.0]],
    ),
    (
        'X',
        &[
            [0.0, 0.0],
            [0.375, 0.5],
            [0.0, 1.0],
            [0.375, 0.5],
            [0.75, 1.0],
            [0.375, 0.5],
            [0.75, 0.0],
        ],
    ),
    (
        'Y',
        &[[0.0, 1.0], [0.375, 0.5], [0.375, 0.0], [0.375, 0.5], [0.75, 1.0]],
    ),
    ('Z', &[[0.0, 1.0], [0.75, 1.0], [0.0, 0.0], [0.75, 0.0]]),
];

/// Look up the unscaled stroke path for an exact (already uppercased) character.
pub fn lookup(c: char) -> Option<&'static [UnitPoint]> {
    GLYPHS
        .binary_search_by_key(&c, |(key, _)| *key)
        .ok()
        .map(|index| GLYPHS[index].1)
}

/// Whether `c` has an entry in the catalog, without case folding.
pub fn is_supported(c: char) -> bool {
    lookup(c).is_some()
}

/// All characters in the catalog, in ascending order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    GLYPHS.iter().map(|(c, _)| *c)
}
