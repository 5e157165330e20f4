//! Punctuation stroke table: period, comma, exclamation and question mark.
//!
//! Dots sit on the baseline as tiny closed arcs so they trace like any
//! other stroke.

use super::{arc, curve, dot, line, Entry};

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        ('.', vec![vec![dot(300.0, 505.0)]]),
        (',', vec![vec![curve(310.0, 495.0, 320.0, 560.0, 260.0, 590.0)]]),
        (
            '!',
            vec![
                vec![line(300.0, 80.0, 300.0, 400.0)],
                vec![dot(300.0, 505.0)],
            ],
        ),
        (
            '?',
            vec![
                vec![
                    arc(300.0, 210.0, 120.0, 180.0, 270.0),
                    line(300.0, 330.0, 300.0, 400.0),
                ],
                vec![dot(300.0, 505.0)],
            ],
        ),
    ]
}
