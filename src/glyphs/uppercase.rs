//! Uppercase stroke table: A–Z plus Å, Ä, Ö.
//!
//! Cap height sits at y=80, baseline at y=520, bodies roughly between
//! x=160 and x=440. Stroke order follows the teaching convention: stems
//! and diagonals first, then bowls, then crossbars and diacritics.

use super::{arc, curve, dot, line, Entry};

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        (
            'A',
            vec![
                vec![line(300.0, 80.0, 160.0, 520.0)],
                vec![line(300.0, 80.0, 440.0, 520.0)],
                vec![line(205.0, 390.0, 395.0, 390.0)],
            ],
        ),
        (
            'B',
            vec![
                vec![line(180.0, 80.0, 180.0, 520.0)],
                vec![
                    curve(180.0, 80.0, 440.0, 110.0, 180.0, 300.0),
                    curve(180.0, 300.0, 460.0, 330.0, 180.0, 520.0),
                ],
            ],
        ),
        ('C', vec![vec![arc(300.0, 300.0, 210.0, -45.0, -270.0)]]),
        (
            'D',
            vec![
                vec![line(180.0, 80.0, 180.0, 520.0)],
                vec![curve(180.0, 80.0, 500.0, 300.0, 180.0, 520.0)],
            ],
        ),
        (
            'E',
            vec![
                vec![line(180.0, 80.0, 180.0, 520.0)],
                vec![line(180.0, 80.0, 420.0, 80.0)],
                vec![line(180.0, 300.0, 390.0, 300.0)],
                vec![line(180.0, 520.0, 420.0, 520.0)],
            ],
        ),
        (
            'F',
            vec![
                vec![line(180.0, 80.0, 180.0, 520.0)],
                vec![line(180.0, 80.0, 420.0, 80.0)],
                vec![line(180.0, 300.0, 390.0, 300.0)],
            ],
        ),
        (
            'G',
            vec![
                vec![arc(300.0, 300.0, 210.0, -45.0, -270.0)],
                vec![line(490.0, 300.0, 330.0, 300.0)],
            ],
        ),
        (
            'H',
            vec![
                vec![line(170.0, 80.0, 170.0, 520.0)],
                vec![line(430.0, 80.0, 430.0, 520.0)],
                vec![line(170.0, 300.0, 430.0, 300.0)],
            ],
        ),
        ('I', vec![vec![line(300.0, 80.0, 300.0, 520.0)]]),
        (
            'J',
            vec![vec![
                line(360.0, 80.0, 360.0, 420.0),
                curve(360.0, 420.0, 360.0, 530.0, 220.0, 500.0),
            ]],
        ),
        (
            'K',
            vec![
                vec![line(180.0, 80.0, 180.0, 520.0)],
                vec![line(420.0, 80.0, 180.0, 320.0)],
                vec![line(180.0, 320.0, 430.0, 520.0)],
            ],
        ),
        (
            'L',
            vec![vec![
                line(190.0, 80.0, 190.0, 520.0),
                line(190.0, 520.0, 430.0, 520.0),
            ]],
        ),
        (
            'M',
            vec![
                vec![line(160.0, 520.0, 160.0, 80.0)],
                vec![
                    line(160.0, 80.0, 300.0, 340.0),
                    line(300.0, 340.0, 440.0, 80.0),
                ],
                vec![line(440.0, 80.0, 440.0, 520.0)],
            ],
        ),
        (
            'N',
            vec![
                vec![line(170.0, 520.0, 170.0, 80.0)],
                vec![line(170.0, 80.0, 430.0, 520.0)],
                vec![line(430.0, 520.0, 430.0, 80.0)],
            ],
        ),
        ('O', vec![vec![arc(300.0, 300.0, 210.0, -90.0, -360.0)]]),
        (
            'P',
            vec![
                vec![line(180.0, 80.0, 180.0, 520.0)],
                vec![curve(180.0, 80.0, 470.0, 100.0, 180.0, 310.0)],
            ],
        ),
        (
            'Q',
            vec![
                vec![arc(300.0, 300.0, 210.0, -90.0, -360.0)],
                vec![line(360.0, 400.0, 470.0, 530.0)],
            ],
        ),
        (
            'R',
            vec![
                vec![line(180.0, 80.0, 180.0, 520.0)],
                vec![curve(180.0, 80.0, 470.0, 100.0, 180.0, 310.0)],
                vec![line(180.0, 310.0, 430.0, 520.0)],
            ],
        ),
        (
            'S',
            vec![vec![
                arc(300.0, 190.0, 110.0, -30.0, -240.0),
                arc(300.0, 410.0, 110.0, 270.0, 240.0),
            ]],
        ),
        (
            'T',
            vec![
                vec![line(160.0, 80.0, 440.0, 80.0)],
                vec![line(300.0, 80.0, 300.0, 520.0)],
            ],
        ),
        (
            'U',
            vec![vec![
                line(170.0, 80.0, 170.0, 360.0),
                arc(300.0, 360.0, 130.0, 180.0, -180.0),
                line(430.0, 360.0, 430.0, 80.0),
            ]],
        ),
        (
            'V',
            vec![vec![
                line(160.0, 80.0, 300.0, 520.0),
                line(300.0, 520.0, 440.0, 80.0),
            ]],
        ),
        (
            'W',
            vec![vec![
                line(140.0, 80.0, 230.0, 520.0),
                line(230.0, 520.0, 300.0, 250.0),
                line(300.0, 250.0, 370.0, 520.0),
                line(370.0, 520.0, 460.0, 80.0),
            ]],
        ),
        (
            'X',
            vec![
                vec![line(170.0, 80.0, 430.0, 520.0)],
                vec![line(430.0, 80.0, 170.0, 520.0)],
            ],
        ),
        (
            'Y',
            vec![
                vec![
                    line(170.0, 80.0, 300.0, 300.0),
                    line(300.0, 300.0, 300.0, 520.0),
                ],
                vec![line(430.0, 80.0, 300.0, 300.0)],
            ],
        ),
        (
            'Z',
            vec![vec![
                line(170.0, 80.0, 430.0, 80.0),
                line(430.0, 80.0, 170.0, 520.0),
                line(170.0, 520.0, 430.0, 520.0),
            ]],
        ),
        (
            'Å',
            vec![
                vec![line(300.0, 80.0, 160.0, 520.0)],
                vec![line(300.0, 80.0, 440.0, 520.0)],
                vec![line(205.0, 390.0, 395.0, 390.0)],
                vec![arc(300.0, 38.0, 26.0, -90.0, -360.0)],
            ],
        ),
        (
            'Ä',
            vec![
                vec![line(300.0, 80.0, 160.0, 520.0)],
                vec![line(300.0, 80.0, 440.0, 520.0)],
                vec![line(205.0, 390.0, 395.0, 390.0)],
                vec![dot(230.0, 35.0)],
                vec![dot(370.0, 35.0)],
            ],
        ),
        (
            'Ö',
            vec![
                vec![arc(300.0, 300.0, 210.0, -90.0, -360.0)],
                vec![dot(230.0, 35.0)],
                vec![dot(370.0, 35.0)],
            ],
        ),
    ]
}
