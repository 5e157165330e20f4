//! Lowercase stroke table: a–z plus å, ä, ö.
//!
//! The x-height band runs from y=280 to the baseline at y=520; ascenders
//! reach y=100 and descenders y=595. Bowls are drawn counterclockwise
//! starting from the top, the way they are taught.

use super::{arc, curve, dot, line, Entry};

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        (
            'a',
            vec![
                vec![arc(270.0, 400.0, 115.0, -90.0, -360.0)],
                vec![line(385.0, 280.0, 385.0, 520.0)],
            ],
        ),
        (
            'b',
            vec![
                vec![line(200.0, 100.0, 200.0, 520.0)],
                vec![arc(305.0, 415.0, 105.0, 180.0, 360.0)],
            ],
        ),
        ('c', vec![vec![arc(270.0, 400.0, 115.0, -45.0, -270.0)]]),
        (
            'd',
            vec![
                vec![line(390.0, 100.0, 390.0, 520.0)],
                vec![arc(285.0, 415.0, 105.0, 0.0, -360.0)],
            ],
        ),
        (
            'e',
            vec![vec![
                line(165.0, 400.0, 375.0, 400.0),
                arc(270.0, 400.0, 105.0, 0.0, -315.0),
            ]],
        ),
        (
            'f',
            vec![
                vec![
                    curve(370.0, 130.0, 250.0, 80.0, 250.0, 240.0),
                    line(250.0, 240.0, 250.0, 520.0),
                ],
                vec![line(170.0, 320.0, 340.0, 320.0)],
            ],
        ),
        (
            'g',
            vec![
                vec![arc(285.0, 390.0, 105.0, -90.0, -360.0)],
                vec![
                    line(390.0, 280.0, 390.0, 530.0),
                    curve(390.0, 530.0, 385.0, 600.0, 265.0, 585.0),
                ],
            ],
        ),
        (
            'h',
            vec![
                vec![line(200.0, 100.0, 200.0, 520.0)],
                vec![
                    curve(200.0, 380.0, 300.0, 250.0, 380.0, 380.0),
                    line(380.0, 380.0, 380.0, 520.0),
                ],
            ],
        ),
        (
            'i',
            vec![
                vec![line(300.0, 280.0, 300.0, 520.0)],
                vec![dot(300.0, 200.0)],
            ],
        ),
        (
            'j',
            vec![
                vec![
                    line(330.0, 280.0, 330.0, 540.0),
                    curve(330.0, 540.0, 325.0, 600.0, 220.0, 585.0),
                ],
                vec![dot(330.0, 200.0)],
            ],
        ),
        (
            'k',
            vec![
                vec![line(210.0, 100.0, 210.0, 520.0)],
                vec![
                    line(380.0, 290.0, 210.0, 410.0),
                    line(210.0, 410.0, 390.0, 520.0),
                ],
            ],
        ),
        ('l', vec![vec![line(300.0, 100.0, 300.0, 520.0)]]),
        (
            'm',
            vec![
                vec![line(170.0, 280.0, 170.0, 520.0)],
                vec![
                    curve(170.0, 380.0, 235.0, 255.0, 300.0, 380.0),
                    line(300.0, 380.0, 300.0, 520.0),
                ],
                vec![
                    curve(300.0, 380.0, 365.0, 255.0, 430.0, 380.0),
                    line(430.0, 380.0, 430.0, 520.0),
                ],
            ],
        ),
        (
            'n',
            vec![
                vec![line(200.0, 280.0, 200.0, 520.0)],
                vec![
                    curve(200.0, 380.0, 290.0, 250.0, 380.0, 380.0),
                    line(380.0, 380.0, 380.0, 520.0),
                ],
            ],
        ),
        ('o', vec![vec![arc(300.0, 400.0, 115.0, -90.0, -360.0)]]),
        (
            'p',
            vec![
                vec![line(200.0, 280.0, 200.0, 595.0)],
                vec![arc(305.0, 395.0, 105.0, 180.0, 360.0)],
            ],
        ),
        (
            'q',
            vec![
                vec![arc(285.0, 395.0, 105.0, 0.0, -360.0)],
                vec![
                    line(390.0, 280.0, 390.0, 560.0),
                    curve(390.0, 560.0, 395.0, 600.0, 455.0, 575.0),
                ],
            ],
        ),
        (
            'r',
            vec![
                vec![line(220.0, 280.0, 220.0, 520.0)],
                vec![curve(220.0, 380.0, 290.0, 260.0, 370.0, 330.0)],
            ],
        ),
        (
            's',
            vec![vec![
                arc(300.0, 345.0, 55.0, -30.0, -240.0),
                arc(300.0, 455.0, 55.0, 270.0, 240.0),
            ]],
        ),
        (
            't',
            vec![
                vec![
                    line(280.0, 130.0, 280.0, 470.0),
                    curve(280.0, 470.0, 285.0, 530.0, 370.0, 500.0),
                ],
                vec![line(190.0, 300.0, 370.0, 300.0)],
            ],
        ),
        (
            'u',
            vec![
                vec![
                    line(190.0, 280.0, 190.0, 430.0),
                    arc(285.0, 430.0, 95.0, 180.0, -180.0),
                ],
                vec![line(380.0, 280.0, 380.0, 520.0)],
            ],
        ),
        (
            'v',
            vec![vec![
                line(200.0, 280.0, 300.0, 520.0),
                line(300.0, 520.0, 400.0, 280.0),
            ]],
        ),
        (
            'w',
            vec![vec![
                line(170.0, 280.0, 235.0, 520.0),
                line(235.0, 520.0, 300.0, 330.0),
                line(300.0, 330.0, 365.0, 520.0),
                line(365.0, 520.0, 430.0, 280.0),
            ]],
        ),
        (
            'x',
            vec![
                vec![line(200.0, 280.0, 400.0, 520.0)],
                vec![line(400.0, 280.0, 200.0, 520.0)],
            ],
        ),
        (
            'y',
            vec![
                vec![
                    line(200.0, 280.0, 200.0, 430.0),
                    arc(295.0, 430.0, 95.0, 180.0, -180.0),
                ],
                vec![
                    line(390.0, 280.0, 390.0, 540.0),
                    curve(390.0, 540.0, 385.0, 600.0, 265.0, 585.0),
                ],
            ],
        ),
        (
            'z',
            vec![vec![
                line(200.0, 280.0, 400.0, 280.0),
                line(400.0, 280.0, 200.0, 520.0),
                line(200.0, 520.0, 400.0, 520.0),
            ]],
        ),
        (
            'å',
            vec![
                vec![arc(270.0, 400.0, 115.0, -90.0, -360.0)],
                vec![line(385.0, 280.0, 385.0, 520.0)],
                vec![arc(310.0, 205.0, 24.0, -90.0, -360.0)],
            ],
        ),
        (
            'ä',
            vec![
                vec![arc(270.0, 400.0, 115.0, -90.0, -360.0)],
                vec![line(385.0, 280.0, 385.0, 520.0)],
                vec![dot(250.0, 205.0)],
                vec![dot(370.0, 205.0)],
            ],
        ),
        (
            'ö',
            vec![
                vec![arc(300.0, 400.0, 115.0, -90.0, -360.0)],
                vec![dot(240.0, 205.0)],
                vec![dot(360.0, 205.0)],
            ],
        ),
    ]
}
