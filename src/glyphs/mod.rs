//! Stroke shape catalogue.
//!
//! Every traceable character maps to an ordered list of strokes, authored
//! as parametric primitives (lines, quadratic curves, arcs) in the shared
//! 600×600 canvas and sampled into point paths when the library is built.
//! Stroke order is a curriculum decision (vertical before horizontal,
//! bowls after stems) and is fixed at authoring time.

pub mod lowercase;
pub mod punctuation;
pub mod uppercase;

use crate::geometry::{sample_path, Point, Segment};
use std::collections::HashMap;

/// One authored character: the character itself plus its stroke segments.
pub(crate) type Entry = (char, Vec<Vec<Segment>>);

pub(crate) fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub(crate) fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::Line {
        from: pt(x0, y0),
        to: pt(x1, y1),
    }
}

pub(crate) fn curve(x0: f64, y0: f64, cx: f64, cy: f64, x1: f64, y1: f64) -> Segment {
    Segment::Curve {
        from: pt(x0, y0),
        ctrl: pt(cx, cy),
        to: pt(x1, y1),
    }
}

pub(crate) fn arc(cx: f64, cy: f64, radius: f64, start_deg: f64, sweep_deg: f64) -> Segment {
    Segment::Arc {
        center: pt(cx, cy),
        radius,
        start_deg,
        sweep_deg,
    }
}

/// A dot is a tiny closed arc, not a press-and-release primitive, so the
/// matcher treats it like any other stroke.
pub(crate) fn dot(cx: f64, cy: f64) -> Segment {
    arc(cx, cy, 10.0, -90.0, -360.0)
}

/// One continuous pen path, sampled and immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    fn from_segments(segments: &[Segment]) -> Self {
        let points = sample_path(segments);
        debug_assert!(points.len() >= 2, "stroke must sample to at least 2 points");
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Where the pen must land to begin this stroke.
    pub fn start(&self) -> Point {
        self.points[0]
    }
}

/// The complete shape of one character: its ordered strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    character: char,
    strokes: Vec<Stroke>,
}

impl Glyph {
    fn new(character: char, segments: Vec<Vec<Segment>>) -> Self {
        let strokes = segments
            .iter()
            .map(|s| Stroke::from_segments(s))
            .collect();
        Self { character, strokes }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}

/// Static catalogue mapping characters to glyphs.
///
/// Lookups for characters the library has no table row for return the
/// default glyph (the first uppercase entry) instead of failing; see
/// DESIGN.md for why this permissive fallback is kept.
#[derive(Debug)]
pub struct GlyphLibrary {
    glyphs: HashMap<char, Glyph>,
    default_char: char,
}

impl GlyphLibrary {
    pub fn new() -> Self {
        let mut glyphs = HashMap::new();
        let mut default_char = None;
        for (character, segments) in uppercase::entries()
            .into_iter()
            .chain(lowercase::entries())
            .chain(punctuation::entries())
        {
            default_char.get_or_insert(character);
            glyphs.insert(character, Glyph::new(character, segments));
        }
        Self {
            glyphs,
            default_char: default_char.expect("glyph tables are never empty"),
        }
    }

    /// Ordered strokes for `character`, falling back to the default glyph
    /// for unknown characters.
    pub fn strokes(&self, character: char) -> &Glyph {
        self.glyphs
            .get(&character)
            .unwrap_or_else(|| &self.glyphs[&self.default_char])
    }

    pub fn contains(&self, character: char) -> bool {
        self.glyphs.contains_key(&character)
    }

    pub fn default_character(&self) -> char {
        self.default_char
    }

    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for GlyphLibrary {
    fn default() -> Self {
        Self::new()
    }
}
