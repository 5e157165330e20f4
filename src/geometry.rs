/// Side length of the canonical glyph canvas. Every stroke in the library
/// lives in this square (origin top-left, y growing downward), so pointer
/// input must already be translated into it.
pub const CANVAS_SIZE: f64 = 600.0;

/// Sample counts per primitive. Dense enough that neighbouring samples sit
/// far closer together than the acceptance radius; see `glyphs::tests`.
pub const LINE_SAMPLES: usize = 16;
pub const CURVE_SAMPLES: usize = 24;
pub const ARC_SAMPLES: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point::new(v.0, v.1)
    }
}

/// One parametric piece of a pen path. Strokes are authored as a list of
/// these and sampled into point paths when the glyph library is built,
/// keeping the per-character tables declarative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        from: Point,
        to: Point,
    },
    /// Quadratic bezier: one control point is enough for letter bowls.
    Curve {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    /// Circular arc, angles in degrees, positive sweep clockwise in the
    /// top-left-origin canvas. A full 360 sweep closes (o, dots).
    Arc {
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
    },
}

impl Segment {
    /// Evaluate the point at parameter `t` in [0, 1].
    pub fn eval(&self, t: f64) -> Point {
        match *self {
            Segment::Line { from, to } => Point::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            ),
            Segment::Curve { from, ctrl, to } => {
                let s = 1.0 - t;
                let a = s * s;
                let b = 2.0 * s * t;
                let c = t * t;
                Point::new(
                    a * from.x + b * ctrl.x + c * to.x,
                    a * from.y + b * ctrl.y + c * to.y,
                )
            }
            Segment::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
            } => {
                let angle = (start_deg + sweep_deg * t).to_radians();
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            }
        }
    }

    fn sample_count(&self) -> usize {
        match self {
            Segment::Line { .. } => LINE_SAMPLES,
            Segment::Curve { .. } => CURVE_SAMPLES,
            Segment::Arc { .. } => ARC_SAMPLES,
        }
    }

    /// Sample this segment into `count` points, endpoints included.
    pub fn sample(&self, count: usize) -> Vec<Point> {
        let count = count.max(2);
        (0..count)
            .map(|i| self.eval(i as f64 / (count - 1) as f64))
            .collect()
    }
}

/// Sample a chain of segments into one continuous point path.
///
/// Segment joints would otherwise duplicate their shared point, so every
/// segment after the first drops its leading sample.
pub fn sample_path(segments: &[Segment]) -> Vec<Point> {
    let mut points = Vec::new();
    for segment in segments {
        let sampled = segment.sample(segment.sample_count());
        if points.is_empty() {
            points.extend(sampled);
        } else {
            points.extend(sampled.into_iter().skip(1));
        }
    }
    points
}

/// Largest gap between consecutive samples of a path. Matching relies on
/// this staying well under the acceptance radius.
pub fn max_sample_gap(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| w[0].distance_to(w[1]))
        .fold(0.0, f64::max)
}
