//! Pure fuzzy path matching.
//!
//! Given a pointer position and a stroke's current normalized progress,
//! decide whether (and how far) progress advances. Everything here is
//! stateless; the tracker owns the debounce and the drawing flag.

use crate::config::TraceConfig;
use crate::geometry::Point;

/// Index of the path point the stroke is currently waiting on.
pub fn current_index(len: usize, progress: f64) -> usize {
    ((len as f64 * progress).floor() as usize).min(len.saturating_sub(1))
}

/// Attempt to advance progress along `points` toward `pos`.
///
/// Looks at a window of the next few points, keeps the nearest one inside
/// the acceptance radius, and clamps the index advance so a single update
/// can never skip a whole segment. `None` means the pointer was out of
/// tolerance or behind — the normal outcome of imprecise tracing, never an
/// error.
pub fn advance_along(
    points: &[Point],
    progress: f64,
    pos: Point,
    config: &TraceConfig,
) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let len = points.len();
    let start = current_index(len, progress);
    let end = (start + config.look_ahead_points).min(len);

    let mut best: Option<(usize, f64)> = None;
    for (offset, point) in points[start..end].iter().enumerate() {
        let distance = pos.distance_to(*point);
        if distance <= config.acceptance_radius
            && best.map_or(true, |(_, d)| distance < d)
        {
            best = Some((start + offset, distance));
        }
    }

    let (matched, _) = best?;
    let step = (matched - start).min(config.max_advance_points);
    let new_progress = ((start + step + 1) as f64 / len as f64).min(1.0);
    if new_progress > progress {
        Some(new_progress)
    } else {
        None
    }
}

/// Whether a pointer-down qualifies to arm drawing on this stroke.
///
/// A fresh stroke (`progress == 0`) accepts a wider circle around its
/// first point; a stroke in flight resumes only near its current target
/// point, so lifting the pen never loses progress.
pub fn can_start(points: &[Point], progress: f64, pos: Point, config: &TraceConfig) -> bool {
    if points.is_empty() {
        return false;
    }
    if progress == 0.0 {
        pos.distance_to(points[0]) <= config.start_radius()
    } else {
        let target = points[current_index(points.len(), progress)];
        pos.distance_to(target) <= config.acceptance_radius
    }
}
