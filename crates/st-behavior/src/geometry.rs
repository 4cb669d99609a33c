//! External geometry consumed by the following behaviors.
//!
//! Paths and flow fields share no behavior, so each gets its own small
//! capability trait instead of a common base.  Both are owned by the host and
//! only borrowed for the duration of one call.

use st_core::Vec2;

use crate::{BehaviorError, BehaviorResult};

// ── Capability traits ─────────────────────────────────────────────────────────

/// Something an agent can track: a curve with a tolerance band.
pub trait NearestPointProvider: Send + Sync {
    /// The point on the path closest to `point`.
    fn nearest_point_on(&self, point: Vec2) -> Vec2;

    /// Half-width of the band around the path within which an agent counts
    /// as on-path.
    fn radius(&self) -> f32;
}

/// A vector field sampled at world positions.
pub trait VectorFieldSampler: Send + Sync {
    fn sample(&self, point: Vec2) -> Vec2;
}

impl<F> VectorFieldSampler for F
where
    F: Fn(Vec2) -> Vec2 + Send + Sync,
{
    #[inline]
    fn sample(&self, point: Vec2) -> Vec2 {
        self(point)
    }
}

// ── PolylinePath ──────────────────────────────────────────────────────────────

/// An open polyline with a tolerance radius.
#[derive(Clone, Debug, PartialEq)]
pub struct PolylinePath {
    points: Vec<Vec2>,
    radius: f32,
}

impl PolylinePath {
    /// Requires at least two points and a finite, non-negative radius.
    pub fn new(points: Vec<Vec2>, radius: f32) -> BehaviorResult<Self> {
        if points.len() < 2 {
            return Err(BehaviorError::Config(format!(
                "path needs at least 2 points, got {}",
                points.len()
            )));
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(BehaviorError::Config(format!("invalid path radius {radius}")));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(BehaviorError::Config("path contains a non-finite point".into()));
        }
        Ok(Self { points, radius })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

impl NearestPointProvider for PolylinePath {
    fn nearest_point_on(&self, point: Vec2) -> Vec2 {
        let mut best = self.points[0];
        let mut best_dist = f32::INFINITY;

        for segment in self.points.windows(2) {
            let candidate = project_onto_segment(point, segment[0], segment[1]);
            let dist = (candidate - point).length_squared();
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        best
    }

    #[inline]
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Orthogonal projection of `p` onto segment `a..b`, clamped to its ends.
fn project_onto_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

// ── GridField ─────────────────────────────────────────────────────────────────

/// A flow field stored as one vector per square cell.
///
/// Cell `(col, row)` covers `[col*resolution, (col+1)*resolution)` on x and
/// the same on y.  Samples outside the grid use the nearest edge cell.
#[derive(Clone, Debug, PartialEq)]
pub struct GridField {
    cols:       usize,
    rows:       usize,
    resolution: f32,
    /// Row-major, `rows * cols` entries.
    vectors:    Vec<Vec2>,
}

impl GridField {
    pub fn new(cols: usize, rows: usize, resolution: f32, vectors: Vec<Vec2>) -> BehaviorResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(BehaviorError::Config(format!("empty field grid {cols}x{rows}")));
        }
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(BehaviorError::Config(format!("invalid field resolution {resolution}")));
        }
        if vectors.len() != cols * rows {
            return Err(BehaviorError::Config(format!(
                "field has {} vectors, expected {}",
                vectors.len(),
                cols * rows
            )));
        }
        Ok(Self { cols, rows, resolution, vectors })
    }

    /// Build a grid by evaluating `f` at the centre of every cell.
    pub fn from_fn<F>(cols: usize, rows: usize, resolution: f32, f: F) -> BehaviorResult<Self>
    where
        F: Fn(Vec2) -> Vec2,
    {
        let vectors = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (col, row)))
            .map(|(col, row)| {
                let centre = Vec2::new(
                    (col as f32 + 0.5) * resolution,
                    (row as f32 + 0.5) * resolution,
                );
                f(centre)
            })
            .collect();
        Self::new(cols, rows, resolution, vectors)
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn cell(&self, coord: f32, count: usize) -> usize {
        let idx = (coord / self.resolution).floor();
        if idx <= 0.0 || idx.is_nan() {
            0
        } else {
            (idx as usize).min(count - 1)
        }
    }
}

impl VectorFieldSampler for GridField {
    fn sample(&self, point: Vec2) -> Vec2 {
        let col = self.cell(point.x, self.cols);
        let row = self.cell(point.y, self.rows);
        self.vectors[row * self.cols + col]
    }
}
