//! External contours of the spill mask.
//!
//! Border following (Suzuki–Abe) is delegated to `imageproc`; only outer
//! borders without a parent are kept, so holes and islands nested inside holes
//! are not reported. Each boundary is then chain-compressed: runs of identical
//! unit steps keep only their end points, leaving the corners of the outline.
use super::mask::SpillMask;
use crate::detector::DetectionError;
use imageproc::contours::{find_contours, BorderType};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Closed boundary polyline; the last point connects back to the first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Contour {
    pub points: Vec<Point>,
}

/// External contours in tracing order (raster order of their first pixel).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContourSet {
    contours: Vec<Contour>,
}

impl ContourSet {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    /// Total number of stored (compressed) points.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(|c| c.points.len()).sum()
    }

    pub fn as_slice(&self) -> &[Contour] {
        &self.contours
    }
}

impl<'a> IntoIterator for &'a ContourSet {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

impl FromIterator<Contour> for ContourSet {
    fn from_iter<T: IntoIterator<Item = Contour>>(iter: T) -> Self {
        Self {
            contours: iter.into_iter().collect(),
        }
    }
}

/// Outermost boundaries of the 8-connected spill regions.
pub fn external_contours(mask: &SpillMask) -> Result<ContourSet, DetectionError> {
    if mask.count() == 0 {
        return Ok(ContourSet::default());
    }
    let padded = mask.to_padded_luma_image()?;
    let contours = find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| Contour {
            points: compress_chain(
                c.points
                    .iter()
                    .map(|p| Point::new(p.x - 1, p.y - 1))
                    .collect(),
            ),
        })
        .filter(|c| !c.points.is_empty())
        .collect();
    Ok(contours)
}

/// Drop every point whose incoming and outgoing steps are equal.
///
/// The chain is treated as closed. Chains shorter than three points are
/// returned unchanged.
pub fn compress_chain(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let step = |a: Point, b: Point| (b.x - a.x, b.y - a.y);
    let kept: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect();
    if kept.is_empty() {
        // Only possible for a chain of repeated identical points.
        vec![points[0]]
    } else {
        kept
    }
}
