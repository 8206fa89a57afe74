//! Separation between two points.
//!
//! Distances are whole map units: the Euclidean length truncated toward zero.
//! The square root is taken in `f64`; squared deltas of map-sized coordinates
//! are exact there, so the result never depends on argument order. Lengths
//! beyond `u32::MAX` saturate.

use census::Located;
use glam::IVec2;

/// Returns the truncated Euclidean distance between two positions.
///
/// # Example
///
/// ```
/// use glam::IVec2;
/// use sigil_core::distance;
///
/// assert_eq!(distance(IVec2::ZERO, IVec2::new(3, 4)), 5);
/// assert_eq!(distance(IVec2::ZERO, IVec2::new(1, 1)), 1); // 1.414 truncated
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn distance(a: IVec2, b: IVec2) -> u32 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    (dx * dx + dy * dy).sqrt() as u32
}

/// Returns the distance between two located things.
///
/// Only positions are compared; callers that care about areas check those
/// first.
#[must_use]
pub fn distance_between(a: &impl Located, b: &impl Located) -> u32 {
    distance(a.position(), b.position())
}
