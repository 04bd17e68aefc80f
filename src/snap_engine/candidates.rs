use tracing::trace;

use super::{Candidates, SnapCandidate};
use crate::model::geometry::{Rect, Side};

/// Distance between two edge coordinates if it is within `snap`.
fn within(a: f64, b: f64, snap: f64) -> Option<f64> {
    let distance = (a - b).abs();
    (distance <= snap).then_some(distance)
}

/// Collects every snap candidate for `mover` against the screen (if given) and
/// `siblings`, in that order.
///
/// Each reference contributes at most one primary edge per axis: top is tried
/// before bottom and left before right, and the first match wins.
pub fn generate<'a>(
    mover: &Rect,
    screen: Option<&Rect>,
    siblings: impl IntoIterator<Item = &'a Rect>,
    snap: f64,
) -> Candidates {
    let mut out = Candidates::default();
    if let Some(screen) = screen {
        screen_candidates(mover, screen, snap, &mut out);
    }
    for sibling in siblings {
        window_candidates(mover, sibling, snap, &mut out);
    }
    trace!(
        horizontal = out.horizontal.len(),
        vertical = out.vertical.len(),
        "Generated snap candidates"
    );
    out
}

/// Inner edges of the screen: the window's top to the screen's top and so on.
pub fn screen_candidates(mover: &Rect, screen: &Rect, snap: f64, out: &mut Candidates) {
    if mover.overlaps_horizontally(screen, snap) {
        if let Some(d) = within(mover.top, screen.top, snap) {
            out.push(SnapCandidate::horizontal(d, Side::Top, screen.top, screen));
        } else if let Some(d) = within(mover.bottom, screen.bottom, snap) {
            out.push(SnapCandidate::horizontal(d, Side::Bottom, screen.bottom, screen));
        }
    }
    if mover.overlaps_vertically(screen, snap) {
        if let Some(d) = within(mover.left, screen.left, snap) {
            out.push(SnapCandidate::vertical(d, Side::Left, screen.left, screen));
        } else if let Some(d) = within(mover.right, screen.right, snap) {
            out.push(SnapCandidate::vertical(d, Side::Right, screen.right, screen));
        }
    }
}

/// Outer edges of a sibling window (stacking above/below, beside), each paired
/// with a flush companion on the other axis when the perpendicular edges line up.
pub fn window_candidates(mover: &Rect, other: &Rect, snap: f64, out: &mut Candidates) {
    if mover.overlaps_horizontally(other, snap) {
        let primary = if let Some(d) = within(mover.top, other.bottom, snap) {
            Some(SnapCandidate::horizontal(d, Side::Top, other.bottom, other))
        } else {
            within(mover.bottom, other.top, snap)
                .map(|d| SnapCandidate::horizontal(d, Side::Bottom, other.top, other))
        };
        if let Some(primary) = primary {
            out.push(primary);
            if let Some(d) = within(mover.left, other.left, snap) {
                out.push(SnapCandidate::vertical(d, Side::Left, other.left, other).flush());
            } else if let Some(d) = within(mover.right, other.right, snap) {
                out.push(SnapCandidate::vertical(d, Side::Right, other.right, other).flush());
            }
        }
    }

    if mover.overlaps_vertically(other, snap) {
        let primary = if let Some(d) = within(mover.left, other.right, snap) {
            Some(SnapCandidate::vertical(d, Side::Left, other.right, other))
        } else {
            within(mover.right, other.left, snap)
                .map(|d| SnapCandidate::vertical(d, Side::Right, other.left, other))
        };
        if let Some(primary) = primary {
            out.push(primary);
            if let Some(d) = within(mover.top, other.top, snap) {
                out.push(SnapCandidate::horizontal(d, Side::Top, other.top, other).flush());
            } else if let Some(d) = within(mover.bottom, other.bottom, snap) {
                out.push(SnapCandidate::horizontal(d, Side::Bottom, other.bottom, other).flush());
            }
        }
    }
}
