use glam::Vec2;

/// Move `pos` onto the circle of radius `distance` around `anchor`, keeping
/// its direction from `anchor`.
///
/// Degenerate case: when `pos` coincides with `anchor` the direction is
/// undefined, and the anchor is returned unchanged. The joint simply stays
/// put for that tick; the next solve re-separates it. Anything else (a fixed
/// default direction, or letting the division through) would either teleport
/// the joint or let a NaN poison every joint downstream.
pub fn constrain_distance(pos: Vec2, anchor: Vec2, distance: f32) -> Vec2 {
    let offset = pos - anchor;
    let len = offset.length();

    if len <= f32::EPSILON {
        return anchor;
    }

    anchor + offset * (distance / len)
}
