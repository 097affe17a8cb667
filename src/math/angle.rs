use std::f32::consts::{PI, TAU};

/// Reduce an angle to the canonical range `[0, 2π)`.
///
/// Identity for input already in range.
pub fn normalize(mut angle: f32) -> f32 {
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Shortest signed rotation between `angle` and `anchor`, in `(−π, π]`.
///
/// Positive when `anchor` leads `angle` in the increasing-angle direction.
/// Also serves as a relative-phase measure between two joint orientations
/// (tail and fin curvature), not only as input to [`clamp_to_anchor`].
pub fn signed_difference(angle: f32, anchor: f32) -> f32 {
    PI - normalize(angle + PI - anchor)
}

/// Clamp `angle` to within `max_delta` of `anchor`.
///
/// Returns `normalize(angle)` unchanged when already inside the bound. This
/// is the only turn-rate limiter in the system.
pub fn clamp_to_anchor(angle: f32, anchor: f32, max_delta: f32) -> f32 {
    let diff = signed_difference(angle, anchor);
    if diff.abs() <= max_delta {
        return normalize(angle);
    }

    if diff > max_delta {
        normalize(anchor - max_delta)
    } else {
        normalize(anchor + max_delta)
    }
}
