use std::f64::consts::{FRAC_PI_2, PI};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for degenerate-input checks.
pub const TOLERANCE: f64 = 1e-10;

/// Angular tolerance (radians) used when comparing directions.
pub const ANGULAR_TOLERANCE: f64 = 1e-6;

/// Angle between two directions in `[0, pi]`.
///
/// Returns `0` when either vector is zero-length.
#[must_use]
pub fn angle_between(a: &Vector3, b: &Vector3) -> f64 {
    if a.norm() < TOLERANCE || b.norm() < TOLERANCE {
        return 0.0;
    }
    a.angle(b)
}

/// Returns `true` if `a` and `b` point the same way within `angular_tol`.
#[must_use]
pub fn is_codirectional(a: &Vector3, b: &Vector3, angular_tol: f64) -> bool {
    angle_between(a, b) <= angular_tol
}

/// Returns `true` if `a` and `b` point in opposite directions within `angular_tol`.
#[must_use]
pub fn is_opposite(a: &Vector3, b: &Vector3, angular_tol: f64) -> bool {
    PI - angle_between(a, b) <= angular_tol
}

/// Returns `true` if `a` and `b` lie on the same line, either sense.
#[must_use]
pub fn is_parallel(a: &Vector3, b: &Vector3, angular_tol: f64) -> bool {
    is_codirectional(a, b, angular_tol) || is_opposite(a, b, angular_tol)
}

/// Returns `true` if `a` is perpendicular to `b` within `angular_tol`.
#[must_use]
pub fn is_orthogonal(a: &Vector3, b: &Vector3, angular_tol: f64) -> bool {
    (angle_between(a, b) - FRAC_PI_2).abs() <= angular_tol
}

/// Returns `true` if `a` and `b` differ by `angle` (radians) within `angular_tol`.
#[must_use]
pub fn is_at_angle(a: &Vector3, b: &Vector3, angle: f64, angular_tol: f64) -> bool {
    (angle_between(a, b) - angle).abs() <= angular_tol
}
