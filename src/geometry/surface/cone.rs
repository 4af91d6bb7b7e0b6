use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A conical surface in 3D space.
///
/// Defined by a reference point on the axis, an axis direction, the radius
/// of the cone in the reference plane through that point, and a half-angle.
///
/// The radius at distance `v` along the axis is `ref_radius + v * tan(half_angle)`.
#[derive(Debug, Clone)]
pub struct Cone {
    location: Point3,
    axis: Vector3,
    ref_radius: f64,
    half_angle: f64,
}

impl Cone {
    /// Creates a new cone.
    ///
    /// # Arguments
    ///
    /// * `location` - Reference point on the axis
    /// * `axis` - Axis direction (will be normalized)
    /// * `ref_radius` - Radius in the reference plane (may be zero at the apex)
    /// * `half_angle` - Signed half-angle in radians; `|half_angle|` must be
    ///   in `(0, pi/2)`. A negative angle narrows the cone along the axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-angle is out of range, the reference radius
    /// is negative, or the axis is zero-length.
    pub fn new(location: Point3, axis: Vector3, ref_radius: f64, half_angle: f64) -> Result<Self> {
        let magnitude = half_angle.abs();
        if magnitude <= TOLERANCE || magnitude >= FRAC_PI_2 - TOLERANCE {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "half_angle",
                value: half_angle,
                min: -FRAC_PI_2,
                max: FRAC_PI_2,
            }
            .into());
        }
        if ref_radius < 0.0 {
            return Err(
                GeometryError::Degenerate("cone reference radius must be non-negative".into())
                    .into(),
            );
        }

        let axis_len = axis.norm();
        if axis_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        Ok(Self {
            location,
            axis: axis / axis_len,
            ref_radius,
            half_angle,
        })
    }

    /// Returns the reference point on the axis.
    #[must_use]
    pub fn location(&self) -> &Point3 {
        &self.location
    }

    /// Returns the axis direction (unit vector).
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Returns the radius in the reference plane.
    #[must_use]
    pub fn ref_radius(&self) -> f64 {
        self.ref_radius
    }

    /// Returns the signed half-angle in radians.
    #[must_use]
    pub fn half_angle(&self) -> f64 {
        self.half_angle
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn accessors() {
        let c = Cone::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, 2.0), 5.0, FRAC_PI_4)
            .unwrap();
        assert_eq!(*c.location(), Point3::new(1.0, 2.0, 3.0));
        assert!((c.axis() - Vector3::z()).norm() < TOLERANCE);
        assert!((c.ref_radius() - 5.0).abs() < TOLERANCE);
        assert!((c.half_angle() - FRAC_PI_4).abs() < TOLERANCE);
    }

    #[test]
    fn half_angle_out_of_range() {
        assert!(Cone::new(Point3::origin(), Vector3::z(), 1.0, 0.0).is_err());
        assert!(Cone::new(Point3::origin(), Vector3::z(), 1.0, FRAC_PI_2).is_err());
        assert!(Cone::new(Point3::origin(), Vector3::z(), 1.0, -FRAC_PI_2).is_err());
        assert!(Cone::new(Point3::origin(), Vector3::z(), 1.0, -1e-12).is_err());
    }

    #[test]
    fn negative_half_angle_accepted() {
        let c = Cone::new(Point3::origin(), Vector3::z(), 4.0, -FRAC_PI_4).unwrap();
        assert!((c.half_angle() + FRAC_PI_4).abs() < TOLERANCE);
    }

    #[test]
    fn negative_radius_rejected() {
        assert!(Cone::new(Point3::origin(), Vector3::z(), -1.0, FRAC_PI_4).is_err());
    }
}
