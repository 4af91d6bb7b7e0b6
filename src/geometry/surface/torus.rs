use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A toroidal surface in 3D space.
///
/// Defined by a center, major radius (center to tube center), minor radius
/// (tube radius) and axis of symmetry. Fillets along circular edges are
/// toroidal patches whose minor radius is the fillet radius.
#[derive(Debug, Clone)]
pub struct Torus {
    center: Point3,
    major_radius: f64,
    minor_radius: f64,
    axis: Vector3,
}

impl Torus {
    /// Creates a new torus.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the torus
    /// * `major_radius` - Distance from center to tube center (must be positive)
    /// * `minor_radius` - Tube radius (must be positive)
    /// * `axis` - Symmetry axis direction (will be normalized)
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive or the axis is zero-length.
    pub fn new(
        center: Point3,
        major_radius: f64,
        minor_radius: f64,
        axis: Vector3,
    ) -> Result<Self> {
        if major_radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("torus major radius must be positive".into()).into(),
            );
        }
        if minor_radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("torus minor radius must be positive".into()).into(),
            );
        }

        let axis_len = axis.norm();
        if axis_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        Ok(Self {
            center,
            major_radius,
            minor_radius,
            axis: axis / axis_len,
        })
    }

    /// Returns the center of the torus.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the major radius (center to tube center).
    #[must_use]
    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    /// Returns the minor radius (tube radius).
    #[must_use]
    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    /// Returns the axis direction (unit vector).
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }
}
