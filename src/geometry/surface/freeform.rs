//! Descriptor-only surfaces.
//!
//! These carry enough data to identify the surface, but the analysis has no
//! classification or equality rule for most of them beyond their type.

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::SurfaceKind;

/// A rational or polynomial Bezier patch.
#[derive(Debug, Clone)]
pub struct BezierSurface {
    /// Degree in the U direction.
    pub u_degree: usize,
    /// Degree in the V direction.
    pub v_degree: usize,
    /// Control points, row-major in U.
    pub poles: Vec<Point3>,
}

/// A surface swept by rotating a profile curve around an axis.
#[derive(Debug, Clone)]
pub struct SurfaceOfRevolution {
    location: Point3,
    axis: Vector3,
}

impl SurfaceOfRevolution {
    /// Creates a new surface of revolution about the given axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length.
    pub fn new(location: Point3, axis: Vector3) -> Result<Self> {
        let len = axis.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            location,
            axis: axis / len,
        })
    }

    /// Returns a point on the revolution axis.
    #[must_use]
    pub fn location(&self) -> &Point3 {
        &self.location
    }

    /// Returns the revolution axis (unit vector).
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }
}

/// A surface swept by translating a profile curve along a direction.
#[derive(Debug, Clone)]
pub struct SurfaceOfExtrusion {
    direction: Vector3,
}

impl SurfaceOfExtrusion {
    /// Creates a new extrusion surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is zero-length.
    pub fn new(direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            direction: direction / len,
        })
    }

    /// Returns the extrusion direction (unit vector).
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}

/// A surface at constant distance from a basis surface.
#[derive(Debug, Clone)]
pub struct OffsetSurface {
    /// Type of the basis surface.
    pub basis: SurfaceKind,
    /// Signed offset distance along the basis normal.
    pub offset: f64,
}
