mod bspline;
mod cone;
mod cylinder;
mod freeform;
mod plane;
mod sphere;
mod torus;

pub use bspline::BSplineSurface;
pub use cone::Cone;
pub use cylinder::Cylinder;
pub use freeform::{BezierSurface, OffsetSurface, SurfaceOfExtrusion, SurfaceOfRevolution};
pub use plane::Plane;
pub use sphere::Sphere;
pub use torus::Torus;

/// Parameter domain for a bounded face on its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f64,
    /// End of the U parameter range.
    pub u_max: f64,
    /// Start of the V parameter range.
    pub v_min: f64,
    /// End of the V parameter range.
    pub v_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }

    /// Returns `true` if all four bounds agree within `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self.u_min - other.u_min).abs() <= tol
            && (self.u_max - other.u_max).abs() <= tol
            && (self.v_min - other.v_min).abs() <= tol
            && (self.v_max - other.v_max).abs() <= tol
    }
}

/// The surface type of a face, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Plane,
    Cylinder,
    Cone,
    Sphere,
    Torus,
    BezierSurface,
    BSplineSurface,
    SurfaceOfRevolution,
    SurfaceOfExtrusion,
    OffsetSurface,
    Other,
}

impl SurfaceKind {
    /// Returns `true` for surface types with a dedicated equality rule.
    ///
    /// Revolution, extrusion, offset and unrecognised surfaces have none yet:
    /// they classify as 3D and never merge during deduplication.
    #[must_use]
    pub fn has_equality_rule(self) -> bool {
        !matches!(
            self,
            Self::SurfaceOfRevolution | Self::SurfaceOfExtrusion | Self::OffsetSurface | Self::Other
        )
    }
}
