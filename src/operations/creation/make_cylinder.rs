use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::geometry::surface::Cylinder;
use crate::geometry::{Plane, SurfaceDomain};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::query::Aabb;
use crate::topology::{FaceSurface, SolidId, TopologyStore};

use super::MakeSolid;

/// Creates a cylinder solid from center, radius, axis, and height.
///
/// The solid has two planar caps, one cylindrical side face, two circular
/// edges and one seam edge.
pub struct MakeCylinder {
    center: Point3,
    radius: f64,
    axis: Vector3,
    height: f64,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64, axis: Vector3, height: f64) -> Self {
        Self {
            center,
            radius,
            axis,
            height,
        }
    }

    /// Executes the operation, creating the cylinder in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is near zero, or the axis
    /// direction is degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder radius must be positive".into()).into(),
            );
        }
        if self.height < TOLERANCE {
            return Err(
                GeometryError::Degenerate("cylinder height must be positive".into()).into(),
            );
        }
        let axis_len = self.axis.norm();
        if axis_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let axis = self.axis / axis_len;

        let r = self.radius;
        let h = self.height;
        let top = self.center + axis * h;

        let bounds = cap_bounds(&self.center, &top, &axis, r);
        let cap_domain = SurfaceDomain::new(-r, r, -r, r);
        let cap_area = PI * r * r;

        MakeSolid::new(bounds, cap_area * h)
            .with_face(
                FaceSurface::Plane(Plane::from_normal(self.center, axis)?),
                cap_domain,
                false,
                cap_area,
            )
            .with_face(
                FaceSurface::Plane(Plane::from_normal(top, axis)?),
                cap_domain,
                true,
                cap_area,
            )
            .with_face(
                FaceSurface::Cylinder(Cylinder::new(self.center, r, axis)?),
                SurfaceDomain::new(0.0, TAU, 0.0, h),
                true,
                TAU * r * h,
            )
            .with_edges([TAU * r, TAU * r, h])
            .execute(store)
    }
}

/// Bounds of the two circular caps of radius `r` perpendicular to `axis`.
fn cap_bounds(bottom: &Point3, top: &Point3, axis: &Vector3, r: f64) -> Aabb {
    let half = Vector3::from_fn(|i, _| r * (1.0 - axis[i] * axis[i]).max(0.0).sqrt());
    let lo = bottom.coords.inf(&top.coords) - half;
    let hi = bottom.coords.sup(&top.coords) + half;
    Aabb::from_corners(Point3::from(lo), Point3::from(hi))
}
