use std::f64::consts::FRAC_PI_4;

use tracing::debug;

use crate::config::ClassifierParams;
use crate::math::{is_at_angle, is_parallel, Vector3};
use crate::topology::{FaceData, FaceSurface};

use super::axis::ReferenceAxis;

/// How a face has to be machined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachiningClass {
    /// Reachable with axis-aligned 2.5-axis tooling.
    Linear,
    /// Needs contoured 3+ axis tool motion.
    ThreeD,
}

/// Faces of one solid split by [`MachiningClass`].
///
/// Holds indices into the face slice that was classified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Indices of linear faces.
    pub linear: Vec<usize>,
    /// Indices of 3D faces.
    pub three_d: Vec<usize>,
}

impl Classification {
    /// Summed area of the 3D faces.
    #[must_use]
    pub fn three_d_area(&self, faces: &[FaceData]) -> f64 {
        self.three_d.iter().map(|&i| faces[i].area).sum()
    }
}

/// Classifies a single face surface.
///
/// - Planes are linear when their normal is parallel to a reference axis or
///   at 45° to one (chamfers).
/// - Cylinders are linear when their axis is parallel to a reference axis.
/// - Cones are linear only when axis-aligned with a 45° half-angle
///   (countersinks and chamfer cones).
/// - Tori are linear when axis-aligned with a minor radius matching one of
///   the standard fillet radii.
/// - Every other surface is 3D.
#[must_use]
pub fn classify_surface(surface: &FaceSurface, params: &ClassifierParams) -> MachiningClass {
    let tol = params.angular_tolerance;
    let linear = match surface {
        FaceSurface::Plane(plane) => {
            let n = plane.plane_normal();
            is_axis_aligned(n, tol) || is_chamfer_normal(n, tol)
        }
        FaceSurface::Cylinder(cylinder) => is_axis_aligned(cylinder.axis(), tol),
        FaceSurface::Cone(cone) => {
            is_axis_aligned(cone.axis(), tol) && (cone.half_angle().abs() - FRAC_PI_4).abs() <= tol
        }
        FaceSurface::Torus(torus) => {
            is_axis_aligned(torus.axis(), tol)
                && params
                    .fillet_radii
                    .iter()
                    .any(|r| (torus.minor_radius() - r).abs() <= params.radius_tolerance)
        }
        FaceSurface::Sphere(_) | FaceSurface::Bezier(_) | FaceSurface::BSpline(_) => false,
        FaceSurface::Revolution(_)
        | FaceSurface::Extrusion(_)
        | FaceSurface::Offset(_)
        | FaceSurface::Other => {
            debug!(kind = ?surface.kind(), "No classification rule, treating as 3D");
            false
        }
    };
    if linear {
        MachiningClass::Linear
    } else {
        MachiningClass::ThreeD
    }
}

/// Partitions faces into linear and 3D sets.
#[must_use]
pub fn classify_faces(faces: &[FaceData], params: &ClassifierParams) -> Classification {
    let mut result = Classification::default();
    for (i, face) in faces.iter().enumerate() {
        match classify_surface(&face.surface, params) {
            MachiningClass::Linear => result.linear.push(i),
            MachiningClass::ThreeD => result.three_d.push(i),
        }
    }
    debug!(
        linear = result.linear.len(),
        three_d = result.three_d.len(),
        "Classified faces"
    );
    result
}

fn is_axis_aligned(dir: &Vector3, tol: f64) -> bool {
    canonical_directions().any(|axis| is_parallel(dir, &axis, tol))
}

fn is_chamfer_normal(normal: &Vector3, tol: f64) -> bool {
    canonical_directions().any(|axis| is_at_angle(normal, &axis, FRAC_PI_4, tol))
}

fn canonical_directions() -> impl Iterator<Item = Vector3> {
    ReferenceAxis::CANONICAL
        .into_iter()
        .filter_map(ReferenceAxis::direction)
}
