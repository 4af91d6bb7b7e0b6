use crate::geometry::surface::{
    BSplineSurface, BezierSurface, Cone, Cylinder, OffsetSurface, Plane, Sphere,
    SurfaceDomain, SurfaceKind, SurfaceOfExtrusion, SurfaceOfRevolution, Torus,
};

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// The geometric surface associated with a face.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// A planar surface.
    Plane(Plane),
    /// A cylindrical surface.
    Cylinder(Cylinder),
    /// A conical surface.
    Cone(Cone),
    /// A spherical surface.
    Sphere(Sphere),
    /// A toroidal surface.
    Torus(Torus),
    /// A Bezier patch.
    Bezier(BezierSurface),
    /// A B-spline surface.
    BSpline(BSplineSurface),
    /// A surface of revolution.
    Revolution(SurfaceOfRevolution),
    /// A surface of linear extrusion.
    Extrusion(SurfaceOfExtrusion),
    /// An offset of another surface.
    Offset(OffsetSurface),
    /// Any surface the kernel could not map to a known type.
    Other,
}

impl FaceSurface {
    /// Returns the surface type without its parameters.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Plane(_) => SurfaceKind::Plane,
            Self::Cylinder(_) => SurfaceKind::Cylinder,
            Self::Cone(_) => SurfaceKind::Cone,
            Self::Sphere(_) => SurfaceKind::Sphere,
            Self::Torus(_) => SurfaceKind::Torus,
            Self::Bezier(_) => SurfaceKind::BezierSurface,
            Self::BSpline(_) => SurfaceKind::BSplineSurface,
            Self::Revolution(_) => SurfaceKind::SurfaceOfRevolution,
            Self::Extrusion(_) => SurfaceKind::SurfaceOfExtrusion,
            Self::Offset(_) => SurfaceKind::OffsetSurface,
            Self::Other => SurfaceKind::Other,
        }
    }
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a surface. The kernel snapshot keeps its
/// parametric bounds and area rather than its boundary wires.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The geometric surface on which this face lies.
    pub surface: FaceSurface,
    /// Parametric bounds of the face on its surface.
    pub domain: SurfaceDomain,
    /// If `true`, the face normal agrees with the surface normal.
    pub same_sense: bool,
    /// Area of the face.
    pub area: f64,
}
