//! The boundary between the analysis and the B-rep kernel that owns the solid.
//!
//! The analysis never reads topology directly; it asks a [`GeometryKernel`]
//! for faces, surface descriptors and mass properties. [`TopologyStore`]
//! implements the trait for solids built in memory.

use crate::error::Result;
use crate::geometry::SurfaceDomain;
use crate::operations::query::{Aabb, Area, BoundingBox, EdgeLength, Volume};
use crate::topology::{EdgeId, FaceId, FaceSurface, SolidId, TopologyStore};

/// Surface type, parameters, bounds and orientation of one face.
#[derive(Debug, Clone)]
pub struct SurfaceDescriptor {
    /// Underlying surface with its type-specific parameters.
    pub surface: FaceSurface,
    /// Parametric bounds of the face.
    pub domain: SurfaceDomain,
    /// `true` when the face normal agrees with the surface normal.
    pub same_sense: bool,
}

/// Read access to a solid held by a B-rep kernel.
///
/// Every method may fail if the kernel cannot supply the data (for example
/// corrupt topology); the analysis propagates such failures unchanged.
pub trait GeometryKernel {
    /// Handle to a solid.
    type Solid: Copy;
    /// Handle to a face.
    type Face;
    /// Handle to an edge.
    type Edge;

    /// Returns every face of the solid, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid's topology cannot be read.
    fn faces(&self, solid: Self::Solid) -> Result<Vec<Self::Face>>;

    /// Returns every edge of the solid, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid's topology cannot be read.
    fn edges(&self, solid: Self::Solid) -> Result<Vec<Self::Edge>>;

    /// Returns the surface descriptor of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face cannot be read.
    fn surface_descriptor(&self, face: &Self::Face) -> Result<SurfaceDescriptor>;

    /// Returns the area of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face cannot be read.
    fn face_area(&self, face: &Self::Face) -> Result<f64>;

    /// Returns the enclosed volume of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be measured.
    fn volume(&self, solid: Self::Solid) -> Result<f64>;

    /// Returns the total boundary area of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be measured.
    fn surface_area(&self, solid: Self::Solid) -> Result<f64>;

    /// Returns the summed length of all edges of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be measured.
    fn edge_length(&self, solid: Self::Solid) -> Result<f64>;

    /// Returns the axis-aligned bounding box of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be measured.
    fn bounding_box(&self, solid: Self::Solid) -> Result<Aabb>;
}

impl GeometryKernel for TopologyStore {
    type Solid = SolidId;
    type Face = FaceId;
    type Edge = EdgeId;

    fn faces(&self, solid: SolidId) -> Result<Vec<FaceId>> {
        Ok(self.solid(solid)?.faces.clone())
    }

    fn edges(&self, solid: SolidId) -> Result<Vec<EdgeId>> {
        Ok(self.solid(solid)?.edges.clone())
    }

    fn surface_descriptor(&self, face: &FaceId) -> Result<SurfaceDescriptor> {
        let data = self.face(*face)?;
        Ok(SurfaceDescriptor {
            surface: data.surface.clone(),
            domain: data.domain,
            same_sense: data.same_sense,
        })
    }

    fn face_area(&self, face: &FaceId) -> Result<f64> {
        Ok(self.face(*face)?.area)
    }

    fn volume(&self, solid: SolidId) -> Result<f64> {
        Volume::new(solid).execute(self)
    }

    fn surface_area(&self, solid: SolidId) -> Result<f64> {
        Area::new(solid).execute(self)
    }

    fn edge_length(&self, solid: SolidId) -> Result<f64> {
        EdgeLength::new(solid).execute(self)
    }

    fn bounding_box(&self, solid: SolidId) -> Result<Aabb> {
        BoundingBox::new(solid).execute(self)
    }
}
