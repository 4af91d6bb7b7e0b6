use crate::operations::query::Aabb;

use super::edge::EdgeId;
use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// Data associated with a topological solid.
///
/// Holds the boundary faces and edges of the solid together with the mass
/// properties reported by the kernel that produced it.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// Faces bounding the solid, outer shell and voids alike.
    pub faces: Vec<FaceId>,
    /// Unique edges of the solid.
    pub edges: Vec<EdgeId>,
    /// Enclosed volume.
    pub volume: f64,
    /// Axis-aligned bounds.
    pub bounds: Aabb,
}
