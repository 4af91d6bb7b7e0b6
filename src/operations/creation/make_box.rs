use crate::error::{GeometryError, Result};
use crate::geometry::{Plane, SurfaceDomain};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::query::Aabb;
use crate::topology::{FaceSurface, SolidId, TopologyStore};

use super::MakeSolid;

/// Creates an axis-aligned box solid from two corner points.
///
/// The six faces lie on planes whose normals point along `+X`, `+Y` and `+Z`;
/// the face on the minimum side of each axis is reversed so every face
/// normal points out of the box.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, creating the box in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if any side length is near zero.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        let bounds = Aabb::from_corners(self.min_corner, self.max_corner);
        let extents = bounds.extents();
        if extents.iter().any(|&e| e < TOLERANCE) {
            return Err(GeometryError::Degenerate("box side lengths must be positive".into()).into());
        }

        let mut builder = MakeSolid::new(bounds, bounds.volume());
        for axis in 0..3 {
            let normal = Vector3::ith(axis, 1.0);
            let (a, b) = ((axis + 1) % 3, (axis + 2) % 3);
            let area = extents[a] * extents[b];

            for same_sense in [false, true] {
                let mut origin = bounds.min;
                if same_sense {
                    origin[axis] = bounds.max[axis];
                }
                let plane = Plane::from_normal(origin, normal)?;
                let domain = face_domain(&plane, &origin, &extents, a, b);
                builder = builder.with_face(FaceSurface::Plane(plane), domain, same_sense, area);
            }
        }

        // Four parallel edges per axis.
        let edges = (0..3).flat_map(|axis| std::iter::repeat(extents[axis]).take(4));
        builder.with_edges(edges).execute(store)
    }
}

/// Parametric bounds of the rectangle spanned from `origin` along axes `a` and `b`.
fn face_domain(plane: &Plane, origin: &Point3, extents: &Vector3, a: usize, b: usize) -> SurfaceDomain {
    let mut u_min = f64::INFINITY;
    let mut u_max = f64::NEG_INFINITY;
    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for (da, db) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        let mut corner = *origin;
        corner[a] += da * extents[a];
        corner[b] += db * extents[b];
        let (u, v) = plane.project(&corner);
        u_min = u_min.min(u);
        u_max = u_max.max(u);
        v_min = v_min.min(v);
        v_max = v_max.max(v);
    }
    SurfaceDomain::new(u_min, u_max, v_min, v_max)
}
