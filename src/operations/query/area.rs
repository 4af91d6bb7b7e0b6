use crate::error::Result;
use crate::topology::{SolidId, TopologyStore};

/// Computes the total surface area of a solid.
///
/// Sums the areas the kernel recorded for each boundary face.
pub struct Area {
    solid: SolidId,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the total surface area.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or any of its faces is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let solid = store.solid(self.solid)?;
        let mut total_area = 0.0;
        for &face_id in &solid.faces {
            total_area += store.face(face_id)?.area;
        }
        Ok(total_area)
    }
}
