use crate::error::Result;
use crate::topology::{EdgeId, SolidId, TopologyStore};

/// Computes the length of an edge.
pub struct Length {
    edge: EdgeId,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the query, returning the curve length.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(store.edge(self.edge)?.length)
    }
}

/// Computes the summed length of every edge of a solid.
pub struct EdgeLength {
    solid: SolidId,
}

impl EdgeLength {
    /// Creates a new `EdgeLength` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its edges is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let solid = store.solid(self.solid)?;
        let mut total = 0.0;
        for &edge in &solid.edges {
            total += Length::new(edge).execute(store)?;
        }
        Ok(total)
    }
}
