use crate::error::Result;
use crate::topology::{SolidId, TopologyStore};

/// Returns the enclosed volume of a solid.
pub struct Volume {
    solid: SolidId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the volume (absolute value).
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        Ok(store.solid(self.solid)?.volume.abs())
    }
}
