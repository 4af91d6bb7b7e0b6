slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// Data associated with a topological edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeData {
    /// Arc length of the edge curve between its vertices.
    pub length: f64,
}

impl EdgeData {
    /// Creates a new edge of the given length.
    #[must_use]
    pub fn new(length: f64) -> Self {
        Self { length }
    }
}
