use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::SurfaceDomain;
use crate::operations::query::Aabb;
use crate::topology::{EdgeData, FaceData, FaceSurface, SolidData, SolidId, TopologyStore};

/// Creates a solid from explicit faces, edges and mass properties.
///
/// This is the entry point for handing a solid produced by an external
/// kernel over to the analysis: each face carries its surface descriptor,
/// parametric bounds, orientation and area as the kernel measured them.
#[derive(Debug, Clone)]
pub struct MakeSolid {
    faces: Vec<FaceData>,
    edge_lengths: Vec<f64>,
    volume: f64,
    bounds: Aabb,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation with no faces or edges.
    #[must_use]
    pub fn new(bounds: Aabb, volume: f64) -> Self {
        Self {
            faces: Vec::new(),
            edge_lengths: Vec::new(),
            volume,
            bounds,
        }
    }

    /// Adds a boundary face.
    #[must_use]
    pub fn with_face(
        mut self,
        surface: FaceSurface,
        domain: SurfaceDomain,
        same_sense: bool,
        area: f64,
    ) -> Self {
        self.faces.push(FaceData {
            surface,
            domain,
            same_sense,
            area,
        });
        self
    }

    /// Adds edges with the given lengths.
    #[must_use]
    pub fn with_edges(mut self, lengths: impl IntoIterator<Item = f64>) -> Self {
        self.edge_lengths.extend(lengths);
        self
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume, a face area or an edge length is
    /// negative or not finite, or if no faces were added.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.faces.is_empty() {
            return Err(TopologyError::InvalidTopology("solid has no faces".into()).into());
        }
        check_measure("volume", self.volume)?;
        for face in &self.faces {
            check_measure("face area", face.area)?;
        }
        for &length in &self.edge_lengths {
            check_measure("edge length", length)?;
        }

        let faces = self
            .faces
            .iter()
            .map(|face| store.add_face(face.clone()))
            .collect();
        let edges = self
            .edge_lengths
            .iter()
            .map(|&length| store.add_edge(EdgeData::new(length)))
            .collect();

        Ok(store.add_solid(SolidData {
            faces,
            edges,
            volume: self.volume,
            bounds: self.bounds,
        }))
    }
}

fn check_measure(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}
