use serde::Serialize;

use crate::catalog::PartConfiguration;
use crate::error::Result;

use super::stock::StockSize;
use super::time::MachiningTime;

/// Cost drivers of one solid.
///
/// Lengths are in mm, areas in mm², volumes in mm³ and times in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Bounding-box dimensions, largest first.
    pub dimensions: [f64; 3],
    pub volume: f64,
    pub surface_area: f64,
    /// Area of faces that need 3D contouring.
    pub three_d_surface_area: f64,
    pub three_d_face_count: usize,
    pub linear_face_count: usize,
    /// Summed length of all edges.
    pub edge_length: f64,
    pub face_count: usize,
    pub edge_count: usize,
    /// Faces left after merging geometrically identical ones.
    pub unique_face_count: usize,
    pub stock: StockSize,
    pub machining_time: MachiningTime,
    /// Estimated number of machine setups.
    pub job_count: usize,
    /// Catalog plate the stock is cut from, when a part configuration was
    /// given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<PartConfiguration>,
}

impl AnalysisReport {
    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
