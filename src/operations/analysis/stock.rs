use serde::Serialize;

use crate::config::StockMargins;

/// Raw block a part is machined from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockSize {
    /// Block dimensions (mm), largest first.
    pub dimensions: [f64; 3],
    /// Block volume (mm³).
    pub volume: f64,
}

/// Pads model dimensions into a stock block.
///
/// `dimensions` must be sorted largest first. The two larger sides get the
/// XY margin, the smallest (the plate thickness) gets the Z margin.
#[must_use]
pub fn size_stock(dimensions: [f64; 3], margins: &StockMargins) -> StockSize {
    let [x, y, z] = dimensions;
    let dimensions = [x + margins.xy_margin, y + margins.xy_margin, z + margins.z_margin];
    StockSize {
        dimensions,
        volume: dimensions.iter().product(),
    }
}
