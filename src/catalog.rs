//! Raw material catalog and per-part order configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StockError;

const STANDARD_PLATES: [f64; 9] = [10.0, 12.0, 16.0, 20.0, 25.0, 40.0, 60.0, 100.0, 150.0];

/// Available plate thicknesses (mm) per material name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCatalog {
    materials: BTreeMap<String, Vec<f64>>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        let materials = ["alu-5083", "alu-6082", "pom-c-white", "pom-c-black"]
            .into_iter()
            .map(|name| (name.to_owned(), STANDARD_PLATES.to_vec()))
            .collect();
        Self { materials }
    }
}

impl MaterialCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            materials: BTreeMap::new(),
        }
    }

    /// Adds or replaces a material and its plate thicknesses.
    #[must_use]
    pub fn with_material(mut self, name: impl Into<String>, thicknesses: Vec<f64>) -> Self {
        self.materials.insert(name.into(), thicknesses);
        self
    }

    /// Returns the thinnest plate of `material` at least `required` mm thick.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::UnknownMaterial`] if the material is not listed,
    /// or [`StockError::NotAvailable`] if every plate is too thin.
    pub fn select_thickness(&self, material: &str, required: f64) -> Result<f64, StockError> {
        let plates = self
            .materials
            .get(material)
            .ok_or_else(|| StockError::UnknownMaterial(material.to_owned()))?;
        plates
            .iter()
            .copied()
            .filter(|&t| t >= required)
            .min_by(f64::total_cmp)
            .ok_or_else(|| StockError::NotAvailable {
                material: material.to_owned(),
                required,
            })
    }
}

/// Order parameters a quote is requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartConfiguration {
    /// Number of parts.
    pub quantity: u32,
    /// Catalog material name.
    pub material: String,
    /// Surface finish requested, e.g. `"as-machined"` or `"anodized"`.
    pub finish: String,
}

impl PartConfiguration {
    /// Creates a new part configuration.
    #[must_use]
    pub fn new(quantity: u32, material: impl Into<String>, finish: impl Into<String>) -> Self {
        Self {
            quantity,
            material: material.into(),
            finish: finish.into(),
        }
    }
}
