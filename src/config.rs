//! Tunable parameters for the analysis.
//!
//! Every struct has calibrated defaults and can be overridden field by field
//! from TOML:
//!
//! ```
//! use quotis::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_toml_str(
//!     r#"
//!     [rates]
//!     rate_per_surface = 3.0
//!
//!     [stock]
//!     z_margin = 10.0
//!     "#,
//! )
//! .unwrap();
//! assert!((config.rates.rate_per_surface - 3.0).abs() < 1e-12);
//! assert!((config.stock.xy_margin - 20.0).abs() < 1e-12);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::MaterialCatalog;
use crate::error::{ConfigError, Result};
use crate::math::ANGULAR_TOLERANCE;

/// Empirical machining rates used by the time estimator.
///
/// Volume rates are minutes per cubic millimetre, area rates minutes per
/// square millimetre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachiningRates {
    /// Facing the stock down to the bounding box (min/mm³).
    pub rate_bb: f64,
    /// Roughing the bounding box down to the model (min/mm³).
    pub rate_roughing: f64,
    /// Finishing linear surfaces (min/mm²).
    pub rate_finish: f64,
    /// Contour milling 3D surfaces (min/mm²).
    pub rate_per_area: f64,
    /// Fixed setup cost per 3D face (min).
    pub rate_per_surface: f64,
}

impl Default for MachiningRates {
    fn default() -> Self {
        Self {
            rate_bb: 0.000_05,
            rate_roughing: 0.000_1,
            rate_finish: 0.000_5,
            rate_per_area: 0.002,
            rate_per_surface: 1.5,
        }
    }
}

impl MachiningRates {
    /// Checks that every rate is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad rate.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        check_non_negative("rate_bb", self.rate_bb)?;
        check_non_negative("rate_roughing", self.rate_roughing)?;
        check_non_negative("rate_finish", self.rate_finish)?;
        check_non_negative("rate_per_area", self.rate_per_area)?;
        check_non_negative("rate_per_surface", self.rate_per_surface)
    }
}

/// Material added around the model bounding box to size raw stock (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockMargins {
    /// Added to the two largest dimensions.
    pub xy_margin: f64,
    /// Added to the smallest dimension (plate thickness).
    pub z_margin: f64,
}

impl Default for StockMargins {
    fn default() -> Self {
        Self {
            xy_margin: 20.0,
            z_margin: 12.0,
        }
    }
}

/// Parameters for linear/3D face classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierParams {
    /// Tolerance (radians) for parallel and 45° tests.
    pub angular_tolerance: f64,
    /// Fillet radii (mm) that standard corner-rounding tools cut directly.
    pub fillet_radii: Vec<f64>,
    /// Tolerance (mm) when matching a torus minor radius to `fillet_radii`.
    pub radius_tolerance: f64,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            angular_tolerance: ANGULAR_TOLERANCE,
            fillet_radii: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            radius_tolerance: 1e-3,
        }
    }
}

/// Tolerances for deciding two faces are the same feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTolerances {
    /// Angle (radians) between surface axes.
    pub angular: f64,
    /// Parametric domain bounds.
    pub domain: f64,
    /// Face area (mm²).
    pub area: f64,
    /// Radii, half-angles and knot values.
    pub descriptor: f64,
}

impl Default for MatchTolerances {
    fn default() -> Self {
        Self {
            angular: ANGULAR_TOLERANCE,
            domain: 1e-6,
            area: 1e-3,
            descriptor: 1e-6,
        }
    }
}

/// All parameters of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub rates: MachiningRates,
    pub stock: StockMargins,
    pub classifier: ClassifierParams,
    pub tolerances: MatchTolerances,
    pub catalog: MaterialCatalog,
}

impl AnalysisConfig {
    /// Parses a configuration from TOML; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is invalid.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(&source)
    }

    /// Checks rates, margins and tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad value.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.rates.validate()?;
        check_non_negative("stock.xy_margin", self.stock.xy_margin)?;
        check_non_negative("stock.z_margin", self.stock.z_margin)?;
        check_non_negative("classifier.angular_tolerance", self.classifier.angular_tolerance)?;
        check_non_negative("classifier.radius_tolerance", self.classifier.radius_tolerance)?;
        check_non_negative("tolerances.angular", self.tolerances.angular)?;
        check_non_negative("tolerances.domain", self.tolerances.domain)?;
        check_non_negative("tolerances.area", self.tolerances.area)?;
        check_non_negative("tolerances.descriptor", self.tolerances.descriptor)
    }
}

fn check_non_negative(name: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}
