use thiserror::Error;

/// Top-level error type for the Quotis analysis engine.
#[derive(Debug, Error)]
pub enum QuotisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Errors related to surface descriptors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while reading topology from the geometry kernel.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to the machining analysis itself.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("solid has no faces")]
    EmptySolid,

    #[error("invalid model measure {measure}: {value}")]
    InvalidMeasure { measure: &'static str, value: f64 },
}

/// Errors related to loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration value {name}: {value}")]
    InvalidValue { name: &'static str, value: f64 },
}

/// Errors related to raw stock availability.
#[derive(Debug, Error)]
pub enum StockError {
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("no {material} stock of at least {required} mm thickness")]
    NotAvailable { material: String, required: f64 },
}

/// Convenience type alias for results using [`QuotisError`].
pub type Result<T> = std::result::Result<T, QuotisError>;
