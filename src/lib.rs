pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod math;
pub mod operations;
pub mod topology;

pub use catalog::{MaterialCatalog, PartConfiguration};
pub use config::AnalysisConfig;
pub use error::{QuotisError, Result};
pub use kernel::{GeometryKernel, SurfaceDescriptor};
pub use operations::analysis::{AnalysisReport, Analyze};
