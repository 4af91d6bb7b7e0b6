pub mod surface;

pub use surface::{Plane, SurfaceDomain, SurfaceKind};
