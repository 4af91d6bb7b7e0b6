mod area;
mod bounding_box;
mod length;
mod volume;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use length::{EdgeLength, Length};
pub use volume::Volume;
