pub mod containment;
pub mod coordinates;
pub mod error;
pub mod objects;
pub mod quadtree;

pub use coordinates::{Coordinates, FnCoordinates, LongXy, XyCoordinates};
pub use error::{QuadtreeError, QuadtreeResult};
pub use objects::LongQuadTreeObjects;
pub use quadtree::{BucketPolicy, Config, LongQuadTree};
