pub mod error;
pub mod geom;
pub mod gravity;
pub mod vecutils;

// Prelude
pub use error::InvalidArgument;
pub use geom::point::Point;
pub use geom::polygon::{Polygon, Vertex};
pub use geom::prism::Prism;
pub use gravity::config::GravityConfig;
pub use gravity::field::Field;
pub use gravity::{
    GRAVITATIONAL_CONST, gravitational, gravitational_field, gravitational_with_config,
};
