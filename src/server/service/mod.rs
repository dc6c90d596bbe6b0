//! Business logic layer.
//!
//! Services sit between controllers and repositories: they call into the data layer,
//! convert entity models into domain models, and assemble composite results such as
//! paginated listings and roster statistics.

pub mod player;
pub mod stats;
