//! Domain models and operation-specific parameter types.
//!
//! These types sit between the controller DTOs and the SeaORM entities: controllers
//! convert DTOs into validated params, repositories convert entities into domain models.

pub mod player;
pub mod query;
pub mod stats;
