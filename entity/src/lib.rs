//! SeaORM entity definitions for the player roster database.

pub mod prelude;

pub mod player;
