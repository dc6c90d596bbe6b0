//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::create_player(&db).await?;
//!
//! let scorer = factory::player::PlayerFactory::new(&db)
//!     .name("Joel Embiid")
//!     .position("C")
//!     .ppg(30.1)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod player;

pub use player::{create_player, create_player_with_ppg};
