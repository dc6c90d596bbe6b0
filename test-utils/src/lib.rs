//! Player Roster Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the player
//! roster service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for inserting player rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Factories for inserting rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_player_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_player_table().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let player = factory::create_player(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
