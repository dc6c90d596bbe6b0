//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for storage.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - Action dispatch, request parsing and DTO conversion
//! - **Service Layer** (`service/`) - Listing, CRUD orchestration and roster statistics
//! - **Data Layer** (`data/`) - Database operations on the player table
//! - **Model Layer** (`model/`) - Domain models, validation and the list query plan
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logs`) - Tracing subscriber setup
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and seeding
//! - **Router** (`router`) - Route table, CORS and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request on `/api`
//! 2. **Controller** resolves the action, checks method and id, validates the payload
//! 3. **Service** executes the operation through the data layer
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** converts domain models to DTOs and shapes the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logs;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
