//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They use SeaORM entity models internally and take parameter models from the business
//! logic layer. All database queries, inserts, updates, and deletes go through them.

pub mod player;

#[cfg(test)]
mod test;
