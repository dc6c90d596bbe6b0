//! HTTP request handlers.
//!
//! Controllers parse the request, convert DTOs into validated params, call the service
//! layer, and convert domain models back into DTOs for the response.

pub mod player;
