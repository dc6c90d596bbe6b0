//! Wire types shared with the browser client.
//!
//! Everything here is serialized as JSON at the HTTP boundary; the server converts its
//! domain models into these DTOs before responding.

pub mod api;
pub mod player;
