//! Domain types and pure validation logic for the movies API.
//!
//! Nothing in this crate performs I/O: the store and HTTP layers build on
//! top of it.

pub mod error;
pub mod genre;
pub mod movie;
pub mod types;
pub mod validation;
