//! In-memory movie store.
//!
//! Holds the single movie collection for the lifetime of the process. The
//! collection starts from the bundled dataset in `data/movies.json` and is
//! lost on restart.

pub mod error;
pub mod movie_store;
pub mod seed;

pub use error::StoreError;
pub use movie_store::MovieStore;
