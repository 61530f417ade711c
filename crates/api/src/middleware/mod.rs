//! HTTP middleware.
//!
//! - [`origin::OriginPolicy`] -- CORS allow-list for browser origins.

pub mod origin;
