//! Origin allow-list for cross-origin browser requests.
//!
//! Requests without an `Origin` header (curl, server-to-server) are always
//! allowed. Allow-listed origins are reflected in
//! `Access-Control-Allow-Origin`. Any other origin falls through: the
//! request is still served, but without CORS headers, so the browser
//! refuses to expose the response to the calling page.

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::{ConfigError, ServerConfig};

/// Outcome of checking a request's declared origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    /// No `Origin` header: not a cross-origin browser request.
    Absent,
    /// Origin is on the allow-list.
    Allowed,
    /// Origin is not on the allow-list. No CORS headers are attached.
    Unlisted,
}

impl OriginDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, OriginDecision::Absent | OriginDecision::Allowed)
    }
}

/// The static set of origins permitted to call the API from a browser.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Arc<[HeaderValue]>,
}

impl OriginPolicy {
    /// Build a policy from raw origin strings.
    pub fn new<I, S>(origins: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = origins
            .into_iter()
            .map(|o| {
                let o = o.as_ref();
                HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidCorsOrigin(o.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            allowed: allowed.into(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        Self::new(&config.cors_origins)
    }

    pub fn decide(&self, origin: Option<&HeaderValue>) -> OriginDecision {
        match origin {
            None => OriginDecision::Absent,
            Some(origin) if self.allowed.iter().any(|a| a == origin) => OriginDecision::Allowed,
            Some(_) => OriginDecision::Unlisted,
        }
    }

    /// Build the CORS middleware layer enforcing this policy.
    ///
    /// Preflight is answered for the methods the API exposes; `PATCH` and
    /// `DELETE` always trigger one from browsers.
    pub fn cors_layer(&self) -> CorsLayer {
        let policy = self.clone();
        let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _parts| {
            let decision = policy.decide(Some(origin));
            if decision == OriginDecision::Unlisted {
                tracing::debug!(?origin, "Origin not in allow-list, omitting CORS headers");
            }
            decision.is_allowed()
        });

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
    }
}
