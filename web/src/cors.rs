//! Cross-origin policy for the `/api` routes.
//!
//! The service is meant to be called from browser pages served elsewhere, so
//! the default allows any origin. Operators can narrow it to a fixed list.

use axum::http::{HeaderValue, Method};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Which origins may call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin (`Access-Control-Allow-Origin: *`)
    Any,
    /// Only these exact origins
    List(Vec<HeaderValue>),
}

/// An origin that cannot be sent as a header value
#[derive(Error, Debug)]
#[error("invalid CORS origin {origin:?}")]
pub struct InvalidOrigin {
    /// The rejected origin as configured
    pub origin: String,
}

/// CORS configuration for the API routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: AllowedOrigins,
}

impl CorsConfig {
    /// Allow every origin.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
        }
    }

    /// Parse `*` (or an empty string) as any origin, otherwise a
    /// comma-separated list such as `https://a.example,https://b.example`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOrigin`] for an entry that is not a valid header value.
    pub fn from_origins(raw: &str) -> Result<Self, InvalidOrigin> {
        let raw = raw.trim();
        if raw.is_empty() || raw.split(',').any(|origin| origin.trim() == "*") {
            return Ok(Self::permissive());
        }

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| InvalidOrigin {
                    origin: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            allowed_origins: AllowedOrigins::List(origins),
        })
    }

    /// Whether any origin is accepted
    #[must_use]
    pub const fn is_permissive(&self) -> bool {
        matches!(self.allowed_origins, AllowedOrigins::Any)
    }

    /// Build the tower-http layer for this policy.
    #[must_use]
    pub fn layer(&self) -> CorsLayer {
        let origin = match &self.allowed_origins {
            AllowedOrigins::Any => AllowOrigin::any(),
            AllowedOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::permissive()
    }
}
