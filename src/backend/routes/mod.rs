//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! - **`router`** - `create_router`: merges route groups, adds CORS,
//!   tracing and the JSON 404 fallback
//! - **`api_routes`** - Public and guarded route groups

pub mod api_routes;
pub mod router;

pub use router::create_router;
