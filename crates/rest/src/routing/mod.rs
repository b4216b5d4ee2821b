//! Route configuration for the movies REST API.

pub mod api_routes;

pub use api_routes::create_routes;
