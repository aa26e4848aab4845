//! HTTP API handlers for pkdx-ev

pub mod catalog;
pub mod health;
pub mod pokemon;

pub use catalog::get_catalog;
pub use health::health_routes;
pub use pokemon::{get_evolutions, get_pokemon};
