//! taskorder-core: validation, dependency ordering and script rendering for
//! submitted task sets.

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod resolver;
pub mod store;
pub mod traits;
