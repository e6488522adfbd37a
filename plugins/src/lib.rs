pub mod factory;
pub mod renderers;
