pub mod bash;
pub mod json;

pub use bash::BashRendererPlugin;
pub use json::JsonRendererPlugin;
