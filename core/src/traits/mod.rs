pub mod renderer;

pub use renderer::OutputRendererPlugin;
