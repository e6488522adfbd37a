use anyhow::{bail, Result};

use taskorder_core::api::OutputRendererPlugin;

use crate::renderers::{BashRendererPlugin, JsonRendererPlugin};

/// Output formats accepted by [`build_renderer`].
pub const RENDER_FORMATS: &[&str] = &["json", "bash"];

pub fn build_renderer(format: &str) -> Result<Box<dyn OutputRendererPlugin>> {
    let renderer: Box<dyn OutputRendererPlugin> = match format.trim().to_ascii_lowercase().as_str() {
        "json" => Box::new(JsonRendererPlugin::new(true)),
        "bash" | "sh" => Box::new(BashRendererPlugin),
        other => bail!(
            "unknown output format '{}', expected one of: {}",
            other,
            RENDER_FORMATS.join(", ")
        ),
    };
    tracing::debug!(renderer = renderer.name(), "renderer selected");
    Ok(renderer)
}
