//! Renderer and theme names accepted by [`InitOpts`](super::InitOpts).

/// Renderer backends.
pub struct RenderType;

impl RenderType {
    pub const CANVAS: &'static str = "canvas";
    pub const SVG: &'static str = "svg";
}

/// Built-in theme names.
pub struct ThemeType;

impl ThemeType {
    pub const WHITE: &'static str = "white";
    pub const LIGHT: &'static str = "light";
    pub const DARK: &'static str = "dark";
    pub const CHALK: &'static str = "chalk";
    pub const ESSOS: &'static str = "essos";
    pub const INFOGRAPHIC: &'static str = "infographic";
    pub const MACARONS: &'static str = "macarons";
    pub const PURPLE_PASSION: &'static str = "purple-passion";
    pub const ROMA: &'static str = "roma";
    pub const ROMANTIC: &'static str = "romantic";
    pub const SHINE: &'static str = "shine";
    pub const VINTAGE: &'static str = "vintage";
    pub const WALDEN: &'static str = "walden";
    pub const WESTEROS: &'static str = "westeros";
    pub const WONDERLAND: &'static str = "wonderland";
}

#[cfg(test)]
#[path = "globals_tests.rs"]
mod tests;
