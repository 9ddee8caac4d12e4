mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::OrdinalPalette;
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PolygonPrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, keeping drawing code
/// isolated from chart geometry and interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
