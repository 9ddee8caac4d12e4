use tracing::debug;

use crate::core::{CategoryDatapoint, PieLayout, layout_pie};
use crate::error::ChartResult;
use crate::render::{ArcPrimitive, OrdinalPalette, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::view_config::{ChartViewConfig, PieStyle};

/// Pie of per-region shares centered in the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartView {
    config: ChartViewConfig,
    style: PieStyle,
    palette: OrdinalPalette,
    categories: Vec<CategoryDatapoint>,
}

impl PieChartView {
    pub fn new(config: ChartViewConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            style: PieStyle::default(),
            palette: OrdinalPalette::default(),
            categories: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: PieStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: OrdinalPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryDatapoint] {
        &self.categories
    }

    pub fn set_categories(&mut self, categories: Vec<CategoryDatapoint>) {
        debug!(count = categories.len(), "pie categories set");
        self.categories = categories;
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        let viewport = self.config.viewport;
        f64::from(viewport.width.min(viewport.height)) / 2.0
    }

    #[must_use]
    pub fn layout(&self) -> PieLayout {
        layout_pie(&self.categories)
    }

    pub fn render_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.config.viewport;
        let (width, height) = (f64::from(viewport.width), f64::from(viewport.height));
        let mut frame = RenderFrame::new(viewport).with_rect(RectPrimitive::new(
            0.0,
            0.0,
            width,
            height,
            self.style.background,
        ));
        if self.categories.is_empty() {
            return Ok(frame);
        }

        let (cx, cy) = (width / 2.0, height / 2.0);
        let radius = self.radius();
        // Colors follow input order so re-renders are stable.
        let mut palette = self
            .palette
            .clone()
            .with_domain(self.categories.iter().map(|c| c.category.as_str()));

        for arc in self.layout().arcs {
            if arc.span() <= 0.0 {
                continue;
            }
            frame.arcs.push(ArcPrimitive {
                cx,
                cy,
                inner_radius: 0.0,
                outer_radius: radius,
                start_angle: arc.start_angle,
                end_angle: arc.end_angle,
                fill_color: palette.color_for(&arc.category),
            });
            if arc.has_space_for_label() {
                let (dx, dy) = arc.centroid(radius);
                frame.texts.push(
                    TextPrimitive::new(
                        arc.category.clone(),
                        cx + dx,
                        cy + dy - self.style.label_font_px / 2.0,
                        self.style.label_font_px,
                        self.style.label_color,
                        TextHAlign::Center,
                    )
                    .rotated(arc.label_rotation_deg()),
                );
            }
        }
        Ok(frame)
    }
}
