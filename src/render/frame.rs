use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw in a fixed order: rects, polygons, arcs, lines, circles,
/// then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub arcs: Vec<ArcPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            polygons: Vec::new(),
            arcs: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for arc in &self.arcs {
            arc.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.polygons.is_empty()
            && self.arcs.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }

    /// Appends every primitive of `other`, shifted by `(dx, dy)`.
    pub fn extend_translated(&mut self, other: RenderFrame, dx: f64, dy: f64) {
        self.rects.extend(other.rects.into_iter().map(|mut rect| {
            rect.x += dx;
            rect.y += dy;
            rect
        }));
        self.polygons
            .extend(other.polygons.into_iter().map(|mut polygon| {
                for point in &mut polygon.points {
                    point.0 += dx;
                    point.1 += dy;
                }
                polygon
            }));
        self.arcs.extend(other.arcs.into_iter().map(|mut arc| {
            arc.cx += dx;
            arc.cy += dy;
            arc
        }));
        self.lines.extend(other.lines.into_iter().map(|mut line| {
            line.x1 += dx;
            line.x2 += dx;
            line.y1 += dy;
            line.y2 += dy;
            line
        }));
        self.circles.extend(other.circles.into_iter().map(|mut circle| {
            circle.cx += dx;
            circle.cy += dy;
            circle
        }));
        self.texts.extend(other.texts.into_iter().map(|mut text| {
            text.x += dx;
            text.y += dy;
            text
        }));
    }
}
